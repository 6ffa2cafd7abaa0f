use warden::Manager;

/// A small deterministic linear-congruential generator so the churn test
/// doesn't need a `rand` dependency for what is otherwise a pattern-only
/// check (spec.md scenario 6 only requires "destroy roughly half, at
/// random").
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.0 >> 33
    }

    fn next_below(&mut self, bound: usize) -> usize {
        (self.next() as usize) % bound
    }
}

#[test]
fn churn_keeps_live_handles_valid_and_count_accurate() {
    let mut m = Manager::new();
    let mut rng = Lcg(0xC0FFEE);

    for _round in 0..1000 {
        let mut created = Vec::with_capacity(100);
        for _ in 0..100 {
            created.push(m.create_entity());
        }

        // Destroy 50 distinct entities chosen at random.
        let mut indices: Vec<usize> = (0..100).collect();
        for i in (1..indices.len()).rev() {
            let j = rng.next_below(i + 1);
            indices.swap(i, j);
        }
        for &i in &indices[..50] {
            created[i].destroy(&mut m);
        }

        m.refresh();

        let still_alive: Vec<_> = indices[50..]
            .iter()
            .map(|&i| created[i])
            .filter(|e| e.is_valid(&m))
            .collect();

        assert_eq!(
            still_alive.len(),
            50,
            "every surviving handle from this round must still validate"
        );
    }

    // Only the last round's 50 survivors remain.
    assert_eq!(m.entity_count(), 50);
}
