use warden::Manager;

#[test]
fn refresh_is_idempotent() {
    let mut m = Manager::new();
    let e1 = m.create_entity();
    let e2 = m.create_entity();
    e1.destroy(&mut m);

    m.refresh();
    let count_after_first = m.entity_count();
    let e2_valid_after_first = e2.is_valid(&m);

    m.refresh();

    assert_eq!(m.entity_count(), count_after_first);
    assert_eq!(e2.is_valid(&m), e2_valid_after_first);
}

#[test]
fn surviving_handles_are_stable_across_refresh() {
    let mut m = Manager::new();
    let e1 = m.create_entity();
    let e2 = m.create_entity();
    let e3 = m.create_entity();

    e2.destroy(&mut m);
    m.refresh();

    assert!(e1.is_valid(&m));
    assert!(e3.is_valid(&m));
    assert!(!e2.is_valid(&m));
    assert_eq!(m.entity_count(), 2);
}

#[test]
fn entity_count_matches_valid_handles_after_refresh() {
    let mut m = Manager::new();
    let handles: Vec<_> = (0..20).map(|_| m.create_entity()).collect();
    for (i, e) in handles.iter().enumerate() {
        if i % 3 == 0 {
            e.destroy(&mut m);
        }
    }
    m.refresh();

    let valid = handles.iter().filter(|e| e.is_valid(&m)).count();
    assert_eq!(valid, m.entity_count());
}

#[test]
fn dead_components_vanish_only_at_refresh() {
    let mut m = Manager::new();
    let e = m.create_entity();
    m.add_component(e, 1u32);
    e.destroy(&mut m);

    // Still queryable: refresh is the membership boundary.
    assert!(e.has_component::<u32>(&m));
    m.refresh();
    assert!(!e.is_valid(&m));
}

#[test]
fn clear_resets_without_reusing_stale_handles() {
    let mut m = Manager::new();
    let e1 = m.create_entity();
    let e2 = m.create_entity();
    m.refresh();
    assert_eq!(m.entity_count(), 2);

    m.clear();
    assert_eq!(m.entity_count(), 0);
    assert!(!e1.is_valid(&m));
    assert!(!e2.is_valid(&m));

    let fresh = m.create_entity();
    assert!(fresh.is_valid(&m));
}
