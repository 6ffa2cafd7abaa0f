//! The EntityTable: live/dead flag, data-index, and handle-index per entity
//! slot. Grows in lockstep with the HandleTable (see `manager.rs`).

#[derive(Clone, Copy, Debug)]
pub(crate) struct EntityRecord {
    pub alive: bool,
    pub data_index: u32,
    pub handle_index: u32,
}

impl EntityRecord {
    /// The post-grow default for slot `i`: dead, self-referential.
    fn fresh(i: usize) -> Self {
        EntityRecord {
            alive: false,
            data_index: i as u32,
            handle_index: i as u32,
        }
    }
}

#[derive(Default)]
pub(crate) struct EntityTable {
    records: Vec<EntityRecord>,
}

impl EntityTable {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Grows to `new_len`, initializing any newly added slots with the
    /// post-grow default. A no-op if already at least `new_len` long.
    pub fn grow_to(&mut self, new_len: usize) {
        if new_len <= self.records.len() {
            return;
        }
        let start = self.records.len();
        self.records.reserve(new_len - start);
        for i in start..new_len {
            self.records.push(EntityRecord::fresh(i));
        }
    }

    #[inline]
    pub fn get(&self, slot: usize) -> &EntityRecord {
        &self.records[slot]
    }

    #[inline]
    pub fn get_mut(&mut self, slot: usize) -> &mut EntityRecord {
        &mut self.records[slot]
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.records.swap(a, b);
    }

    /// Resets a slot to the post-grow default, as used by `Manager::clear`.
    pub fn reset(&mut self, slot: usize) {
        self.records[slot] = EntityRecord::fresh(slot);
    }
}
