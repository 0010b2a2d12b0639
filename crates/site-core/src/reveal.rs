use fnv::FnvHashSet;

/// One-shot bookkeeping behind the intersection-observer glue. The observer
/// unregisters an element after its reveal fires, but queued entries can
/// still be delivered afterwards; this set makes "fires exactly once per
/// element" hold regardless.
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: FnvHashSet<u64>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true exactly once per id, the first time it is seen visible.
    /// Invisible entries and repeats are no-ops.
    pub fn should_reveal(&mut self, id: u64, visible: bool) -> bool {
        if !visible || self.revealed.contains(&id) {
            return false;
        }
        self.revealed.insert(id);
        true
    }

    pub fn is_revealed(&self, id: u64) -> bool {
        self.revealed.contains(&id)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}
