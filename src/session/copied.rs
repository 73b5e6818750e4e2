use std::collections::BTreeMap;

/// Which parts the user has already copied, keyed by 1-based part index
#[derive(Debug, Clone, Default)]
pub struct CopyTracker {
    copied: BTreeMap<usize, bool>,
}

impl CopyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, index: usize) {
        self.copied.insert(index, true);
    }

    pub fn is_copied(&self, index: usize) -> bool {
        self.copied.get(&index).copied().unwrap_or(false)
    }

    pub fn count(&self) -> usize {
        self.copied.values().filter(|c| **c).count()
    }

    pub fn clear(&mut self) {
        self.copied.clear();
    }
}
