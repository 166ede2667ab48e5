use indexmap::IndexSet;

/// Active region labels, kept in toggle order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionFilter {
    active: IndexSet<String>,
}

impl RegionFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or removes a region. Returns whether the set actually changed.
    pub fn set_active(&mut self, region: &str, enabled: bool) -> bool {
        if enabled {
            self.active.insert(region.to_owned())
        } else {
            self.active.shift_remove(region)
        }
    }

    #[must_use]
    pub fn is_active(&self, region: &str) -> bool {
        self.active.contains(region)
    }

    /// Active regions in toggle order.
    pub fn active_regions(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }
}
