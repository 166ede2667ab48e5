use indexmap::IndexSet;

use crate::data::NationRecord;

/// The displayed subset of the dataset, owned by the update cycle.
///
/// Records keep the order they were included in (dataset order within one
/// toggle, toggle order across toggles), matching how the rendered mark set
/// grows. Name uniqueness is an invariant: including a region twice without
/// an intervening exclusion is a no-op for records already present.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    records: Vec<NationRecord>,
    names: IndexSet<String>,
}

impl ViewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> &[NationRecord] {
        &self.records
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Record names in display order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends the dataset records of one region, deduplicated by name.
    /// Returns how many records were actually added.
    pub(crate) fn include_region(&mut self, dataset: &[NationRecord], region: &str) -> usize {
        let mut added = 0;
        for record in dataset {
            if record.region == region && self.names.insert(record.name.clone()) {
                self.records.push(record.clone());
                added += 1;
            }
        }
        added
    }

    /// Removes every record of one region. Returns how many were removed.
    pub(crate) fn exclude_region(&mut self, region: &str) -> usize {
        let removed: Vec<String> = self
            .records
            .iter()
            .filter(|record| record.region == region)
            .map(|record| record.name.clone())
            .collect();
        for name in &removed {
            self.names.shift_remove(name.as_str());
        }
        self.records.retain(|record| record.region != region);
        removed.len()
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
        self.names.clear();
    }
}
