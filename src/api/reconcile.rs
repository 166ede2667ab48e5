use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Visual encoding of one rendered mark.
///
/// Computed when the mark enters; whether it is refreshed on later
/// reconciliations is governed by [`MarkUpdatePolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkEncoding {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Color,
}

/// Refresh policy for marks whose record survives a reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MarkUpdatePolicy {
    /// Persisted marks are re-projected on every reconciliation.
    #[default]
    Reencode,
    /// Persisted marks keep their enter-time encoding; changing a mark's
    /// attributes requires removing and re-adding it.
    OneShot,
}

/// Per-reconciliation enter/exit/update counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReconcileOutcome {
    pub entered: usize,
    pub exited: usize,
    pub reencoded: usize,
}

/// The rendered mark set, keyed by record name in join order.
#[derive(Debug, Clone, Default)]
pub struct MarkSet {
    marks: IndexMap<String, MarkEncoding>,
}

impl MarkSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.marks.contains_key(name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<MarkEncoding> {
        self.marks.get(name).copied()
    }

    /// Marks in join order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, MarkEncoding)> {
        self.marks
            .iter()
            .map(|(name, encoding)| (name.as_str(), *encoding))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Reconciles the mark set against one view-state pass.
    ///
    /// `entries` carries the view's records in display order, each with its
    /// freshly projected encoding (`None` when projection failed). Records
    /// without a mark enter, marks without a record exit, and persisted
    /// marks are refreshed or left alone per `policy`. A persisted mark
    /// whose fresh projection failed keeps its previous encoding.
    pub fn reconcile(
        &mut self,
        entries: &[(String, Option<MarkEncoding>)],
        policy: MarkUpdatePolicy,
    ) -> ReconcileOutcome {
        let mut outcome = ReconcileOutcome::default();
        let mut next: IndexMap<String, MarkEncoding> = IndexMap::with_capacity(entries.len());

        for (name, encoding) in entries {
            if next.contains_key(name) {
                continue;
            }
            match self.marks.get(name) {
                Some(existing) => {
                    let refreshed = match policy {
                        MarkUpdatePolicy::Reencode => match encoding {
                            Some(fresh) => {
                                outcome.reencoded += 1;
                                *fresh
                            }
                            None => *existing,
                        },
                        MarkUpdatePolicy::OneShot => *existing,
                    };
                    next.insert(name.clone(), refreshed);
                }
                None => {
                    if let Some(fresh) = encoding {
                        next.insert(name.clone(), *fresh);
                        outcome.entered += 1;
                    }
                }
            }
        }

        outcome.exited = self
            .marks
            .keys()
            .filter(|name| !next.contains_key(name.as_str()))
            .count();
        self.marks = next;
        outcome
    }

    pub(crate) fn clear(&mut self) {
        self.marks.clear();
    }
}
