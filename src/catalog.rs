//! Browsing the exercise catalog: named orderings, search and lookup by id.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::ExerciseEntry;

/// Resolves exercise references. The schema layer never performs storage
/// lookups itself; callers hand in whatever catalog they hold.
pub trait ExerciseLookup {
    fn find_exercise(&self, id: &str) -> Option<&ExerciseEntry>;

    fn contains(&self, id: &str) -> bool {
        self.find_exercise(id).is_some()
    }
}

impl ExerciseLookup for HashMap<String, ExerciseEntry> {
    fn find_exercise(&self, id: &str) -> Option<&ExerciseEntry> {
        self.get(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseOrdering {
    NameAsc,
    NameDesc,
    DifficultyAsc,
    ActiveFirst,
}

pub const ORDERINGS: &[ExerciseOrdering] = &[
    ExerciseOrdering::NameAsc,
    ExerciseOrdering::NameDesc,
    ExerciseOrdering::DifficultyAsc,
    ExerciseOrdering::ActiveFirst,
];

impl ExerciseOrdering {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseOrdering::NameAsc => "name_asc",
            ExerciseOrdering::NameDesc => "name_desc",
            ExerciseOrdering::DifficultyAsc => "difficulty_asc",
            ExerciseOrdering::ActiveFirst => "active_first",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ExerciseOrdering::NameAsc => "Nombre A-Z",
            ExerciseOrdering::NameDesc => "Nombre Z-A",
            ExerciseOrdering::DifficultyAsc => "Dificultad",
            ExerciseOrdering::ActiveFirst => "Activos primero",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        ORDERINGS.iter().copied().find(|o| o.as_str() == s)
    }

    pub fn compare(&self, a: &ExerciseEntry, b: &ExerciseEntry) -> Ordering {
        match self {
            ExerciseOrdering::NameAsc => compare_names(a, b, false),
            ExerciseOrdering::NameDesc => compare_names(a, b, true),
            ExerciseOrdering::DifficultyAsc => {
                // Entries without a tier go last
                let tier = match (a.difficulty_tier, b.difficulty_tier) {
                    (Some(x), Some(y)) => x.cmp(&y),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                };
                tier.then_with(|| compare_names(a, b, false))
            }
            ExerciseOrdering::ActiveFirst => b
                .is_active
                .cmp(&a.is_active)
                .then_with(|| compare_names(a, b, false)),
        }
    }

    /// Stable sort of `entries` in this order.
    pub fn sort(&self, entries: &mut [ExerciseEntry]) {
        entries.sort_by(|a, b| self.compare(a, b));
    }
}

/// Case-insensitive name order with unnamed entries last in either direction.
fn compare_names(a: &ExerciseEntry, b: &ExerciseEntry, descending: bool) -> Ordering {
    match (a.name.as_deref(), b.name.as_deref()) {
        (Some(x), Some(y)) => {
            let ord = x
                .to_lowercase()
                .cmp(&y.to_lowercase())
                .then_with(|| x.cmp(y));
            if descending {
                ord.reverse()
            } else {
                ord
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Active entries whose name contains `query`, ignoring case and surrounding
/// whitespace. An empty query matches every active entry.
pub fn search<'a>(entries: &'a [ExerciseEntry], query: &str) -> Vec<&'a ExerciseEntry> {
    let needle = query.trim().to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.is_active)
        .filter(|entry| {
            needle.is_empty()
                || entry
                    .name
                    .as_deref()
                    .map(|name| name.to_lowercase().contains(&needle))
                    .unwrap_or(false)
        })
        .collect()
}

/// In-memory catalog keyed by document id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<ExerciseEntry>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Entries without an id are kept for browsing but cannot be referenced.
    /// On duplicate ids the last entry wins the lookup.
    pub fn new(entries: Vec<ExerciseEntry>) -> Self {
        let by_id = entries
            .iter()
            .enumerate()
            .filter_map(|(i, entry)| entry.id.clone().map(|id| (id, i)))
            .collect();
        Self { entries, by_id }
    }

    pub fn entries(&self) -> &[ExerciseEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sorted(&self, ordering: ExerciseOrdering) -> Vec<ExerciseEntry> {
        let mut entries = self.entries.clone();
        ordering.sort(&mut entries);
        entries
    }

    pub fn search(&self, query: &str) -> Vec<&ExerciseEntry> {
        search(&self.entries, query)
    }
}

impl ExerciseLookup for Catalog {
    fn find_exercise(&self, id: &str) -> Option<&ExerciseEntry> {
        self.by_id.get(id).map(|&i| &self.entries[i])
    }
}
