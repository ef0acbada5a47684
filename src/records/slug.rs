//! Slug derivation with run-wide uniqueness

use std::collections::HashSet;

/// Slugs already handed out during one load pass.
///
/// Kept as an explicit value owned by the loader so that slug assignment
/// stays a pure fold over the input rows.
#[derive(Debug, Default)]
pub struct SlugPool {
    assigned: HashSet<String>,
}

impl SlugPool {
    /// Derive a unique slug for a record name.
    ///
    /// The base slug is lowercase, ASCII-transliterated, with runs of
    /// non-alphanumeric characters collapsed to a single hyphen. An empty
    /// result falls back to `business-<n>` using the 1-based row index.
    /// Collisions get an incrementing `-2`, `-3`, ... suffix in row order.
    pub fn assign(&mut self, name: &str, index: usize) -> String {
        let base = slug::slugify(name);
        let base = if base.is_empty() {
            format!("business-{}", index + 1)
        } else {
            base
        };

        let mut candidate = base.clone();
        let mut counter = 2;
        while !self.assigned.insert(candidate.clone()) {
            candidate = format!("{}-{}", base, counter);
            counter += 1;
        }
        candidate
    }
}
