//! Ordering of file blocks within the digest.

use crate::types::FileEntry;
use serde::{Deserialize, Serialize};

/// The file attribute used to order blocks in the digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Full path, compared component by component.
    Name,
    /// Creation time, where the platform records one.
    Created,
    /// Last modification time.
    Modified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// A sort key plus a direction, fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub order: SortOrder,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            key: SortKey::Name,
            order: SortOrder::Ascending,
        }
    }
}

impl SortSpec {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    /// Human-readable rendering used in the digest info line.
    pub fn describe(&self) -> String {
        let key = match self.key {
            SortKey::Name => "name",
            SortKey::Created => "creation time",
            SortKey::Modified => "modification time",
        };
        let order = match self.order {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        };
        format!("{} ({})", key, order)
    }
}

/// Sorts entries in place.
///
/// The sort is stable: entries that compare equal keep their enumeration
/// order. Descending order is the exact reversal of the ascending result. If
/// a time-based key is requested and any entry is missing that timestamp, the
/// whole batch falls back to name ordering and a warning is written to
/// stderr.
pub fn sort_entries(entries: &mut [FileEntry], spec: SortSpec) {
    match spec.key {
        SortKey::Name => sort_by_name(entries),
        SortKey::Created => {
            if entries.iter().all(|e| e.created.is_some()) {
                entries.sort_by_key(|e| e.created);
            } else {
                eprintln!(
                    "Warning: creation time unavailable for some files, sorting by name instead."
                );
                sort_by_name(entries);
            }
        }
        SortKey::Modified => {
            if entries.iter().all(|e| e.modified.is_some()) {
                entries.sort_by_key(|e| e.modified);
            } else {
                eprintln!(
                    "Warning: modification time unavailable for some files, sorting by name instead."
                );
                sort_by_name(entries);
            }
        }
    }
    if spec.order == SortOrder::Descending {
        entries.reverse();
    }
}

fn sort_by_name(entries: &mut [FileEntry]) {
    entries.sort_by(|a, b| a.path.components().cmp(b.path.components()));
}
