use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::record::HitEvent;

/// Per-file sets of executed lines, accumulated from hit events.
///
/// Accumulation is commutative and idempotent: the final map does not
/// depend on the interleaving order of the records across the writing
/// processes, and re-observing a line is a no-op.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CoverageMap {
    files: BTreeMap<PathBuf, BTreeSet<u32>>,
    skipped_records: u64,
}

impl CoverageMap {
    /// Records a line-execution event.
    pub fn record_hit(&mut self, hit: HitEvent) {
        self.files.entry(hit.path).or_default().insert(hit.line);
    }

    /// Bumps the diagnostic count of malformed records skipped during the
    /// drain.
    pub fn record_skipped(&mut self) {
        self.skipped_records += 1;
    }

    /// Returns the executed lines of the given file, if any were observed.
    pub fn lines(&self, path: impl AsRef<Path>) -> Option<&BTreeSet<u32>> {
        self.files.get(path.as_ref())
    }

    /// Iterates over the covered files and their executed lines.
    pub fn files(&self) -> impl Iterator<Item = (&Path, &BTreeSet<u32>)> {
        self.files.iter().map(|(path, lines)| (path.as_path(), lines))
    }

    /// Returns the number of covered files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns whether no hit was recorded.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Returns the diagnostic count of malformed records skipped during
    /// the drain.
    pub const fn skipped_records(&self) -> u64 {
        self.skipped_records
    }
}

impl Extend<HitEvent> for CoverageMap {
    fn extend<I: IntoIterator<Item = HitEvent>>(&mut self, events: I) {
        for hit in events {
            self.record_hit(hit);
        }
    }
}

impl FromIterator<HitEvent> for CoverageMap {
    fn from_iter<I: IntoIterator<Item = HitEvent>>(events: I) -> Self {
        let mut map = Self::default();
        map.extend(events);
        map
    }
}
