//! Release filters
//!
//! Filters are total predicates over a [`Release`]. A release is kept only if
//! every filter of the chain accepts it.

use std::collections::HashSet;

use crate::release::types::Release;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseFilter {
    /// Accepts releases whose major version is one of the given numbers
    MajorVersion(HashSet<u64>),
    /// Accepts releases without a pre-release or build-metadata suffix
    Stable,
}

impl ReleaseFilter {
    pub fn major_versions(majors: impl IntoIterator<Item = u64>) -> Self {
        ReleaseFilter::MajorVersion(majors.into_iter().collect())
    }

    pub fn accepts(&self, release: &Release) -> bool {
        match self {
            ReleaseFilter::MajorVersion(majors) => majors.contains(&release.version().major()),
            ReleaseFilter::Stable => release.version().is_stable(),
        }
    }
}

/// Evaluates the chain in order, stopping at the first filter that rejects.
pub fn passes_all(filters: &[ReleaseFilter], release: &Release) -> bool {
    filters.iter().all(|filter| filter.accepts(release))
}
