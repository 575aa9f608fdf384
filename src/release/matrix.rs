//! Reductions and projections that turn release lists into matrix entries

use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::debug;

use crate::release::error::ReleaseError;
use crate::release::types::{MatrixOptionKind, Release};

/// Selects one release per (major, minor) line: the one with the highest patch.
///
/// A later release with an equal patch replaces the retained one, so on ties
/// the last release in iteration order wins. Lines are returned grouped by
/// major, in the order each major and minor was first seen.
pub fn latest_patch_releases(releases: &[Release]) -> Vec<&Release> {
    let mut latest: IndexMap<u64, IndexMap<u64, &Release>> = IndexMap::new();

    for release in releases {
        let version = release.version();
        let by_minor = latest.entry(version.major()).or_default();

        match by_minor.entry(version.minor()) {
            Entry::Occupied(mut retained) => {
                if retained.get().version().patch() <= version.patch() {
                    retained.insert(release);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(release);
            }
        }
    }

    latest
        .into_values()
        .flat_map(IndexMap::into_values)
        .collect()
}

/// Version strings of [`latest_patch_releases`], verbatim as in the source
pub fn get_latest_patch_releases(releases: &[Release]) -> Vec<String> {
    latest_patch_releases(releases)
        .into_iter()
        .map(|release| release.version().as_str().to_string())
        .collect()
}

/// Projects a release to the requested scalar.
///
/// Projecting to `Tag` fails with `InvalidTag` if the tag has no path segment.
pub fn get_option_from_release(
    release: &Release,
    option: MatrixOptionKind,
) -> Result<String, ReleaseError> {
    match option {
        MatrixOptionKind::Tag => release
            .tag_name()
            .map(str::to_string)
            .ok_or_else(|| ReleaseError::InvalidTag {
                version: release.version().to_string(),
                tag: release.tag().to_string(),
            }),
        MatrixOptionKind::Version => Ok(release.version().as_str().to_string()),
    }
}

/// Builds the flat list of matrix entries, optionally reduced to the latest
/// patch of each minor line first.
pub fn build_matrix(
    releases: &[Release],
    latest_patch_only: bool,
    option: MatrixOptionKind,
) -> Result<Vec<String>, ReleaseError> {
    let selected: Vec<&Release> = if latest_patch_only {
        latest_patch_releases(releases)
    } else {
        releases.iter().collect()
    };

    debug!(
        "Building matrix from {} of {} releases",
        selected.len(),
        releases.len()
    );

    selected
        .into_iter()
        .map(|release| get_option_from_release(release, option))
        .collect()
}
