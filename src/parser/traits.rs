//! Release parser trait and the pipeline shared by every feed

use tracing::{debug, info};

use crate::parser::block::parse_version_and_tag;
use crate::release::error::ReleaseError;
use crate::release::filter::{ReleaseFilter, passes_all};
use crate::release::types::Release;
use crate::source::Source;

/// Feed-specific parts of release parsing.
///
/// Implementations locate the release blocks of their feed and decide which
/// kind of release a block becomes. Fetching, attribute extraction and
/// filtering are shared, see [`parse_releases`] and [`get_all_releases`].
pub trait ReleaseParser: Send + Sync {
    /// URL of the feed this parser reads
    fn source_url(&self) -> &str;

    /// Returns the raw release blocks in document order, or
    /// `MalformedSourceDocument` if a mandatory section is missing
    fn extract_blocks<'a>(&self, raw: &'a str) -> Result<Vec<&'a str>, ReleaseError>;

    /// Builds a release from a block's version and tag attributes
    fn construct(&self, version: &str, tag: &str) -> Result<Release, ReleaseError>;
}

/// Parses feed text into filtered releases, preserving block order.
///
/// Blocks missing the version or tag attribute are skipped. A version that
/// does not parse fails the whole document.
pub fn parse_releases<P: ReleaseParser + ?Sized>(
    parser: &P,
    raw: &str,
    filters: &[ReleaseFilter],
) -> Result<Vec<Release>, ReleaseError> {
    let raw = raw.replace("\r\n", "\n");
    let blocks = parser.extract_blocks(&raw)?;

    let mut releases = Vec::new();
    for block in blocks {
        let Some((version, tag)) = parse_version_and_tag(block) else {
            debug!("Skipping release block without version and tag: {:?}", block);
            continue;
        };

        let release = parser.construct(version, tag)?;
        if passes_all(filters, &release) {
            releases.push(release);
        }
    }

    Ok(releases)
}

/// Fetches the parser's feed and returns the releases passing every filter
pub async fn get_all_releases<P: ReleaseParser + ?Sized>(
    parser: &P,
    source: &dyn Source,
    filters: &[ReleaseFilter],
) -> Result<Vec<Release>, ReleaseError> {
    let url = parser.source_url();
    let raw = source.fetch_text(url).await?;

    let releases = parse_releases(parser, &raw, filters)?;
    info!("Parsed {} releases from {}", releases.len(), url);

    Ok(releases)
}
