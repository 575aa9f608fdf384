//! Release blocks
//!
//! Both feeds describe a release as a block of `Key: Value` lines, with
//! consecutive blocks separated by a `---` line:
//!
//! ```text
//! Version: 4.0.3
//! Github: https://github.com/hazelcast/hazelcast/releases/tag/v4.0.3
//! ---
//! Version: 4.0.2
//! Github: https://github.com/hazelcast/hazelcast/releases/tag/v4.0.2
//! ```

use crate::config::{TAG_ATTRIBUTE, VERSION_ATTRIBUTE};

/// Separates consecutive release blocks within a section
pub const BLOCK_DELIMITER: &str = "---\n";

/// Splits a section into its release blocks, in document order
pub fn split_blocks(section: &str) -> Vec<&str> {
    section.split(BLOCK_DELIMITER).collect()
}

/// Extracts the version and tag attributes of a release block.
///
/// Only lines made of exactly one `key: value` pair count. Returns `None`
/// unless both attributes are present with non-empty values.
pub fn parse_version_and_tag(block: &str) -> Option<(&str, &str)> {
    let mut version = None;
    let mut tag = None;

    for line in block.trim().split('\n') {
        let mut parts = line.split(": ");
        let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
            continue;
        };

        if key == VERSION_ATTRIBUTE {
            version = Some(value);
        } else if key == TAG_ATTRIBUTE {
            tag = Some(value);
        }
    }

    match (version, tag) {
        (Some(version), Some(tag)) if !version.is_empty() && !tag.is_empty() => {
            Some((version, tag))
        }
        _ => None,
    }
}
