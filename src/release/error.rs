use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },
}

#[derive(Debug, Error)]
pub enum ReleaseError {
    #[error("Invalid version format: {0}")]
    InvalidVersionFormat(String),

    #[error("Tag {tag:?} of version {version} has no path segment to project")]
    InvalidTag { version: String, tag: String },

    #[error("Source unavailable: {0}")]
    SourceUnavailable(#[from] SourceError),

    #[error("Malformed source document at {url}: cannot find {section}")]
    MalformedSourceDocument { url: String, section: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_source_document_names_the_section() {
        let err = ReleaseError::MalformedSourceDocument {
            url: "https://example.com/clients.txt".to_string(),
            section: "the Python client".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Malformed source document at https://example.com/clients.txt: cannot find the Python client"
        );
    }

    #[test]
    fn source_error_converts_into_source_unavailable() {
        let err: ReleaseError = SourceError::UnexpectedStatus {
            url: "https://example.com/servers.txt".to_string(),
            status: 503,
        }
        .into();

        assert!(matches!(err, ReleaseError::SourceUnavailable(_)));
        assert_eq!(
            err.to_string(),
            "Source unavailable: Unexpected status 503 from https://example.com/servers.txt"
        );
    }
}
