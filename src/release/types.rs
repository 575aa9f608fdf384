//! Common types for releases

use std::str::FromStr;

use crate::release::error::ReleaseError;
use crate::release::version::Version;

/// Client implementations listed in the client release feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientKind {
    /// .NET client
    Cs,
    /// C++ client
    Cpp,
    /// Python client
    Py,
    /// Node.js client
    Node,
    /// Go client
    Go,
}

impl ClientKind {
    /// Returns the short identifier used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientKind::Cs => "cs",
            ClientKind::Cpp => "cpp",
            ClientKind::Py => "py",
            ClientKind::Node => "node",
            ClientKind::Go => "go",
        }
    }

    /// Returns the name the feed uses in the section header, e.g. `======= C++ Client`
    pub fn label(&self) -> &'static str {
        match self {
            ClientKind::Cs => ".NET/CSharp",
            ClientKind::Cpp => "C++",
            ClientKind::Py => "Python",
            ClientKind::Node => "NodeJS",
            ClientKind::Go => "Go",
        }
    }
}

impl FromStr for ClientKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cs" => Ok(ClientKind::Cs),
            "cpp" => Ok(ClientKind::Cpp),
            "py" => Ok(ClientKind::Py),
            "node" => Ok(ClientKind::Node),
            "go" => Ok(ClientKind::Go),
            _ => Err(format!(
                "unknown client kind {s:?}, expected one of cs, cpp, py, node, go"
            )),
        }
    }
}

/// Server distribution, which decides the Maven repository to download from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServerKind {
    OpenSource,
    Enterprise,
}

/// The scalar a matrix entry is projected to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatrixOptionKind {
    /// Last path segment of the release tag, e.g. `v4.0.3`
    Tag,
    /// The version string verbatim
    #[default]
    Version,
}

impl FromStr for MatrixOptionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tag" => Ok(MatrixOptionKind::Tag),
            "version" => Ok(MatrixOptionKind::Version),
            _ => Err(format!("unknown matrix option {s:?}, expected tag or version")),
        }
    }
}

/// One published version and the reference it was tagged at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    version: Version,
    tag: String,
    kind: Option<ClientKind>,
}

impl Release {
    /// Creates a server release, failing if the version does not parse
    pub fn new(version: &str, tag: &str) -> Result<Self, ReleaseError> {
        Ok(Self {
            version: Version::parse(version)?,
            tag: tag.to_string(),
            kind: None,
        })
    }

    /// Creates a release of the given client
    pub fn client(kind: ClientKind, version: &str, tag: &str) -> Result<Self, ReleaseError> {
        Ok(Self {
            kind: Some(kind),
            ..Self::new(version, tag)?
        })
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Usually a GitHub release URL, e.g. `https://github.com/owner/repo/releases/tag/v4.0.3`
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Set for releases read from the client feed
    pub fn kind(&self) -> Option<ClientKind> {
        self.kind
    }

    /// Returns the final non-empty path segment of the tag, or `None` when
    /// the tag has no path (e.g. `https://github.com/`).
    ///
    /// Tags without a scheme (e.g. a bare `v4.0.3`) are treated as a path.
    /// The segment is returned as written, without percent-decoding or encoding.
    pub fn tag_name(&self) -> Option<&str> {
        let path = match self.tag.split_once("://") {
            Some((_, rest)) => rest.find(['/', '?', '#']).map_or("", |at| &rest[at..]),
            None => self.tag.as_str(),
        };
        let path = path.split(['?', '#']).next().unwrap_or_default();

        path.rsplit('/').find(|segment| !segment.is_empty())
    }
}
