use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

// =============================================================================
// Release feeds
// =============================================================================

/// Server release feed
pub const SERVER_RELEASES_URL: &str =
    "https://raw.githubusercontent.com/hazelcast/rel-scripts/master/imdg-open-source.txt";

/// Client release feed, one section per client
pub const CLIENT_RELEASES_URL: &str =
    "https://raw.githubusercontent.com/hazelcast/rel-scripts/master/imdg-clients.txt";

/// Attribute key holding the version inside a release block
pub const VERSION_ATTRIBUTE: &str = "Version";

/// Attribute key holding the release tag inside a release block
pub const TAG_ATTRIBUTE: &str = "Github";

/// Timeout for fetching a feed in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

// =============================================================================
// Maven repositories
// =============================================================================

pub const RELEASE_REPO: &str = "http://repo1.maven.apache.org/maven2";
pub const ENTERPRISE_RELEASE_REPO: &str = "https://repository.hazelcast.com/release/";
pub const SNAPSHOT_REPO: &str = "https://oss.sonatype.org/content/repositories/snapshots";
pub const ENTERPRISE_SNAPSHOT_REPO: &str = "https://repository.hazelcast.com/snapshot/";

/// Maven group of every downloaded artifact
pub const ARTIFACT_GROUP_ID: &str = "com.hazelcast";

// =============================================================================
// Remote controller readiness
// =============================================================================

/// Remote controller jar version
pub const REMOTE_CONTROLLER_VERSION: &str = "0.8-SNAPSHOT";

/// Entry point class of the remote controller
pub const REMOTE_CONTROLLER_MAIN_CLASS: &str = "com.hazelcast.remotecontroller.Main";

/// Log files receiving the remote controller's stdout and stderr
pub const REMOTE_CONTROLLER_STDOUT_LOG: &str = "rc_stdout.log";
pub const REMOTE_CONTROLLER_STDERR_LOG: &str = "rc_stderr.log";

/// Port the remote controller listens on
pub const REMOTE_CONTROLLER_PORT: u16 = 9701;

/// Delay between readiness probes in milliseconds (1 second)
pub const READINESS_POLL_INTERVAL_MS: u64 = 1_000;

/// Upper bound on the readiness wait in seconds (5 minutes)
pub const READINESS_TIMEOUT_SECS: u64 = 300;

/// User configuration, read from a JSON file
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct MatrixConfig {
    pub sources: SourcesConfig,
}

/// Where the release feeds are fetched from
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SourcesConfig {
    pub server_url: String,
    pub client_url: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            server_url: SERVER_RELEASES_URL.to_string(),
            client_url: CLIENT_RELEASES_URL.to_string(),
        }
    }
}

impl MatrixConfig {
    /// Loads the configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used if present and built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = config_path();
                if path.is_file() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

/// Returns the path to the default config file.
/// Uses $XDG_CONFIG_HOME/release-matrix/config.json if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/release-matrix/config.json,
/// or ./release-matrix/config.json if neither is available.
pub fn config_path() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
        .join("config.json")
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("release-matrix")
}
