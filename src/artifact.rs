//! Maven artifact downloads
//!
//! Server jars are resolved with `mvn dependency:get`. A jar that already
//! exists in the destination directory is not downloaded again.

use std::path::{Path, PathBuf};
use std::process::Command;

#[cfg(test)]
use mockall::automock;
use thiserror::Error;
use tracing::{error, info};

use crate::config::{
    ARTIFACT_GROUP_ID, ENTERPRISE_RELEASE_REPO, ENTERPRISE_SNAPSHOT_REPO, RELEASE_REPO,
    SNAPSHOT_REPO,
};
use crate::release::types::ServerKind;
use crate::release::version::Version;

#[cfg(windows)]
const MVN: &str = "mvn.cmd";
#[cfg(not(windows))]
const MVN: &str = "mvn";

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to download {artifact} (exit code {code:?})")]
    DownloadFailed { artifact: String, code: Option<i32> },
}

/// Runs an external program and reports its exit code
#[cfg_attr(test, automock)]
pub trait CommandRunner {
    /// Returns the exit code, or `None` if the process was killed by a signal
    fn run(&self, program: &str, args: &[String]) -> std::io::Result<Option<i32>>;
}

/// Runs commands as child processes sharing this process's stdio
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[String]) -> std::io::Result<Option<i32>> {
        let status = Command::new(program).args(args).status()?;
        Ok(status.code())
    }
}

/// A jar in the `com.hazelcast` group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MavenArtifact {
    pub artifact_id: String,
    pub version: String,
    /// Selects the `tests` classifier jar
    pub test_artifact: bool,
}

impl MavenArtifact {
    pub fn new(artifact_id: &str, version: &str, test_artifact: bool) -> Self {
        Self {
            artifact_id: artifact_id.to_string(),
            version: version.to_string(),
            test_artifact,
        }
    }

    /// e.g. `hazelcast-5.0-tests.jar`
    pub fn file_name(&self) -> String {
        let suffix = if self.test_artifact { "-tests" } else { "" };
        format!("{}-{}{}.jar", self.artifact_id, self.version, suffix)
    }

    /// e.g. `com.hazelcast:hazelcast:5.0:jar:tests`
    pub fn coordinates(&self) -> String {
        let classifier = if self.test_artifact { ":jar:tests" } else { "" };
        format!(
            "{}:{}:{}{}",
            ARTIFACT_GROUP_ID, self.artifact_id, self.version, classifier
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    AlreadyPresent(PathBuf),
    Downloaded(PathBuf),
}

impl DownloadOutcome {
    /// Location of the jar on disk
    pub fn path(&self) -> &Path {
        match self {
            DownloadOutcome::AlreadyPresent(path) | DownloadOutcome::Downloaded(path) => path,
        }
    }
}

/// Picks the repository serving `version` of the given distribution
pub fn repository_for(version: &Version, kind: ServerKind) -> &'static str {
    match (kind, version.is_snapshot()) {
        (ServerKind::OpenSource, false) => RELEASE_REPO,
        (ServerKind::OpenSource, true) => SNAPSHOT_REPO,
        (ServerKind::Enterprise, false) => ENTERPRISE_RELEASE_REPO,
        (ServerKind::Enterprise, true) => ENTERPRISE_SNAPSHOT_REPO,
    }
}

/// Downloads `artifact` from `repo` into `dst_dir` unless the jar is already there
pub fn download_via_maven<R: CommandRunner + ?Sized>(
    runner: &R,
    repo: &str,
    artifact: &MavenArtifact,
    dst_dir: &Path,
) -> Result<DownloadOutcome, ArtifactError> {
    let file_name = artifact.file_name();
    let dst = dst_dir.join(&file_name);

    if dst.is_file() {
        info!("Not downloading {}, because it already exists", file_name);
        return Ok(DownloadOutcome::AlreadyPresent(dst));
    }

    let args = vec![
        "-q".to_string(),
        "dependency:get".to_string(),
        format!("-DrepoUrl={repo}"),
        format!("-Dartifact={}", artifact.coordinates()),
        format!("-Ddest={}", dst.display()),
    ];

    info!("Downloading {}", file_name);
    let code = runner.run(MVN, &args)?;

    if code != Some(0) {
        error!("Failed to download {}", file_name);
        return Err(ArtifactError::DownloadFailed {
            artifact: artifact.coordinates(),
            code,
        });
    }

    Ok(DownloadOutcome::Downloaded(dst))
}
