//! Remote controller launcher
//!
//! Downloads the jars a server version needs, then starts the remote
//! controller in the background with its output redirected to two log files
//! in the working directory.

use std::ffi::OsString;
use std::fs::File;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

use thiserror::Error;
use tracing::info;

use crate::artifact::{
    ArtifactError, CommandRunner, MavenArtifact, download_via_maven, repository_for,
};
use crate::config::{
    REMOTE_CONTROLLER_MAIN_CLASS, REMOTE_CONTROLLER_STDERR_LOG, REMOTE_CONTROLLER_STDOUT_LOG,
    REMOTE_CONTROLLER_VERSION, SNAPSHOT_REPO,
};
use crate::release::types::ServerKind;
use crate::release::version::Version;

const JAVA: &str = "java";

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error(transparent)]
    Download(#[from] ArtifactError),

    #[error("Invalid classpath entry: {0}")]
    Classpath(#[from] std::env::JoinPathsError),

    #[error("Failed to start the remote controller: {0}")]
    Io(#[from] std::io::Error),
}

/// What to start and where
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub version: Version,
    pub kind: ServerKind,
    /// Jars are downloaded to and the log files written in this directory
    pub work_dir: PathBuf,
    pub license_key: Option<String>,
}

/// A fully resolved remote controller command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: String,
    pub args: Vec<OsString>,
    pub work_dir: PathBuf,
}

/// Returns the repository and artifact of every jar on the classpath, in classpath order
pub fn required_artifacts(
    version: &Version,
    kind: ServerKind,
) -> Vec<(&'static str, MavenArtifact)> {
    let v = version.as_str();
    let rc = (
        SNAPSHOT_REPO,
        MavenArtifact::new("hazelcast-remote-controller", REMOTE_CONTROLLER_VERSION, false),
    );
    let os_repo = repository_for(version, ServerKind::OpenSource);
    let tests = (os_repo, MavenArtifact::new("hazelcast", v, true));

    match kind {
        ServerKind::OpenSource => vec![
            (os_repo, MavenArtifact::new("hazelcast", v, false)),
            rc,
            tests,
        ],
        ServerKind::Enterprise => {
            let ee_repo = repository_for(version, ServerKind::Enterprise);
            vec![
                (ee_repo, MavenArtifact::new("hazelcast-enterprise", v, false)),
                (ee_repo, MavenArtifact::new("hazelcast-enterprise", v, true)),
                rc,
                tests,
            ]
        }
    }
}

/// Builds the `java` arguments for the given classpath
pub fn java_args(classpath: OsString, license_key: Option<&str>) -> Vec<OsString> {
    let mut args = Vec::new();
    if let Some(key) = license_key {
        args.push(format!("-Dhazelcast.enterprise.license.key={key}").into());
    }
    args.push("-cp".into());
    args.push(classpath);
    args.push(REMOTE_CONTROLLER_MAIN_CLASS.into());
    args.push("--use-simple-server".into());
    args
}

/// Downloads the missing jars and resolves the command line
pub fn prepare<R: CommandRunner + ?Sized>(
    runner: &R,
    options: &LaunchOptions,
) -> Result<LaunchCommand, LaunchError> {
    let mut jars = Vec::new();
    for (repo, artifact) in required_artifacts(&options.version, options.kind) {
        let outcome = download_via_maven(runner, repo, &artifact, &options.work_dir)?;
        jars.push(outcome.path().to_path_buf());
    }

    let classpath = std::env::join_paths(&jars)?;

    Ok(LaunchCommand {
        program: JAVA.to_string(),
        args: java_args(classpath, options.license_key.as_deref()),
        work_dir: options.work_dir.clone(),
    })
}

impl LaunchCommand {
    /// Spawns the process without waiting for it.
    ///
    /// Stdout and stderr go to `rc_stdout.log` and `rc_stderr.log` in the working directory.
    pub fn spawn(&self) -> Result<Child, LaunchError> {
        let stdout = File::create(self.log_path(REMOTE_CONTROLLER_STDOUT_LOG))?;
        let stderr = File::create(self.log_path(REMOTE_CONTROLLER_STDERR_LOG))?;

        let child = Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.work_dir)
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(stderr)
            .spawn()?;

        info!("Started remote controller (pid {})", child.id());
        Ok(child)
    }

    fn log_path(&self, name: &str) -> PathBuf {
        self.work_dir.join(name)
    }
}
