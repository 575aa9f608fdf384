use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use release_matrix::artifact::{
    MavenArtifact, ProcessRunner, download_via_maven, repository_for,
};
use release_matrix::config::{
    MatrixConfig, READINESS_POLL_INTERVAL_MS, READINESS_TIMEOUT_SECS, REMOTE_CONTROLLER_PORT,
};
use release_matrix::parser::{ClientReleaseParser, ServerReleaseParser};
use release_matrix::launcher::{LaunchOptions, prepare};
use release_matrix::readiness::wait_until_ready;
use release_matrix::release::matrix::build_matrix;
use release_matrix::release::{
    ClientKind, MatrixOptionKind, Release, ReleaseFilter, ServerKind, Version,
};
use release_matrix::source::HttpSource;

#[derive(Parser)]
#[command(name = "release-matrix")]
#[command(version, about = "Release matrices from the server and client release feeds")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/release-matrix/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the server release matrix
    Server(MatrixArgs),
    /// Print the release matrix of one client
    Client {
        /// cs, cpp, py, node or go
        #[arg(long)]
        kind: ClientKind,
        #[command(flatten)]
        matrix: MatrixArgs,
    },
    /// Download a jar with Maven unless it is already present
    Download {
        /// Repository URL (defaults to the release or snapshot repository for the version)
        #[arg(long)]
        repo: Option<String>,
        /// Resolve the default repository of the enterprise distribution
        #[arg(long)]
        enterprise: bool,
        #[arg(long)]
        artifact_id: String,
        #[arg(long)]
        version: String,
        #[arg(long, default_value = ".")]
        dest: PathBuf,
        /// Download the tests classifier jar
        #[arg(long)]
        tests: bool,
    },
    /// Download the server jars and start the remote controller in the background
    Start {
        #[arg(long)]
        version: String,
        /// Start the enterprise distribution
        #[arg(long)]
        enterprise: bool,
        /// Enterprise license key (defaults to $HAZELCAST_ENTERPRISE_KEY)
        #[arg(long)]
        license_key: Option<String>,
        /// Directory holding the jars and the log files
        #[arg(long, default_value = ".")]
        work_dir: PathBuf,
        /// Return only once the remote controller accepts connections
        #[arg(long)]
        wait: bool,
    },
    /// Wait until the remote controller accepts connections
    WaitReady {
        #[arg(long, default_value_t = REMOTE_CONTROLLER_PORT)]
        port: u16,
        #[arg(long, default_value_t = READINESS_TIMEOUT_SECS)]
        timeout_secs: u64,
    },
}

#[derive(Args)]
struct MatrixArgs {
    /// Keep only these major versions (repeatable)
    #[arg(long = "major")]
    majors: Vec<u64>,
    /// Drop pre-release and build-metadata versions
    #[arg(long)]
    stable: bool,
    /// Keep only the latest patch of each minor line
    #[arg(long)]
    latest_patch: bool,
    /// Field printed for each release: version or tag
    #[arg(long, default_value = "version")]
    option: MatrixOptionKind,
}

impl MatrixArgs {
    fn filters(&self) -> Vec<ReleaseFilter> {
        let mut filters = Vec::new();
        if !self.majors.is_empty() {
            filters.push(ReleaseFilter::major_versions(self.majors.iter().copied()));
        }
        if self.stable {
            filters.push(ReleaseFilter::Stable);
        }
        filters
    }

    fn print(&self, releases: &[Release]) -> anyhow::Result<()> {
        let entries = build_matrix(releases, self.latest_patch, self.option)?;
        println!("{}", serde_json::to_string(&entries)?);
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = release_matrix::logging::init(cli.log_json)?;

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = MatrixConfig::load(cli.config.as_deref())?;
    let source = HttpSource::new();

    match cli.command {
        Command::Server(matrix) => {
            let parser = ServerReleaseParser::new(&config.sources.server_url);
            let releases = parser.get_all_releases(&source, &matrix.filters()).await?;
            matrix.print(&releases)
        }
        Command::Client { kind, matrix } => {
            let parser = ClientReleaseParser::new(kind, &config.sources.client_url);
            let releases = parser.get_all_releases(&source, &matrix.filters()).await?;
            matrix.print(&releases)
        }
        Command::Download {
            repo,
            enterprise,
            artifact_id,
            version,
            dest,
            tests,
        } => {
            let repo = match repo {
                Some(repo) => repo,
                None => {
                    repository_for(&Version::parse(&version)?, server_kind(enterprise)).to_string()
                }
            };
            let artifact = MavenArtifact::new(&artifact_id, &version, tests);
            download_via_maven(&ProcessRunner, &repo, &artifact, &dest)?;
            Ok(())
        }
        Command::Start {
            version,
            enterprise,
            license_key,
            work_dir,
            wait,
        } => {
            let options = LaunchOptions {
                version: Version::parse(&version)?,
                kind: server_kind(enterprise),
                work_dir,
                license_key: license_key
                    .or_else(|| std::env::var("HAZELCAST_ENTERPRISE_KEY").ok())
                    .filter(|key| !key.is_empty()),
            };
            prepare(&ProcessRunner, &options)?.spawn()?;
            if wait {
                wait_for_remote_controller(REMOTE_CONTROLLER_PORT, READINESS_TIMEOUT_SECS).await?;
            }
            Ok(())
        }
        Command::WaitReady { port, timeout_secs } => {
            wait_for_remote_controller(port, timeout_secs).await
        }
    }
}

fn server_kind(enterprise: bool) -> ServerKind {
    if enterprise {
        ServerKind::Enterprise
    } else {
        ServerKind::OpenSource
    }
}

async fn wait_for_remote_controller(port: u16, timeout_secs: u64) -> anyhow::Result<()> {
    let address = SocketAddr::from((Ipv4Addr::LOCALHOST, port));
    wait_until_ready(
        address,
        Duration::from_millis(READINESS_POLL_INTERVAL_MS),
        Duration::from_secs(timeout_secs),
    )
    .await?;
    Ok(())
}
