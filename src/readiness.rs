//! Readiness wait for the remote controller
//!
//! The controller is considered ready once its TCP port accepts connections.

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;
use tokio::net::TcpStream;
use tokio::time::{Instant, sleep};
use tracing::{debug, info};

#[derive(Debug, Error)]
#[error("{address} did not accept connections within {waited_secs} seconds")]
pub struct NotReadyError {
    pub address: SocketAddr,
    pub waited_secs: u64,
}

/// Probes `address` every `interval` until a connection succeeds or
/// `timeout` has elapsed.
pub async fn wait_until_ready(
    address: SocketAddr,
    interval: Duration,
    timeout: Duration,
) -> Result<(), NotReadyError> {
    let started = Instant::now();
    let mut attempts: u32 = 0;

    loop {
        attempts += 1;
        match TcpStream::connect(address).await {
            Ok(_) => {
                info!("{} is ready after {} attempts", address, attempts);
                return Ok(());
            }
            Err(e) => debug!("{} is not ready yet: {}", address, e),
        }

        if started.elapsed() + interval > timeout {
            return Err(NotReadyError {
                address,
                waited_secs: timeout.as_secs(),
            });
        }

        sleep(interval).await;
    }
}
