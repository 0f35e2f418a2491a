use async_trait::async_trait;
use futures::future::BoxFuture;
use thiserror::Error;
use tracing::{debug, warn};

use crate::pix::Amount;

pub type Result<T> = core::result::Result<T, TransportError>;

/// Any failure while opening, using or closing a connection to the banking server.
/// The details are useful for logs, but they never reach the user.
#[derive(Debug, Error)]
pub enum TransportError {
  #[error("Connection timed out")]
  Timeout,

  #[error("Connection refused: {0}")]
  Refused(String),

  #[error("I/O failure: {0}")]
  Io(#[from] std::io::Error),
}

pub type ConnectionBox = Box<dyn Connection>;

/// Interface implemented by the banking servers able to receive Pix transfers
#[async_trait]
pub trait Server: Send + Sync {
  /// Open a new connection to start a banking operation.
  /// Every call returns a different connection, they are never shared between operations.
  async fn open_connection(&self) -> Result<ConnectionBox>;
}

/// A single-use connection to a banking server
#[async_trait]
pub trait Connection: Send {
  /// Send the Pix transfer and return the raw response code given by the server.
  async fn send_pix(&mut self, amount: Amount, key: &str) -> Result<String>;
  /// Release the connection. It must be called exactly once.
  async fn close(&mut self) -> Result<()>;
}

/// Open a connection from the `server`, run the `operation` over it, and close it afterwards
/// whatever the outcome of the operation was.
///
/// Only one failure is reported: a failing operation reports its own error even if closing fails too,
/// and a close failure is reported only when the operation had succeeded.
pub async fn with_connection<S, T, F>(server: &S, operation: F) -> Result<T>
where
  S: Server + ?Sized,
  F: for<'c> FnOnce(&'c mut ConnectionBox) -> BoxFuture<'c, Result<T>>,
{
  let mut connection = server.open_connection().await?;
  debug!("connection opened");

  let outcome = operation(&mut connection).await;

  let closed = connection.close().await;
  match &closed {
    Ok(()) => debug!("connection closed"),
    Err(error) => warn!(%error, "failed to close the connection"),
  }

  match outcome {
    Err(error) => Err(error),
    Ok(value) => closed.map(|()| value),
  }
}
