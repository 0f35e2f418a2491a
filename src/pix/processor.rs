use async_trait::async_trait;
use tracing::debug;

use super::error::{PixError, Result};
use super::request::{Amount, TransferRequest};
use super::response::ResponseCode;
use crate::transport::{with_connection, Server};

/// Interface implemented by Pix processors
#[async_trait]
pub trait PixProcessor: Send + Sync {
  /// Validate and execute a Pix transfer, making a single attempt.
  /// It succeeds only when the transfer was accepted, otherwise the error tells whether
  /// the Pix was rejected ([`PixError`]) or the server could not be reached.
  async fn execute(&self, amount: Amount, key: &str) -> Result<()>;
}

/// Implementation of the [`PixProcessor`] that sends the transfers to a banking [`Server`].
///
/// Requests are validated before any connection is opened. Valid ones are sent through a new connection,
/// which is always closed before returning, and the response code is translated into the outcome.
/// Nothing is retried.
#[derive(Debug)]
pub struct RemotePixProcessor<S> {
  server: S,
}

impl<S> RemotePixProcessor<S>
where
  S: Server,
{
  pub fn new(server: S) -> Self {
    Self { server }
  }
}

#[async_trait]
impl<S> PixProcessor for RemotePixProcessor<S>
where
  S: Server,
{
  async fn execute(&self, amount: Amount, key: &str) -> Result<()> {
    let request = TransferRequest::new(amount, key);
    if let Err(error) = request.validate() {
      debug!(amount, key, %error, "Pix rejected before sending");
      return Err(error.into());
    }

    let TransferRequest { amount, key } = request;
    let response = with_connection(&self.server, move |connection| {
      Box::pin(async move { connection.send_pix(amount, &key).await })
    })
    .await?;

    let code = ResponseCode::from(response.as_str());
    debug!(%code, "banking server answered");

    match code {
      ResponseCode::Success => Ok(()),
      ResponseCode::InsufficientBalance => Err(PixError::insufficient_balance().into()),
      ResponseCode::KeyNotFound => Err(PixError::key_not_found().into()),
      ResponseCode::Unknown(_) => Err(PixError::internal().into()),
    }
  }
}
