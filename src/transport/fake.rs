use async_trait::async_trait;
use tracing::debug;

use super::{Connection, ConnectionBox, Server, TransportError, TransportResult};
use crate::pix::{Amount, ResponseCode};

/// Implementation of [`Server`] that never leaves the process.
///
/// Every connection answers with the same configured response code, which makes it handy
/// to try the different outcomes without a real banking server.
/// It can also behave as a server that cannot be reached, failing every connection attempt with a timeout.
#[derive(Debug, Clone)]
pub struct FakeServer {
  response_code: String,
  reachable: bool,
}

impl FakeServer {
  pub fn new() -> Self {
    Self::responding_with(ResponseCode::Success.as_str())
  }

  pub fn responding_with(response_code: impl Into<String>) -> Self {
    Self {
      response_code: response_code.into(),
      reachable: true,
    }
  }

  pub fn unreachable() -> Self {
    Self {
      reachable: false,
      ..Self::new()
    }
  }
}

impl Default for FakeServer {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl Server for FakeServer {
  async fn open_connection(&self) -> TransportResult<ConnectionBox> {
    if self.reachable {
      Ok(Box::new(FakeConnection {
        response_code: self.response_code.clone(),
      }) as ConnectionBox)
    } else {
      Err(TransportError::Timeout)
    }
  }
}

struct FakeConnection {
  response_code: String,
}

#[async_trait]
impl Connection for FakeConnection {
  async fn send_pix(&mut self, amount: Amount, key: &str) -> TransportResult<String> {
    debug!(amount, key, code = %self.response_code, "fake server received a Pix");
    Ok(self.response_code.clone())
  }

  async fn close(&mut self) -> TransportResult<()> {
    Ok(())
  }
}
