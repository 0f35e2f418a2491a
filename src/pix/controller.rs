use tracing::{info, warn};

use super::error::ExecuteError;
use super::messages;
use super::processor::PixProcessor;
use super::request::Amount;

/// The boundary between the user and the Pix processing.
///
/// Whatever happens while executing the Pix, the outcome is reported to the user as one of the
/// fixed messages, and no error escapes from here. Connection problems are reported all the same,
/// without any technical detail.
pub struct PixController<P> {
  processor: P,
}

impl<P> PixController<P>
where
  P: PixProcessor,
{
  pub fn new(processor: P) -> Self {
    Self { processor }
  }

  pub async fn when_confirming_pix(&self, amount: Amount, key: &str) -> String {
    match self.processor.execute(amount, key).await {
      Ok(()) => {
        info!(amount, "Pix created");
        messages::SUCCESS.to_string()
      }
      Err(ExecuteError::Pix(error)) => {
        info!(amount, ?error, "Pix rejected");
        error.message().to_string()
      }
      Err(ExecuteError::Transport(error)) => {
        warn!(amount, %error, "Pix could not reach the banking server");
        messages::CONNECTION_ERROR.to_string()
      }
    }
  }
}

#[cfg(test)]
mod tests {

  use std::io;

  use async_trait::async_trait;

  use super::*;
  use crate::pix::{ExecuteResult, PixError};
  use crate::transport::TransportError;

  mockall::mock! {
    TestPixProcessor {}
    #[async_trait]
    impl PixProcessor for TestPixProcessor {
      async fn execute(&self, amount: Amount, key: &str) -> ExecuteResult<()>;
    }
  }

  fn create_controller<F>(outcome: F) -> PixController<MockTestPixProcessor>
  where
    F: Fn() -> ExecuteResult<()> + Send + 'static,
  {
    let mut processor = MockTestPixProcessor::new();
    processor
      .expect_execute()
      .times(1)
      .returning(move |_, _| outcome());
    PixController::new(processor)
  }

  #[tokio::test]
  async fn success_message() {
    let controller = create_controller(|| Ok(()));

    let message = controller.when_confirming_pix(2000, "abc123").await;

    assert_eq!(message, messages::SUCCESS);
  }

  #[tokio::test]
  async fn rejection_messages() {
    let cases = vec![
      (PixError::no_positive_value(), 0, "abc123", messages::NO_POSITIVE_VALUE),
      (PixError::blank_key(), 2000, " ", messages::BLANK_KEY),
      (
        PixError::insufficient_balance(),
        1_000_000,
        "abc123",
        messages::INSUFFICIENT_BALANCE,
      ),
      (PixError::key_not_found(), 2000, "abc123", messages::KEY_NOT_FOUND),
      (PixError::internal(), 2000, "abc123", messages::INTERNAL_ERROR),
    ];

    for (error, amount, key, expected) in cases {
      let controller = create_controller(move || Err(error.clone().into()));

      let message = controller.when_confirming_pix(amount, key).await;

      assert_eq!(message, expected);
    }
  }

  #[tokio::test]
  async fn custom_rejection_message() {
    let controller = create_controller(|| {
      Err(
        PixError::key_not_found()
          .with_message("No account is registered under this key.")
          .into(),
      )
    });

    let message = controller.when_confirming_pix(2000, "abc123").await;

    assert_eq!(message, "No account is registered under this key.");
  }

  #[tokio::test]
  async fn connection_error_messages() {
    let cases: [fn() -> TransportError; 3] = [
      || TransportError::Timeout,
      || TransportError::Refused("bank offline".to_string()),
      || io::Error::from(io::ErrorKind::ConnectionReset).into(),
    ];

    for &transport_error in cases.iter() {
      let controller = create_controller(move || Err(transport_error().into()));

      let message = controller.when_confirming_pix(2000, "abc123").await;

      assert_eq!(message, messages::CONNECTION_ERROR);
    }
  }
}
