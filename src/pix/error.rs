use thiserror::Error;

use super::messages;
use crate::transport::TransportError;

/// Possible reasons for a Pix to be rejected, either locally while validating it,
/// or by the banking server once it has been sent.
///
/// Every kind carries the message to show to the user. The constructors use the default message
/// of the kind, and [`PixError::with_message`] allows to replace it.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PixError {
  #[error("{0}")]
  NoPositiveValue(String),

  #[error("{0}")]
  BlankKey(String),

  #[error("{0}")]
  InsufficientBalance(String),

  #[error("{0}")]
  KeyNotFound(String),

  #[error("{0}")]
  Internal(String),
}

impl PixError {
  pub fn no_positive_value() -> Self {
    PixError::NoPositiveValue(messages::NO_POSITIVE_VALUE.to_string())
  }

  pub fn blank_key() -> Self {
    PixError::BlankKey(messages::BLANK_KEY.to_string())
  }

  pub fn insufficient_balance() -> Self {
    PixError::InsufficientBalance(messages::INSUFFICIENT_BALANCE.to_string())
  }

  pub fn key_not_found() -> Self {
    PixError::KeyNotFound(messages::KEY_NOT_FOUND.to_string())
  }

  pub fn internal() -> Self {
    PixError::Internal(messages::INTERNAL_ERROR.to_string())
  }

  /// Same kind of error, with a different message
  pub fn with_message(self, message: impl Into<String>) -> Self {
    let message = message.into();
    match self {
      PixError::NoPositiveValue(_) => PixError::NoPositiveValue(message),
      PixError::BlankKey(_) => PixError::BlankKey(message),
      PixError::InsufficientBalance(_) => PixError::InsufficientBalance(message),
      PixError::KeyNotFound(_) => PixError::KeyNotFound(message),
      PixError::Internal(_) => PixError::Internal(message),
    }
  }

  pub fn message(&self) -> &str {
    match self {
      PixError::NoPositiveValue(message)
      | PixError::BlankKey(message)
      | PixError::InsufficientBalance(message)
      | PixError::KeyNotFound(message)
      | PixError::Internal(message) => message,
    }
  }
}

pub type Result<T> = core::result::Result<T, ExecuteError>;

/// Error returned when executing a Pix: either the Pix was rejected,
/// or the banking server could not be reached.
#[derive(Debug, Error)]
pub enum ExecuteError {
  #[error(transparent)]
  Pix(#[from] PixError),

  #[error(transparent)]
  Transport(#[from] TransportError),
}

#[cfg(test)]
mod tests {

  use super::*;

  #[test]
  fn default_messages() {
    let cases = vec![
      (PixError::no_positive_value(), messages::NO_POSITIVE_VALUE),
      (PixError::blank_key(), messages::BLANK_KEY),
      (PixError::insufficient_balance(), messages::INSUFFICIENT_BALANCE),
      (PixError::key_not_found(), messages::KEY_NOT_FOUND),
      (PixError::internal(), messages::INTERNAL_ERROR),
    ];

    for (error, expected) in cases {
      assert_eq!(error.message(), expected);
      assert_eq!(error.to_string().as_str(), expected);
    }
  }

  #[test]
  fn with_message_keeps_kind() {
    assert_eq!(
      PixError::insufficient_balance().with_message("Limit exceeded for today."),
      PixError::InsufficientBalance("Limit exceeded for today.".to_string())
    );
    assert_eq!(
      PixError::internal().with_message("Try again later."),
      PixError::Internal("Try again later.".to_string())
    );
  }

  #[test]
  fn execute_error_display_is_transparent() {
    let pix_error = ExecuteError::from(PixError::key_not_found());
    let transport_error = ExecuteError::from(TransportError::Timeout);

    assert_eq!(pix_error.to_string(), messages::KEY_NOT_FOUND);
    assert_eq!(transport_error.to_string(), "Connection timed out");
  }
}
