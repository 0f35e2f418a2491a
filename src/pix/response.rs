use std::fmt;

const SUCCESS_CODE: &str = "SUCCESS";
const INSUFFICIENT_BALANCE_CODE: &str = "INSUFFICIENT_BALANCE";
const KEY_NOT_FOUND_CODE: &str = "PIX_KEY_NOT_FOUND";

/// Categorical result given by the banking server for a Pix transfer.
///
/// The set of codes sent by the server is open, so anything that is not recognised
/// (including an empty answer) is kept as [`ResponseCode::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseCode {
  Success,
  InsufficientBalance,
  KeyNotFound,
  Unknown(String),
}

impl ResponseCode {
  /// The textual code as sent by the server
  pub fn as_str(&self) -> &str {
    match self {
      ResponseCode::Success => SUCCESS_CODE,
      ResponseCode::InsufficientBalance => INSUFFICIENT_BALANCE_CODE,
      ResponseCode::KeyNotFound => KEY_NOT_FOUND_CODE,
      ResponseCode::Unknown(code) => code.as_str(),
    }
  }
}

impl From<&str> for ResponseCode {
  fn from(code: &str) -> Self {
    match code {
      SUCCESS_CODE => ResponseCode::Success,
      INSUFFICIENT_BALANCE_CODE => ResponseCode::InsufficientBalance,
      KEY_NOT_FOUND_CODE => ResponseCode::KeyNotFound,
      other => ResponseCode::Unknown(other.to_string()),
    }
  }
}

impl fmt::Display for ResponseCode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
