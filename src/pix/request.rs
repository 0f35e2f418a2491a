use super::error::PixError;

/// Alias for an amount of money expressed in currency minor units
pub type Amount = i64;

/// A Pix transfer as requested by the user.
/// It is not validated when built, [`TransferRequest::validate`] must be called before using it.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRequest {
  pub amount: Amount,
  pub key: String,
}

impl TransferRequest {
  pub fn new(amount: Amount, key: impl Into<String>) -> Self {
    Self {
      amount,
      key: key.into(),
    }
  }

  /// Checks are done in a fixed order and the first failing one is reported:
  /// the amount must be positive, then the key must not be blank.
  pub fn validate(&self) -> Result<(), PixError> {
    if self.amount <= 0 {
      Err(PixError::no_positive_value())
    } else if self.key.trim().is_empty() {
      Err(PixError::blank_key())
    } else {
      Ok(())
    }
  }
}
