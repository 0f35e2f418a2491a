//! This module contains the domain logic to validate and execute Pix transfers
//!
//! The [`RemotePixProcessor`] validates a transfer and sends it through a [`Server`](crate::transport::Server),
//! translating the response code into a [`PixError`] when the transfer is rejected.
//! The [`PixController`] sits on top of any [`PixProcessor`] and turns every outcome into one of the [`messages`].
//

mod controller;
mod error;
pub mod messages;
mod processor;
mod request;
mod response;

pub use controller::PixController;
pub use error::{ExecuteError, PixError, Result as ExecuteResult};
pub use processor::{PixProcessor, RemotePixProcessor};
pub use request::{Amount, TransferRequest};
pub use response::ResponseCode;
