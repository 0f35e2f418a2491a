//! Validation and execution of Pix transfers against a banking server.
//!
//! The [`pix`] module holds the domain logic, and the [`transport`] module the capability
//! used to reach the banking server.

pub mod pix;
pub mod transport;
