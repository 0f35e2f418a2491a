//! This module contains the capability used to reach a banking server
//!
//! A [`Server`] opens [`Connection`]s, and every connection carries a single Pix transfer.
//! Concrete transports are plugged in by implementing both traits; [`FakeServer`] is an in-process one.
//! The [`with_connection`] function guarantees that a connection is closed once it has been opened.
//

mod connection;
mod fake;

#[cfg(test)]
pub(crate) use connection::mocks;

pub use connection::{
  with_connection, Connection, ConnectionBox, Result as TransportResult, Server, TransportError,
};
pub use fake::FakeServer;
