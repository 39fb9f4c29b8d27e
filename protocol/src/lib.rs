//! Request/response layer for running the game on a remote authority.
//!
//! [`RemoteLogic`] offers the same [`GameLogic`](minefield_core::GameLogic) contract as the
//! in-process engine, forwarding each operation as a JSON message over a [`Transport`].

pub use authority::*;
pub use config::*;
pub use error::*;
pub use message::*;
pub use remote::*;

mod authority;
mod config;
mod error;
mod message;
mod remote;
