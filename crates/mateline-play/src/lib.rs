//! Interactive human-versus-engine play over line-based text I/O.

pub mod command;
pub mod config;
pub mod error;
pub mod session;

pub use command::{Command, parse_command};
pub use config::PlayConfig;
pub use error::PlayError;
pub use session::{Outcome, Session};
