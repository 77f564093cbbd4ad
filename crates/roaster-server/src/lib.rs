//! Server module.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod ghapi;
mod health;
pub mod metrics;
mod roast;
pub mod server;

pub use errors::{Result, ServerError};
