//! GitHub types.

mod common;
mod repositories;

pub use common::*;
pub use repositories::*;
