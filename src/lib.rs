pub mod cs;
pub mod error;
pub mod experiment;

pub use cs::{randomized, sort};
pub use error::{Error, Result};
