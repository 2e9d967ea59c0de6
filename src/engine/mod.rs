pub mod config;
pub mod error;
pub mod range;

pub use config::{Config, LineConfig, SplitConfig};
pub use error::SplitError;
