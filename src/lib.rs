pub mod config;
pub mod error;
pub mod gateway;
pub mod llm;
pub mod logging;
pub mod server;

pub use error::{Error, Result};
