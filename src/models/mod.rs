pub mod config;

pub use config::{DataRoot, ServerConfig};
