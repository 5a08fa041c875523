pub mod aggregate;
pub mod config;
pub mod correlate;
pub mod error;
pub mod loader;
pub mod logging;
pub mod normalize;
pub mod pipeline;
pub mod sink;
pub mod types;
