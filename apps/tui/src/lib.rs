// Export our modules for use in binaries and tests
pub mod config;
pub mod http;

pub use http::HttpSource;
