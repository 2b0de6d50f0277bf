//! Configuration module for Flow-Mapper
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key is optional; a missing file section falls back to the defaults the
//! mapper runs with when no configuration is given at all.
//!
//! # Example
//!
//! ```no_run
//! use flow_mapper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("flow-mapper.toml")).unwrap();
//! println!("Crawler will use max depth: {}", config.crawler.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, FilterConfig, OutputConfig, UserAgentConfig, DEFAULT_FETCH_TIMEOUT_SECS,
    DEFAULT_MAX_DEPTH, DEFAULT_THRESHOLD,
};

// Re-export parser and validation functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
