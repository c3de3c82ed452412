//! Oracle-backed transform over an OpenAI-compatible chat endpoint

mod client;

pub use client::{ConfigError, OracleTransform, API_KEY_ENV, DEFAULT_MODEL};
