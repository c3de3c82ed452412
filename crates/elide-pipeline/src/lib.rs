//! Two-stage compression pipeline: oracle transform plus entropy coding

mod pipeline;

pub use pipeline::{size, Pipeline, PipelineError};
