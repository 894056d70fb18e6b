pub mod archiver;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod parser;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{Settings, run, run_and_report};
