use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Error fetching Azure VM sizes")]
    Fetch(#[from] reqwest::Error),

    #[error("Error writing to JSON file")]
    Write(#[from] std::io::Error),
}

impl PipelineError {
    /// The operator-facing line: this error followed by every underlying
    /// cause, e.g. `Error fetching Azure VM sizes: error sending request ...:
    /// tcp connect error: Connection refused (os error 111)`.
    pub fn status_line(self) -> String {
        format!("{:#}", anyhow::Error::new(self))
    }
}
