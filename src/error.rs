use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Process exit status reported for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Io(_) => 1,
        }
    }
}
