use gridwords::utils::serialization::SerializationError;
use gridwords::wordgrid::vocab::VocabError;
use gridwords::GridError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Vocab(#[from] VocabError),

    #[error(transparent)]
    Serialization(#[from] SerializationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to set up logging: {0}")]
    Logging(String),

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
