use thiserror::Error;

use catalog::CatalogError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Terminal error: {0}")]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Could not install logger: {0}")]
    Logger(String),

    #[error("'{path}' holds no examples directly; list it to see what it contains")]
    NoExamples { path: String },

    #[error("Example {index} is out of range: '{path}' has {count} examples")]
    ExampleOutOfRange {
        path: String,
        index: usize,
        count: usize,
    },
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;
