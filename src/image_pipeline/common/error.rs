use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecolorError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode source image: {0}")]
    DecodeError(String),

    #[error("Failed to encode output image: {0}")]
    EncodeError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(u32, u32),

    #[error("Invalid worker count: {0}")]
    InvalidWorkerCount(usize),

    #[error("Invalid partition: {0}")]
    InvalidPartition(String),

    #[error("Band buffer has {actual} bytes, region needs {expected}")]
    BandMismatch { expected: usize, actual: usize },

    #[error("{count} of {total} workers failed: {failed:?}", count = .failed.len())]
    WorkerFailed { failed: Vec<usize>, total: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RecolorError>;
