use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("failed to load dataset from `{source_name}`: {message}")]
    DataLoad {
        source_name: String,
        message: String,
    },

    #[error("invalid record at line {line}: field `{field}` has invalid value `{value}`")]
    InvalidRecord {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("dataset must contain at least one record")]
    EmptyDataset,
}
