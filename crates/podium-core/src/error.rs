use thiserror::Error;

#[derive(Error, Debug)]
pub enum PodiumError {
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("InvalidData: {0}")]
    InvalidData(String),

    #[error("Unknown methodology: '{0}'. Must be 'gold', 'total' or 'weighted_total'")]
    UnknownMethodology(String),

    #[error("Unknown season: '{0}'. Must be 'Summer' or 'Winter'")]
    UnknownSeason(String),
}

pub type PodiumResult<T> = Result<T, PodiumError>;
