use std::path::PathBuf;

/// Errors raised while loading the dataset.
///
/// Every variant is fatal: without a readable dataset there is nothing to chart.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("unknown tier '{tier}' on line {line}")]
    UnknownTier { line: u64, tier: String },
}
