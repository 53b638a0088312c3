use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum ImportError {
    #[error("the file is empty")]
    Empty,

    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("CSV read error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    #[error("failed to store imported rows: {0:#}")]
    Storage(anyhow::Error),
}
