use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed download of {url} ({status})")]
    Download { url: String, status: u16 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("PUZ parse error: {0}")]
    Puz(puz_parse::PuzError),

    #[error("unknown text encoding: {0}")]
    UnknownEncoding(String),

    #[error("grid state of {len} cells is not a multiple of width {width}")]
    GridShape { len: usize, width: usize },

    #[error("render engine error: {0}")]
    Engine(anyhow::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<puz_parse::PuzError> for ExportError {
    fn from(err: puz_parse::PuzError) -> Self {
        ExportError::Puz(err)
    }
}

impl From<anyhow::Error> for ExportError {
    fn from(err: anyhow::Error) -> Self {
        ExportError::Engine(err)
    }
}

impl ExportError {
    /// Failures that abandon a single puzzle rather than the whole run.
    ///
    /// Fetch-layer errors and malformed puzzle bytes skip the identifier;
    /// everything else aborts the range.
    pub fn is_per_item(&self) -> bool {
        matches!(
            self,
            ExportError::Download { .. } | ExportError::Http(_) | ExportError::Puz(_)
        )
    }
}
