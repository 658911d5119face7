use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DocumentError>;
