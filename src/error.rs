use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("could not read window.openai member {0}")]
    Read(String),
    #[error("could not stringify host value: {0}")]
    Encode(String),
    #[error("host value does not decode: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum MountError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing mount element #{0}")]
    MissingRoot(String),
}
