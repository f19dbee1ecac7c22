pub type DotsResult<T> = Result<T, DotsError>;

#[derive(thiserror::Error, Debug)]
pub enum DotsError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error("quote error: {0}")]
    Quote(#[from] crate::quote::QuoteError),

    #[error("persistence error: {0}")]
    Persistence(#[from] crate::persist::StoreError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DotsError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}
