use record_api::RecordError;

#[derive(Debug, thiserror::Error)]
pub enum ShowError {
    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    Record(#[from] RecordError),
}
