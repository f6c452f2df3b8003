/// Error returned by `Record::display`.
///
/// Construction is total, so the only failure is the output sink refusing a write.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("output: {0}")]
    Io(#[from] std::io::Error),
}
