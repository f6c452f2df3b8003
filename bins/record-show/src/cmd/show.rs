use record_api::{Record, RecordError};

use super::config::Effective;
use super::error::ShowError;

/// Displays every record on the process stdout.
pub fn run_stdout(eff: &Effective) -> Result<(), ShowError> {
    show_each(eff, Record::display_stdout)
}

/// Stops at the first record that fails to display.
fn show_each<F>(eff: &Effective, mut show: F) -> Result<(), ShowError>
where
    F: FnMut(&Record) -> Result<(), RecordError>,
{
    for record in &eff.records {
        show(record)?;
    }
    tracing::debug!(count = eff.records.len(), "records shown");
    Ok(())
}
