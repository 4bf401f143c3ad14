use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::FeedError;
use crate::record::PropertyRecord;

// Serialize the records as a JSON array, replacing the destination if it
// exists. Order of the slice is the order on disk; an empty slice writes [].
pub fn write_records(records: &[PropertyRecord], destination: &Path) -> Result<(), FeedError> {
    let file = File::create(destination)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, records).map_err(|e| FeedError::Io(io::Error::from(e)))?;
    writer.flush()?;
    Ok(())
}
