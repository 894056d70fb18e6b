use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::models::InstanceRecord;

/// Writes `records` as a two-space indented JSON array, replacing whatever
/// is at `path`. The write is not atomic.
pub fn save_to_file(records: &[InstanceRecord], path: &Path) -> io::Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}
