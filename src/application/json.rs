//! JSON boundary for callers that exchange records as text.

use std::io::{Read, Write};

use serde::Serialize;

use crate::domain::HealthInput;

/// Parse a `HealthInput` from a JSON reader.
///
/// # Errors
/// Returns an error if the reader fails or the JSON does not match the
/// expected shape (including an unknown gender).
pub fn read_input<R: Read>(reader: R) -> crate::Result<HealthInput> {
    let input = serde_json::from_reader(reader)?;
    Ok(input)
}

/// Write any serializable value as pretty JSON followed by a newline.
///
/// # Errors
/// Returns an error if serialization or the write fails.
pub fn write_pretty<W: Write, T: Serialize + ?Sized>(mut writer: W, value: &T) -> crate::Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
