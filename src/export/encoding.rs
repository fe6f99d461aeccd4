use std::io::Write;

use crate::types::U256;

use super::ExportError;

/// Writes a count or length as exactly four big-endian bytes. Values
/// outside the 32-bit range are refused before anything is written.
pub fn write_size(sink: &mut impl Write, n: usize) -> Result<(), ExportError> {
    let v = u32::try_from(n).map_err(|_| ExportError::SizeOutOfRange(n))?;
    sink.write_all(&v.to_be_bytes())?;
    Ok(())
}

/// Writes a 256-bit integer as one length byte (1..=32) followed by that
/// many big-endian bytes, leading zeros stripped. Zero still takes a full
/// length prefix and encodes as `[1, 0]`.
pub fn write_u256(sink: &mut impl Write, v: &U256) -> Result<(), ExportError> {
    let bytes = v.to_bytes();
    if bytes.is_empty() {
        sink.write_all(&[1, 0])?;
    } else {
        sink.write_all(&[bytes.len() as u8])?;
        sink.write_all(&bytes)?;
    }
    Ok(())
}
