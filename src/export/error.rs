use std::io;

use thiserror::Error;

use crate::types::Address;

/// Errors on the export path. All variants except `Io` are contract
/// violations by the caller; the output produced so far is unusable and
/// the export must be discarded.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A count or length does not fit in the 4-byte size field.
    #[error("count {0} does not fit in a 32-bit size field")]
    SizeOutOfRange(usize),

    /// A record references an address that was not part of the scan that
    /// built the address table.
    #[error("address {0} is not in the address table")]
    UnknownAddress(Address),

    /// A second export was started on an exporter whose address table is
    /// already built.
    #[error("address table was already built for this export")]
    TableAlreadyBuilt,

    /// The sink refused a write; passed through unchanged.
    #[error(transparent)]
    Io(#[from] io::Error),
}
