pub mod address_table;
pub mod encoding;
pub mod error;
pub mod exporter;

pub use address_table::AddressTable;
pub use error::ExportError;
pub use exporter::BinaryExporter;
