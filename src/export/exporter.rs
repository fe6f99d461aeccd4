use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

use crate::safe_db::DB;
use crate::types::{Address, Edge, Safe, Token};

use super::encoding::{write_size, write_u256};
use super::{AddressTable, ExportError};

/// Single-use stream writer for the binary dataset format. One exporter
/// serves exactly one export: the address table is built from the input,
/// written first, and every subsequent record refers to addresses by
/// table index. The sections carry no markers; readers rely on the fixed
/// order.
pub struct BinaryExporter<W> {
    sink: W,
    table_built: bool,
}

impl<W: Write> BinaryExporter<W> {
    pub fn new(sink: W) -> BinaryExporter<W> {
        BinaryExporter {
            sink,
            table_built: false,
        }
    }

    /// Writes a full dataset: address table, then safes, tokens and
    /// connections, each section count-prefixed.
    pub fn write_dataset(&mut self, db: &DB) -> Result<(), ExportError> {
        self.begin()?;
        let table = AddressTable::from_dataset(db);
        println!(
            "Exporting {} safes, {} tokens, {} edges and {} unique addresses.",
            db.safes().len(),
            db.tokens().len(),
            db.connections().len(),
            table.len()
        );
        table.write_to(&mut self.sink)?;
        self.write_safes(db.safes(), &table)?;
        self.write_tokens(db.tokens(), &table)?;
        self.write_edges(db.connections(), &table)
    }

    /// Writes a bare edge set: address table, then the count-prefixed
    /// edges.
    pub fn write_edge_set(&mut self, edges: &BTreeSet<Edge>) -> Result<(), ExportError> {
        self.begin()?;
        let table = AddressTable::from_edges(edges);
        println!(
            "Exporting {} edges and {} unique addresses.",
            edges.len(),
            table.len()
        );
        table.write_to(&mut self.sink)?;
        self.write_edges(edges, &table)
    }

    /// The table is built at most once per exporter instance.
    fn begin(&mut self) -> Result<(), ExportError> {
        if self.table_built {
            return Err(ExportError::TableAlreadyBuilt);
        }
        self.table_built = true;
        Ok(())
    }

    fn write_safes(
        &mut self,
        safes: &BTreeMap<Address, Safe>,
        table: &AddressTable,
    ) -> Result<(), ExportError> {
        write_size(&mut self.sink, safes.len())?;
        for (address, safe) in safes {
            self.write_safe(address, safe, table)?;
        }
        Ok(())
    }

    fn write_safe(
        &mut self,
        address: &Address,
        safe: &Safe,
        table: &AddressTable,
    ) -> Result<(), ExportError> {
        self.write_address(address, table)?;
        write_size(&mut self.sink, safe.balances.len())?;
        for (holder, amount) in &safe.balances {
            self.write_address(holder, table)?;
            write_u256(&mut self.sink, amount)?;
        }
        Ok(())
    }

    fn write_tokens(
        &mut self,
        tokens: &BTreeSet<Token>,
        table: &AddressTable,
    ) -> Result<(), ExportError> {
        write_size(&mut self.sink, tokens.len())?;
        for token in tokens {
            self.write_address(&token.address, table)?;
            self.write_address(&token.safe_address, table)?;
        }
        Ok(())
    }

    fn write_edges(
        &mut self,
        edges: &BTreeSet<Edge>,
        table: &AddressTable,
    ) -> Result<(), ExportError> {
        write_size(&mut self.sink, edges.len())?;
        for edge in edges {
            self.write_edge(edge, table)?;
        }
        Ok(())
    }

    fn write_edge(&mut self, edge: &Edge, table: &AddressTable) -> Result<(), ExportError> {
        self.write_address(&edge.from, table)?;
        self.write_address(&edge.to, table)?;
        self.write_address(&edge.token, table)?;
        write_u256(&mut self.sink, &edge.capacity)
    }

    fn write_address(
        &mut self,
        address: &Address,
        table: &AddressTable,
    ) -> Result<(), ExportError> {
        write_size(&mut self.sink, table.index_of(address)? as usize)
    }
}
