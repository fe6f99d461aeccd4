use std::collections::BTreeSet;
use std::io::Write;

use crate::safe_db::DB;
use crate::types::{Address, Edge};

use super::encoding::write_size;
use super::ExportError;

/// The sorted, deduplicated list of every address an export will
/// reference, built once per export. Records refer to addresses by
/// position in this list instead of repeating 20 raw bytes.
#[derive(Debug)]
pub struct AddressTable {
    addresses: Vec<Address>,
}

impl AddressTable {
    /// Collects every address reachable from safes and tokens.
    /// Connections must only reference addresses that already appear in a
    /// safe or token; `index_of` fails on anything else.
    pub fn from_dataset(db: &DB) -> AddressTable {
        let mut addresses = BTreeSet::new();
        for (address, safe) in db.safes() {
            addresses.insert(*address);
            for holder in safe.balances.keys() {
                addresses.insert(*holder);
            }
        }
        for token in db.tokens() {
            addresses.insert(token.address);
            addresses.insert(token.safe_address);
        }
        Self::from_set(addresses)
    }

    /// Collects the endpoints and token of every edge in the set.
    pub fn from_edges(edges: &BTreeSet<Edge>) -> AddressTable {
        let mut addresses = BTreeSet::new();
        for Edge {
            from, to, token, ..
        } in edges
        {
            addresses.insert(*from);
            addresses.insert(*to);
            addresses.insert(*token);
        }
        Self::from_set(addresses)
    }

    fn from_set(addresses: BTreeSet<Address>) -> AddressTable {
        AddressTable {
            addresses: addresses.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    pub fn index_of(&self, address: &Address) -> Result<u32, ExportError> {
        self.addresses
            .binary_search(address)
            .map(|i| i as u32)
            .map_err(|_| ExportError::UnknownAddress(*address))
    }

    /// Writes the table header: the address count, then each address as
    /// 20 raw bytes in ascending order.
    pub fn write_to(&self, sink: &mut impl Write) -> Result<(), ExportError> {
        write_size(sink, self.addresses.len())?;
        for address in &self.addresses {
            sink.write_all(&address.to_bytes())?;
        }
        Ok(())
    }
}
