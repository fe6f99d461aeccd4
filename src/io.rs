use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use crate::export::{BinaryExporter, ExportError};
use crate::safe_db::DB;
use crate::types::{Address, Edge, U256};

/// Exports a full dataset (address table, safes, tokens, connections)
/// to a file.
pub fn write_safes_binary(db: &DB, path: &str) -> Result<(), ExportError> {
    let file = File::create(path)?;
    BinaryExporter::new(file).write_dataset(db)
}

/// Exports a bare edge set (address table, edges) to a file.
pub fn write_edges_binary(edges: &BTreeSet<Edge>, path: &str) -> Result<(), ExportError> {
    let file = File::create(path)?;
    BinaryExporter::new(file).write_edge_set(edges)
}

/// Writes one `from,to,token,capacity` line per edge, with checksummed
/// addresses and a decimal capacity.
pub fn write_edges_csv(edges: &BTreeSet<Edge>, path: &str) -> Result<(), io::Error> {
    let mut file = File::create(path)?;
    for Edge {
        from,
        to,
        token,
        capacity,
    } in edges
    {
        writeln!(
            file,
            "{},{},{},{}",
            from.to_checksummed_hex(),
            to.to_checksummed_hex(),
            token.to_checksummed_hex(),
            capacity.to_decimal()
        )?;
    }
    Ok(())
}

/// Reads the CSV shape written by `write_edges_csv`. Fields may be
/// quoted; capacities may be decimal or 0x-prefixed hex; blank lines are
/// skipped.
pub fn read_edges_csv(path: &str) -> Result<BTreeSet<Edge>, io::Error> {
    let mut edges = BTreeSet::new();
    let f = BufReader::new(File::open(path)?);
    for line in f.lines() {
        let line = line?;
        match &line.split(',').collect::<Vec<_>>()[..] {
            [] | [""] => continue,
            [from, to, token, capacity] => {
                let from = Address::from(unescape(from));
                let to = Address::from(unescape(to));
                let token = Address::from(unescape(token));
                let capacity = U256::from(unescape(capacity));
                edges.insert(Edge {
                    from,
                    to,
                    token,
                    capacity,
                });
            }
            _ => {
                return Err(io::Error::new(
                    io::ErrorKind::Other,
                    format!("Expected from,to,token,capacity, but got {line}"),
                ))
            }
        }
    }
    Ok(edges)
}

fn unescape(input: &str) -> &str {
    match input.chars().next() {
        Some('"') | Some('\'') => {
            assert!(input.len() >= 2 && input.chars().last() == input.chars().next());
            &input[1..input.len() - 1]
        }
        _ => input,
    }
}
