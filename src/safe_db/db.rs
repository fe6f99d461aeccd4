use std::collections::{BTreeMap, BTreeSet};

use crate::types::{Address, Edge, Safe, Token};

/// A fully-populated dataset, assembled upstream and handed over for
/// export. The exporter only reads it.
#[derive(Debug, Default)]
pub struct DB {
    safes: BTreeMap<Address, Safe>,
    tokens: BTreeSet<Token>,
    connections: BTreeSet<Edge>,
}

impl DB {
    pub fn new(
        safes: BTreeMap<Address, Safe>,
        tokens: BTreeSet<Token>,
        connections: BTreeSet<Edge>,
    ) -> DB {
        println!(
            "{} safes, {} tokens, {} connections",
            safes.len(),
            tokens.len(),
            connections.len()
        );
        DB {
            safes,
            tokens,
            connections,
        }
    }

    pub fn safes(&self) -> &BTreeMap<Address, Safe> {
        &self.safes
    }

    pub fn tokens(&self) -> &BTreeSet<Token> {
        &self.tokens
    }

    pub fn connections(&self) -> &BTreeSet<Edge> {
        &self.connections
    }
}
