use crate::types::{Address, U256};

/// A directed capacity edge: `from` can send up to `capacity` units of
/// `token` to `to`. The derived ordering (field order) is the order edges
/// appear in on the wire.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Ord, PartialOrd)]
pub struct Edge {
    pub from: Address,
    pub to: Address,
    pub token: Address,
    pub capacity: U256,
}
