use std::collections::BTreeMap;

use super::{Address, U256};

/// One safe's ledger: the balance it holds per token address.
#[derive(Default, Debug)]
pub struct Safe {
    /// The address of the token minted by this safe, or the zero address
    /// if it never minted one.
    pub token_address: Address,
    pub balances: BTreeMap<Address, U256>,
}
