use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::read_to_string;

use crate::types::{Address, Edge, Safe, Token, U256};

use super::db::DB;

/// Imports the indexer's safes.json snapshot. Balances populate the
/// safes and the token set; trust connections that carry an absolute
/// limit become capacity edges on the sender's own token, the limit
/// taken verbatim.
pub fn import_from_safes_json(file: &str) -> DB {
    let contents = read_to_string(file).unwrap();
    parse_safes_json(&contents)
}

pub fn parse_safes_json(contents: &str) -> DB {
    let snapshot: Safes = serde_json::from_str(contents).unwrap();

    let mut safes: BTreeMap<Address, Safe> = Default::default();
    let mut tokens: BTreeSet<Token> = Default::default();

    for json_safe in &snapshot.safes {
        let address: Address = json_safe.id.into();
        let mut safe = Safe::default();
        for balance in &json_safe.balances {
            let token_address: Address = balance.token.id.into();
            let owner: Address = balance.token.owner.id.into();
            safe.balances.insert(token_address, balance.amount.into());
            if owner == address {
                safe.token_address = token_address;
            }
            tokens.insert(Token {
                address: token_address,
                safe_address: owner,
            });
        }
        safes.insert(address, safe);
    }

    let mut connections: BTreeSet<Edge> = Default::default();
    for json_safe in &snapshot.safes {
        for connection in json_safe.outgoing.iter().chain(json_safe.incoming.iter()) {
            let user: Address = connection.user_address.into();
            let send_to: Address = connection.can_send_to_address.into();
            let limit = match connection.limit {
                Some(limit) => U256::from(limit),
                None => continue,
            };
            let token = match safes.get(&user) {
                Some(safe) => safe.token_address,
                None => continue,
            };
            if user == send_to
                || token == Address::default()
                || limit == U256::from(0)
                || !safes.contains_key(&send_to)
            {
                continue;
            }
            connections.insert(Edge {
                from: user,
                to: send_to,
                token,
                capacity: limit,
            });
        }
    }

    DB::new(safes, tokens, connections)
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "camelCase")]
struct Safes<'a> {
    #[allow(dead_code)]
    block_number: &'a str,
    safes: Vec<JsonSafe<'a>>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "camelCase")]
struct JsonSafe<'a> {
    id: &'a str,
    #[allow(dead_code)]
    organization: bool,
    outgoing: Vec<Connection<'a>>,
    incoming: Vec<Connection<'a>>,
    balances: Vec<Balance<'a>>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "camelCase")]
struct Connection<'a> {
    limit: Option<&'a str>,
    #[allow(dead_code)]
    limit_percentage: &'a str,
    can_send_to_address: &'a str,
    user_address: &'a str,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "camelCase")]
struct Balance<'a> {
    amount: &'a str,
    token: JsonToken<'a>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "camelCase")]
struct JsonToken<'a> {
    id: &'a str,
    owner: Owner<'a>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "camelCase")]
struct Owner<'a> {
    id: &'a str,
}

#[cfg(test)]
mod test {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "blockNumber": "25000000",
        "safes": [
            {
                "id": "0x1111111111111111111111111111111111111111",
                "organization": false,
                "outgoing": [
                    {
                        "limit": "50",
                        "limitPercentage": "100",
                        "canSendToAddress": "0x2222222222222222222222222222222222222222",
                        "userAddress": "0x1111111111111111111111111111111111111111"
                    },
                    {
                        "limit": "0",
                        "limitPercentage": "0",
                        "canSendToAddress": "0x2222222222222222222222222222222222222222",
                        "userAddress": "0x1111111111111111111111111111111111111111"
                    }
                ],
                "incoming": [],
                "balances": [
                    {
                        "amount": "100",
                        "token": {
                            "id": "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
                            "owner": { "id": "0x1111111111111111111111111111111111111111" }
                        }
                    }
                ]
            },
            {
                "id": "0x2222222222222222222222222222222222222222",
                "organization": false,
                "outgoing": [
                    {
                        "limit": "7",
                        "limitPercentage": "50",
                        "canSendToAddress": "0x9999999999999999999999999999999999999999",
                        "userAddress": "0x2222222222222222222222222222222222222222"
                    }
                ],
                "incoming": [],
                "balances": [
                    {
                        "amount": "20",
                        "token": {
                            "id": "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
                            "owner": { "id": "0x1111111111111111111111111111111111111111" }
                        }
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn import() {
        let db = parse_safes_json(SNAPSHOT);
        let one = Address::from("0x1111111111111111111111111111111111111111");
        let two = Address::from("0x2222222222222222222222222222222222222222");
        let token = Address::from("0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");

        assert_eq!(db.safes().len(), 2);
        assert_eq!(db.safes()[&one].token_address, token);
        assert_eq!(db.safes()[&one].balances[&token], U256::from(100));
        assert_eq!(db.safes()[&two].token_address, Address::default());

        assert_eq!(
            db.tokens().iter().collect::<Vec<_>>(),
            vec![&Token {
                address: token,
                safe_address: one
            }]
        );

        // The zero-limit connection is dropped, the connection to the
        // unknown 0x99… safe is dropped, and safe two has no own token.
        assert_eq!(
            db.connections().iter().collect::<Vec<_>>(),
            vec![&Edge {
                from: one,
                to: two,
                token,
                capacity: U256::from(50)
            }]
        );
    }
}
