use std::env;

use pathexport::{
    io::{read_edges_csv, write_edges_binary, write_edges_csv, write_safes_binary},
    safe_db::safes_json::import_from_safes_json,
};

fn main() {
    let operation = env::args().nth(1).and_then(|op| {
        if matches!(
            op.as_str(),
            "--safes-json-to-safes-bin"
                | "--safes-json-to-edges-bin"
                | "--safes-json-to-edges-csv"
                | "--edges-csv-to-edges-bin"
        ) {
            Some(op)
        } else {
            None
        }
    });
    if env::args().len() != 4 || operation.is_none() {
        println!("Usage: convert --safes-json-to-safes-bin <safes.json> <safes.dat>");
        println!("Usage: convert --safes-json-to-edges-bin <safes.json> <edges.dat>");
        println!("Usage: convert --safes-json-to-edges-csv <safes.json> <edges.csv>");
        println!("Usage: convert --edges-csv-to-edges-bin <edges.csv> <edges.dat>");
        return;
    }

    let input = env::args().nth(2).unwrap();
    let output = env::args().nth(3).unwrap();
    match operation.unwrap().as_str() {
        "--safes-json-to-safes-bin" => {
            let db = import_from_safes_json(&input);
            write_safes_binary(&db, &output).unwrap();
            println!("Export done.");
        }
        "--safes-json-to-edges-bin" => {
            let db = import_from_safes_json(&input);
            write_edges_binary(db.connections(), &output).unwrap();
            println!("Export done.");
        }
        "--safes-json-to-edges-csv" => {
            let db = import_from_safes_json(&input);
            write_edges_csv(db.connections(), &output).unwrap();
            println!("Export done.");
        }
        "--edges-csv-to-edges-bin" => {
            let edges = read_edges_csv(&input).unwrap();
            println!("Imported {} edges.", edges.len());
            write_edges_binary(&edges, &output).unwrap();
            println!("Export done.");
        }
        _ => unreachable!(),
    }
}
