//! Escape-sequence handling on read and write.
//!
//! Run with: cargo run --example escapes

use keyvalues::{from_str, to_string, Error as KvError, KeyValues, Parser, SymbolTable};
use std::error::Error;

const TEXT: &str = r#""Messages" { "motd" "Line one\nLine \"two\"" "path" "C:\data\files" }"#;

fn main() -> Result<(), Box<dyn Error>> {
    let symbols = SymbolTable::new();

    // Escapes disabled: backslashes are ordinary characters, but an escaped
    // quote ends the token early.
    match from_str(&symbols, TEXT) {
        Ok(kv) => println!("verbatim motd: {:?}", kv.get_string("motd", "")),
        Err(err) => println!("verbatim parse failed: {}", err),
    }

    // Escapes enabled: \n and \" decode, unknown escapes keep their backslash.
    let kv = Parser::new(TEXT).escape_sequences(true).parse(&symbols)?;
    println!("escaped motd: {:?}", kv.get_string("motd", ""));
    println!("escaped path: {:?}", kv.get_string("path", ""));

    // Writing follows the tree's own flag.
    println!("\n{}", to_string(&kv)?);

    let mut plain = KeyValues::new(&symbols, "Plain");
    plain.set_string("quote", "she said \"hi\"");
    match to_string(&plain) {
        Err(KvError::Unrepresentable { reason, .. }) => println!("cannot write verbatim: {}", reason),
        other => println!("unexpected: {:?}", other),
    }

    plain.set_uses_escape_sequences(true);
    println!("{}", to_string(&plain)?);

    Ok(())
}
