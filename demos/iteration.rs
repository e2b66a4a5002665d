//! Walking a tree through its three child views.
//!
//! Run with: cargo run --example iteration

use keyvalues::{keyvalues, KeyValues, SymbolTable};
use std::error::Error;

fn dump(node: &KeyValues, depth: usize) {
    let pad = "  ".repeat(depth);
    for value in node.values() {
        println!("{}{} = {}", pad, value.name(), value.get_string("", ""));
    }
    for group in node.true_sub_keys() {
        println!("{}[{}]", pad, group.name());
        dump(group, depth + 1);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let symbols = SymbolTable::new();
    let mut inventory = keyvalues!(symbols, "Inventory" {
        "owner" => "Alice",
        "Items" {
            "0" {
                "name" => "sword",
                "damage" => 12
            }
            "1" {
                "name" => "shield",
                "armor" => 8
            }
        }
        "gold" => 250,
    });

    // Append with automatic numbering.
    if let Some(items) = inventory.find_key_mut("items") {
        let potion = items.create_new_key();
        potion.set_string("name", "potion");
        potion.set_int("heal", 25);
    }

    println!("Values first, then groups:");
    dump(&inventory, 0);

    println!("\nInsertion order with cursors:");
    let mut cursor = inventory.first_sub_key();
    while let Some(child) = cursor {
        let kind = if child.is_true_sub_key() { "group" } else { "value" };
        println!("  {} ({})", child.name(), kind);
        cursor = inventory.next_key(child);
    }

    let sold = inventory
        .find_key_mut("items")
        .and_then(|items| items.remove_sub_key("0"))
        .ok_or("no item 0")?;
    println!("\nSold {}", sold.get_string("name", "?"));
    println!("{}", keyvalues::to_string(&inventory)?);

    Ok(())
}
