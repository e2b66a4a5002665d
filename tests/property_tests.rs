//! Property-based tests for the tree model and the text format.
//!
//! Trees are generated from small name and value alphabets so that
//! interesting characters (quotes, backslashes, braces, comment markers,
//! control whitespace) show up often.

use keyvalues::{to_string, Color, KeyValues, Parser, SymbolTable};
use proptest::prelude::*;

const NAME: &str = "[a-zA-Z0-9_ .-]{1,10}";
const ESCAPED_TEXT: &str = "[a-zA-Z0-9 \"\\\\\n\t\r{}/]{0,16}";
const VERBATIM_TEXT: &str = "[a-zA-Z0-9 \\\\\n\t{}/]{0,16}";

#[derive(Debug, Clone)]
enum Entry {
    Value(String, String),
    Group(String, Vec<Entry>),
}

fn entry(text: &'static str) -> impl Strategy<Value = Entry> {
    let leaf = (NAME, text).prop_map(|(k, v)| Entry::Value(k, v));
    leaf.prop_recursive(3, 24, 4, |inner| {
        (NAME, prop::collection::vec(inner, 0..4)).prop_map(|(k, c)| Entry::Group(k, c))
    })
}

fn build(node: &mut KeyValues, entries: &[Entry]) {
    for entry in entries {
        match entry {
            Entry::Value(key, value) => node.create_key(key).set_value(value.as_str()),
            Entry::Group(key, children) => build(node.create_key(key), children),
        }
    }
}

fn tree(symbols: &SymbolTable, escapes: bool, entries: &[Entry]) -> KeyValues {
    let mut root = KeyValues::new(symbols, "Root");
    root.set_uses_escape_sequences(escapes);
    build(&mut root, entries);
    root
}

fn reparse(symbols: &SymbolTable, kv: &KeyValues) -> KeyValues {
    let text = to_string(kv).unwrap();
    Parser::new(&text)
        .escape_sequences(kv.uses_escape_sequences())
        .parse(symbols)
        .unwrap()
}

proptest! {
    #[test]
    fn prop_round_trip_with_escapes(entries in prop::collection::vec(entry(ESCAPED_TEXT), 0..6)) {
        let symbols = SymbolTable::new();
        let kv = tree(&symbols, true, &entries);
        prop_assert_eq!(reparse(&symbols, &kv), kv);
    }

    #[test]
    fn prop_round_trip_without_escapes(entries in prop::collection::vec(entry(VERBATIM_TEXT), 0..6)) {
        let symbols = SymbolTable::new();
        let kv = tree(&symbols, false, &entries);
        prop_assert_eq!(reparse(&symbols, &kv), kv);
    }

    #[test]
    fn prop_serialization_is_stable(entries in prop::collection::vec(entry(ESCAPED_TEXT), 0..6)) {
        let symbols = SymbolTable::new();
        let kv = tree(&symbols, true, &entries);
        let first = to_string(&kv).unwrap();
        let second = to_string(&reparse(&symbols, &kv)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_views_partition_children(entries in prop::collection::vec(entry(VERBATIM_TEXT), 0..8)) {
        let symbols = SymbolTable::new();
        let kv = tree(&symbols, false, &entries);

        let values: Vec<*const KeyValues> = kv.values().map(|c| c as *const _).collect();
        let groups: Vec<*const KeyValues> = kv.true_sub_keys().map(|c| c as *const _).collect();
        prop_assert_eq!(values.len() + groups.len(), kv.sub_key_count());

        // Each view is the all-children order with the other view removed.
        let all: Vec<*const KeyValues> = kv.sub_keys().map(|c| c as *const _).collect();
        let only_values: Vec<_> = all.iter().copied().filter(|p| !groups.contains(p)).collect();
        let only_groups: Vec<_> = all.iter().copied().filter(|p| !values.contains(p)).collect();
        prop_assert_eq!(only_values, values);
        prop_assert_eq!(only_groups, groups);
    }

    #[test]
    fn prop_typed_setters_survive_text(
        i in any::<i32>(),
        u in any::<u64>(),
        f in -1.0e6f32..1.0e6f32,
        b in any::<bool>(),
        rgba in any::<[u8; 4]>(),
        s in ESCAPED_TEXT,
    ) {
        let symbols = SymbolTable::new();
        let mut kv = KeyValues::new(&symbols, "Typed");
        kv.set_uses_escape_sequences(true);
        kv.set_int("i", i);
        kv.set_uint64("u", u);
        kv.set_float("f", f);
        kv.set_bool("b", b);
        kv.set_color("c", Color::from(rgba));
        kv.set_string("group/s", &s);

        let back = reparse(&symbols, &kv);
        prop_assert_eq!(back.get_int("i", 0), i);
        prop_assert_eq!(back.get_uint64("u", 0), u);
        prop_assert_eq!(back.get_float("f", f32::NAN), f);
        prop_assert_eq!(back.get_bool("b", !b), b);
        prop_assert_eq!(back.get_color("c", Color::default()), Color::from(rgba));
        prop_assert_eq!(back.get_string("group/s", "").into_owned(), s);
    }

    #[test]
    fn prop_create_new_key_follows_highest_integer(
        names in prop::collection::btree_set(0i64..10_000, 0..8),
    ) {
        let symbols = SymbolTable::new();
        let mut kv = KeyValues::new(&symbols, "list");
        for name in &names {
            kv.create_key(&name.to_string());
        }
        kv.create_key("label");

        let expected = names.iter().max().map_or(0, |max| max + 1);
        let created = kv.create_new_key().name().to_string();
        prop_assert_eq!(created, expected.to_string());
    }

    #[test]
    fn prop_lookup_ignores_case(name in "[a-zA-Z]{1,12}") {
        let symbols = SymbolTable::new();
        let mut kv = KeyValues::new(&symbols, "root");
        kv.set_int(&name, 1);

        prop_assert_eq!(kv.get_int(&name.to_uppercase(), 0), 1);
        prop_assert_eq!(kv.get_int(&name.to_lowercase(), 0), 1);
        prop_assert_eq!(symbols.intern(&name.to_uppercase()), symbols.intern(&name));
    }
}
