use keyvalues::{Error, FormatOptions, Indent, KeyValues, SymbolTable};
use std::fs;

const CONFIG: &str = "\"Config\"\n{\n\t\"volume\" \"75\"\n\t\"Audio\"\n\t{\n\t\t\"enabled\" \"1\"\n\t}\n}\n";

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.kv");
    let symbols = SymbolTable::new();

    let mut kv = KeyValues::new(&symbols, "Config");
    kv.set_int("volume", 75);
    kv.set_bool("Audio/enabled", true);
    kv.save_to_file(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG);

    let loaded = KeyValues::from_file(&symbols, &path).unwrap();
    assert_eq!(loaded.get_int("volume", 0), 75);
    assert!(loaded.get_bool("audio/enabled", false));
}

#[test]
fn test_save_replaces_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.kv");
    fs::write(&path, "old contents that are much longer than the new document").unwrap();

    let symbols = SymbolTable::new();
    KeyValues::new(&symbols, "R").save_to_file(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "\"R\"\n{\n}\n");

    // Only the target is left behind.
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_save_with_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spaced.kv");
    let symbols = SymbolTable::new();
    let kv = KeyValues::with_string(&symbols, "R", "k", "v");

    kv.save_to_file_with_options(&path, FormatOptions::new().with_indent(Indent::Spaces(3)))
        .unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "\"R\"\n{\n   \"k\" \"v\"\n}\n"
    );
}

#[test]
fn test_failed_save_keeps_previous_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.kv");
    fs::write(&path, CONFIG).unwrap();

    let symbols = SymbolTable::new();
    let mut kv = KeyValues::new(&symbols, "R");
    kv.set_string("q", "needs \"escapes\"");
    assert!(matches!(
        kv.save_to_file(&path).unwrap_err(),
        Error::Unrepresentable { .. }
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG);
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("settings.kv");
    let symbols = SymbolTable::new();

    let err = KeyValues::new(&symbols, "R").save_to_file(&path).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let symbols = SymbolTable::new();

    let err = KeyValues::from_file(&symbols, dir.path().join("absent.kv")).unwrap_err();
    assert!(matches!(err, Error::Io(ref msg) if msg.contains("absent.kv")));
}

#[test]
fn test_load_malformed_file_leaves_node_intact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.kv");
    fs::write(&path, "\"R\"\n{\n\t\"k\"\n").unwrap();

    let symbols = SymbolTable::new();
    let mut kv = KeyValues::with_int(&symbols, "Existing", "keep", 1);
    let err = kv.load_from_file(&path).unwrap_err();

    assert!(err.is_parse_error());
    assert_eq!(&*kv.name(), "Existing");
    assert_eq!(kv.get_int("keep", 0), 1);
}

#[test]
fn test_load_from_file_replaces_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.kv");
    fs::write(&path, CONFIG).unwrap();

    let symbols = SymbolTable::new();
    let mut kv = KeyValues::with_int(&symbols, "Existing", "keep", 1);
    kv.load_from_file(&path).unwrap();

    assert_eq!(&*kv.name(), "Config");
    assert!(kv.find_key("keep").is_none());
    assert_eq!(kv.get_int("volume", 0), 75);
}

#[test]
fn test_escape_flag_survives_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("escaped.kv");
    let symbols = SymbolTable::new();

    let mut kv = KeyValues::new(&symbols, "R");
    kv.set_uses_escape_sequences(true);
    kv.set_string("motd", "Welcome!\n\"Have fun\"");
    kv.save_to_file(&path).unwrap();

    let mut loaded = KeyValues::new(&symbols, "R");
    loaded.set_uses_escape_sequences(true);
    loaded.load_from_file(&path).unwrap();
    assert_eq!(loaded, kv);
}
