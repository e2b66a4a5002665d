//! Loading, editing and saving a settings file.
//!
//! Run with: cargo run --example config

use keyvalues::{from_str, KeyValues, SymbolTable};
use std::error::Error;

const DEFAULTS: &str = r#"
"Settings"
{
    "volume"     "75"
    "fullscreen" "0"
    "Video"
    {
        "width"  "1280"
        "height" "720"
    }
}
"#;

fn main() -> Result<(), Box<dyn Error>> {
    let symbols = SymbolTable::new();
    let mut settings = from_str(&symbols, DEFAULTS)?;

    // Names are case-insensitive and paths reach into groups.
    println!("volume     = {}", settings.get_int("VOLUME", 50));
    println!("resolution = {}x{}", settings.get_int("video/width", 0), settings.get_int("video/height", 0));
    println!("gamma      = {} (default)", settings.get_float("video/gamma", 2.2));

    settings.set_bool("fullscreen", true);
    settings.set_int("Video/width", 1920);
    settings.set_int("Video/height", 1080);
    settings.set_float("Video/gamma", 1.8);

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("settings.kv");
    settings.save_to_file(&path)?;
    println!("\nSaved to {}:\n{}", path.display(), std::fs::read_to_string(&path)?);

    let reloaded = KeyValues::from_file(&symbols, &path)?;
    assert!(reloaded.get_bool("fullscreen", false));
    assert_eq!(reloaded.get_int("video/width", 0), 1920);
    println!("✓ Reload successful");

    Ok(())
}
