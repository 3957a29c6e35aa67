use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Save any serializable data to a pretty-printed JSON file.
pub fn save_json_output<T: Serialize>(data: &T, out_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(out_path, json)?;
    Ok(())
}
