use crate::conf::load_or_default;
use serde::Serialize;
use std::path::PathBuf;

/// Prints the config that a `parse` run with this file would use.
pub fn dump(path: PathBuf, yaml: bool) -> anyhow::Result<()> {
    let explicit = path.exists().then_some(path.as_path());
    let cfg = load_or_default(explicit)?;

    if yaml {
        dump_yaml(&cfg)
    } else {
        dump_json(&cfg)
    }
}

fn dump_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

fn dump_yaml<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_yaml::to_string(value)?;
    println!("{s}");
    Ok(())
}
