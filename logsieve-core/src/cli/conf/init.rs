use anyhow::{Context, Result, bail};
use rust_embed::RustEmbed;
use std::fs;
use std::path::PathBuf;

#[derive(RustEmbed)]
#[folder = "config-templates/"]
pub struct ConfigTemplates;

pub const TEMPLATE_NAME: &str = "logsieve.toml";

pub fn init(path: PathBuf) -> Result<()> {
    // Refuse to overwrite an existing config
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    let template = ConfigTemplates::get(TEMPLATE_NAME)
        .with_context(|| format!("embedded template {TEMPLATE_NAME} is missing"))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, template.data.as_ref())
        .with_context(|| format!("failed to write {}", path.display()))?;

    println!("✔ Wrote {}", path.display());
    Ok(())
}
