use anyhow::{anyhow, Result};

use crate::config::{resolve_config_path, ConfigFile};

pub fn handle(
    explicit_path: Option<&str>,
    url: Option<String>,
    api_key: Option<String>,
) -> Result<()> {
    let path = resolve_config_path(explicit_path)?;
    let mut file = ConfigFile::load_from(&path)?;

    if let Some(url) = url {
        file.url = Some(url);
    }
    if let Some(api_key) = api_key {
        file.api_key = Some(api_key);
    }

    if file.url.is_none() || file.api_key.is_none() {
        return Err(anyhow!(
            "Both --url and --api-key are required the first time (found url: {}, api key: {})",
            if file.url.is_some() { "yes" } else { "no" },
            if file.api_key.is_some() { "yes" } else { "no" },
        ));
    }

    file.save_to(&path)?;
    println!("Config written to {}", path.display());
    println!("\nTry it:");
    println!("  destishare list");
    println!("  destishare browse");
    Ok(())
}
