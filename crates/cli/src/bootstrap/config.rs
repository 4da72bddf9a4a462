use ferrous_pdns_domain::{CliOverrides, Config};

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;
    Ok(config)
}
