//! `speechintent config` — Print the effective configuration.

use speechintent_config::AppConfig;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Invalid configuration: {e}"))?;
    print!("{}", config.to_toml());
    Ok(())
}
