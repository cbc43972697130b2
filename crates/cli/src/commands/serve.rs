//! `speechintent serve` — Start the relay HTTP server.

use speechintent_config::AppConfig;

pub async fn run(port_override: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if let Some(port) = port_override {
        config.gateway.port = port;
    }

    println!("🎙️  SpeechIntent Relay");
    println!("   Listening: {}:{}", config.gateway.host, config.gateway.port);
    println!("   Model: {}", config.upstream.model);

    speechintent_gateway::start(config).await?;

    Ok(())
}
