//! Waygate - Entry Point
//!
//! A chat-bot gateway: one persistent session, inbound messages routed to
//! command handlers backed by external content services.

use log::{error, info};
use std::sync::Arc;

use waygate::Gateway;
use waygate::config::GatewayConfig;
use waygate::services::{ImageTranscoder, Services};
use waygate::transport::ConsoleTransport;

#[tokio::main]
async fn main() {
    // .env first so the logger and config both see it
    dotenvy::dotenv().ok();
    env_logger::init();

    info!("Launching gateway...");

    let config = match GatewayConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let services = match Services::from_config(&config) {
        Ok(services) => services,
        Err(e) => {
            error!("Failed to build service clients: {}", e);
            std::process::exit(1);
        }
    };

    let gateway = Gateway::new(
        config,
        Arc::new(ConsoleTransport),
        services,
        Arc::new(ImageTranscoder::new()),
    );

    if let Err(e) = gateway.start().await {
        error!("Gateway stopped: {}", e);
        std::process::exit(1);
    }
}
