
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

use genai_photo_proxy::{api, config, genai, mail, session};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    config::Config::dotenv_load();
    let config = config::Config::new().expect("Failed to load configuration");
    config::Config::print_env_vars();
    if config.genai_api_key.is_empty() {
        tracing::warn!("GENAI_API_KEY is not set; generation requests will fail upstream");
    }

    let genai_client = genai::client::GenAiClient::new(
        config.genai_url.clone(),
        config.genai_api_key.clone(),
        config.genai_model.clone(),
    );
    let mail_client = mail::client::MailClient::new(config.mail_api_url.clone());

    let state = Arc::new(api::routes::AppState {
        sessions: RwLock::new(session::registry::SessionRegistry::new()),
        genai_client,
        mail_client,
        brand: config.brand.clone(),
    });

    let app = api::routes::router(state).layer(CorsLayer::permissive());

    // Run our application with safe parsing
    let host_str = config.api_host.clone();
    let port_str = config.api_port.clone();
    let ip: std::net::IpAddr = host_str.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid API_HOST '{}', falling back to 127.0.0.1", host_str);
        std::net::IpAddr::from([127, 0, 0, 1])
    });
    let port: u16 = port_str.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid API_PORT '{}', falling back to 8190", port_str);
        8190
    });
    let socket_address = SocketAddr::new(ip, port);
    tracing::info!("listening on {}", socket_address);
    axum::Server::bind(&socket_address)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
