use std::sync::Arc;

use tower_http::cors::CorsLayer;

use match_onboarding::config::AppConfig;
use match_onboarding::error::Result;
use match_onboarding::onboarding::{
    HttpProfileApi, OnboardingManager, OnboardingRouteState, SubmissionGateway, onboarding_routes,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!("  export PROFILE_API_URL=https://api.example.com");
        std::process::exit(1);
    });

    eprintln!("💘 Match onboarding v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Profile API: {}", config.profile_api.base_url);
    eprintln!("   Onboarding API: http://0.0.0.0:{}/api/onboarding/status", config.port);

    let gateway: Arc<dyn SubmissionGateway> = Arc::new(HttpProfileApi::new(&config.profile_api)?);
    let manager = Arc::new(OnboardingManager::new(gateway));

    let app = onboarding_routes(OnboardingRouteState { manager }).layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "Onboarding server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
