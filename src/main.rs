use bookshelf::server::{
    config::Config,
    model::{app::AppState, auth::JwtKeys},
    router, startup,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await.unwrap();
    let jwt = JwtKeys::new(config.jwt_secret.as_bytes());

    tracing::info!("Starting server on {}", config.bind_addr);

    let router = router::routes().with_state(AppState { db, jwt });

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind server address");

    axum::serve(listener, router)
        .await
        .expect("Server exited with an error");
}
