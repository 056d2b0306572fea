use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dogwalkers::{AppState, config, seed};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dogwalkers=info,sea_orm=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    let state = AppState::connect(&config).await.map_err(|e| {
        tracing::error!("Failed to initialize database: {}", e);
        e
    })?;
    println!("Connected to DB.");

    if config.seed_demo {
        tracing::info!("Seeding demo data...");
        match seed::example(&state).await {
            Ok(summary) => println!("{}", summary.sentence()),
            Err(e) => {
                tracing::error!("Failed to seed data: {}", e);
                state.close().await?;
                return Err(e.into());
            }
        }
    }

    state.close().await?;
    Ok(())
}
