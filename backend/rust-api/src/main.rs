use std::sync::Arc;

use clap::Parser;
use skill_swap_api::{app, services::ProfileStore, AppState, Config, LogFormat};
use tokio::signal;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "skill-swap-api", about = "Skill swap catalog, swap requests and profiles")]
struct Args {
    /// Port to listen on (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Interface to bind (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Namespace for profile document paths (overrides APP_ID)
    #[arg(long)]
    app_id: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    let args = Args::parse();
    let mut config = Config::from_env()?;
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(app_id) = args.app_id {
        config.app_id = app_id;
    }
    if args.log_json {
        config.log_format = LogFormat::Json;
    }

    init_tracing(config.log_format);
    info!("Starting Skill Swap API server...");
    info!("Profile documents live under artifacts/{}/public/data/users", config.app_id);

    let addr = config.bind_addr();
    let state = AppState::new(&config);
    let profiles = state.profiles.clone();
    let router = app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    if let Err(e) = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal(profiles))
        .await
    {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "skill_swap_api=debug,tower_http=debug".into());

    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        LogFormat::Plain => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

async fn shutdown_signal(profiles: Arc<ProfileStore>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, closing profile store");
    // Ends live subscriptions so open WebSockets close and serve() can finish.
    profiles.close();
}
