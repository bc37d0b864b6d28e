/// Roster Server - minimal user directory service
use axum::{
    routing::{get, post},
    Router,
};
use clap::{Parser, Subcommand};
use roster_server::{api, config::ServerConfig, state::AppState};
use roster_storage::UserStore;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "Roster user directory service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Create a new user
    AddUser {
        /// Email address
        #[arg(short, long)]
        email: String,
        /// Optional display name
        #[arg(short, long)]
        name: Option<String>,
    },
    /// List all users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => {
            serve().await?;
        }
        Commands::AddUser { email, name } => {
            add_user(&email, name.as_deref()).await?;
        }
        Commands::ListUsers => {
            list_users().await?;
        }
    }

    Ok(())
}

async fn serve() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;
    config.validate()?;

    tracing::info!("Starting Roster Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let pool = roster_storage::create_pool(&config.storage.database_url).await?;
    roster_storage::run_migrations(&pool).await?;

    let store = Arc::new(UserStore::new(pool));
    tracing::info!("Database connected");

    // Build application state
    let app_state = AppState::new(store);

    // Build router
    let app = create_router(app_state);

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(api::health::health))
        .route("/users", get(api::users::list_users))
        .route("/users", post(api::users::create_user))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn add_user(email: &str, name: Option<&str>) -> anyhow::Result<()> {
    api::users::validate_email(email)?;

    let config = ServerConfig::load()?;
    let pool = roster_storage::create_pool(&config.storage.database_url).await?;
    roster_storage::run_migrations(&pool).await?;

    let store = UserStore::new(pool);
    let user = store.create_user(email, name).await?;

    println!("Created user {} ({})", user.id, user.email);

    Ok(())
}

async fn list_users() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    let pool = roster_storage::create_pool(&config.storage.database_url).await?;
    roster_storage::run_migrations(&pool).await?;

    let store = UserStore::new(pool);
    let users = store.list_users().await?;

    println!("Users:");
    for user in users {
        println!(
            "  {} - {} ({})",
            user.id,
            user.email,
            user.display_name.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
