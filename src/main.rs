use std::net::SocketAddr;
use std::path::Path;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use userpanel::config::{self, DEFAULT_HOST, DEFAULT_PORT};
use userpanel::handlers::helpers::render_once;
use userpanel::models::AppState;
use userpanel::panel::PanelTab;
use userpanel::{build_router, InMemoryKeyStore, PanelError};

fn build_state_from_env(env_file: Option<&str>, keys_file: Option<&str>) -> Result<AppState, PanelError> {
    config::load_env_file(env_file);
    let keys = match keys_file {
        Some(path) => {
            let keys = config::load_seed_keys(Path::new(path))?;
            tracing::info!(count = keys.len(), "Loaded SSH keys from {}", path);
            keys
        }
        None => Vec::new(),
    };
    let mut state = AppState::new(config::get_profile(), Arc::new(InMemoryKeyStore::with_keys(keys)));
    state.avatar_base_url = config::get_avatar_base_url();
    state.avatar_style = config::get_avatar_style();
    Ok(state)
}

async fn start_server(
    mut state: AppState,
    host: &str,
    port: u16,
    stylesheet: Option<String>,
) -> Result<(), PanelError> {
    if let Some(path) = stylesheet {
        let css = std::fs::read_to_string(&path)?;
        tracing::info!("Loaded custom stylesheet from {}", path);
        state.custom_css = Some(css);
    }

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e: std::net::AddrParseError| PanelError::InvalidAddress(e.to_string()))?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Starting account panel server");
    println!(
        "{} {}",
        yansi::Paint::new("Web server running on").green(),
        yansi::Paint::new(format!("http://{}/account", addr)).cyan()
    );
    axum::serve(listener, app).await?;
    Ok(())
}

#[derive(Parser)]
#[command(
    name = "userpanel",
    author,
    version,
    about = "Account settings panel: profile summary and SSH keys",
    after_help = "Use `userpanel <subcommand> --help` to get subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
        /// JSON file with the initial SSH keys (`[{"name": .., "key": ..}]`)
        #[arg(long)]
        keys_file: Option<String>,
    },
    /// Print the panel HTML for the configured profile
    Render {
        /// Tab to show (info | ssh-keys)
        #[arg(long, default_value = "info")]
        tab: String,
        /// Render with the "New SSH key" modal open
        #[arg(long, default_value_t = false)]
        modal: bool,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// JSON file with the SSH keys to list
        #[arg(long)]
        keys_file: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    let result = match cli.command {
        None => match build_state_from_env(None, None) {
            Ok(state) => start_server(state, DEFAULT_HOST, DEFAULT_PORT, None).await,
            Err(e) => Err(e),
        },
        Some(Commands::Serve {
            host,
            port,
            env_file,
            stylesheet,
            keys_file,
        }) => match build_state_from_env(env_file.as_deref(), keys_file.as_deref()) {
            Ok(state) => start_server(state, &host, port, stylesheet).await,
            Err(e) => Err(e),
        },
        Some(Commands::Render {
            tab,
            modal,
            env_file,
            keys_file,
        }) => match build_state_from_env(env_file.as_deref(), keys_file.as_deref()) {
            Ok(state) => render_once(&state, PanelTab::from_slug(Some(&tab)), modal)
                .await
                .map(|html| println!("{}", html)),
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        tracing::error!(%e, "Account panel exited with an error");
        eprintln!("{}: {}", yansi::Paint::new("Error").red(), e);
        process::exit(1);
    }
}
