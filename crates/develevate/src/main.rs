//! develevate - DevElevate server and preference CLI

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use develevate_core::config::default_config_dir;
use develevate_core::ServerConfig;
use develevate_web::AppState;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "develevate=info,develevate_core=info,develevate_web=info";

#[derive(Parser)]
#[command(
    name = "develevate",
    version,
    about = "DevElevate coding platform server",
    long_about = "Serves the DevElevate web app and its account API.\n\
                  \n\
                  Examples:\n\
                    develevate                       # Serve with develevate.toml / defaults\n\
                    develevate serve --port 8080     # Custom port\n\
                    develevate theme --toggle        # Flip the stored dark-mode preference\n\
                    develevate config init           # Write a default develevate.toml\n\
                  \n\
                  Web Frontend Workflow:\n\
                    trunk build --release            # Compile frontend once (crates/develevate-web)\n\
                    develevate serve                 # Serves API + static frontend\n\
                  \n\
                  Environment Variables:\n\
                    DEVELEVATE_CONFIG_DIR            # Override the config directory\n\
                    RUST_LOG                         # Log filter (default: develevate=info)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Config directory holding develevate.toml and preferences.json
    #[arg(long, env = "DEVELEVATE_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Log filter, overrides RUST_LOG (e.g. "develevate_web=debug")
    #[arg(long)]
    log: Option<String>,
}

#[derive(Subcommand)]
enum Mode {
    /// Run the web server (default)
    Serve {
        /// Interface to bind
        #[arg(long)]
        host: Option<String>,
        /// Port for web server
        #[arg(long)]
        port: Option<u16>,
        /// Built frontend directory
        #[arg(long)]
        dist: Option<PathBuf>,
        /// Disable permissive CORS
        #[arg(long)]
        no_cors: bool,
        /// Open the app in the default browser
        #[arg(long)]
        open: bool,
    },
    /// Show or toggle the stored theme preference
    Theme {
        #[arg(long)]
        toggle: bool,
    },
    /// Manage develevate.toml
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective config
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log.as_deref());

    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => default_config_dir().context("Could not determine config directory")?,
    };

    match cli.mode.unwrap_or(Mode::Serve {
        host: None,
        port: None,
        dist: None,
        no_cors: false,
        open: false,
    }) {
        Mode::Serve {
            host,
            port,
            dist,
            no_cors,
            open,
        } => {
            let mut config = ServerConfig::load_or_default(&config_dir);
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(dist) = dist {
                config.dist_dir = dist;
            }
            if no_cors {
                config.cors = false;
            }
            run_serve(config, open).await?;
        }
        Mode::Theme { toggle } => {
            println!("{}", cli::run_theme(&config_dir, toggle)?);
        }
        Mode::Config { action } => match action {
            ConfigAction::Init { force } => {
                println!("{}", cli::run_config_init(&config_dir, force)?);
            }
            ConfigAction::Show => {
                let config = ServerConfig::load_or_default(&config_dir);
                println!("# {}", config_dir.display());
                println!("host = {:?}", config.host);
                println!("port = {}", config.port);
                println!("dist_dir = {:?}", config.dist_dir.display().to_string());
                println!("cors = {}", config.cors);
            }
        },
    }

    Ok(())
}

fn init_logging(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn run_serve(config: ServerConfig, open_browser: bool) -> Result<()> {
    let url = format!("http://{}:{}", config.host, config.port);

    if config.dist_dir.join("index.html").exists() {
        println!("\nBackend API + Frontend: {}", url);
        println!("   API endpoints:       {}/api/*", url);
    } else {
        println!("\nBackend API only:       {}/api/*", url);
        println!("   Run 'trunk build' in crates/develevate-web to compile the frontend");
    }

    if open_browser {
        if let Err(e) = open::that(&url) {
            warn!(error = %e, "Could not open browser");
        }
    }

    develevate_web::run(AppState::in_memory(), &config).await
}
