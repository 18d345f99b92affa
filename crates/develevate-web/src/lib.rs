//! develevate-web - Web frontend for DevElevate using Leptos + Axum

#![recursion_limit = "1024"]

pub mod api;
pub mod app;
pub mod components;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod router;
pub mod state;
pub mod storage;

pub use app::App;
#[cfg(feature = "ssr")]
pub use router::{create_router, ApiError, AppState};

#[cfg(feature = "ssr")]
pub use server::run;

#[cfg(feature = "ssr")]
mod server {
    use crate::router::{create_router, AppState};
    use anyhow::{Context, Result};
    use develevate_core::ServerConfig;
    use tokio::net::TcpListener;
    use tracing::info;

    /// Run the web server until it fails or the process exits
    pub async fn run(state: AppState, config: &ServerConfig) -> Result<()> {
        let addr = config.socket_addr()?;
        let router = create_router(state, config);

        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        info!("Web server listening on http://{}", addr);
        println!("Web server listening on http://{}", addr);

        axum::serve(listener, router).await?;

        Ok(())
    }
}
