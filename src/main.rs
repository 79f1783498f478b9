//! Hello Shell Server
//!
//! Entry point: loads configuration, resolves the theme and serves the page.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::sync::Arc;

use dotenvy::dotenv;
use hello_shell::config::AppConfig;
use hello_shell::error::AppError;
use hello_shell::server::start_server;
use hello_shell::telemetry;
use hello_shell::theme::Theme;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", AppError::from(e));
            std::process::exit(1);
        }
    };

    // Initialize tracing (M-LOG-STRUCTURED)
    telemetry::init(&config.telemetry);

    let theme = Theme::resolve(&config.theme).map_err(AppError::from)?;

    start_server(Arc::new(config), Arc::new(theme)).await
}
