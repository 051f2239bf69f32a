//! BlogFrog terminal client
//!
//! ```sh
//! blogfrog --service-url http://localhost:8080 --open /add
//! BLOGFROG_LOG=/tmp/blogfrog.log RUST_LOG=debug blogfrog
//! ```

use std::io;
use std::sync::Arc;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::info;

use blogfrog_core::{BlogStore, HttpBlogApi};
use blogfrog_tui::cli::Args;
use blogfrog_tui::logging::init_file_logging;
use blogfrog_tui::{app, App, ChannelNavigator};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_file_logging(path)?;
    }

    let config = args.client_config()?;
    info!(service_url = %config.service_url, "Starting BlogFrog");
    let api = Arc::new(HttpBlogApi::new(config)?);

    let (ui_tx, ui_rx) = mpsc::unbounded_channel();
    let mut store = BlogStore::new(api.clone(), api, Arc::new(ChannelNavigator::new(ui_tx)));
    let mut app = App::new(args.open);

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app::run(&mut terminal, &mut store, &mut app, ui_rx).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
