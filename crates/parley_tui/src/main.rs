//! Terminal front-end for the parley conversation state machine.

use anyhow::Result;
use clap::Parser;
use parley_core::UserDirectory;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;
mod handler;
mod tui;
mod ui;

use app::App;
use tui::EventHandler;

#[derive(Parser)]
#[command(name = "parley")]
#[command(about = "A single-conversation chat mock-up for the terminal")]
struct Cli {
    /// Display name for the local user
    #[arg(long, default_value = "Justin")]
    name: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout belongs to the terminal UI.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .init();

    tracing::debug!(name = %cli.name, "starting parley");

    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let mut events = EventHandler::new();
    let mut app = App::new(UserDirectory::with_self_name(cli.name));

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&app, frame))?;
        match events.next().await {
            Some(event) => handler::handle_event(&mut app, event),
            None => break,
        }
    }

    tui::restore()?;
    Ok(())
}
