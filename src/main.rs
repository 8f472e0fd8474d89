use snaplens::app::App;
use snaplens::cli::{parse_args, run_cli_command};
use snaplens::startup::{init_logging, Config};
use snaplens::terminal::{setup_panic_hook, TerminalManager};
use snaplens::ui;

use color_eyre::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;

fn main() -> Result<()> {
    color_eyre::install()?;

    // --version and --help are answered before the terminal is touched
    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", e.user_message());
            std::process::exit(2);
        }
    };
    let Some(run_args) = run_cli_command(command) else {
        return Ok(());
    };

    let config = Config::from_env().with_run_args(run_args);
    init_logging(&config)?;

    // Load before entering TUI mode so a bad file is reported on a normal screen
    let mut app = match App::from_config(&config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, category = %e.category(), "startup failed");
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    };

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let mut term_manager = TerminalManager::new()?;
    let result = runtime.block_on(run_app(term_manager.terminal(), &mut app, &config));
    term_manager.restore()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "event loop failed");
    }
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, config: &Config) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let tick_rate = Duration::from_millis(config.tick_rate_ms);

    loop {
        // Draw only when state changed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        let timeout = tokio::time::sleep(tick_rate);

        tokio::select! {
            _ = timeout => {}

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(event)) => app.handle_event(event),
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }
        }
    }
}
