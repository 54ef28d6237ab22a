mod app;
mod cli;
mod config;
mod logging;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::{self, Write};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Load config, then let flags override it
    let mut cfg = config::load_config(cli.config.as_deref())?;
    cli.apply(&mut cfg);

    if cli.write_config {
        let path = config::save_config(&cfg, cli.config.as_deref())?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    if let Some(path) = logging::init(&cfg.logging)? {
        tracing::info!(log = %path.display(), "timepick starting");
    }

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    match result {
        Ok(selected) if selected.is_empty() => std::process::exit(1),
        Ok(selected) => {
            let mut out = io::stdout().lock();
            for time in selected {
                writeln!(out, "{}", time)?;
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "timepick failed");
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Drive the picker until the user quits. Returns every confirmed time.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<Vec<String>> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    // Confirmed times come back through the event channel
    let sink_tx = event_tx.clone();
    let sink = move |time: &str| {
        let _ = sink_tx.send(AppEvent::TimeSelected(time.to_string()));
    };
    let mut state = AppState::new(cfg, sink);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task for the clock (4 Hz)
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_millis(250));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });
    drop(event_tx);

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        for action in handler::handle_event(&mut state, event) {
            match action {
                Action::Quit => state.should_quit = true,
                Action::Bell => {
                    let _ = io::stdout().write_all(b"\x07");
                    let _ = io::stdout().flush();
                }
            }
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(state.selected_times)
}
