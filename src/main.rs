use anyhow::Result;
use pianocalc::app::action::Action;
use pianocalc::app::event::AppEvent;
use pianocalc::app::handler;
use pianocalc::app::state::AppState;
use pianocalc::logging::{self, TapeLogger};
use pianocalc::sound::SoundPlayer;
use pianocalc::{config, ui};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config, writing the defaults on first run so they can be edited
    let cfg = config::load_config()?;
    if !config::config_path().exists() {
        if let Err(e) = config::save_config(&cfg) {
            eprintln!("Warning: {:#}", e);
        }
    }

    logging::init_tracing(&cfg.logging)?;
    tracing::info!(sound = ?cfg.sound.mode, "starting pianocalc");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if cfg.ui.mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "exiting with error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut state = AppState::new(cfg.clone());
    let sound_player = SoundPlayer::new(&cfg.sound);
    let mut tape_logger = TapeLogger::new(&cfg.logging);

    let size = terminal.size()?;
    state.viewport = Rect::new(0, 0, size.width, size.height);

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
                Some(Err(e)) => {
                    tracing::warn!(error = %e, "terminal event stream failed");
                    break;
                }
                None => break,
            }
        }
    });

    // Spawn tick task (20 FPS = 50ms)
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_millis(50));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        // Drain new tape entries for logging
        let new_entries: Vec<_> = state.new_entries.drain(..).collect();
        for entry in &new_entries {
            tracing::debug!(calculation = %entry.calculation.describe(), "calculated");
            tape_logger.log_calculation(&entry.timestamp, &entry.calculation);
        }

        // Process actions
        for action in actions {
            match action {
                Action::PlaySound { key } => sound_player.play(key),
                Action::Quit => state.should_quit = true,
            }
        }

        if state.should_quit {
            tracing::info!("quitting");
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
