//! archguide — tabbed terminal viewer for enterprise microservices reference
//! architecture.
//!
//! Sections:
//! 1. Overview — principles, technology stack, reference layers
//! 2. Security — four expandable security layers
//! 3. Scalability — scaling strategies, monitoring
//! 4. Compliance — frameworks, auditability
//! 5. Maintainability — CI/CD, observability, documentation
//! 6. Implementation — service stack, infrastructure

use std::io::{self, stdout};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{error, info};

use archguide_tui::app::App;
use archguide_tui::config::{ViewerArgs, ViewerConfig};
use archguide_tui::{input, logging, ui};

fn main() -> Result<()> {
    let config = ViewerConfig::from(ViewerArgs::parse());
    logging::init_logging(&config)?;
    info!(
        log_file = %config.log_file.display(),
        mouse = config.mouse,
        section = %config.start_section,
        "starting archguide"
    );

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), DisableMouseCapture, LeaveAlternateScreen);
        error!(%info, "panic");
        default_hook(info);
    }));

    let mut app = App::builtin();
    app.select_section(config.start_section);
    app.set_status("? for keys");

    // Setup terminal
    enable_raw_mode()?;
    let mut terminal = setup_or_restore(
        || setup_terminal(config.mouse),
        || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        },
    )?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);
    if let Err(err) = &result {
        error!(%err, "event loop failed");
    }

    // Restore terminal
    disable_raw_mode()?;
    if config.mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("archguide exited");
    result
}

/// Run `setup`; if it fails, run `restore` before handing the error back.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce(),
) -> Result<T> {
    setup().map_err(|err| {
        error!(%err, "terminal setup failed");
        restore();
        err
    })
}

/// Enter the alternate screen (and mouse capture) once raw mode is on.
fn setup_terminal(mouse: bool) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok(terminal)
}

/// One event is read, applied and redrawn before the next one is read.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        // 1. Render, keeping the regions this frame made clickable.
        let mut hits = ui::HitMap::default();
        terminal.draw(|f| hits = ui::draw(f, app))?;
        app.frame_drawn(hits);

        // 2. Check quit
        if !app.running {
            break;
        }

        // 3. Block for the next input event.
        match event::read()? {
            Event::Key(key) => input::handle_key(app, key),
            Event::Mouse(mouse) => input::handle_mouse(app, mouse),
            // Resize and focus changes only need the redraw above.
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let result: Result<()> = setup_or_restore(
            || Err(anyhow::anyhow!("no alternate screen")),
            || restored.set(true),
        );
        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn successful_setup_leaves_terminal_alone() {
        let restored = Cell::new(false);
        let value = setup_or_restore(|| Ok(7), || restored.set(true)).unwrap();
        assert_eq!(value, 7);
        assert!(!restored.get());
    }
}
