mod app;
mod event;
mod ui;

use std::io::{self, Write};

use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use log::{error, info};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use app::App;
use event::{Event, EventHandler};

fn main() -> io::Result<()> {
    if let Err(e) = simple_logging::log_to_file("alien_invasion.log", log::LevelFilter::Info) {
        eprintln!("Logging disabled: {}", e);
    }
    info!("Starting Alien Invasion");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Key releases let the ship stop the moment an arrow key is let go.
    let release_events = supports_keyboard_enhancement().unwrap_or(false)
        && execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )
        .is_ok();

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run(&mut terminal, release_events);

    // Restore terminal
    if release_events {
        let _ = execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags);
    }
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!("Exited with error: {}", e);
    }
    info!("Goodbye");
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, release_events: bool) -> io::Result<()> {
    let mut app = App::new(release_events);
    let event_handler = EventHandler::new(app.tick_rate());

    loop {
        terminal.draw(|frame| ui::render(frame, &mut app))?;

        match event_handler.next()? {
            Event::Tick => app.on_tick(),
            Event::Key(key) => app.on_key(key),
            Event::Click { column, row } => app.on_click(column, row),
        }

        if !app.drain_cues().is_empty() {
            // Terminal bell stands in for the laser and impact sounds.
            let backend = terminal.backend_mut();
            backend.write_all(b"\x07")?;
            backend.flush()?;
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
