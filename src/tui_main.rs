use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use goon_score::{
    config::Settings,
    game::GamePhase,
    tui::{
        app::{InputMode, Screen},
        ui, App, Event as TuiEvent, EventHandler,
    },
};

pub fn run_tui(settings: &Settings) -> Result<()> {
    // Disable logging to prevent screen corruption
    disable_logging_output();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(settings);
    let events = EventHandler::new(settings.tui.tick_rate_ms);

    terminal.clear()?;

    let res = run_app(&mut terminal, &mut app, events);

    // Always restore terminal state, even if there was an error
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Application error: {}", err);
        Err(err)
    } else {
        Ok(())
    }
}

fn disable_logging_output() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

    let null_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::sink)
        .with_filter(tracing_subscriber::filter::LevelFilter::OFF);

    let _ = tracing_subscriber::registry()
        .with(null_layer)
        .try_init();
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: EventHandler,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, &*app))?;

        match events.next()? {
            TuiEvent::Key(key) => handle_key(app, key),
            TuiEvent::Tick(elapsed) => app.on_tick(elapsed),
            TuiEvent::Resize(_, _) => {
                // Terminal was resized, redraw will happen automatically
            }
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.current_screen {
        Screen::Calculator => match app.input_mode {
            InputMode::Normal => match key.code {
                KeyCode::Char('q') => app.should_quit = true,
                KeyCode::Up => app.move_selection_up(),
                KeyCode::Down | KeyCode::Tab => app.move_selection_down(),
                KeyCode::Enter | KeyCode::Char('e') => app.start_editing(),
                KeyCode::Char('c') => app.calculate(),
                KeyCode::Char('r') => app.reset_calculator(),
                KeyCode::Char('s') => app.open_share(),
                KeyCode::Char('g') => app.open_game(),
                _ => {}
            },
            InputMode::Editing => match key.code {
                KeyCode::Esc => app.cancel_editing(),
                KeyCode::Enter => app.commit_input(),
                KeyCode::Tab => app.commit_and_advance(),
                KeyCode::Char(c) => app.push_char(c),
                KeyCode::Backspace => {
                    app.current_input.pop();
                }
                _ => {}
            },
        },
        Screen::Game => match key.code {
            KeyCode::Char(' ') => {
                app.game_click();
            }
            KeyCode::Enter => {
                if matches!(app.game.phase(), GamePhase::Ready | GamePhase::Over) {
                    app.game.start();
                }
            }
            KeyCode::Char('p') => app.game.toggle_pause(),
            KeyCode::Char('r') => app.game.reset(),
            KeyCode::Char('u') => app.use_game_score(),
            KeyCode::Char('b') | KeyCode::Esc => app.back_to_calculator(),
            KeyCode::Char('q') => app.should_quit = true,
            _ => {}
        },
        Screen::Share => match key.code {
            KeyCode::Char('b') | KeyCode::Esc => app.back_to_calculator(),
            KeyCode::Char('q') => app.should_quit = true,
            _ => {}
        },
    }
}
