//! deskcalc: two-line desk calculator
//!
//! ## Usage
//!
//! ```bash
//! deskcalc                      # interactive, click the keypad
//! deskcalc --keys "42+8="       # print the display after those keys
//! deskcalc --log-file calc.log  # interactive, with logs
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use deskcalc::{
    cli::Cli,
    error::AppResult,
    logging, replay,
    tui::{keypad_area, render, CalculatorApp, InputAction, InputHandler, KeypadWidget},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::info;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let config = cli.to_config();
    logging::init(&config)?;

    match &config.keys {
        Some(seq) => run_scripted(seq),
        None => run_interactive(),
    }
}

fn run_scripted(seq: &str) -> AppResult<()> {
    let state = replay::replay(seq)?;
    println!("{}", state.display());
    match state.last_error {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

fn run_interactive() -> AppResult<()> {
    info!("starting interactive session");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_app(&mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("session ended");
    result
}

/// Handle a single input action
fn handle_action(app: &mut CalculatorApp, action: InputAction, screen: Rect) {
    match action {
        InputAction::Click { x, y } => {
            if let Some(index) = KeypadWidget::hit_test(keypad_area(screen), x, y) {
                app.press_button(index);
            }
        }
        InputAction::Release => app.release(),
        InputAction::Quit => app.quit(),
        InputAction::None => {}
    }
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>) -> AppResult<()> {
    let mut app = CalculatorApp::new();
    let input_handler = InputHandler::new();

    while !app.should_quit() {
        let frame = terminal.draw(|f| render(&app, f))?;
        let screen = frame.area;

        let event = event::read()?;
        handle_action(&mut app, input_handler.handle_event(&event), screen);
    }

    Ok(())
}
