//! Surfview - a terminal-based explorer for surfaces of two-variable functions.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use surfview::app::App;
use surfview::ui;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "surfview")]
#[command(about = "A terminal-based explorer for surfaces of two-variable functions", long_about = None)]
struct Args {
    /// Expression to plot at startup, e.g. "sin(0.5*x*y)"
    expression: Option<String>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Surfview");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(args.expression.as_deref())?;
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Surfview exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Info panel - handle separately
                if app.help.is_open() {
                    match (key.modifiers, key.code) {
                        (KeyModifiers::NONE, KeyCode::Esc)
                        | (KeyModifiers::NONE, KeyCode::Char('q'))
                        | (KeyModifiers::NONE, KeyCode::Char('i')) => {
                            app.toggle_help();
                        }
                        (KeyModifiers::NONE, KeyCode::Down)
                        | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                            app.help.scroll_down(1);
                        }
                        (KeyModifiers::NONE, KeyCode::Up)
                        | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                            app.help.scroll_up(1);
                        }
                        _ => {}
                    }
                    continue;
                }

                // Input mode - handle separately
                if app.input.is_active() {
                    match key.code {
                        KeyCode::Enter => app.submit_input(),
                        KeyCode::Esc => app.input.cancel(),
                        KeyCode::Backspace => app.input.backspace(),
                        KeyCode::Char(c) => app.input.input(c),
                        _ => {}
                    }
                    continue;
                }

                // Normal mode
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

                    // Probe movement; the y axis points up, so Up/k raises y.
                    (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                        app.move_probe(1, 0);
                    }
                    (KeyModifiers::NONE, KeyCode::Down)
                    | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                        app.move_probe(-1, 0);
                    }
                    (KeyModifiers::NONE, KeyCode::Left)
                    | (KeyModifiers::NONE, KeyCode::Char('h')) => {
                        app.move_probe(0, -1);
                    }
                    (KeyModifiers::NONE, KeyCode::Right)
                    | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                        app.move_probe(0, 1);
                    }

                    // Large probe jumps
                    (KeyModifiers::CONTROL, KeyCode::Char('u'))
                    | (KeyModifiers::NONE, KeyCode::PageUp) => {
                        app.move_probe(10, 0);
                    }
                    (KeyModifiers::CONTROL, KeyCode::Char('d'))
                    | (KeyModifiers::NONE, KeyCode::PageDown) => {
                        app.move_probe(-10, 0);
                    }

                    // Expression editing
                    (KeyModifiers::NONE, KeyCode::Char('/'))
                    | (KeyModifiers::NONE, KeyCode::Char('e')) => {
                        app.start_input();
                    }

                    // Features
                    (KeyModifiers::NONE, KeyCode::Char('i')) => {
                        app.toggle_help();
                    }
                    (KeyModifiers::NONE, KeyCode::Char('c')) => {
                        app.cycle_palette();
                    }
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                        app.cycle_theme();
                    }

                    // Clipboard
                    (KeyModifiers::NONE, KeyCode::Char('y')) => {
                        app.copy_expression();
                    }
                    (KeyModifiers::SHIFT, KeyCode::Char('Y')) => {
                        app.copy_probe_readout();
                    }

                    // Escape - close overlays
                    (KeyModifiers::NONE, KeyCode::Esc) => {
                        app.close_overlay();
                    }

                    _ => {}
                }
            }
        }
    }
}
