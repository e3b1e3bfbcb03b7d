use clap::Parser;
use crossbeam_channel::{unbounded, Receiver};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{enable_raw_mode, EnterAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use wiki_quiz::models::ApiResponse;
use wiki_quiz::terminal::{restore_terminal, with_restore};
use wiki_quiz::{
    draw_app, logger, spawn_api_worker, App, AppError, Cli, Config, QuizApiClient,
};

const TICK: Duration = Duration::from_millis(100);

fn main() -> Result<(), AppError> {
    let config = Config::from_cli(Cli::parse())?;

    logger::init(&config.log_file, config.log_level).map_err(|source| AppError::Logger {
        path: config.log_file.display().to_string(),
        source,
    })?;
    log::info!("Starting wiki-quiz against {}", config.base_url);

    let backend = Arc::new(QuizApiClient::new(config.base_url.clone()));
    let base_url = backend.base_url().to_string();
    let (request_tx, request_rx) = unbounded();
    let (response_tx, response_rx) = unbounded();
    let worker = spawn_api_worker(backend, response_tx, request_rx)?;

    let mut app = App::new(base_url, config.start_tab, request_tx);

    enable_raw_mode()?;
    // Every exit from here on, including a failed setup, restores the terminal.
    let result = with_restore(|| run_terminal(&mut app, &response_rx), restore_terminal);

    // Dropping the app closes the request channel and lets the worker exit.
    drop(app);
    if worker.join().is_err() {
        log::error!("API worker panicked");
    }
    log::info!("Exiting");

    result
}

fn run_terminal(app: &mut App, responses: &Receiver<ApiResponse>) -> Result<(), AppError> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    run_app(&mut terminal, app, responses)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    responses: &Receiver<ApiResponse>,
) -> Result<(), AppError> {
    loop {
        while let Ok(response) = responses.try_recv() {
            app.handle_response(response);
        }

        terminal.draw(|f| draw_app(f, app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
