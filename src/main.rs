use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use quiz_platform::{handle_key_event, logger, App, Config, FeedbackTicket, FeedbackTimer};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tokio::sync::mpsc;

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

#[tokio::main]
async fn main() -> io::Result<()> {
    let config = Config::from_env();
    if let Some(path) = &config.log_file
        && let Err(e) = logger::init(path)
    {
        eprintln!("Could not open log file {}: {}", path.display(), e);
    }
    logger::log("Starting quiz platform");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        logger::log(&format!("Exiting with error: {}", e));
    } else {
        logger::log("Exiting");
    }
    result
}

async fn run(terminal: &mut Tui, config: &Config) -> io::Result<()> {
    let (timer_tx, mut timer_rx) = mpsc::unbounded_channel::<FeedbackTicket>();
    let mut app = App::new(FeedbackTimer::new(timer_tx));
    let mut events = EventStream::new();
    let mut tick = tokio::time::interval(config.tick);

    while !app.should_quit {
        terminal.draw(|f| quiz_platform::draw(f, &app))?;

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) => handle_key_event(&mut app, key),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e),
                None => break,
            },
            Some(ticket) = timer_rx.recv() => app.on_feedback_elapsed(ticket),
            _ = tick.tick() => {}
        }
    }

    Ok(())
}
