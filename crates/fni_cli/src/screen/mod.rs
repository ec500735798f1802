pub mod app;
pub mod ui;

use std::io::{self, Stdout};
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fni_core::ArticlesApi;
use futures::StreamExt;
use tokio::sync::mpsc;
use tracing::info;
use tui::{backend::CrosstermBackend, Terminal};

use app::App;

type Term = Terminal<CrosstermBackend<Stdout>>;

fn setup_terminal() -> Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Runs the interactive screen until the user quits.
pub async fn run(api: Arc<dyn ArticlesApi>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, api).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn event_loop(terminal: &mut Term, api: Arc<dyn ArticlesApi>) -> Result<()> {
    let (tx, mut outcomes) = mpsc::unbounded_channel();
    let mut app = App::new(api, tx);
    let mut events = EventStream::new();

    info!("Starting interactive session ({} backend)", app.backend_name());
    app.start_load();

    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, &app))?;

        tokio::select! {
            Some(outcome) = outcomes.recv() => app.apply(outcome),
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
        }
    }
    Ok(())
}
