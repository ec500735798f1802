use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fni_app::{DraftField, Session};
use fni_core::{Article, ArticlesApi, AssetClass, Sentiment};
use tokio::sync::mpsc;
use tracing::debug;

/// Result of a request that ran on a background task.
#[derive(Debug)]
pub enum Outcome {
    Loaded(fni_core::Result<Vec<Article>>),
    /// The create call of a submission.
    Created(fni_core::Result<()>),
    /// The reload that follows a successful create.
    Reloaded(fni_core::Result<Vec<Article>>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Title,
    Source,
    AssetClass,
    Sentiment,
    Content,
    Search,
    List,
}

impl Focus {
    const ORDER: [Focus; 7] = [
        Focus::Title,
        Focus::Source,
        Focus::AssetClass,
        Focus::Sentiment,
        Focus::Content,
        Focus::Search,
        Focus::List,
    ];

    fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    fn text_field(self) -> Option<DraftField> {
        match self {
            Focus::Title => Some(DraftField::Title),
            Focus::Source => Some(DraftField::Source),
            Focus::Content => Some(DraftField::Content),
            _ => None,
        }
    }
}

/// Steps an optional tag selection forward or back through
/// "unselected" followed by every variant.
fn cycle<T: Copy + PartialEq>(all: &[T], current: Option<T>, forward: bool) -> Option<T> {
    let slots = all.len() + 1;
    let index = match current {
        None => 0,
        Some(tag) => all.iter().position(|t| *t == tag).map_or(0, |i| i + 1),
    };
    let next = if forward {
        (index + 1) % slots
    } else {
        (index + slots - 1) % slots
    };
    if next == 0 {
        None
    } else {
        Some(all[next - 1])
    }
}

/// State of the interactive screen. Owns the session; requests run on
/// spawned tasks and come back as [`Outcome`]s.
pub struct App {
    pub session: Session,
    pub focus: Focus,
    pub cursor: usize,
    pub detail_scroll: u16,
    pub notice: Option<String>,
    pub should_quit: bool,
    api: Arc<dyn ArticlesApi>,
    outcomes: mpsc::UnboundedSender<Outcome>,
}

impl App {
    pub fn new(api: Arc<dyn ArticlesApi>, outcomes: mpsc::UnboundedSender<Outcome>) -> Self {
        Self {
            session: Session::new(),
            focus: Focus::Title,
            cursor: 0,
            detail_scroll: 0,
            notice: None,
            should_quit: false,
            api,
            outcomes,
        }
    }

    pub fn backend_name(&self) -> &str {
        self.api.name()
    }

    /// Starts a read unless one is already outstanding.
    pub fn start_load(&mut self) {
        if self.session.store.is_loading() {
            debug!("Reload ignored, a load is already in flight");
            return;
        }
        self.session.store.begin_load();
        let api = self.api.clone();
        let tx = self.outcomes.clone();
        tokio::spawn(async move {
            let result = api.list_articles().await;
            let _ = tx.send(Outcome::Loaded(result));
        });
    }

    pub fn start_submit(&mut self) {
        if self.session.form.is_submitting() {
            return;
        }
        let request = match self.session.form.begin_submit() {
            Ok(request) => request,
            Err(e) => {
                self.notice = Some(e.to_string());
                return;
            }
        };
        let api = self.api.clone();
        let tx = self.outcomes.clone();
        tokio::spawn(async move {
            let created = api.create_article(&request).await;
            let reload = created.is_ok();
            let _ = tx.send(Outcome::Created(created));
            if reload {
                let _ = tx.send(Outcome::Reloaded(api.list_articles().await));
            }
        });
    }

    pub fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Loaded(result) => {
                let _ = self.session.apply_load(result);
            }
            Outcome::Created(result) => {
                if let Err(e) = self.session.apply_created(result) {
                    self.notice = Some(e.to_string());
                }
            }
            Outcome::Reloaded(result) => {
                let _ = self.session.apply_reload(result);
            }
        }
        self.clamp_cursor();
    }

    fn visible_len(&self) -> usize {
        self.session.list_view().rows.len()
    }

    fn clamp_cursor(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    fn open_at_cursor(&mut self) {
        let picked = self
            .session
            .list_view()
            .rows
            .get(self.cursor)
            .map(|row| row.article.clone());
        if let Some(article) = picked {
            debug!("Opening article {}", article.id);
            self.session.select(&article);
            self.detail_scroll = 0;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.notice.is_some() {
            self.notice = None;
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('s') if ctrl => {
                self.start_submit();
                return;
            }
            KeyCode::Char('r') if ctrl => {
                self.start_load();
                return;
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return;
            }
            KeyCode::Esc => {
                if self.session.selection.current().is_some() {
                    self.session.selection.clear();
                } else {
                    self.should_quit = true;
                }
                return;
            }
            KeyCode::PageDown => {
                self.detail_scroll = self.detail_scroll.saturating_add(5);
                return;
            }
            KeyCode::PageUp => {
                self.detail_scroll = self.detail_scroll.saturating_sub(5);
                return;
            }
            _ => {}
        }

        if let Some(field) = self.focus.text_field() {
            self.edit_field(field, key);
            return;
        }

        match self.focus {
            Focus::AssetClass => self.pick_tag(key, |app, forward| {
                let next = cycle(AssetClass::ALL, app.session.form.draft().asset_class, forward);
                app.session.form.set_asset_class(next);
            }),
            Focus::Sentiment => self.pick_tag(key, |app, forward| {
                let next = cycle(Sentiment::ALL, app.session.form.draft().sentiment, forward);
                app.session.form.set_sentiment(next);
            }),
            Focus::Search => self.edit_search(key),
            Focus::List => self.navigate(key),
            _ => {}
        }
    }

    fn pick_tag(&mut self, key: KeyEvent, step: impl Fn(&mut Self, bool)) {
        match key.code {
            KeyCode::Right | KeyCode::Char(' ') => step(self, true),
            KeyCode::Left => step(self, false),
            KeyCode::Enter => self.start_submit(),
            _ => {}
        }
    }

    fn edit_field(&mut self, field: DraftField, key: KeyEvent) {
        let mut value = self.session.form.draft().field(field).to_string();
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => value.push(c),
            KeyCode::Backspace => {
                value.pop();
            }
            KeyCode::Enter if field == DraftField::Content => value.push('\n'),
            KeyCode::Enter => {
                self.start_submit();
                return;
            }
            _ => return,
        }
        self.session.form.update_field(field, value);
    }

    fn edit_search(&mut self, key: KeyEvent) {
        let mut term = self.session.search().to_string();
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => term.push(c),
            KeyCode::Backspace => {
                term.pop();
            }
            KeyCode::Enter | KeyCode::Down => {
                self.focus = Focus::List;
                return;
            }
            _ => return,
        }
        self.session.set_search(term);
        self.cursor = 0;
    }

    fn navigate(&mut self, key: KeyEvent) {
        let len = self.visible_len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < len {
                    self.cursor += 1;
                }
            }
            KeyCode::Enter => self.open_at_cursor(),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }
}
