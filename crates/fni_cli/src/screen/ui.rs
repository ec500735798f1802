use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::app::{App, Focus};

const ACCENT: Color = Color::Rgb(79, 70, 229);
const MUTED: Color = Color::Gray;
const ERROR: Color = Color::Rgb(249, 115, 115);

fn block<'a>(title: &'a str, focused: bool) -> Block<'a> {
    let style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED)
    };
    Block::default().title(title).borders(Borders::ALL).border_style(style)
}

pub fn draw<B: Backend>(f: &mut Frame<B>, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(10), Constraint::Length(1)])
        .split(f.size());

    let header = Paragraph::new(vec![
        Spans::from(Span::styled(
            "Financial News Intelligence",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Spans::from(Span::styled(
            "Paste financial news, save it, and review concise summaries.",
            Style::default().fg(MUTED),
        )),
    ]);
    f.render_widget(header, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    draw_form(f, app, columns[0]);
    draw_articles(f, app, columns[1]);

    let help = Paragraph::new(Spans::from(Span::styled(
        format!(
            "Tab/Shift-Tab move  Ctrl-S submit  Ctrl-R reload  Enter open  Esc close/quit  [{}]",
            app.backend_name()
        ),
        Style::default().fg(MUTED),
    )));
    f.render_widget(help, rows[2]);

    if let Some(notice) = &app.notice {
        draw_notice(f, notice);
    }
}

fn draw_form<B: Backend>(f: &mut Frame<B>, app: &App, area: Rect) {
    let draft = app.session.form.draft();
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(draft.title.as_str()).block(block("Title *", app.focus == Focus::Title)),
        parts[0],
    );
    f.render_widget(
        Paragraph::new(draft.source.as_str()).block(block("Source", app.focus == Focus::Source)),
        parts[1],
    );

    let asset = draft
        .asset_class
        .map(|t| format!("< {} >", t.label()))
        .unwrap_or_else(|| "< Select asset class >".to_string());
    f.render_widget(
        Paragraph::new(asset).block(block("Asset Class", app.focus == Focus::AssetClass)),
        parts[2],
    );

    let sentiment = draft
        .sentiment
        .map(|t| format!("< {} >", t.label()))
        .unwrap_or_else(|| "< Select sentiment >".to_string());
    f.render_widget(
        Paragraph::new(sentiment).block(block("Sentiment", app.focus == Focus::Sentiment)),
        parts[3],
    );

    f.render_widget(
        Paragraph::new(draft.content.as_str())
            .wrap(Wrap { trim: false })
            .block(block("Full article content *", app.focus == Focus::Content)),
        parts[4],
    );

    let button = if app.session.form.is_submitting() {
        Span::styled("Submitting...", Style::default().fg(MUTED))
    } else {
        Span::styled(
            "[ Submit Article ]",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )
    };
    f.render_widget(Paragraph::new(Spans::from(button)), parts[5]);
}

fn draw_articles<B: Backend>(f: &mut Frame<B>, app: &App, area: Rect) {
    let detail = app.session.detail_view();
    let mut constraints = vec![Constraint::Length(3), Constraint::Min(6)];
    if detail.is_some() {
        constraints = vec![
            Constraint::Length(3),
            Constraint::Percentage(40),
            Constraint::Percentage(60),
        ];
    }
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let search = if app.session.search().is_empty() && app.focus != Focus::Search {
        Span::styled("Search by title, source, or summary...", Style::default().fg(MUTED))
    } else {
        Span::raw(app.session.search())
    };
    f.render_widget(
        Paragraph::new(Spans::from(search)).block(block("Search", app.focus == Focus::Search)),
        parts[0],
    );

    let view = app.session.list_view();
    let mut lines: Vec<Spans> = view
        .notices()
        .into_iter()
        .map(|notice| {
            let color = if Some(notice) == view.error { ERROR } else { MUTED };
            Spans::from(Span::styled(notice, Style::default().fg(color)))
        })
        .collect();

    let items: Vec<ListItem> = view
        .rows
        .iter()
        .map(|row| {
            let mut title_style = Style::default().add_modifier(Modifier::BOLD);
            if app.session.selection.is_selected(&row.article.id) {
                title_style = title_style.fg(ACCENT);
            }
            let mut text = Text::from(Spans::from(Span::styled(row.article.title.as_str(), title_style)));
            text.extend(Text::styled(row.meta.clone(), Style::default().fg(MUTED)));
            if !row.tags.is_empty() {
                text.extend(Text::styled(row.tags.clone(), Style::default().fg(MUTED)));
            }
            text.extend(Text::raw(format!("Summary: {}", row.summary)));
            text.extend(Text::raw(""));
            ListItem::new(text)
        })
        .collect();

    let list_block = block("Articles", app.focus == Focus::List);
    if items.is_empty() {
        if lines.is_empty() {
            lines.push(Spans::from(""));
        }
        f.render_widget(Paragraph::new(lines).block(list_block), parts[1]);
    } else {
        let mut state = ListState::default();
        state.select(Some(app.cursor));
        let title = match view.notices().first() {
            Some(notice) => format!("Articles ({})", notice),
            None => format!("Articles ({})", view.rows.len()),
        };
        let list = List::new(items)
            .block(list_block.title(title))
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, parts[1], &mut state);
    }

    if let Some(detail) = detail {
        let mut text = Text::from(Spans::from(Span::styled(
            detail.title,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        text.extend(Text::styled(detail.meta.clone(), Style::default().fg(MUTED)));
        if !detail.tags.is_empty() {
            text.extend(Text::styled(detail.tags.clone(), Style::default().fg(MUTED)));
        }
        text.extend(Text::raw(""));
        text.extend(Text::styled("Summary:", Style::default().add_modifier(Modifier::BOLD)));
        text.extend(Text::raw(detail.summary));
        text.extend(Text::raw(""));
        text.extend(Text::styled("Full Article:", Style::default().add_modifier(Modifier::BOLD)));
        text.extend(Text::raw(detail.content));

        let paragraph = Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .scroll((app.detail_scroll, 0))
            .block(block("Article (Esc to close)", false));
        f.render_widget(paragraph, parts[2]);
    }
}

fn draw_notice<B: Backend>(f: &mut Frame<B>, notice: &str) {
    let area = centered(f.size(), 50, 5);
    f.render_widget(Clear, area);
    let paragraph = Paragraph::new(vec![
        Spans::from(notice),
        Spans::from(""),
        Spans::from(Span::styled("Press any key", Style::default().fg(MUTED))),
    ])
    .wrap(Wrap { trim: true })
    .block(block("Notice", true));
    f.render_widget(paragraph, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
