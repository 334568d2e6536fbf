use crate::app::App;
use crate::ui::widgets::cards::node_lines;
use crate::ui::widgets::tables::scroll_offset;
use cs_catalog::Category;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_catalog(app: &App, f: &mut Frame<'_>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(6),    // Categories + results
            Constraint::Length(3), // Status
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    render_title(f, layout[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(20)])
        .split(layout[1]);

    render_categories(app, f, body[0]);
    render_results(app, f, body[1]);
    render_status(app, f, layout[2]);
    render_shortcuts(f, layout[3]);
}

fn render_title(f: &mut Frame<'_>, area: Rect) {
    let title = Paragraph::new(TextLine::from(vec![
        Span::styled(
            "CS ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Item Catalog",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    )
    .alignment(Alignment::Left);

    f.render_widget(title, area);
}

fn render_categories(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Categories ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let visible_rows = area.height.saturating_sub(2) as usize;
    let offset = scroll_offset(Category::ALL.len(), visible_rows, app.selected_index);

    let lines: Vec<TextLine<'_>> = Category::ALL
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_rows)
        .map(|(i, category)| {
            let key = (i + 1) % 10;
            let marker = if app.shown == Some(*category) { "*" } else { " " };
            let text = format!("{key} {marker}{}", category.label());
            let style = if i == app.selected_index {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            TextLine::from(Span::styled(text, style))
        })
        .collect();

    f.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}

fn render_results(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title = app.shown.map_or_else(
        || " Results ".to_string(),
        |category| format!(" {} ({}) ", category.label(), app.region.len()),
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    if app.region.is_empty() {
        let message = if app.shown.is_some() {
            "No items in this category."
        } else {
            "Nothing loaded yet."
        };
        let paragraph = Paragraph::new(message)
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, area);
        return;
    }

    let lines: Vec<TextLine<'static>> = app
        .region
        .nodes()
        .iter()
        .skip(app.scroll)
        .flat_map(node_lines)
        .take(area.height as usize)
        .collect();

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let mut spans = vec![Span::styled(
        app.status_message.clone(),
        Style::default().fg(Color::White),
    )];
    if app.is_loading() {
        spans.push(Span::styled(
            format!("  [{} in flight]", app.in_flight),
            Style::default().fg(Color::Yellow),
        ));
    }

    let status = Paragraph::new(TextLine::from(spans)).block(
        Block::default()
            .title(" Status ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray)),
    );
    f.render_widget(status, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let key = Style::default().fg(Color::Yellow);
    let text = Style::default().fg(Color::Gray);
    let hint = TextLine::from(vec![
        Span::styled("↑↓", key),
        Span::styled(" select  ", text),
        Span::styled("Enter/0-9", key),
        Span::styled(" fetch  ", text),
        Span::styled("PgUp/PgDn", key),
        Span::styled(" scroll  ", text),
        Span::styled("?", key),
        Span::styled(" help  ", text),
        Span::styled("q", key),
        Span::styled(" quit", text),
    ]);
    f.render_widget(Paragraph::new(hint).alignment(Alignment::Center), area);
}
