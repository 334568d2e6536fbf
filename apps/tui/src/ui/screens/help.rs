use crate::ui::widgets::popup::centered_rect;
use cs_catalog::Category;
use ratatui::layout::{Alignment, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_help_popup(f: &mut Frame<'_>) {
    let popup_area = centered_rect(70, 80, f.area().inner(Margin::new(2, 1)));
    f.render_widget(Clear, popup_area);

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let help_paragraph = Paragraph::new(Text::from(build_help_lines()))
        .block(help_block)
        .wrap(Wrap { trim: true });
    f.render_widget(help_paragraph, popup_area);

    let hint = Paragraph::new(TextLine::from(Span::styled(
        "Press ? or Esc to close",
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Center);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: 1,
    };
    f.render_widget(hint, hint_area);
}

fn shortcut(key: &'static str, description: &'static str) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(
            format!("  {key:<10}"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(description),
    ])
}

fn build_help_lines() -> Vec<TextLine<'static>> {
    let mut lines = vec![
        TextLine::from(Span::styled(
            "CS Item Catalog",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from("Each fetch replaces the results pane. Only the newest request is shown."),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Keyboard Shortcuts:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        shortcut("↑/↓ j/k", "Move through categories"),
        shortcut("Enter", "Fetch the selected category"),
        shortcut("PgUp/PgDn", "Scroll results"),
        shortcut("Home", "Back to the first result"),
        shortcut("?", "Toggle this help popup"),
        shortcut("q/Esc", "Quit"),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Categories:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    lines.extend(Category::ALL.iter().enumerate().map(|(i, category)| {
        TextLine::from(vec![
            Span::styled(
                format!("  {:<10}", (i + 1) % 10),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(format!("{} ({})", category.label(), category.endpoint())),
        ])
    }));

    lines
}
