use cs_catalog::{Card, RegionNode};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};

/// Parse `#rrggbb` or `#rgb` into a terminal colour.
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#')?;
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();

    match hex.len() {
        6 => Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        3 => {
            let short = |i: usize| channel(i..i + 1).map(|v| v * 17);
            Some(Color::Rgb(short(0)?, short(1)?, short(2)?))
        }
        _ => None,
    }
}

pub fn card_lines(card: &Card) -> Vec<TextLine<'static>> {
    let mut lines = vec![TextLine::from(Span::styled(
        card.heading.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))];

    for line in &card.lines {
        let value_style = line
            .color
            .as_deref()
            .and_then(parse_hex_color)
            .map_or_else(Style::default, |color| Style::default().fg(color));

        lines.push(TextLine::from(vec![
            Span::styled(format!("  {}: ", line.label), Style::default().fg(Color::Gray)),
            Span::styled(line.value.clone(), value_style),
        ]));
    }

    lines.push(TextLine::from(Span::styled(
        format!("  {}", card.image.src),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));
    lines.push(TextLine::from(""));
    lines
}

pub fn node_lines(node: &RegionNode) -> Vec<TextLine<'static>> {
    match node {
        RegionNode::Card(card) => card_lines(card),
        RegionNode::Error { message } => vec![TextLine::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))],
    }
}
