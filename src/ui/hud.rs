use ratatui::prelude::*;
use ratatui::widgets::*;

use alien_invasion::stats::GameStats;

const LIFE_GLYPH: &str = "\u{25b6} ";

/// `1234567` -> `1,234,567`
pub fn format_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Lives and level on the left, hi-score in the middle, session best and
/// current score on the right.
pub fn render_hud(frame: &mut Frame, area: Rect, stats: &GameStats, boosted: bool) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let text = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let label = Style::default().fg(Color::Rgb(160, 160, 180));

    let mut level_line = vec![
        Span::styled(" Level: ", label),
        Span::styled(format_thousands(stats.level), text),
    ];
    if boosted {
        level_line.push(Span::styled(
            "  RAPID FIRE",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ));
    }
    let left = vec![
        Line::from(Span::styled(
            format!(" {}", LIFE_GLYPH.repeat(stats.ships_left as usize)),
            Style::default().fg(Color::Rgb(80, 255, 80)).add_modifier(Modifier::BOLD),
        )),
        Line::from(level_line),
    ];
    frame.render_widget(Paragraph::new(left), cols[0]);

    let centre = Line::from(vec![
        Span::styled("Hi-Score: ", label),
        Span::styled(format_thousands(stats.hi_score), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    ]);
    frame.render_widget(Paragraph::new(centre).alignment(Alignment::Center), cols[1]);

    let right = vec![
        Line::from(vec![
            Span::styled("Max-Score: ", label),
            Span::styled(format_thousands(stats.max_score), text),
            Span::raw(" "),
        ]),
        Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(format_thousands(stats.score), Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw(" "),
        ]),
    ];
    frame.render_widget(Paragraph::new(right).alignment(Alignment::Right), cols[2]);
}
