use ratatui::prelude::*;
use ratatui::widgets::*;

use alien_invasion::invasion::AlienInvasion;

/// Draws the game's button rectangle, projected from world units into the
/// playfield area, with `msg` centred on it.
pub fn render_button(frame: &mut Frame, field: Rect, game: &AlienInvasion, msg: &str) {
    let button = game.play_button();
    let sx = field.width as f32 / game.settings.screen_w as f32;
    let sy = field.height as f32 / game.settings.screen_h as f32;

    let x = (button.left() as f32 * sx) as u16;
    let y = (button.top() as f32 * sy) as u16;
    let w = ((button.w as f32 * sx).round() as u16).max(msg.chars().count() as u16 + 2);
    let h = ((button.h as f32 * sy).round() as u16).max(1);
    let area = Rect::new(field.x + x, field.y + y, w, h).intersection(field);
    if area.width == 0 || area.height == 0 { return; }

    let style = Style::default()
        .bg(Color::Rgb(0, 135, 50))
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    frame.render_widget(Clear, area);

    let mut lines = vec![Line::from(""); (area.height.saturating_sub(1) / 2) as usize];
    lines.push(Line::from(msg.to_string()));
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).style(style),
        area,
    );
}
