pub mod button;
pub mod field;
pub mod hud;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;

pub fn render(frame: &mut Frame, app: &mut App) {
    let paused = app.game.is_paused(app.elapsed());
    let game = &app.game;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(80, 255, 80)))
        .title(format!(" {} ", game.settings.name))
        .title_style(Style::default().fg(Color::Rgb(100, 255, 100)).add_modifier(Modifier::BOLD));

    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // HUD
            Constraint::Min(4),    // Playfield
            Constraint::Length(1), // Help
        ])
        .split(inner);

    hud::render_hud(frame, chunks[0], &game.stats, game.ship.powerup_active());

    let field_area = chunks[1];
    if field_area.width > 0 && field_area.height > 0 {
        let lines = field::render_field(game, field_area.width as usize, field_area.height as usize);
        frame.render_widget(Paragraph::new(lines), field_area);
        if !game.game_active {
            button::render_button(frame, field_area, game, "Play");
        }
    }

    render_help(frame, chunks[2], game.game_active, paused);

    app.field_area = Some(field_area);
}

fn render_help(frame: &mut Frame, area: Rect, active: bool, paused: bool) {
    let key = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::DarkGray);
    let sep = Style::default().fg(Color::Rgb(60, 60, 60));

    let line = if !active {
        Line::from(vec![
            Span::styled(" Click ", dim),
            Span::styled("Play", key),
            Span::styled(" or press ", dim),
            Span::styled("Enter", key),
            Span::styled(" to start ", dim),
            Span::styled("| ", sep),
            Span::styled("Q Quit", dim),
        ])
    } else if paused {
        Line::from(vec![
            Span::styled(" SHIP LOST! ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::styled("Regrouping...", dim),
        ])
    } else {
        Line::from(vec![
            Span::styled(" \u{2191}\u{2193} Move ", dim),
            Span::styled("| ", sep),
            Span::styled("Space Fire ", key),
            Span::styled("| ", sep),
            Span::styled("Q Quit", dim),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);
}
