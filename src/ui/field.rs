use std::collections::HashMap;

use ratatui::prelude::*;

use alien_invasion::geometry::Hitbox;
use alien_invasion::invasion::AlienInvasion;

type DotMap = HashMap<(usize, usize), u8>;

/// Projection of world units onto the braille dot grid of the field.
struct Canvas {
    bw: i32,
    bh: i32,
    sx: f32,
    sy: f32,
}

impl Canvas {
    fn new(w: usize, h: usize, world_w: i32, world_h: i32) -> Self {
        let bw = (w * 2) as i32;
        let bh = (h * 4) as i32;
        Canvas {
            bw,
            bh,
            sx: bw as f32 / world_w as f32,
            sy: bh as f32 / world_h as f32,
        }
    }

    /// Dot-space bounds of a hitbox, at least one dot in each direction.
    fn project(&self, r: &Hitbox) -> (i32, i32, i32, i32) {
        let x0 = (r.left() as f32 * self.sx) as i32;
        let y0 = (r.top() as f32 * self.sy) as i32;
        let x1 = ((r.right() as f32 * self.sx) as i32).max(x0 + 1);
        let y1 = ((r.bottom() as f32 * self.sy) as i32).max(y0 + 1);
        (x0, y0, x1, y1)
    }

    fn set_dot(&self, map: &mut DotMap, bx: i32, by: i32) {
        if bx < 0 || by < 0 || bx >= self.bw || by >= self.bh { return; }
        let cx = bx as usize / 2;
        let cy = by as usize / 4;
        *map.entry((cx, cy)).or_insert(0) |= braille_bit(bx as usize % 2, by as usize % 4);
    }

    /// Alien: a block with the corners knocked off and two eye holes.
    fn alien(&self, map: &mut DotMap, r: &Hitbox) {
        let (x0, y0, x1, y1) = self.project(r);
        let (w, h) = (x1 - x0, y1 - y0);
        for y in y0..y1 {
            for x in x0..x1 {
                let corner = w > 2 && h > 2
                    && (x == x0 || x == x1 - 1)
                    && (y == y0 || y == y1 - 1);
                let eye = w > 3 && h > 3
                    && y == y0 + h / 3
                    && (x == x0 + w / 4 || x == x1 - 1 - w / 4);
                if !corner && !eye {
                    self.set_dot(map, x, y);
                }
            }
        }
    }

    /// Ship: a wedge pointing right.
    fn ship(&self, map: &mut DotMap, r: &Hitbox) {
        let (x0, y0, x1, y1) = self.project(r);
        let mid = (y0 + y1 - 1) as f32 / 2.0;
        let half = (y1 - y0) as f32 / 2.0;
        let len = (x1 - x0).max(1) as f32;
        for x in x0..x1 {
            let reach = half * (1.0 - (x - x0) as f32 / len);
            for y in y0..y1 {
                if (y as f32 - mid).abs() <= reach.max(0.5) {
                    self.set_dot(map, x, y);
                }
            }
        }
    }

    /// Bullet: a horizontal streak along the hitbox's centre line.
    fn bullet(&self, map: &mut DotMap, r: &Hitbox) {
        let (x0, y0, x1, y1) = self.project(r);
        let mid = (y0 + y1) / 2;
        for x in x0..x1 {
            self.set_dot(map, x, mid);
        }
    }
}

fn braille_bit(sub_x: usize, sub_y: usize) -> u8 {
    match (sub_x, sub_y) {
        (0, 0) => 0x01,
        (0, 1) => 0x02,
        (0, 2) => 0x04,
        (0, 3) => 0x40,
        (1, 0) => 0x08,
        (1, 1) => 0x10,
        (1, 2) => 0x20,
        (1, 3) => 0x80,
        _ => 0,
    }
}

fn write_layer(grid: &mut [Vec<(char, Style)>], map: &DotMap, style: Style) {
    for (&(cx, cy), &bits) in map {
        if bits == 0 { continue; }
        if let Some(cell) = grid.get_mut(cy).and_then(|row| row.get_mut(cx)) {
            *cell = (char::from_u32(0x2800 + bits as u32).unwrap_or(' '), style);
        }
    }
}

/// Draws the whole playfield into `width` x `height` terminal cells.
pub fn render_field(game: &AlienInvasion, width: usize, height: usize) -> Vec<Line<'static>> {
    let canvas = Canvas::new(width, height, game.settings.screen_w, game.settings.screen_h);
    let bg = Color::Rgb(0, 0, 12);
    let mut grid: Vec<Vec<(char, Style)>> = vec![vec![(' ', Style::default().bg(bg)); width]; height];

    // Starfield backdrop, fixed per cell.
    for (cy, row) in grid.iter_mut().enumerate() {
        for (cx, cell) in row.iter_mut().enumerate() {
            if (cx * 7 + cy * 13) % 29 == 0 {
                *cell = ('.', Style::default().fg(Color::Rgb(70, 70, 110)).bg(bg));
            }
        }
    }

    let mut aliens = DotMap::new();
    for alien in &game.fleet.aliens {
        canvas.alien(&mut aliens, &alien.rect);
    }
    write_layer(&mut grid, &aliens, Style::default().fg(Color::Rgb(200, 180, 255)).bg(bg));

    let mut bullets = DotMap::new();
    for bullet in &game.ship.arsenal.bullets {
        canvas.bullet(&mut bullets, &bullet.rect);
    }
    write_layer(
        &mut grid,
        &bullets,
        Style::default().fg(Color::Rgb(255, 255, 160)).bg(bg).add_modifier(Modifier::BOLD),
    );

    let mut ship = DotMap::new();
    canvas.ship(&mut ship, &game.ship.rect);
    let ship_color = if game.ship.powerup_active() { Color::Rgb(255, 120, 255) } else { Color::Rgb(80, 255, 80) };
    write_layer(&mut grid, &ship, Style::default().fg(ship_color).bg(bg).add_modifier(Modifier::BOLD));

    // Power-ups are smaller than a cell at most sizes; draw them as a glyph.
    for p in &game.powerups {
        let (cx, cy) = p.rect.center();
        let col = (cx as f32 * canvas.sx / 2.0) as i32;
        let row = (cy as f32 * canvas.sy / 4.0) as i32;
        if col < 0 || row < 0 { continue; }
        if let Some(cell) = grid.get_mut(row as usize).and_then(|r| r.get_mut(col as usize)) {
            *cell = ('\u{271a}', Style::default().fg(Color::Magenta).bg(bg).add_modifier(Modifier::BOLD));
        }
    }

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect()
}
