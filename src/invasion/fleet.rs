use crate::geometry::{Hitbox, Sprite};
use crate::settings::Settings;

#[derive(Clone, Debug)]
pub struct Alien {
    pub rect: Hitbox,
    x: f32,
    y: f32,
}

impl Alien {
    pub fn new(settings: &Settings, x: i32, y: i32) -> Self {
        Alien {
            rect: Hitbox::new(x, y, settings.alien_w, settings.alien_h),
            x: x as f32,
            y: y as f32,
        }
    }

    fn update(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
        self.rect.x = self.x as i32;
        self.rect.y = self.y as i32;
    }

    fn shift_left(&mut self, step: f32) {
        self.x -= step;
        self.rect.x = self.x as i32;
    }

    /// Touching the top or bottom of the screen.
    pub fn check_edges(&self, screen_h: i32) -> bool {
        self.rect.bottom() >= screen_h || self.rect.top() <= 0
    }
}

impl Sprite for Alien {
    fn hitbox(&self) -> Hitbox {
        self.rect
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heading {
    Descending,
    Ascending,
}

impl Heading {
    pub fn y_dir(self) -> i32 {
        match self {
            Heading::Descending => 1,
            Heading::Ascending => -1,
        }
    }

    fn from_y_dir(y_dir: i32) -> Self {
        if y_dir < 0 { Heading::Ascending } else { Heading::Descending }
    }

    fn flipped(self) -> Self {
        match self {
            Heading::Descending => Heading::Ascending,
            Heading::Ascending => Heading::Descending,
        }
    }
}

/// Number of columns and rows the fleet grid gets. The right half of the
/// screen is divided into alien-sized cells and both counts are then forced
/// odd: even counts lose one, odd counts lose two.
pub fn calculate_fleet_size(alien_w: i32, alien_h: i32, screen_w: i32, screen_h: i32) -> (i32, i32) {
    if alien_w <= 0 || alien_h <= 0 {
        return (0, 0);
    }
    let mut fleet_w = (screen_w / 2) / alien_w;
    let mut fleet_h = screen_h / alien_h;

    fleet_w -= if fleet_w % 2 == 0 { 1 } else { 2 };
    fleet_h -= if fleet_h % 2 == 0 { 1 } else { 2 };

    (fleet_w.max(0), fleet_h.max(0))
}

/// Top-left of the grid: centred in the right half horizontally and in the
/// full screen height vertically.
pub fn calculate_offsets(
    alien_w: i32,
    alien_h: i32,
    screen_w: i32,
    screen_h: i32,
    fleet_w: i32,
    fleet_h: i32,
) -> (i32, i32) {
    let right_half_width = screen_w as f32 / 2.0;
    let horizontal_margin = (right_half_width - (fleet_w * alien_w) as f32) / 2.0;

    let x_offset = (right_half_width + horizontal_margin) as i32;
    let y_offset = (screen_h - fleet_h * alien_h).div_euclid(2);
    (x_offset, y_offset)
}

/// A cell holds an alien unless both its column and row are even.
pub fn cell_populated(col: i32, row: i32) -> bool {
    col % 2 == 1 || row % 2 == 1
}

/// Top-left positions of every alien in a fresh fleet, row by row.
pub fn fleet_layout(alien_w: i32, alien_h: i32, screen_w: i32, screen_h: i32) -> Vec<(i32, i32)> {
    let (fleet_w, fleet_h) = calculate_fleet_size(alien_w, alien_h, screen_w, screen_h);
    let (x_offset, y_offset) =
        calculate_offsets(alien_w, alien_h, screen_w, screen_h, fleet_w, fleet_h);

    let mut cells = Vec::new();
    for row in 0..fleet_h {
        for col in 0..fleet_w {
            if cell_populated(col, row) {
                cells.push((alien_w * col + x_offset, alien_h * row + y_offset));
            }
        }
    }
    cells
}

/// The alien formation. Owns its aliens and the shared heading; aliens carry
/// no link back to the fleet.
#[derive(Clone, Debug)]
pub struct Fleet {
    pub aliens: Vec<Alien>,
    x_dir: i32,
    heading: Heading,
}

impl Fleet {
    pub fn new(settings: &Settings) -> Self {
        let mut fleet = Fleet {
            aliens: Vec::new(),
            x_dir: settings.fleet_x_direction,
            heading: Heading::from_y_dir(settings.fleet_y_direction),
        };
        fleet.create_fleet(settings);
        fleet
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn len(&self) -> usize {
        self.aliens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliens.is_empty()
    }

    pub fn clear(&mut self) {
        self.aliens.clear();
    }

    /// Adds a full formation. Callers clear first when regenerating.
    pub fn create_fleet(&mut self, settings: &Settings) {
        let layout = fleet_layout(
            settings.alien_w,
            settings.alien_h,
            settings.screen_w,
            settings.screen_h,
        );
        self.aliens
            .extend(layout.into_iter().map(|(x, y)| Alien::new(settings, x, y)));
    }

    /// Edge check first, then every alien moves by the same delta.
    pub fn update(&mut self, settings: &Settings) {
        self.check_fleet_edges(settings);
        let dx = settings.fleet_speed * self.x_dir as f32;
        let dy = settings.fleet_speed * self.heading.y_dir() as f32;
        for alien in &mut self.aliens {
            alien.update(dx, dy);
        }
    }

    fn check_fleet_edges(&mut self, settings: &Settings) {
        if self.aliens.iter().any(|a| a.check_edges(settings.screen_h)) {
            self.change_fleet_direction(settings);
        }
    }

    /// Steps the whole formation toward the ship and reverses vertically.
    fn change_fleet_direction(&mut self, settings: &Settings) {
        for alien in &mut self.aliens {
            alien.shift_left(settings.fleet_drop_speed);
        }
        self.heading = self.heading.flipped();
    }

    /// Any alien has reached the left edge.
    pub fn check_fleet_left(&self) -> bool {
        self.aliens.iter().any(|a| a.rect.left() <= 0)
    }
}
