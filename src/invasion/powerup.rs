use crate::geometry::{Hitbox, Sprite};
use crate::settings::Settings;

/// A pickup dropped by a destroyed alien, drifting left toward the ship.
#[derive(Clone, Debug)]
pub struct PowerUp {
    pub rect: Hitbox,
    x: f32,
}

impl PowerUp {
    pub fn new(settings: &Settings, center: (i32, i32)) -> Self {
        let mut rect = Hitbox::new(0, 0, settings.powerup_w, settings.powerup_h);
        rect.set_center(center);
        PowerUp { x: rect.x as f32, rect }
    }

    pub fn update(&mut self, settings: &Settings) {
        self.x -= settings.powerup_speed;
        self.rect.x = self.x as i32;
    }

    pub fn off_screen(&self) -> bool {
        self.rect.right() <= 0
    }
}

impl Sprite for PowerUp {
    fn hitbox(&self) -> Hitbox {
        self.rect
    }
}

/// Moves every power-up and drops the ones that drifted past the left edge.
pub fn update_powerups(powerups: &mut Vec<PowerUp>, settings: &Settings) {
    for p in powerups.iter_mut() {
        p.update(settings);
    }
    powerups.retain(|p| !p.off_screen());
}
