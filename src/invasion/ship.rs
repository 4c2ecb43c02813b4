use std::time::Duration;

use crate::geometry::{Hitbox, Sprite};
use crate::invasion::arsenal::Arsenal;
use crate::settings::Settings;

#[derive(Clone, Debug, PartialEq)]
pub enum PowerUpState {
    Inactive,
    Active { since: Duration },
}

/// The player's ship on the left edge. Moves vertically only.
#[derive(Clone, Debug)]
pub struct Ship {
    pub rect: Hitbox,
    y: f32,
    pub moving_up: bool,
    pub moving_down: bool,
    pub arsenal: Arsenal,
    pub powerup: PowerUpState,
}

impl Ship {
    pub fn new(settings: &Settings) -> Self {
        let mut ship = Ship {
            rect: Hitbox::new(0, 0, settings.ship_w, settings.ship_h),
            y: 0.0,
            moving_up: false,
            moving_down: false,
            arsenal: Arsenal::new(settings.base_bullet_amount),
            powerup: PowerUpState::Inactive,
        };
        ship.center_ship(settings);
        ship
    }

    /// Puts the ship back at the middle of the left edge.
    pub fn center_ship(&mut self, settings: &Settings) {
        self.rect.set_mid_left((0, settings.screen_h / 2));
        self.y = self.rect.y as f32;
    }

    pub fn update(&mut self, settings: &Settings, now: Duration) {
        self.update_movement(settings);
        self.arsenal.update(settings);
        self.check_powerup_status(settings, now);
    }

    fn update_movement(&mut self, settings: &Settings) {
        if self.moving_down && self.rect.bottom() < settings.screen_h {
            self.y += settings.ship_speed;
        }
        if self.moving_up && self.rect.top() > 0 {
            self.y -= settings.ship_speed;
        }
        self.rect.y = self.y as i32;
    }

    /// Returns true when a bullet left the barrel.
    pub fn fire(&mut self, settings: &Settings) -> bool {
        self.arsenal.fire(settings, self.rect.mid_right())
    }

    /// Re-arming while already active only restarts the timer.
    pub fn activate_powerup(&mut self, settings: &Settings, now: Duration) {
        self.powerup = PowerUpState::Active { since: now };
        self.arsenal.set_capacity(settings.boosted_bullet_amount);
    }

    pub fn clear_powerup(&mut self, settings: &Settings) {
        self.powerup = PowerUpState::Inactive;
        self.arsenal.set_capacity(settings.base_bullet_amount);
    }

    fn check_powerup_status(&mut self, settings: &Settings, now: Duration) {
        if let PowerUpState::Active { since } = self.powerup {
            if now.saturating_sub(since) > settings.powerup_duration {
                self.clear_powerup(settings);
            }
        }
    }

    pub fn powerup_active(&self) -> bool {
        matches!(self.powerup, PowerUpState::Active { .. })
    }
}

impl Sprite for Ship {
    fn hitbox(&self) -> Hitbox {
        self.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_centered_on_left_edge() {
        let s = Settings::new();
        let ship = Ship::new(&s);
        assert_eq!(ship.rect.left(), 0);
        assert_eq!(ship.rect.mid_left(), (0, 400));
    }

    #[test]
    fn movement_stops_at_screen_edges() {
        let s = Settings::new();
        let mut ship = Ship::new(&s);
        ship.moving_up = true;
        for _ in 0..500 {
            ship.update(&s, Duration::ZERO);
        }
        assert!(ship.rect.top() <= 0);
        assert!(ship.rect.top() > -(s.ship_speed as i32) - 1);

        ship.moving_up = false;
        ship.moving_down = true;
        for _ in 0..500 {
            ship.update(&s, Duration::ZERO);
        }
        assert!(ship.rect.bottom() >= s.screen_h);
        assert!(ship.rect.bottom() < s.screen_h + s.ship_speed as i32 + 1);
    }

    #[test]
    fn powerup_expires_and_rearm_resets_timer() {
        let s = Settings::new();
        let mut ship = Ship::new(&s);
        ship.activate_powerup(&s, Duration::from_millis(1000));
        assert_eq!(ship.arsenal.capacity(), 10);

        ship.update(&s, Duration::from_millis(4000));
        ship.activate_powerup(&s, Duration::from_millis(4000));
        ship.update(&s, Duration::from_millis(8000));
        assert!(ship.powerup_active());

        ship.update(&s, Duration::from_millis(9001));
        assert!(!ship.powerup_active());
        assert_eq!(ship.arsenal.capacity(), 5);
    }
}
