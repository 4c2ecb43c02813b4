pub mod arsenal;
pub mod fleet;
pub mod powerup;
pub mod ship;

use std::time::Duration;

use log::{debug, info};
use rand::Rng;

use crate::geometry::{collide_any, group_collide, Hitbox};
use crate::scores::ScoreFile;
use crate::settings::Settings;
use crate::stats::GameStats;

use fleet::Fleet;
use powerup::{update_powerups, PowerUp};
use ship::Ship;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    Laser,
    Impact,
}

/// What a tick's collision pass changed, mostly for logging and tests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    pub aliens_destroyed: usize,
    pub powerups_spawned: usize,
    pub powerup_collected: bool,
    pub life_lost: bool,
    pub level_cleared: bool,
}

/// Owns every entity and runs one frame of the game at a time.
pub struct AlienInvasion {
    pub settings: Settings,
    pub stats: GameStats,
    pub ship: Ship,
    pub fleet: Fleet,
    pub powerups: Vec<PowerUp>,
    pub game_active: bool,
    resume_at: Option<Duration>,
    cues: Vec<SoundCue>,
}

impl AlienInvasion {
    pub fn new(settings: Settings, store: ScoreFile) -> Self {
        let stats = GameStats::new(&settings, store);
        let ship = Ship::new(&settings);
        let fleet = Fleet::new(&settings);
        Self {
            settings,
            stats,
            ship,
            fleet,
            powerups: Vec::new(),
            game_active: false,
            resume_at: None,
            cues: Vec::new(),
        }
    }

    pub fn screen_rect(&self) -> Hitbox {
        Hitbox::new(0, 0, self.settings.screen_w, self.settings.screen_h)
    }

    /// The "Play" button, centred on the screen.
    pub fn play_button(&self) -> Hitbox {
        let mut rect = Hitbox::new(0, 0, self.settings.button_w, self.settings.button_h);
        rect.set_center(self.screen_rect().center());
        rect
    }

    /// True while the post-hit pause holds the world still.
    pub fn is_paused(&self, now: Duration) -> bool {
        self.resume_at.is_some_and(|t| now < t)
    }

    pub fn restart_game(&mut self) {
        self.settings.initialize_dynamic_settings();
        self.stats.reset_stats(&self.settings);
        self.reset_level();
        self.ship.clear_powerup(&self.settings);
        self.ship.center_ship(&self.settings);
        self.ship.moving_up = false;
        self.ship.moving_down = false;
        self.resume_at = None;
        self.game_active = true;
        info!("New game started, high score {}", self.stats.hi_score);
    }

    /// Starts a game from a click at world coordinates, if it landed on
    /// the visible Play button.
    pub fn click(&mut self, x: i32, y: i32) -> bool {
        if !self.game_active && self.play_button().contains_point(x, y) {
            self.restart_game();
            true
        } else {
            false
        }
    }

    pub fn fire(&mut self) -> bool {
        if !self.game_active {
            return false;
        }
        let fired = self.ship.fire(&self.settings);
        if fired {
            self.cues.push(SoundCue::Laser);
        }
        fired
    }

    pub fn drain_cues(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.cues)
    }

    /// One frame of game time. `now` is time since the app started.
    pub fn update(&mut self, now: Duration, rng: &mut impl Rng) -> TickReport {
        if !self.game_active || self.is_paused(now) {
            return TickReport::default();
        }
        self.resume_at = None;

        self.ship.update(&self.settings, now);
        update_powerups(&mut self.powerups, &self.settings);
        self.fleet.update(&self.settings);
        self.check_collisions(now, rng)
    }

    fn check_collisions(&mut self, now: Duration, rng: &mut impl Rng) -> TickReport {
        let mut report = TickReport::default();

        let ship_hit = self.check_ship_collision();
        let breached = self.fleet.check_fleet_left();
        if ship_hit || breached {
            report.life_lost = true;
            self.check_game_status(now);
            if !self.game_active {
                return report;
            }
        }

        report.powerup_collected = self.check_powerup_collisions(now);

        let (destroyed, _) = group_collide(&mut self.fleet.aliens, &mut self.ship.arsenal.bullets);
        if !destroyed.is_empty() {
            for alien in &destroyed {
                if rng.gen_bool(self.settings.powerup_chance) {
                    self.powerups.push(PowerUp::new(&self.settings, alien.rect.center()));
                    report.powerups_spawned += 1;
                }
            }
            self.cues.push(SoundCue::Impact);
            if self.stats.record_hits(destroyed.len(), &self.settings) {
                debug!("New high score {}", self.stats.hi_score);
            }
            report.aliens_destroyed = destroyed.len();
        }

        if self.fleet.is_empty() {
            self.reset_level();
            self.settings.increase_difficulty();
            self.stats.update_level();
            report.level_cleared = true;
            info!("Fleet destroyed, advancing to level {}", self.stats.level);
        }

        report
    }

    fn check_ship_collision(&mut self) -> bool {
        if collide_any(&self.ship, &self.fleet.aliens).is_some() {
            self.ship.center_ship(&self.settings);
            true
        } else {
            false
        }
    }

    fn check_powerup_collisions(&mut self, now: Duration) -> bool {
        match collide_any(&self.ship, &self.powerups) {
            Some(idx) => {
                self.powerups.remove(idx);
                self.ship.activate_powerup(&self.settings, now);
                true
            }
            None => false,
        }
    }

    /// Spends a ship. Running out ends the game; otherwise the level restarts
    /// after a short pause.
    fn check_game_status(&mut self, now: Duration) {
        self.stats.ships_left = self.stats.ships_left.saturating_sub(1);
        if self.stats.ships_left == 0 {
            self.game_active = false;
            self.stats.save_scores();
            info!("Game over at level {} with {} points", self.stats.level, self.stats.score);
        } else {
            self.reset_level();
            self.resume_at = Some(now + self.settings.life_lost_pause);
            info!("Ship lost, {} left", self.stats.ships_left);
        }
    }

    fn reset_level(&mut self) {
        self.ship.arsenal.clear();
        self.fleet.clear();
        self.fleet.create_fleet(&self.settings);
        self.powerups.clear();
    }
}
