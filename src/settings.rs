use std::path::PathBuf;
use std::time::Duration;

const SCORES_FILE_NAME: &str = "alien_invasion_scores.json";

/// Game configuration. Static values are fixed for the session; dynamic
/// values are reset by `initialize_dynamic_settings` and scaled by
/// `increase_difficulty`.
#[derive(Clone, Debug)]
pub struct Settings {
    pub name: String,
    pub screen_w: i32,
    pub screen_h: i32,
    pub fps: u64,
    pub difficulty_scale: f32,
    pub scores_file: PathBuf,

    pub ship_w: i32,
    pub ship_h: i32,

    pub bullet_w: i32,
    pub bullet_h: i32,

    pub alien_w: i32,
    pub alien_h: i32,

    pub button_w: i32,
    pub button_h: i32,

    pub powerup_w: i32,
    pub powerup_h: i32,
    pub powerup_duration: Duration,
    pub powerup_chance: f64,
    pub boosted_bullet_amount: usize,

    pub life_lost_pause: Duration,

    // Dynamic
    pub ship_speed: f32,
    pub starting_ship_count: u32,
    pub bullet_speed: f32,
    pub base_bullet_amount: usize,
    pub fleet_speed: f32,
    pub fleet_drop_speed: f32,
    pub fleet_x_direction: i32,
    pub fleet_y_direction: i32,
    pub alien_points: u32,
    pub powerup_speed: f32,
}

impl Settings {
    pub fn new() -> Self {
        let mut s = Settings {
            name: "Alien Invasion".to_string(),
            screen_w: 1200,
            screen_h: 800,
            fps: 60,
            difficulty_scale: 1.1,
            scores_file: Self::scores_path(),
            // The ship sprite is rotated a quarter turn to face right,
            // so its 40x60 art occupies a 60x40 box.
            ship_w: 60,
            ship_h: 40,
            bullet_w: 80,
            bullet_h: 25,
            alien_w: 40,
            alien_h: 40,
            button_w: 200,
            button_h: 50,
            powerup_w: 25,
            powerup_h: 25,
            powerup_duration: Duration::from_millis(5000),
            powerup_chance: 0.2,
            boosted_bullet_amount: 10,
            life_lost_pause: Duration::from_millis(500),
            ship_speed: 0.0,
            starting_ship_count: 0,
            bullet_speed: 0.0,
            base_bullet_amount: 0,
            fleet_speed: 0.0,
            fleet_drop_speed: 0.0,
            fleet_x_direction: 0,
            fleet_y_direction: 0,
            alien_points: 0,
            powerup_speed: 0.0,
        };
        s.initialize_dynamic_settings();
        s
    }

    fn scores_path() -> PathBuf {
        // Store next to the executable
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                return dir.join(SCORES_FILE_NAME);
            }
        }
        PathBuf::from(SCORES_FILE_NAME)
    }

    /// Restores everything that difficulty scaling touches or that a new
    /// game starts from.
    pub fn initialize_dynamic_settings(&mut self) {
        self.ship_speed = 5.0;
        self.starting_ship_count = 3;

        self.bullet_speed = 7.0;
        self.base_bullet_amount = 5;

        self.fleet_speed = 2.0;
        self.fleet_drop_speed = 40.0;
        self.fleet_x_direction = 0;
        self.fleet_y_direction = 1;
        self.alien_points = 50;

        self.powerup_speed = 3.0;
    }

    pub fn increase_difficulty(&mut self) {
        self.ship_speed *= self.difficulty_scale;
        self.bullet_speed *= self.difficulty_scale;
        self.fleet_speed *= self.difficulty_scale;
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(1000 / self.fps.max(1))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}
