use crate::scores::ScoreFile;
use crate::settings::Settings;

/// Score, lives and level for the running session.
#[derive(Clone, Debug)]
pub struct GameStats {
    pub score: u32,
    /// Best score of this session.
    pub max_score: u32,
    /// Best score ever, persisted.
    pub hi_score: u32,
    pub level: u32,
    pub ships_left: u32,
    store: ScoreFile,
}

impl GameStats {
    pub fn new(settings: &Settings, store: ScoreFile) -> Self {
        let hi_score = store.load();
        let mut stats = GameStats {
            score: 0,
            max_score: 0,
            hi_score,
            level: 1,
            ships_left: 0,
            store,
        };
        stats.reset_stats(settings);
        stats
    }

    pub fn reset_stats(&mut self, settings: &Settings) {
        self.ships_left = settings.starting_ship_count;
        self.score = 0;
        self.level = 1;
    }

    /// Credits `destroyed` aliens. Returns true when this set a new
    /// all-time high score, which is written out immediately.
    pub fn record_hits(&mut self, destroyed: usize, settings: &Settings) -> bool {
        self.score += destroyed as u32 * settings.alien_points;
        self.max_score = self.max_score.max(self.score);
        if self.score > self.hi_score {
            self.hi_score = self.score;
            self.save_scores();
            true
        } else {
            false
        }
    }

    pub fn update_level(&mut self) {
        self.level += 1;
    }

    pub fn save_scores(&self) {
        self.store.save(self.hi_score);
    }
}
