use std::collections::HashMap;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::info;
use rand::rngs::ThreadRng;
use ratatui::layout::Rect;

use alien_invasion::invasion::{AlienInvasion, SoundCue};
use alien_invasion::scores::ScoreFile;
use alien_invasion::settings::Settings;

/// Ticks a held key stays live without a repeat, for terminals that never
/// report key releases.
const HOLD_WINDOW: u64 = 8;

pub struct App {
    pub should_quit: bool,
    pub game: AlienInvasion,
    /// Terminal area the playfield was last drawn into, for mapping clicks.
    pub field_area: Option<Rect>,
    started: Instant,
    rng: ThreadRng,
    tick: u64,
    held: HashMap<KeyCode, u64>,
    release_events: bool,
}

impl App {
    pub fn new(release_events: bool) -> Self {
        let settings = Settings::new();
        let store = ScoreFile::new(settings.scores_file.clone());
        info!("{} using score file {}", settings.name, store.path().display());
        Self {
            should_quit: false,
            game: AlienInvasion::new(settings, store),
            field_area: None,
            started: Instant::now(),
            rng: rand::thread_rng(),
            tick: 0,
            held: HashMap::new(),
            release_events,
        }
    }

    pub fn tick_rate(&self) -> Duration {
        self.game.settings.tick_rate()
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn on_tick(&mut self) {
        self.tick += 1;
        if !self.release_events {
            let tick = self.tick;
            self.held.retain(|_, &mut seen| tick.saturating_sub(seen) <= HOLD_WINDOW);
        }
        self.game.ship.moving_up = self.is_held(KeyCode::Up);
        self.game.ship.moving_down = self.is_held(KeyCode::Down);

        let report = self.game.update(self.started.elapsed(), &mut self.rng);
        if report.powerup_collected {
            info!("Power-up collected");
        }
    }

    fn is_held(&self, code: KeyCode) -> bool {
        self.held.contains_key(&code)
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match key.kind {
            KeyEventKind::Release => {
                self.held.remove(&key.code);
            }
            KeyEventKind::Repeat => {
                if self.held.contains_key(&key.code) {
                    self.held.insert(key.code, self.tick);
                }
            }
            KeyEventKind::Press => self.on_press(key.code),
        }
    }

    fn on_press(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.quit(),
            KeyCode::Enter if !self.game.game_active => self.game.restart_game(),
            _ if !self.game.game_active => {}
            KeyCode::Up | KeyCode::Down => {
                self.held.insert(code, self.tick);
            }
            KeyCode::Char(' ') => {
                self.game.fire();
            }
            _ => {}
        }
    }

    pub fn on_click(&mut self, column: u16, row: u16) {
        let Some(area) = self.field_area else { return };
        if area.width == 0 || area.height == 0 || !area.contains((column, row).into()) {
            return;
        }
        let s = &self.game.settings;
        let x = ((column - area.x) as f32 + 0.5) * s.screen_w as f32 / area.width as f32;
        let y = ((row - area.y) as f32 + 0.5) * s.screen_h as f32 / area.height as f32;
        self.game.click(x as i32, y as i32);
    }

    pub fn drain_cues(&mut self) -> Vec<SoundCue> {
        self.game.drain_cues()
    }

    fn quit(&mut self) {
        self.game.stats.save_scores();
        self.should_quit = true;
    }
}
