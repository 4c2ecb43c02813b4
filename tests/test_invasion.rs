use std::fs;
use std::time::Duration;

use alien_invasion::invasion::arsenal::Bullet;
use alien_invasion::invasion::fleet::{fleet_layout, Alien};
use alien_invasion::invasion::powerup::PowerUp;
use alien_invasion::invasion::{AlienInvasion, SoundCue, TickReport};
use alien_invasion::scores::ScoreFile;
use alien_invasion::settings::Settings;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn settings(name: &str) -> Settings {
    let mut s = Settings::new();
    s.scores_file = std::env::temp_dir().join(format!("alien_invasion_game_{}_{}.json", name, std::process::id()));
    let _ = fs::remove_file(&s.scores_file);
    s
}

fn game_with(s: Settings) -> AlienInvasion {
    let store = ScoreFile::new(s.scores_file.clone());
    let mut game = AlienInvasion::new(s, store);
    game.restart_game();
    game
}

fn new_game(name: &str) -> AlienInvasion {
    game_with(settings(name))
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// An alien parked on top of the ship.
fn alien_on_ship(game: &AlienInvasion) -> Alien {
    Alien::new(&game.settings, game.ship.rect.x + 10, game.ship.rect.y)
}

/// A bullet that will still overlap `target` after one tick of motion.
fn bullet_on(game: &AlienInvasion, target: &Alien) -> Bullet {
    let (_, cy) = target.rect.center();
    Bullet::new(&game.settings, (target.rect.left() - 20, cy))
}

// ── startup ───────────────────────────────────────────────────────────────────

#[test]
fn starts_inactive_until_played() {
    let s = settings("inactive");
    let store = ScoreFile::new(s.scores_file.clone());
    let mut game = AlienInvasion::new(s, store);
    assert!(!game.game_active);
    assert!(!game.fire());

    let before: Vec<i32> = game.fleet.aliens.iter().map(|a| a.rect.y).collect();
    assert_eq!(game.update(ms(16), &mut seeded_rng()), TickReport::default());
    let after: Vec<i32> = game.fleet.aliens.iter().map(|a| a.rect.y).collect();
    assert_eq!(before, after);
}

#[test]
fn play_button_click_starts_game() {
    let s = settings("click");
    let store = ScoreFile::new(s.scores_file.clone());
    let mut game = AlienInvasion::new(s, store);

    assert!(!game.click(5, 5));
    assert!(!game.game_active);

    let (cx, cy) = game.play_button().center();
    assert!(game.click(cx, cy));
    assert!(game.game_active);

    // The button is gone while playing.
    assert!(!game.click(cx, cy));
}

// ── firing ────────────────────────────────────────────────────────────────────

#[test]
fn fire_six_times_at_capacity_five() {
    let mut game = new_game("fire_six");
    let results: Vec<bool> = (0..6).map(|_| game.fire()).collect();
    assert_eq!(results, vec![true, true, true, true, true, false]);
    assert_eq!(game.ship.arsenal.len(), 5);
    assert_eq!(game.drain_cues(), vec![SoundCue::Laser; 5]);
}

// ── bullets vs fleet ──────────────────────────────────────────────────────────

#[test]
fn bullet_and_alien_destroy_each_other_once() {
    let mut game = new_game("mutual");
    let mut rng = seeded_rng();
    let total = game.fleet.len();
    let target = game.fleet.aliens[0].clone();
    game.ship.arsenal.bullets.push(bullet_on(&game, &target));

    let report = game.update(ms(16), &mut rng);
    assert_eq!(report.aliens_destroyed, 1);
    assert_eq!(game.fleet.len(), total - 1);
    assert!(game.ship.arsenal.is_empty());
    assert_eq!(game.stats.score, 50);
    assert!(game.drain_cues().contains(&SoundCue::Impact));

    let report = game.update(ms(32), &mut rng);
    assert_eq!(report.aliens_destroyed, 0);
    assert_eq!(game.stats.score, 50);
}

#[test]
fn one_bullet_many_aliens() {
    let mut game = new_game("one_many");
    game.fleet.clear();
    let s = game.settings.clone();
    game.fleet.aliens.push(Alien::new(&s, 700, 300));
    game.fleet.aliens.push(Alien::new(&s, 745, 300));
    game.fleet.aliens.push(Alien::new(&s, 1000, 600));
    game.ship.arsenal.bullets.push(Bullet::new(&s, (680, 320)));

    let report = game.update(ms(16), &mut seeded_rng());
    assert_eq!(report.aliens_destroyed, 2);
    assert_eq!(game.fleet.len(), 1);
    assert!(game.ship.arsenal.is_empty());
    assert_eq!(game.stats.score, 100);
}

#[test]
fn many_bullets_one_alien() {
    let mut game = new_game("many_one");
    game.fleet.clear();
    let s = game.settings.clone();
    game.fleet.aliens.push(Alien::new(&s, 700, 300));
    game.fleet.aliens.push(Alien::new(&s, 1000, 600));
    game.ship.arsenal.bullets.push(Bullet::new(&s, (680, 310)));
    game.ship.arsenal.bullets.push(Bullet::new(&s, (680, 330)));

    let report = game.update(ms(16), &mut seeded_rng());
    assert_eq!(report.aliens_destroyed, 1);
    assert!(game.ship.arsenal.is_empty());
    assert_eq!(game.stats.score, 50);
}

#[test]
fn destroyed_alien_can_drop_powerup_at_its_centre() {
    let mut s = settings("drop");
    s.powerup_chance = 1.0;
    let mut game = game_with(s);
    let target = game.fleet.aliens[0].clone();
    game.ship.arsenal.bullets.push(bullet_on(&game, &target));

    let report = game.update(ms(16), &mut seeded_rng());
    assert_eq!(report.powerups_spawned, 1);
    assert_eq!(game.powerups.len(), 1);

    // The alien moved one step before it was hit.
    let (tx, ty) = target.rect.center();
    assert_eq!(game.powerups[0].rect.center(), (tx, ty + 2));
}

#[test]
fn no_drops_when_chance_is_zero() {
    let mut s = settings("no_drop");
    s.powerup_chance = 0.0;
    let mut game = game_with(s);
    let target = game.fleet.aliens[0].clone();
    game.ship.arsenal.bullets.push(bullet_on(&game, &target));
    game.update(ms(16), &mut seeded_rng());
    assert!(game.powerups.is_empty());
}

// ── power-ups ─────────────────────────────────────────────────────────────────

#[test]
fn ship_collects_powerup() {
    let mut game = new_game("collect");
    let center = game.ship.rect.center();
    let p = PowerUp::new(&game.settings, center);
    game.powerups.push(p);

    let report = game.update(ms(1000), &mut seeded_rng());
    assert!(report.powerup_collected);
    assert!(game.powerups.is_empty());
    assert!(game.ship.powerup_active());
    assert_eq!(game.ship.arsenal.capacity(), 10);

    // Expires after the configured duration.
    game.update(ms(5000), &mut seeded_rng());
    assert!(game.ship.powerup_active());
    game.update(ms(6001), &mut seeded_rng());
    assert!(!game.ship.powerup_active());
    assert_eq!(game.ship.arsenal.capacity(), 5);
}

// ── lives ─────────────────────────────────────────────────────────────────────

#[test]
fn last_ship_lost_ends_game() {
    let mut game = new_game("last_ship");
    let mut rng = seeded_rng();
    game.stats.ships_left = 1;
    let alien = alien_on_ship(&game);
    game.fleet.aliens.push(alien);

    let report = game.update(ms(16), &mut rng);
    assert!(report.life_lost);
    assert!(!game.game_active);
    assert_eq!(game.stats.ships_left, 0);

    // Nothing advances once the game is over.
    let ys: Vec<i32> = game.fleet.aliens.iter().map(|a| a.rect.y).collect();
    game.update(ms(32), &mut rng);
    assert_eq!(game.stats.ships_left, 0);
    assert_eq!(ys, game.fleet.aliens.iter().map(|a| a.rect.y).collect::<Vec<_>>());
}

#[test]
fn ship_hit_resets_level_and_pauses() {
    let mut game = new_game("ship_hit");
    let mut rng = seeded_rng();
    let full = game.fleet.len();
    game.fire();
    let alien = alien_on_ship(&game);
    game.fleet.aliens.push(alien);

    let report = game.update(ms(1000), &mut rng);
    assert!(report.life_lost);
    assert!(game.game_active);
    assert_eq!(game.stats.ships_left, 2);
    assert_eq!(game.stats.level, 1);
    assert_eq!(game.fleet.len(), full);
    assert!(game.ship.arsenal.is_empty());
    assert_eq!(game.ship.rect.mid_left(), (0, 400));

    // Frozen for the pause, then moving again.
    assert!(game.is_paused(ms(1200)));
    let ys: Vec<i32> = game.fleet.aliens.iter().map(|a| a.rect.y).collect();
    game.update(ms(1200), &mut rng);
    assert_eq!(ys, game.fleet.aliens.iter().map(|a| a.rect.y).collect::<Vec<_>>());

    game.update(ms(1500), &mut rng);
    assert!(!game.is_paused(ms(1500)));
    assert_ne!(ys, game.fleet.aliens.iter().map(|a| a.rect.y).collect::<Vec<_>>());
}

#[test]
fn left_edge_breach_costs_a_ship() {
    let mut game = new_game("breach");
    let s = game.settings.clone();
    game.fleet.aliens.push(Alien::new(&s, 0, 100));

    let report = game.update(ms(16), &mut seeded_rng());
    assert!(report.life_lost);
    assert_eq!(game.stats.ships_left, 2);
    assert!(!game.fleet.check_fleet_left());
}

#[test]
fn ship_hit_and_breach_in_one_tick_cost_one_ship() {
    let mut game = new_game("double");
    let s = game.settings.clone();
    game.fleet.aliens.push(Alien::new(&s, 0, game.ship.rect.y));

    let report = game.update(ms(16), &mut seeded_rng());
    assert!(report.life_lost);
    assert_eq!(game.stats.ships_left, 2);
}

// ── level progression ─────────────────────────────────────────────────────────

#[test]
fn clearing_fleet_advances_one_level_with_fresh_fleet() {
    let mut game = new_game("level_up");
    game.fleet.clear();
    game.fire();

    let report = game.update(ms(16), &mut seeded_rng());
    assert!(report.level_cleared);
    assert_eq!(game.stats.level, 2);
    assert!(game.ship.arsenal.is_empty());

    let s = &game.settings;
    let expected = fleet_layout(s.alien_w, s.alien_h, s.screen_w, s.screen_h);
    let actual: Vec<(i32, i32)> = game.fleet.aliens.iter().map(|a| (a.rect.x, a.rect.y)).collect();
    assert_eq!(actual, expected);

    assert!((s.fleet_speed - 2.2).abs() < 1e-4);
    assert!((s.ship_speed - 5.5).abs() < 1e-4);
    assert!((s.bullet_speed - 7.7).abs() < 1e-4);
}

#[test]
fn restart_restores_speeds_and_stats() {
    let mut game = new_game("restart");
    game.fleet.clear();
    game.update(ms(16), &mut seeded_rng());
    assert_eq!(game.stats.level, 2);

    game.restart_game();
    assert_eq!(game.stats.level, 1);
    assert_eq!(game.stats.score, 0);
    assert_eq!(game.stats.ships_left, 3);
    assert_eq!(game.settings.fleet_speed, 2.0);
}
