use crate::geometry::{Hitbox, Sprite};
use crate::settings::Settings;

#[derive(Clone, Debug)]
pub struct Bullet {
    pub rect: Hitbox,
    x: f32,
}

impl Bullet {
    /// A bullet whose mid-left sits on `muzzle`.
    pub fn new(settings: &Settings, muzzle: (i32, i32)) -> Self {
        let mut rect = Hitbox::new(0, 0, settings.bullet_w, settings.bullet_h);
        rect.set_mid_left(muzzle);
        Bullet { x: rect.x as f32, rect }
    }

    pub fn update(&mut self, settings: &Settings) {
        self.x += settings.bullet_speed;
        self.rect.x = self.x as i32;
    }
}

impl Sprite for Bullet {
    fn hitbox(&self) -> Hitbox {
        self.rect
    }
}

/// Bullets in flight, bounded by a capacity that a power-up can raise.
#[derive(Clone, Debug)]
pub struct Arsenal {
    pub bullets: Vec<Bullet>,
    capacity: usize,
}

impl Arsenal {
    pub fn new(capacity: usize) -> Self {
        Arsenal { bullets: Vec::new(), capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
    }

    pub fn len(&self) -> usize {
        self.bullets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bullets.is_empty()
    }

    pub fn clear(&mut self) {
        self.bullets.clear();
    }

    pub fn update(&mut self, settings: &Settings) {
        for b in &mut self.bullets {
            b.update(settings);
        }
        self.bullets.retain(|b| b.rect.left() < settings.screen_w);
    }

    /// Admission gate: a full arsenal refuses the shot outright.
    pub fn fire(&mut self, settings: &Settings, muzzle: (i32, i32)) -> bool {
        if self.bullets.len() < self.capacity {
            self.bullets.push(Bullet::new(settings, muzzle));
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullets_leave_past_right_edge() {
        let s = Settings::new();
        let mut arsenal = Arsenal::new(5);
        assert!(arsenal.fire(&s, (s.screen_w - 10, 100)));
        arsenal.update(&s);
        assert_eq!(arsenal.len(), 1);
        arsenal.update(&s);
        assert!(arsenal.is_empty());
    }

    #[test]
    fn bullet_spawns_on_muzzle() {
        let s = Settings::new();
        let b = Bullet::new(&s, (60, 400));
        assert_eq!(b.rect.mid_left(), (60, 400));
    }
}
