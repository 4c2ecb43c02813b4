/// Integer axis-aligned rectangle in world units. `x`/`y` is the top-left
/// corner; `right` and `bottom` are exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Hitbox {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Hitbox {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Hitbox { x, y, w, h }
    }

    pub fn left(&self) -> i32 { self.x }
    pub fn right(&self) -> i32 { self.x + self.w }
    pub fn top(&self) -> i32 { self.y }
    pub fn bottom(&self) -> i32 { self.y + self.h }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn mid_left(&self) -> (i32, i32) {
        (self.x, self.y + self.h / 2)
    }

    pub fn mid_right(&self) -> (i32, i32) {
        (self.right(), self.y + self.h / 2)
    }

    pub fn set_center(&mut self, (cx, cy): (i32, i32)) {
        self.x = cx - self.w / 2;
        self.y = cy - self.h / 2;
    }

    pub fn set_mid_left(&mut self, (lx, cy): (i32, i32)) {
        self.x = lx;
        self.y = cy - self.h / 2;
    }

    /// Overlap test. Rectangles that merely share an edge do not collide.
    pub fn collides(&self, other: &Hitbox) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    pub fn contains_point(&self, px: i32, py: i32) -> bool {
        px >= self.left() && px < self.right() && py >= self.top() && py < self.bottom()
    }
}

/// Anything that occupies a rectangle on the field.
pub trait Sprite {
    fn hitbox(&self) -> Hitbox;
}

/// Index of the first member of `group` overlapping `sprite`.
pub fn collide_any<S: Sprite, T: Sprite>(sprite: &S, group: &[T]) -> Option<usize> {
    let hb = sprite.hitbox();
    group.iter().position(|other| hb.collides(&other.hitbox()))
}

/// Removes every member of `a` that overlaps any member of `b` and vice
/// versa. Each removed sprite is returned once, no matter how many partners
/// it overlapped.
pub fn group_collide<A: Sprite, B: Sprite>(a: &mut Vec<A>, b: &mut Vec<B>) -> (Vec<A>, Vec<B>) {
    let mut hit_a = vec![false; a.len()];
    let mut hit_b = vec![false; b.len()];
    for (i, sa) in a.iter().enumerate() {
        let ha = sa.hitbox();
        for (j, sb) in b.iter().enumerate() {
            if ha.collides(&sb.hitbox()) {
                hit_a[i] = true;
                hit_b[j] = true;
            }
        }
    }
    (drain_flagged(a, &hit_a), drain_flagged(b, &hit_b))
}

fn drain_flagged<T>(items: &mut Vec<T>, flags: &[bool]) -> Vec<T> {
    let mut kept = Vec::with_capacity(items.len());
    let mut removed = Vec::new();
    for (item, &hit) in items.drain(..).zip(flags) {
        if hit {
            removed.push(item);
        } else {
            kept.push(item);
        }
    }
    *items = kept;
    removed
}
