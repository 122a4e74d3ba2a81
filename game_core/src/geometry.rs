use glam::Vec2;

/// Axis-aligned rectangle.
///
/// Screen convention: `pos` is the top-left corner and y grows downward, so
/// `top() <= bottom()` for any rectangle with a non-negative size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y * 0.5
    }

    /// Move so the left edge sits at `x`
    pub fn set_left(&mut self, x: f32) {
        self.pos.x = x;
    }

    /// Move so the right edge sits at `x`
    pub fn set_right(&mut self, x: f32) {
        self.pos.x = x - self.size.x;
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.pos += delta;
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Half-open containment: the left/top edges are inside, right/bottom are not
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.bottom(), 60.0);
        assert_eq!(rect.center(), Vec2::new(25.0, 40.0));
        assert_eq!(rect.center_y(), 40.0);
    }

    #[test]
    fn test_set_edges() {
        let mut rect = Rect::new(10.0, 0.0, 10.0, 10.0);
        rect.set_right(50.0);
        assert_eq!(rect.left(), 40.0, "Right edge snaps, width is kept");
        rect.set_left(5.0);
        assert_eq!(rect.right(), 15.0);
    }

    #[test]
    fn test_overlapping_rects_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a), "Intersection is symmetric");
    }

    #[test]
    fn test_touching_rects_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right), "Shared vertical edge is not an overlap");
        assert!(!a.intersects(&below), "Shared horizontal edge is not an overlap");
    }

    #[test]
    fn test_contains_is_half_open() {
        let rect = Rect::new(70.0, 150.0, 100.0, 20.0);
        assert!(rect.contains(Vec2::new(70.0, 150.0)), "Top-left corner is inside");
        assert!(rect.contains(Vec2::new(120.0, 160.0)));
        assert!(!rect.contains(Vec2::new(170.0, 160.0)), "Right edge is outside");
        assert!(!rect.contains(Vec2::new(120.0, 170.0)), "Bottom edge is outside");
        assert!(!rect.contains(Vec2::new(69.9, 160.0)));
    }
}
