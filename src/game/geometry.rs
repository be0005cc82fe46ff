use glam::Vec2;
use ratatui::style::Color;

/// `percent`% of `total`
pub fn percent_of(total: f32, percent: f32) -> f32 {
    total / 100.0 * percent
}

/// Axis-aligned rectangle in court space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Circle overlap test; touching counts as a hit.
    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        let min = Vec2::new(self.x, self.y);
        let max = Vec2::new(self.right(), self.bottom());
        let closest = center.clamp(min, max);
        center.distance_squared(closest) <= radius * radius
    }
}

/// A colored rectangle. Paddles are walls that only ever move vertically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    pub bounds: Bounds,
    pub color: Color,
}

impl Wall {
    pub fn new(color: Color) -> Self {
        Self { bounds: Bounds::default(), color }
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.bounds.x += offset.x;
        self.bounds.y += offset.y;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub center: Vec2,
    /// Direction of travel; renormalized every tick
    pub velocity: Vec2,
    pub speed: f32,
    pub radius: f32,
    pub color: Color,
}

impl Ball {
    pub fn new(radius: f32, color: Color) -> Self {
        Self {
            center: Vec2::ZERO,
            velocity: Vec2::ZERO,
            speed: 0.0,
            radius,
            color,
        }
    }

    pub fn overlaps(&self, wall: &Wall) -> bool {
        wall.bounds.intersects_circle(self.center, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(1600.0, 1.0), 16.0);
        assert_eq!(percent_of(900.0, 15.0), 135.0);
    }

    #[test]
    fn test_circle_overlap_edges_and_corners() {
        let rect = Bounds::new(10.0, 10.0, 20.0, 10.0);

        // Inside
        assert!(rect.intersects_circle(Vec2::new(20.0, 15.0), 1.0));
        // Touching the left edge
        assert!(rect.intersects_circle(Vec2::new(5.0, 15.0), 5.0));
        // Just short of the left edge
        assert!(!rect.intersects_circle(Vec2::new(4.9, 15.0), 5.0));
        // Near the top-left corner but outside the rounded region
        assert!(!rect.intersects_circle(Vec2::new(6.0, 6.0), 5.0));
        // Inside the rounded corner region
        assert!(rect.intersects_circle(Vec2::new(7.0, 7.0), 5.0));
    }

    #[test]
    fn test_wall_translate() {
        let mut wall = Wall::new(Color::White);
        wall.bounds = Bounds::new(0.0, 0.0, 4.0, 4.0);
        wall.translate(Vec2::new(0.0, 3.5));
        assert_eq!(wall.bounds.y, 3.5);
        assert_eq!(wall.bounds.x, 0.0);
        assert_eq!(wall.bounds.bottom(), 7.5);
    }
}
