use crate::palette::Rgb;
use crate::types::WheelId;
use crate::wheel::Wheel;
use glam::Vec2;

/// A decorative link between two nearby wheels.
///
/// `a < b` in placement order. `start` and `end` are the facing points
/// on each wheel's boundary, fixed at creation; the renderer never
/// recomputes them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connector {
    pub a: WheelId,
    pub b: WheelId,
    pub color: Rgb,
    pub start: Vec2,
    pub end: Vec2,
}

impl Connector {
    pub fn between(a_id: WheelId, b_id: WheelId, a: &Wheel, b: &Wheel, color: Rgb) -> Self {
        let dir = (b.pos - a.pos).normalize_or_zero();
        Self {
            a: a_id,
            b: b_id,
            color,
            start: a.pos + dir * a.radius,
            end: b.pos - dir * b.radius,
        }
    }

    /// Straight-line length between the two boundary points.
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Midpoint of the drawn segment.
    pub fn midpoint(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_sit_on_the_facing_boundaries() {
        let a = Wheel::new(Vec2::new(0.0, 0.0), 10.0, 0, 0.0);
        let b = Wheel::new(Vec2::new(40.0, 0.0), 5.0, 1, 0.0);
        let conn = Connector::between(0, 1, &a, &b, Rgb::new(255, 255, 255));

        assert_eq!(conn.start, Vec2::new(10.0, 0.0));
        assert_eq!(conn.end, Vec2::new(35.0, 0.0));
        assert_eq!(conn.length(), 25.0);
        assert_eq!(conn.midpoint(), Vec2::new(22.5, 0.0));
    }

    #[test]
    fn endpoints_follow_the_center_to_center_direction() {
        let a = Wheel::new(Vec2::new(10.0, 10.0), 6.0, 0, 0.0);
        let b = Wheel::new(Vec2::new(10.0, 50.0), 8.0, 1, 0.0);
        let conn = Connector::between(0, 1, &a, &b, Rgb::new(0, 0, 0));

        assert_eq!(conn.start, Vec2::new(10.0, 16.0));
        assert_eq!(conn.end, Vec2::new(10.0, 42.0));
    }
}
