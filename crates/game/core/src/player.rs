//! The player avatar.
//!
//! Movement is sampled, not event-driven: every frame the front end reports
//! which arrow keys are currently held and the player derives its velocity
//! from that snapshot.

use bitflags::bitflags;

use crate::config::PlayerConfig;
use crate::geometry::{Point, Rect, Size};

bitflags! {
    /// Arrow keys held during the current frame.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct MovementInput: u8 {
        const RIGHT = 1 << 0;
        const LEFT = 1 << 1;
        const DOWN = 1 << 2;
        const UP = 1 << 3;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Animation {
    #[default]
    Idle,
    Walk,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Canvas edge the player walked through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Edge {
    North,
    South,
    East,
    West,
}

/// The single avatar sprite.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub position: Point,
    pub velocity: Point,
    pub size: Size,
    pub animation: Animation,
    pub facing: Facing,
    pub visible: bool,
    speed: f32,
}

impl Player {
    pub fn new(config: &PlayerConfig, start: Point) -> Self {
        Self {
            position: start,
            velocity: Point::default(),
            size: config.size,
            animation: Animation::Idle,
            facing: Facing::Right,
            visible: false,
            speed: config.speed,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::around(self.position, self.size)
    }

    /// Derives velocity, animation and facing from the held keys.
    ///
    /// Only one direction applies per frame, checked in the order right,
    /// left, down, up.
    pub fn apply_input(&mut self, input: MovementInput) {
        let speed = self.speed;
        let (velocity, facing) = if input.contains(MovementInput::RIGHT) {
            (Point::new(speed, 0.0), Some(Facing::Right))
        } else if input.contains(MovementInput::LEFT) {
            (Point::new(-speed, 0.0), Some(Facing::Left))
        } else if input.contains(MovementInput::DOWN) {
            (Point::new(0.0, speed), None)
        } else if input.contains(MovementInput::UP) {
            (Point::new(0.0, -speed), None)
        } else {
            self.velocity = Point::default();
            self.animation = Animation::Idle;
            return;
        };

        self.velocity = velocity;
        self.animation = Animation::Walk;
        if let Some(facing) = facing {
            self.facing = facing;
        }
    }

    pub fn step(&mut self) {
        self.position.x += self.velocity.x;
        self.position.y += self.velocity.y;
    }

    /// Edge whose line the player's centre has crossed, if any.
    pub fn crossed_edge(&self, canvas: Size) -> Option<Edge> {
        let Point { x, y } = self.position;
        if x < 0.0 {
            Some(Edge::West)
        } else if x > canvas.width {
            Some(Edge::East)
        } else if y < 0.0 {
            Some(Edge::North)
        } else if y > canvas.height {
            Some(Edge::South)
        } else {
            None
        }
    }

    /// Re-enters from the side opposite to `edge`.
    pub fn wrap_from(&mut self, edge: Edge, canvas: Size) {
        match edge {
            Edge::West => self.position.x = canvas.width,
            Edge::East => self.position.x = 0.0,
            Edge::North => self.position.y = canvas.height,
            Edge::South => self.position.y = 0.0,
        }
    }

    pub fn clamp_to(&mut self, canvas: Size) {
        self.position.x = self.position.x.clamp(0.0, canvas.width);
        self.position.y = self.position.y.clamp(0.0, canvas.height);
    }

    pub fn stop(&mut self) {
        self.velocity = Point::default();
        self.animation = Animation::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(&PlayerConfig::default(), Point::new(640.0, 360.0))
    }

    #[test]
    fn right_wins_over_other_keys() {
        let mut p = player();
        p.apply_input(MovementInput::RIGHT | MovementInput::UP | MovementInput::LEFT);
        assert_eq!(p.velocity, Point::new(6.0, 0.0));
        assert_eq!(p.facing, Facing::Right);
        assert_eq!(p.animation, Animation::Walk);
    }

    #[test]
    fn vertical_movement_keeps_facing() {
        let mut p = player();
        p.apply_input(MovementInput::LEFT);
        p.apply_input(MovementInput::DOWN);
        assert_eq!(p.velocity, Point::new(0.0, 6.0));
        assert_eq!(p.facing, Facing::Left);
    }

    #[test]
    fn releasing_keys_idles() {
        let mut p = player();
        p.apply_input(MovementInput::UP);
        p.step();
        assert_eq!(p.position, Point::new(640.0, 354.0));
        p.apply_input(MovementInput::empty());
        p.step();
        assert_eq!(p.position, Point::new(640.0, 354.0));
        assert_eq!(p.animation, Animation::Idle);
    }

    #[test]
    fn edges_wrap_and_clamp() {
        let canvas = Size::new(1280.0, 720.0);
        let mut p = player();
        p.position.x = 1284.0;
        assert_eq!(p.crossed_edge(canvas), Some(Edge::East));
        p.wrap_from(Edge::East, canvas);
        assert_eq!(p.position.x, 0.0);

        p.position.y = -3.0;
        assert_eq!(p.crossed_edge(canvas), Some(Edge::North));
        p.clamp_to(canvas);
        assert_eq!(p.position.y, 0.0);
        assert_eq!(p.crossed_edge(canvas), None);
    }
}
