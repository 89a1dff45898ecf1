use serde::{Deserialize, Serialize};

use super::{Point, Space};

/// Which handle of a rectangle an anchor sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

impl Direction {
    /// All directions, clockwise from top-left.
    pub const ALL: [Direction; 8] = [
        Direction::TopLeft,
        Direction::Top,
        Direction::TopRight,
        Direction::Right,
        Direction::BottomRight,
        Direction::Bottom,
        Direction::BottomLeft,
        Direction::Left,
    ];

    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Direction::TopLeft
                | Direction::TopRight
                | Direction::BottomRight
                | Direction::BottomLeft
        )
    }

    pub fn moves_left_edge(self) -> bool {
        matches!(
            self,
            Direction::TopLeft | Direction::Left | Direction::BottomLeft
        )
    }

    pub fn moves_right_edge(self) -> bool {
        matches!(
            self,
            Direction::TopRight | Direction::Right | Direction::BottomRight
        )
    }

    pub fn moves_top_edge(self) -> bool {
        matches!(
            self,
            Direction::TopLeft | Direction::Top | Direction::TopRight
        )
    }

    pub fn moves_bottom_edge(self) -> bool {
        matches!(
            self,
            Direction::BottomLeft | Direction::Bottom | Direction::BottomRight
        )
    }
}

/// A resize handle on a rectangle's perimeter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct RectAnchor<S: Space> {
    pub direction: Direction,
    pub position: Point<S>,
}

impl<S: Space> RectAnchor<S> {
    pub fn new(direction: Direction, position: Point<S>) -> Self {
        Self {
            direction,
            position,
        }
    }
}
