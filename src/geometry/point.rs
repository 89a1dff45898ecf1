use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use super::Space;

/// A 2D point in the coordinate space `S`.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Point<S: Space> {
    pub x: f32,
    pub y: f32,
    #[serde(skip)]
    space: PhantomData<S>,
}

impl<S: Space> Point<S> {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            space: PhantomData,
        }
    }

    /// Re-tag the point with another space without changing its values.
    ///
    /// Only the transform layer should need this.
    pub(crate) fn cast<T: Space>(self) -> Point<T> {
        Point::new(self.x, self.y)
    }

    /// Convert into an untagged UI point for drawing.
    pub fn to_ui(self) -> labelkit_ui::Point {
        labelkit_ui::Point::new(self.x, self.y)
    }
}

impl<S: Space> fmt::Debug for Point<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point<{}>({}, {})", S::NAME, self.x, self.y)
    }
}

/// A displacement between two points.
///
/// Deltas are not tagged: a drag of 10 units is the same in content and in
/// rendered space, because the two only differ by a translation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Delta {
    pub x: f32,
    pub y: f32,
}

impl Delta {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl<S: Space> Sub for Point<S> {
    type Output = Delta;

    fn sub(self, rhs: Self) -> Delta {
        Delta::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<S: Space> Add<Delta> for Point<S> {
    type Output = Point<S>;

    fn add(self, rhs: Delta) -> Point<S> {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<S: Space> Sub<Delta> for Point<S> {
    type Output = Point<S>;

    fn sub(self, rhs: Delta) -> Point<S> {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add for Delta {
    type Output = Delta;

    fn add(self, rhs: Delta) -> Delta {
        Delta::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Mul<f32> for Delta {
    type Output = Delta;

    fn mul(self, rhs: f32) -> Delta {
        Delta::new(self.x * rhs, self.y * rhs)
    }
}
