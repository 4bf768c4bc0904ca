use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use nalgebra::Rotation2;

use crate::error::{GeoscanError, GeometryError, Result};
use crate::math::{are_equal, is_greater_or_equal, Point2, Vector2};

use super::parse::parse_fixed;

/// An unconstrained point, used for intermediate results such as line
/// intersections and perpendicular feet.
#[derive(Debug, Clone, Copy)]
pub struct VirtualPoint {
    coords: Point2,
}

impl VirtualPoint {
    /// Creates a new virtual point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            coords: Point2::new(x, y),
        }
    }

    /// Returns the x coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.coords.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.coords.y
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn dist(&self, other: impl Into<VirtualPoint>) -> f64 {
        nalgebra::distance(&self.coords, &other.into().coords)
    }

    /// Rotates counter-clockwise by `angle` radians about `pivot`.
    #[must_use]
    pub fn rotate(&self, angle: f64, pivot: impl Into<VirtualPoint>) -> Self {
        let pivot = pivot.into().coords;
        let offset = Rotation2::new(angle) * (self.coords - pivot);
        Self {
            coords: pivot + offset,
        }
    }

    /// Displaces the point by `vector`.
    #[must_use]
    pub fn translate(&self, vector: Vector) -> Self {
        Self {
            coords: self.coords + vector.components,
        }
    }

    /// Returns `true` if both coordinates are finite and non-negative
    /// within tolerance.
    #[must_use]
    pub fn is_in_domain(&self) -> bool {
        self.coords.iter().all(|c| c.is_finite() && is_greater_or_equal(*c, 0.0))
    }
}

impl PartialEq for VirtualPoint {
    fn eq(&self, other: &Self) -> bool {
        are_equal(self.x(), other.x()) && are_equal(self.y(), other.y())
    }
}

impl fmt::Display for VirtualPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        write_coordinate(f, self.x())?;
        write!(f, ",")?;
        write_coordinate(f, self.y())?;
        write!(f, ")")
    }
}

/// Prints the nearest integer when within tolerance of one, otherwise the
/// value truncated toward zero.
fn write_coordinate(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let rounded = value.round();
    let shown = if are_equal(value, rounded) {
        rounded
    } else {
        value.trunc()
    };
    write!(f, "{}", shown + 0.0)
}

/// A point restricted to the non-negative coordinate domain.
///
/// Every constructor and transform re-validates the domain and fails with
/// [`GeometryError::OutOfDomain`] instead of producing an invalid point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(VirtualPoint);

impl Point {
    /// Creates a new point.
    ///
    /// # Errors
    ///
    /// Returns an error if either coordinate is negative.
    pub fn new(x: f64, y: f64) -> Result<Self> {
        Self::try_from(VirtualPoint::new(x, y))
    }

    /// Creates a point, clamping negative coordinates to zero.
    #[must_use]
    pub fn clamped(x: f64, y: f64) -> Self {
        Self(VirtualPoint::new(x.max(0.0), y.max(0.0)))
    }

    /// Returns the x coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.0.x()
    }

    /// Returns the y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.0.y()
    }

    /// Returns the point without its domain guarantee.
    #[must_use]
    pub fn as_virtual(&self) -> VirtualPoint {
        self.0
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn dist(&self, other: impl Into<VirtualPoint>) -> f64 {
        self.0.dist(other)
    }

    /// Rotates counter-clockwise by `angle` radians about `pivot`.
    ///
    /// # Errors
    ///
    /// Returns an error if the rotated point leaves the domain.
    pub fn rotate(&self, angle: f64, pivot: impl Into<VirtualPoint>) -> Result<Self> {
        Self::try_from(self.0.rotate(angle, pivot))
    }

    /// Displaces the point by `vector`.
    ///
    /// # Errors
    ///
    /// Returns an error if the displaced point leaves the domain.
    pub fn translate(&self, vector: Vector) -> Result<Self> {
        Self::try_from(self.0.translate(vector))
    }
}

impl TryFrom<VirtualPoint> for Point {
    type Error = GeoscanError;

    fn try_from(point: VirtualPoint) -> Result<Self> {
        if !point.is_in_domain() {
            return Err(GeometryError::OutOfDomain {
                x: point.x(),
                y: point.y(),
            }
            .into());
        }
        Ok(Self(point))
    }
}

impl From<Point> for VirtualPoint {
    fn from(point: Point) -> Self {
        point.0
    }
}

impl From<&Point> for VirtualPoint {
    fn from(point: &Point) -> Self {
        point.0
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Point {
    type Err = GeoscanError;

    /// Parses `"x y"`.
    fn from_str(s: &str) -> Result<Self> {
        let [x, y] = parse_fixed::<2>(s)?;
        Self::new(x, y)
    }
}

/// A displacement with unrestricted sign.
#[derive(Debug, Clone, Copy)]
pub struct Vector {
    components: Vector2,
}

impl Vector {
    /// Creates a new vector.
    #[must_use]
    pub fn new(dx: f64, dy: f64) -> Self {
        Self {
            components: Vector2::new(dx, dy),
        }
    }

    /// The displacement that carries `from` onto `to`.
    #[must_use]
    pub fn between(from: impl Into<VirtualPoint>, to: impl Into<VirtualPoint>) -> Self {
        Self {
            components: to.into().coords - from.into().coords,
        }
    }

    /// Returns the x component.
    #[must_use]
    pub fn dx(&self) -> f64 {
        self.components.x
    }

    /// Returns the y component.
    #[must_use]
    pub fn dy(&self) -> f64 {
        self.components.y
    }

    /// Returns the length of the vector.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.components.norm()
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        are_equal(self.dx(), other.dx()) && are_equal(self.dy(), other.dy())
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            components: -self.components,
        }
    }
}

/// An integer cell coordinate emitted by the rasterizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NaturalPoint {
    x: u32,
    y: u32,
}

impl NaturalPoint {
    /// Creates a new cell coordinate.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Converts signed raster coordinates, returning `None` outside the domain.
    #[must_use]
    pub fn from_signed(x: i64, y: i64) -> Option<Self> {
        Some(Self {
            x: u32::try_from(x).ok()?,
            y: u32::try_from(y).ok()?,
        })
    }

    /// Returns the column.
    #[must_use]
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Returns the row.
    #[must_use]
    pub fn y(&self) -> u32 {
        self.y
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_cell(value: f64) -> Option<u32> {
    let rounded = value.round();
    if !are_equal(value, rounded) || !(0.0..=f64::from(u32::MAX)).contains(&rounded) {
        return None;
    }
    Some(rounded as u32)
}

impl TryFrom<VirtualPoint> for NaturalPoint {
    type Error = GeoscanError;

    fn try_from(point: VirtualPoint) -> Result<Self> {
        if !point.is_in_domain() {
            return Err(GeometryError::OutOfDomain {
                x: point.x(),
                y: point.y(),
            }
            .into());
        }
        match (to_cell(point.x()), to_cell(point.y())) {
            (Some(x), Some(y)) => Ok(Self { x, y }),
            _ => Err(GeometryError::NonIntegral {
                x: point.x(),
                y: point.y(),
            }
            .into()),
        }
    }
}

impl TryFrom<Point> for NaturalPoint {
    type Error = GeoscanError;

    fn try_from(point: Point) -> Result<Self> {
        Self::try_from(point.as_virtual())
    }
}

impl From<NaturalPoint> for VirtualPoint {
    fn from(point: NaturalPoint) -> Self {
        Self::new(f64::from(point.x), f64::from(point.y))
    }
}

impl fmt::Display for NaturalPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
