//! Two-dimensional value types used by theme records.

use std::fmt;

use nalgebra::{Scalar, Vector2};
use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use vello::kurbo::{self, RoundedRectRadii};

/// A width/height pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension<T> {
    /// Horizontal extent.
    pub width: T,
    /// Vertical extent.
    pub height: T,
}

impl<T> Dimension<T> {
    /// Create a new dimension.
    pub const fn new(width: T, height: T) -> Self {
        Self { width, height }
    }
}

impl<T: Copy> Dimension<T> {
    /// Create a dimension with the same value on both axes.
    pub const fn splat(value: T) -> Self {
        Self {
            width: value,
            height: value,
        }
    }
}

impl<T: Scalar> Dimension<T> {
    /// Convert into a column vector `(width, height)`.
    pub fn to_vector(&self) -> Vector2<T> {
        Vector2::new(self.width.clone(), self.height.clone())
    }
}

impl<T: Scalar> From<Vector2<T>> for Dimension<T> {
    fn from(vector: Vector2<T>) -> Self {
        Self::new(vector.x.clone(), vector.y.clone())
    }
}

impl From<Dimension<i32>> for kurbo::Size {
    fn from(dim: Dimension<i32>) -> Self {
        kurbo::Size::new(f64::from(dim.width), f64::from(dim.height))
    }
}

/// An x/y pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point<T> {
    /// Horizontal coordinate.
    pub x: T,
    /// Vertical coordinate.
    pub y: T,
}

impl<T> Point<T> {
    /// Create a new point.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Scalar> Point<T> {
    /// Convert into a column vector `(x, y)`.
    pub fn to_vector(&self) -> Vector2<T> {
        Vector2::new(self.x.clone(), self.y.clone())
    }
}

impl<T: Scalar> From<Vector2<T>> for Point<T> {
    fn from(vector: Vector2<T>) -> Self {
        Self::new(vector.x.clone(), vector.y.clone())
    }
}

impl From<Point<i32>> for kurbo::Point {
    fn from(point: Point<i32>) -> Self {
        kurbo::Point::new(f64::from(point.x), f64::from(point.y))
    }
}

/// Corner radii of a rounded rectangle.
///
/// The order is fixed: top-left, top-right, bottom-right, bottom-left. This is
/// the order [RoundedRectRadii] uses, so the conversion is field for field.
///
/// Serialized as an array of four numbers. Infinite and NaN radii, which JSON
/// cannot hold as numbers, are written as the strings `"inf"`, `"-inf"` and
/// `"NaN"`; a NaN with other bits than [f32::NAN] is written as
/// `"NaN:0x7fc00001"` so that it loads back bit for bit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CornerRadii(pub [f32; 4]);

impl CornerRadii {
    /// Square corners.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Create radii from the four corners in clockwise order starting top-left.
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self([top_left, top_right, bottom_right, bottom_left])
    }

    /// Use the same radius on every corner.
    pub const fn uniform(radius: f32) -> Self {
        Self([radius; 4])
    }

    /// Radius of the top-left corner.
    pub const fn top_left(&self) -> f32 {
        self.0[0]
    }

    /// Radius of the top-right corner.
    pub const fn top_right(&self) -> f32 {
        self.0[1]
    }

    /// Radius of the bottom-right corner.
    pub const fn bottom_right(&self) -> f32 {
        self.0[2]
    }

    /// Radius of the bottom-left corner.
    pub const fn bottom_left(&self) -> f32 {
        self.0[3]
    }
}

impl From<[f32; 4]> for CornerRadii {
    fn from(radii: [f32; 4]) -> Self {
        Self(radii)
    }
}

impl Serialize for CornerRadii {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.map(Radius).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CornerRadii {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let radii = <[Radius; 4]>::deserialize(deserializer)?;
        Ok(Self(radii.map(|radius| radius.0)))
    }
}

/// A single corner radius as it appears in a theme file.
struct Radius(f32);

impl Serialize for Radius {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = self.0;
        if value.is_finite() {
            serializer.serialize_f32(value)
        } else if value.is_nan() && value.to_bits() != f32::NAN.to_bits() {
            serializer.serialize_str(&format!("NaN:{:#010x}", value.to_bits()))
        } else {
            serializer.collect_str(&value)
        }
    }
}

impl<'de> Deserialize<'de> for Radius {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RadiusVisitor)
    }
}

struct RadiusVisitor;

impl<'de> Visitor<'de> for RadiusVisitor {
    type Value = Radius;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number, \"inf\", \"-inf\" or \"NaN\"")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Radius, E> {
        Ok(Radius(value as f32))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Radius, E> {
        Ok(Radius(value as f32))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Radius, E> {
        Ok(Radius(value as f32))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Radius, E> {
        let invalid = || E::invalid_value(Unexpected::Str(value), &self);

        if let Some(bits) = value.strip_prefix("NaN:0x") {
            if !bits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let radius = u32::from_str_radix(bits, 16)
                .map(f32::from_bits)
                .map_err(|_| invalid())?;
            return if radius.is_nan() {
                Ok(Radius(radius))
            } else {
                Err(invalid())
            };
        }

        match value.parse::<f32>() {
            Ok(radius) if !radius.is_finite() => Ok(Radius(radius)),
            _ => Err(invalid()),
        }
    }
}

impl From<CornerRadii> for RoundedRectRadii {
    fn from(radii: CornerRadii) -> Self {
        RoundedRectRadii::new(
            f64::from(radii.top_left()),
            f64::from(radii.top_right()),
            f64::from(radii.bottom_right()),
            f64::from(radii.bottom_left()),
        )
    }
}
