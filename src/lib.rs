#![doc = include_str!("../README.md")]

pub use crate::distance::{EARTH_RADIUS_KM, haversine, haversine_with_radius};
pub use crate::error::{Axis, CoordinateError, Error, PolygonDefect, Result};
pub use crate::input::CoordinateInput;
pub use crate::polygon::{Polygon, point_in_polygon};
pub use crate::types::*;
pub use crate::validate::*;

mod distance;
mod error;
mod input;
mod polygon;
mod types;
mod validate;
