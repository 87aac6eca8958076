#![no_std]

extern crate alloc;

pub use nalgebra;

use nalgebra::{Point2, Vector2};

mod angle;
mod error;
mod locate;
mod poly;
mod ray;
mod secant;

pub use angle::*;
pub use error::*;
pub use locate::*;
pub use poly::*;
pub use ray::*;
pub use secant::*;

pub type Float = f64;

/// A point in the plane of the mirror.
pub type Point = Point2<Float>;

pub type Vector = Vector2<Float>;
