//! Stateless drawing of a session onto any pixel surface.

mod painter;
mod raster;
mod surface;

pub use painter::*;
pub use raster::Raster;
pub use surface::{Color, Surface};
