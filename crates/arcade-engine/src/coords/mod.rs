//! Surface sizing.
//!
//! Games describe layout in unit fractions; the only pixel-space facts the
//! engine needs are the container it is given and the surface it fits in it.

mod viewport;

pub use viewport::SurfaceSize;
