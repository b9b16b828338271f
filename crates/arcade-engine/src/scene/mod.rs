//! Drawable layer.
//!
//! Responsibilities:
//! - own drawable objects (`Shape`) under stable `ShapeId`s
//! - hold their open-ended attribute maps (`Attrs`)
//! - flatten the layer into a renderer-agnostic `DrawList` each frame
//!
//! Nothing here knows about identifiers handed to games; that mapping belongs
//! to the context provider.

mod attrs;
mod cmd;
mod key;
mod layer;
mod list;
mod shape;

pub use attrs::{AttrValue, Attrs};
pub use cmd::DrawCmd;
pub use key::{SortKey, ZIndex};
pub use layer::Layer;
pub use list::{DrawItem, DrawList};
pub use shape::{Shape, ShapeId, ShapeKind};
