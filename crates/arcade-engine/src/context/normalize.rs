use crate::coords::SurfaceSize;
use crate::scene::{AttrValue, Attrs};

use super::ContextError;

/// Attributes given as a fraction of the surface width.
pub const WIDTH_KEYS: &[&str] = &["x", "width", "radiusX"];

/// Attributes given as a fraction of the surface height.
pub const HEIGHT_KEYS: &[&str] = &["y", "height", "fontSize", "radiusY"];

/// Reserved key requesting a rename.
pub const RENAME_KEY: &str = "identifier";

/// A config converted to surface pixels, with the rename request split out.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub attrs: Attrs,
    pub rename: Option<String>,
}

/// Converts a game-space config into surface pixels.
///
/// Numbers under [`WIDTH_KEYS`] are multiplied by the surface width and
/// numbers under [`HEIGHT_KEYS`] by its height; everything else passes
/// through. The [`RENAME_KEY`] entry is removed and returned separately.
pub fn normalize(config: Attrs, size: SurfaceSize) -> Result<Normalized, ContextError> {
    let width = size.width as f64;
    let height = size.height as f64;

    let mut attrs = Attrs::new();
    let mut rename = None;

    for (key, value) in config {
        if key == RENAME_KEY {
            match value {
                AttrValue::Text(id) => rename = Some(id),
                other => return Err(ContextError::InvalidRename(other.to_string())),
            }
            continue;
        }

        let value = match value {
            AttrValue::Number(n) if WIDTH_KEYS.contains(&key.as_str()) => AttrValue::Number(n * width),
            AttrValue::Number(n) if HEIGHT_KEYS.contains(&key.as_str()) => AttrValue::Number(n * height),
            other => other,
        };
        attrs.insert(key, value);
    }

    Ok(Normalized { attrs, rename })
}
