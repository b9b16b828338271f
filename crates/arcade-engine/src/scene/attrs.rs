use std::collections::BTreeMap;
use std::fmt;

/// A single drawable attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Number(f64),
    Text(String),
    Bool(bool),
    List(Vec<AttrValue>),
}

impl AttrValue {
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&[AttrValue]> {
        match self {
            AttrValue::List(l) => Some(l),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Number(n) => write!(f, "{n}"),
            AttrValue::Text(s) => write!(f, "{s:?}"),
            AttrValue::Bool(b) => write!(f, "{b}"),
            AttrValue::List(l) => {
                write!(f, "[")?;
                for (i, v) in l.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Number(v)
    }
}

impl From<f32> for AttrValue {
    fn from(v: f32) -> Self {
        AttrValue::Number(v as f64)
    }
}

impl From<i32> for AttrValue {
    fn from(v: i32) -> Self {
        AttrValue::Number(v as f64)
    }
}

impl From<u32> for AttrValue {
    fn from(v: u32) -> Self {
        AttrValue::Number(v as f64)
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Text(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::Text(v)
    }
}

impl<T: Into<AttrValue>> From<Vec<T>> for AttrValue {
    fn from(v: Vec<T>) -> Self {
        AttrValue::List(v.into_iter().map(Into::into).collect())
    }
}

/// Attribute map of a drawable (or a partial update to one).
///
/// Keys are free-form so that games can pass renderer attributes through
/// unchanged; the context provider only interprets a handful of them.
///
/// ```
/// use arcade_engine::scene::Attrs;
///
/// let cfg = Attrs::new()
///     .with("x", 0.5)
///     .with("text", "hello")
///     .with("eventList", vec!["mousedown"]);
/// assert_eq!(cfg.number("x"), Some(0.5));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attrs {
    entries: BTreeMap<String, AttrValue>,
}

impl Attrs {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[inline]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(key, value);
        self
    }

    #[inline]
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Option<AttrValue> {
        self.entries.insert(key.into(), value.into())
    }

    #[inline]
    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        self.entries.remove(key)
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries.get(key)
    }

    #[inline]
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(AttrValue::as_number)
    }

    #[inline]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AttrValue::as_text)
    }

    /// Whether the list attribute `key` holds the text `item`.
    pub fn list_contains(&self, key: &str, item: &str) -> bool {
        self.get(key)
            .and_then(AttrValue::as_list)
            .is_some_and(|list| list.iter().any(|v| v.as_text() == Some(item)))
    }

    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Overwrites `self` with every entry of `other`; keys absent from
    /// `other` are kept.
    pub fn merge(&mut self, other: Attrs) {
        self.entries.extend(other.entries);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl IntoIterator for Attrs {
    type Item = (String, AttrValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(String, AttrValue)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (String, AttrValue)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overwrites_and_keeps() {
        let mut a = Attrs::new().with("x", 1.0).with("text", "a");
        a.merge(Attrs::new().with("text", "b").with("fill", "red"));
        assert_eq!(a.number("x"), Some(1.0));
        assert_eq!(a.text("text"), Some("b"));
        assert_eq!(a.text("fill"), Some("red"));
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn typed_getters_reject_other_kinds() {
        let a = Attrs::new().with("x", "not a number");
        assert_eq!(a.number("x"), None);
        assert_eq!(a.text("x"), Some("not a number"));
    }

    #[test]
    fn vec_converts_to_list() {
        let v: AttrValue = vec!["click", "keydown"].into();
        let list = v.as_list().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].as_text(), Some("keydown"));
    }

    #[test]
    fn display_is_readable() {
        let v: AttrValue = vec![AttrValue::from(1), AttrValue::from("a")].into();
        assert_eq!(v.to_string(), "[1, \"a\"]");
    }
}
