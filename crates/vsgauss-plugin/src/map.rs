use std::collections::BTreeMap;

use crate::{error::FilterError, node::Node, signature::ArgKind};

/// A value stored in a [`PropertyMap`].
#[derive(Clone)]
pub enum Property {
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// String data.
    Data(String),
    /// A node handle.
    Clip(Node),
}

impl Property {
    /// Get the kind of the value.
    pub fn kind(&self) -> ArgKind {
        match self {
            Property::Int(_) => ArgKind::Int,
            Property::Float(_) => ArgKind::Float,
            Property::Data(_) => ArgKind::Data,
            Property::Clip(_) => ArgKind::Clip,
        }
    }
}

impl std::fmt::Debug for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Property::Int(v) => write!(f, "Int({v})"),
            Property::Float(v) => write!(f, "Float({v})"),
            Property::Data(v) => write!(f, "Data({v:?})"),
            Property::Clip(node) => write!(f, "Clip({:?})", node.video_info()),
        }
    }
}

/// Named arguments passed to and returned from plugin functions.
#[derive(Clone, Debug, Default)]
pub struct PropertyMap {
    entries: BTreeMap<String, Property>,
}

impl PropertyMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: Property) {
        self.entries.insert(key.into(), value);
    }

    /// Get the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Property> {
        self.entries.get(key)
    }

    /// Whether a value is stored under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over the keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup(&self, key: &str) -> Result<&Property, FilterError> {
        self.get(key)
            .ok_or_else(|| FilterError::MissingArgument(key.to_string()))
    }

    /// Get the node stored under `key`.
    pub fn get_clip(&self, key: &str) -> Result<Node, FilterError> {
        match self.lookup(key)? {
            Property::Clip(node) => Ok(node.clone()),
            other => Err(wrong_kind(key, ArgKind::Clip, other)),
        }
    }

    /// Get the integer stored under `key`.
    pub fn get_int(&self, key: &str) -> Result<i64, FilterError> {
        match self.lookup(key)? {
            Property::Int(v) => Ok(*v),
            other => Err(wrong_kind(key, ArgKind::Int, other)),
        }
    }

    /// Get the float stored under `key`.
    pub fn get_float(&self, key: &str) -> Result<f64, FilterError> {
        match self.lookup(key)? {
            Property::Float(v) => Ok(*v),
            other => Err(wrong_kind(key, ArgKind::Float, other)),
        }
    }

    /// Get the string stored under `key`.
    pub fn get_data(&self, key: &str) -> Result<&str, FilterError> {
        match self.lookup(key)? {
            Property::Data(v) => Ok(v.as_str()),
            other => Err(wrong_kind(key, ArgKind::Data, other)),
        }
    }
}

fn wrong_kind(key: &str, expected: ArgKind, found: &Property) -> FilterError {
    FilterError::WrongArgumentType {
        key: key.to_string(),
        expected,
        found: found.kind(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use vsgauss_image::VideoFormat;

    use super::*;
    use crate::clip::MemoryClip;

    #[test]
    fn property_map_getters() -> Result<(), FilterError> {
        let mut map = PropertyMap::new();
        assert!(map.is_empty());

        map.set("radius", Property::Int(2));
        map.set("sigma", Property::Float(1.5));
        map.set("name", Property::Data("blur".to_string()));
        map.set(
            "clip",
            Property::Clip(Arc::new(MemoryClip::blank(
                VideoFormat::GRAYS,
                [2, 2].into(),
                1,
                0.0,
            )?)),
        );

        assert_eq!(map.len(), 4);
        assert_eq!(map.get_int("radius")?, 2);
        assert_eq!(map.get_float("sigma")?, 1.5);
        assert_eq!(map.get_data("name")?, "blur");
        assert_eq!(map.get_clip("clip")?.video_info().num_frames, 1);
        assert_eq!(
            map.keys().collect::<Vec<_>>(),
            vec!["clip", "name", "radius", "sigma"]
        );
        Ok(())
    }

    #[test]
    fn property_map_errors() {
        let mut map = PropertyMap::new();
        map.set("clip", Property::Int(1));

        assert!(matches!(
            map.get_clip("missing"),
            Err(FilterError::MissingArgument(key)) if key == "missing"
        ));
        assert!(matches!(
            map.get_clip("clip"),
            Err(FilterError::WrongArgumentType {
                expected: ArgKind::Clip,
                found: ArgKind::Int,
                ..
            })
        ));
    }

    #[test]
    fn property_map_set_replaces() -> Result<(), FilterError> {
        let mut map = PropertyMap::new();
        map.set("value", Property::Int(1));
        map.set("value", Property::Data("two".to_string()));
        assert_eq!(map.len(), 1);
        assert!(map.contains_key("value"));
        assert_eq!(map.get_data("value")?, "two");
        Ok(())
    }
}
