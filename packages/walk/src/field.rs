//! Field descriptors handed to processors.

/// The parsed key/value pairs of one field's tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTags {
    pairs: Vec<(&'static str, Option<String>)>,
}

impl FieldTags {
    pub(crate) fn new(pairs: Vec<(&'static str, Option<String>)>) -> Self {
        FieldTags { pairs }
    }

    /// The value of `name`, or the empty string when the key is absent or a
    /// bare flag.
    pub fn key_value(&self, name: &str) -> &str {
        self.pairs
            .iter()
            .find(|(key, _)| *key == name)
            .and_then(|(_, value)| value.as_deref())
            .unwrap_or("")
    }

    /// Whether `name` appears in the tag at all.
    pub fn has_key(&self, name: &str) -> bool {
        self.pairs.iter().any(|(key, _)| *key == name)
    }
}

/// One visited field: its name, its parsed tags, and exclusive access to the
/// field slot in the caller's struct.
pub struct FieldData<'a, V> {
    name: &'static str,
    tags: FieldTags,
    slot: &'a mut V,
}

impl<'a, V> FieldData<'a, V> {
    pub(crate) fn new(name: &'static str, tags: FieldTags, slot: &'a mut V) -> Self {
        FieldData { name, tags, slot }
    }

    /// The struct field's name, as declared.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// See [`FieldTags::key_value`].
    pub fn key_value(&self, key: &str) -> &str {
        self.tags.key_value(key)
    }

    /// See [`FieldTags::has_key`].
    pub fn has_key(&self, key: &str) -> bool {
        self.tags.has_key(key)
    }

    /// Overwrite the field in the caller's struct with `value`.
    ///
    /// Consumes the descriptor: once a processor has produced the field's
    /// final value there is nothing left to inspect.
    pub fn apply_self_value(self, value: V) {
        *self.slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_value_and_presence() {
        let tags = FieldTags::new(vec![
            ("dest", Some("a/b".to_string())),
            ("loud", None),
        ]);
        assert_eq!(tags.key_value("dest"), "a/b");
        assert_eq!(tags.key_value("loud"), "");
        assert_eq!(tags.key_value("absent"), "");
        assert!(tags.has_key("loud"));
        assert!(!tags.has_key("absent"));
    }

    #[test]
    fn apply_self_value_overwrites_slot() {
        let mut slot = 1u32;
        let field = FieldData::new("answer", FieldTags::new(Vec::new()), &mut slot);
        assert_eq!(field.name(), "answer");
        field.apply_self_value(42);
        assert_eq!(slot, 42);
    }
}
