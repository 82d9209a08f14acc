//! Key schemas and tag-string parsing.

use crate::field::FieldTags;
use crate::WalkError;

/// Validator run against a key's raw value while the tag is parsed, before
/// any processor sees the field. The error string becomes the message of
/// [`WalkError::Validation`].
pub type KeyValidator = fn(&str) -> Result<(), String>;

/// One named key a schema accepts.
#[derive(Debug, Clone)]
pub struct TagKey {
    name: &'static str,
    is_flag: bool,
    required: bool,
    validator: Option<KeyValidator>,
}

impl TagKey {
    /// A key carrying a value, written `name:value` in the tag.
    pub fn value(name: &'static str) -> Self {
        TagKey {
            name,
            is_flag: false,
            required: false,
            validator: None,
        }
    }

    /// A presence-only flag, written as a bare `name` in the tag.
    pub fn flag(name: &'static str) -> Self {
        TagKey {
            name,
            is_flag: true,
            required: false,
            validator: None,
        }
    }

    /// Mark the key required: parsing fails if the tag omits it.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attach a validator run against the key's value when present.
    pub fn validated(mut self, validator: KeyValidator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// The set of keys one kind of tagged field accepts.
///
/// # Tag syntax
///
/// Entries are separated by `;`. Each entry is either `key:value` (the value
/// is everything after the first `:`, so values may themselves contain `:`)
/// or a bare `key` for flags. Empty entries are ignored, so a trailing `;`
/// is harmless.
#[derive(Debug, Clone)]
pub struct TagSchema {
    keys: Vec<TagKey>,
}

impl TagSchema {
    pub fn new(keys: Vec<TagKey>) -> Self {
        TagSchema { keys }
    }

    fn key(&self, name: &str) -> Option<&TagKey> {
        self.keys.iter().find(|k| k.name == name)
    }

    /// Parse one field's tag string against this schema.
    ///
    /// Rejects unknown and duplicate keys, values on flag keys, and missing
    /// required keys, and runs each present key's validator.
    pub fn parse(&self, raw: &str) -> Result<FieldTags, WalkError> {
        let mut pairs: Vec<(&'static str, Option<String>)> = Vec::new();

        for entry in raw.split(';') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }

            let (name, value) = match entry.split_once(':') {
                Some((name, value)) => (name, Some(value)),
                None => (entry, None),
            };

            let key = self.key(name).ok_or_else(|| WalkError::UnknownKey {
                key: name.to_string(),
            })?;
            if pairs.iter().any(|(seen, _)| *seen == key.name) {
                return Err(WalkError::DuplicateKey {
                    key: name.to_string(),
                });
            }
            if key.is_flag && value.is_some() {
                return Err(WalkError::UnexpectedValue {
                    key: name.to_string(),
                });
            }
            if let (Some(validator), Some(value)) = (key.validator, value) {
                validator(value).map_err(|message| WalkError::Validation {
                    key: key.name,
                    message,
                })?;
            }

            pairs.push((key.name, value.map(str::to_string)));
        }

        for key in &self.keys {
            if key.required && !pairs.iter().any(|(seen, _)| *seen == key.name) {
                return Err(WalkError::MissingKey { key: key.name });
            }
        }

        Ok(FieldTags::new(pairs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reject_odd(value: &str) -> Result<(), String> {
        if value.len() % 2 == 0 {
            Ok(())
        } else {
            Err(format!("odd-length value '{}'", value))
        }
    }

    fn schema() -> TagSchema {
        TagSchema::new(vec![
            TagKey::value("dest").required(),
            TagKey::flag("loud"),
            TagKey::value("body"),
            TagKey::value("even").validated(reject_odd),
        ])
    }

    #[test]
    fn parses_values_and_flags() {
        let tags = schema().parse("dest:a/b;loud;body:hi there").unwrap();
        assert_eq!(tags.key_value("dest"), "a/b");
        assert_eq!(tags.key_value("body"), "hi there");
        assert!(tags.has_key("loud"));
        assert!(!tags.has_key("even"));
    }

    #[test]
    fn value_keeps_everything_after_first_colon() {
        let tags = schema().parse("dest:c:/weird/path").unwrap();
        assert_eq!(tags.key_value("dest"), "c:/weird/path");
    }

    #[test]
    fn absent_key_reads_as_empty_value() {
        let tags = schema().parse("dest:x").unwrap();
        assert_eq!(tags.key_value("body"), "");
    }

    #[test]
    fn empty_entries_are_ignored() {
        let tags = schema().parse("dest:x;;").unwrap();
        assert_eq!(tags.key_value("dest"), "x");
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = schema().parse("dest:x;bogus:1").unwrap_err();
        assert_eq!(
            err,
            WalkError::UnknownKey {
                key: "bogus".to_string()
            }
        );
    }

    #[test]
    fn duplicate_key_is_rejected() {
        let err = schema().parse("dest:x;dest:y").unwrap_err();
        assert_eq!(
            err,
            WalkError::DuplicateKey {
                key: "dest".to_string()
            }
        );
    }

    #[test]
    fn missing_required_key_is_rejected() {
        let err = schema().parse("loud").unwrap_err();
        assert_eq!(err, WalkError::MissingKey { key: "dest" });
    }

    #[test]
    fn flag_with_value_is_rejected() {
        let err = schema().parse("dest:x;loud:yes").unwrap_err();
        assert_eq!(
            err,
            WalkError::UnexpectedValue {
                key: "loud".to_string()
            }
        );
    }

    #[test]
    fn validator_runs_on_present_values() {
        assert!(schema().parse("dest:x;even:ab").is_ok());

        let err = schema().parse("dest:x;even:abc").unwrap_err();
        match err {
            WalkError::Validation { key, message } => {
                assert_eq!(key, "even");
                assert!(message.contains("abc"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
