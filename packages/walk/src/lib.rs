//! Tagged-field walking for tagfile.
//!
//! This is the mechanism layer of the tagfile stack. It knows how to parse a
//! field's tag string against a declared key schema and drive a processor
//! callback over every tagged field of a struct - and nothing else. No I/O,
//! no file semantics; those belong to the layer above.
//!
//! Rust has no runtime reflection, so "walk the annotated fields of a struct"
//! is a capability handed over per struct type: the [`tag_fields!`] macro
//! implements [`TaggedFields`] for a type, giving the walker named, exclusive
//! access to each tagged field slot.
//!
//! # Example
//!
//! ```rust
//! use tagfile_walk::{walk_tagged, TagKey, TagSchema, WalkError};
//!
//! #[derive(Default)]
//! struct Labels {
//!     greeting: String,
//! }
//!
//! tagfile_walk::tag_fields!(Labels: String {
//!     greeting: "text:hello",
//! });
//!
//! let schema = TagSchema::new(vec![TagKey::value("text").required()]);
//! let mut labels = Labels::default();
//! walk_tagged(&mut labels, &schema, |field| -> Result<(), WalkError> {
//!     let text = field.key_value("text").to_owned();
//!     field.apply_self_value(text);
//!     Ok(())
//! })
//! .unwrap();
//! assert_eq!(labels.greeting, "hello");
//! ```

mod error;
mod field;
mod schema;
mod traits;

pub use error::WalkError;
pub use field::{FieldData, FieldTags};
pub use schema::{KeyValidator, TagKey, TagSchema};
pub use traits::{walk_tagged, RawField, TaggedFields};
