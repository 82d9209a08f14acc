//! The field visitor trait and the walk driver.

use crate::field::FieldData;
use crate::schema::TagSchema;
use crate::WalkError;

/// One tagged field before its tag has been parsed: the declared field name,
/// the raw tag string, and exclusive access to the field's slot.
pub struct RawField<'a, V> {
    pub name: &'static str,
    pub tag: &'static str,
    pub slot: &'a mut V,
}

/// A struct whose tagged fields of type `V` can be visited in declaration
/// order with exclusive access.
///
/// Implement this with the [`tag_fields!`](crate::tag_fields) macro rather
/// than by hand; the macro keeps the field list and the tag strings next to
/// the type they describe.
pub trait TaggedFields<V> {
    /// Visit every tagged field, stopping at the first error.
    fn for_each_field<E>(
        &mut self,
        visit: &mut impl FnMut(RawField<'_, V>) -> Result<(), E>,
    ) -> Result<(), E>;
}

/// Walk every tagged field of `data`: parse its tag against `schema`, then
/// hand the resulting [`FieldData`] to `processor`.
///
/// Schema errors and processor errors share the caller's error type `E`;
/// the first of either aborts the walk. Fields already processed keep
/// whatever the processor did to them - there is no rollback.
pub fn walk_tagged<S, V, E, P>(data: &mut S, schema: &TagSchema, mut processor: P) -> Result<(), E>
where
    S: TaggedFields<V> + ?Sized,
    E: From<WalkError>,
    P: FnMut(FieldData<'_, V>) -> Result<(), E>,
{
    data.for_each_field(&mut |raw: RawField<'_, V>| {
        let tags = schema.parse(raw.tag).map_err(E::from)?;
        processor(FieldData::new(raw.name, tags, raw.slot))
    })
}

/// Implements [`TaggedFields`] for a struct, declaring which fields carry
/// tags and what those tags say.
///
/// ```rust
/// use tagfile_walk::tag_fields;
///
/// #[derive(Default)]
/// struct Outputs {
///     report: String,
///     summary: String,
/// }
///
/// tag_fields!(Outputs: String {
///     report: "dest:out/report.txt",
///     summary: "dest:out/summary.txt;loud",
/// });
/// ```
///
/// Each listed field must be declared as exactly the value type; a mismatch
/// is a compile error at the generated `&mut self.field` borrow.
#[macro_export]
macro_rules! tag_fields {
    ($ty:ty : $value:ty { $($field:ident : $tag:expr),+ $(,)? }) => {
        impl $crate::TaggedFields<$value> for $ty {
            fn for_each_field<E>(
                &mut self,
                visit: &mut impl FnMut($crate::RawField<'_, $value>) -> ::core::result::Result<(), E>,
            ) -> ::core::result::Result<(), E> {
                $(
                    visit($crate::RawField {
                        name: stringify!($field),
                        tag: $tag,
                        slot: &mut self.$field,
                    })?;
                )+
                ::core::result::Result::Ok(())
            }
        }
    };
}
