//! Tag schema, permission validation, and the per-field processor.

use tagfile_walk::{walk_tagged, FieldData, TagKey, TagSchema, TaggedFields};

use crate::error::FileError;
use crate::handle::{FileHandle, MODE_ALL};

/// Destination path. Required; may be relative.
pub const KEY_PATH: &str = "path";
/// Presence-only flag: resolve `path` under the system temp directory.
pub const KEY_TMP: &str = "tmp";
/// Initial file content. Optional, defaults to empty.
pub const KEY_CONTENT: &str = "cnt";
/// Permission bits for created files and directories. Optional numeric
/// string; `0` or absent means [`MODE_ALL`].
pub const KEY_MODE: &str = "prem";

/// Parse a mode value the way tags spell modes: `0x`/`0o`/`0b` prefixes and
/// leading-zero octal are honored, bare digits are decimal. So `prem:0777`
/// is octal 0o777, not seven hundred seventy-seven.
fn parse_mode(value: &str) -> Result<u32, String> {
    if value.is_empty() {
        return Ok(0);
    }

    let lower = value.to_ascii_lowercase();
    let (digits, radix) = if let Some(rest) = lower.strip_prefix("0x") {
        (rest, 16)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (rest, 8)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (rest, 2)
    } else if lower.len() > 1 && lower.starts_with('0') {
        (&lower[1..], 8)
    } else {
        (lower.as_str(), 10)
    };

    u32::from_str_radix(digits, radix)
        .map_err(|_| format!("'{}' must parse as a u32 file mode", value))
}

/// Validator for the `prem` key, run by the walk layer before the processor,
/// so a malformed mode is rejected before any filesystem effect.
pub fn validate_mode(value: &str) -> Result<(), String> {
    parse_mode(value).map(|_| ())
}

/// The tag schema for file-handle declarations: `path` required, `tmp` a
/// bare flag, `cnt` optional, `prem` optional and validated by
/// [`validate_mode`].
pub fn schema() -> TagSchema {
    TagSchema::new(vec![
        TagKey::value(KEY_PATH).required(),
        TagKey::flag(KEY_TMP),
        TagKey::value(KEY_CONTENT),
        TagKey::value(KEY_MODE).validated(validate_mode),
    ])
}

/// Per-field processor: resolve the declared parameters to their effective
/// values, create and write the file, and store the resulting handle in the
/// field.
pub fn process_field(field: FieldData<'_, FileHandle>) -> Result<(), FileError> {
    // `prem` was validated by the schema before this runs, so a parse
    // failure is unreachable; absent reads as empty and parses to 0.
    let mut mode = parse_mode(field.key_value(KEY_MODE)).unwrap_or(0);
    if mode == 0 {
        mode = MODE_ALL;
    }

    let path = field.key_value(KEY_PATH).to_owned();
    let content = field.key_value(KEY_CONTENT).to_owned();
    let in_temp = field.has_key(KEY_TMP);

    let handle = FileHandle::create_at(&path, &content, mode, in_temp)?;
    field.apply_self_value(handle);

    Ok(())
}

/// Turn every tagged field of `data` into a [`FileHandle`] for a file that
/// now exists on disk with its declared content.
///
/// Returns the first schema or I/O error; fields processed before the
/// failure keep their handles and their files stay on disk (no rollback).
pub fn init_file_handles<S>(data: &mut S) -> Result<(), FileError>
where
    S: TaggedFields<FileHandle> + ?Sized,
{
    walk_tagged(data, &schema(), process_field)
}
