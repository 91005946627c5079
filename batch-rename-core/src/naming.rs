//! Pure name computation: no filesystem access happens here.

use std::ffi::{OsStr, OsString};

use crate::options::RenameOptions;

/// Split a file name into stem and extension.
///
/// The extension runs from the last `.` to the end, dot included. A name
/// whose only dot is its first character (`.bashrc`) has no extension.
pub fn split_extension(name: &str) -> (&str, &str) {
    name.split_at(extension_start(name.as_bytes()))
}

fn extension_start(name: &[u8]) -> usize {
    match name.iter().rposition(|&byte| byte == b'.') {
        Some(idx) if idx > 0 => idx,
        _ => name.len(),
    }
}

/// Stem produced by `--enumerate`, zero padded to at least four digits.
pub fn enumerated_stem(base: &str, index: usize) -> String {
    format!("{base}_{index:04}")
}

/// Compute the new file name for `name`.
///
/// Applied in a fixed order: enumeration replaces the stem, then the suffix
/// is appended, then the prefix is prepended, the extension is put back and
/// finally the case conversion runs over the whole name.
pub fn compute_new_name(name: &str, options: &RenameOptions, index: usize) -> String {
    let (stem, extension) = split_extension(name);

    let mut new_stem = match options.enumerate.as_deref() {
        Some(base) => enumerated_stem(base, index),
        None => stem.to_string(),
    };

    if let Some(suffix) = options.suffix.as_deref() {
        new_stem.push_str(suffix);
    }

    if let Some(prefix) = options.prefix.as_deref() {
        new_stem.insert_str(0, prefix);
    }

    new_stem.push_str(extension);
    options.case.apply(new_stem)
}

/// [`compute_new_name`] for names straight from the filesystem.
///
/// Names that are not valid UTF-8 are transformed byte-wise with their
/// original bytes kept. Returns `None` when the platform cannot build such
/// a name from bytes.
pub fn compute_new_os_name(
    name: &OsStr,
    options: &RenameOptions,
    index: usize,
) -> Option<OsString> {
    if let Some(name) = name.to_str() {
        return Some(compute_new_name(name, options, index).into());
    }

    let bytes = name.as_encoded_bytes();
    let (stem, extension) = bytes.split_at(extension_start(bytes));

    let mut new_name = Vec::with_capacity(bytes.len() + 16);
    if let Some(prefix) = options.prefix.as_deref() {
        new_name.extend_from_slice(prefix.as_bytes());
    }
    match options.enumerate.as_deref() {
        Some(base) => new_name.extend_from_slice(enumerated_stem(base, index).as_bytes()),
        None => new_name.extend_from_slice(stem),
    }
    if let Some(suffix) = options.suffix.as_deref() {
        new_name.extend_from_slice(suffix.as_bytes());
    }
    new_name.extend_from_slice(extension);

    os_string_from_bytes(options.case.apply_bytes(new_name))
}

#[cfg(unix)]
#[allow(clippy::unnecessary_wraps)]
fn os_string_from_bytes(bytes: Vec<u8>) -> Option<OsString> {
    use std::os::unix::ffi::OsStringExt;
    Some(OsString::from_vec(bytes))
}

#[cfg(not(unix))]
fn os_string_from_bytes(bytes: Vec<u8>) -> Option<OsString> {
    String::from_utf8(bytes).ok().map(OsString::from)
}
