//! Attribute-name conversion applied to marshalled output names.

/// Separator recognized in attribute names.
pub const SEPARATOR: char = '_';

/// Convert a separator-delimited attribute name to camelCase.
///
/// The first segment is kept as-is; every later segment is capitalized and
/// concatenated. A name containing no separator is returned unchanged, so the
/// conversion is idempotent on its own output.
#[must_use]
pub fn camel_case(name: &str) -> String {
    let mut segments = name.split(SEPARATOR);
    let mut out = String::with_capacity(name.len());

    if let Some(head) = segments.next() {
        out.push_str(head);
    }
    for segment in segments {
        out.push_str(&capitalize(segment));
    }

    out
}

/// Uppercase the first character and lowercase the remainder.
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

///
/// TESTS
///
