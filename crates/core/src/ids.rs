//! Record identifier generation.
//!
//! Identifiers are `<prefix><n>`. A new identifier takes the larger of
//! `count + 1` and `max_suffix + 1`, so a fresh sequence still starts at
//! `<prefix>1` while deletions can never cause a later insert to reuse the
//! id of a surviving record.

use crate::types::RecordId;

/// Generate the next identifier for a sequence whose current ids are `existing`.
///
/// # Examples
///
/// ```
/// use limpeza_core::ids::next_id;
///
/// assert_eq!(next_id("c", Vec::<&str>::new()), "c1");
/// assert_eq!(next_id("c", ["c1", "c2"]), "c3");
/// assert_eq!(next_id("c", ["c2"]), "c3");
/// ```
pub fn next_id<'a, I>(prefix: &str, existing: I) -> RecordId
where
    I: IntoIterator<Item = &'a str>,
{
    let mut count: u64 = 0;
    let mut max_suffix: u64 = 0;
    for id in existing {
        count += 1;
        if let Some(n) = numeric_suffix(prefix, id) {
            max_suffix = max_suffix.max(n);
        }
    }
    format!("{prefix}{}", count.max(max_suffix) + 1)
}

/// The number following `prefix` in `id`, if `id` has that shape.
pub fn numeric_suffix(prefix: &str, id: &str) -> Option<u64> {
    let digits = id.strip_prefix(prefix)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Interpret a submitted `id` form field.
///
/// Forms always post the hidden `id` input, so an empty value means "create
/// a new record". Any other value is taken verbatim: `" c1 "` targets a
/// record whose id is literally `" c1 "`, not `c1`.
pub fn explicit_id(raw: Option<&str>) -> Option<&str> {
    raw.filter(|id| !id.is_empty())
}
