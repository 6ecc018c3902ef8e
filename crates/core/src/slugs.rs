//! URL slug generation.
//!
//! Slugs are derived from a display string (title or name), transliterated to
//! Latin so Cyrillic names produce readable URLs. Uniqueness is resolved by
//! appending `-1`, `-2`, ... to the base slug until a free value is found.
//!
//! The lookup of already-taken slugs lives in the db crate; everything here
//! is pure so the disambiguation rule can be tested without a database.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::catalog::litter_display_name;

/// Base used when the source text has no sluggable characters at all.
pub const FALLBACK_SLUG: &str = "untitled";

/// Transliterate, lowercase and hyphenate `text`.
///
/// ```
/// use kennel_core::slugs::slugify;
///
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// ```
pub fn slugify(text: &str) -> String {
    ::slug::slugify(text)
}

/// Like [`slugify`] but never returns an empty string.
pub fn base_slug(text: &str) -> String {
    let slug = slugify(text);
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// The `n`-th disambiguated candidate for `base` (`n == 0` is `base` itself).
pub fn slug_candidate(base: &str, n: u64) -> String {
    if n == 0 {
        base.to_string()
    } else {
        format!("{base}-{n}")
    }
}

/// Pick the first of `base`, `base-1`, `base-2`, ... that is not in `taken`.
///
/// Never fails: `taken` is finite, so a free suffix always exists.
pub fn first_free_slug<S: AsRef<str>>(base: &str, taken: &[S]) -> String {
    let taken: HashSet<&str> = taken.iter().map(AsRef::as_ref).collect();
    (0..)
        .map(|n| slug_candidate(base, n))
        .find(|candidate| !taken.contains(candidate.as_str()))
        .unwrap_or_else(|| base.to_string())
}

/// Whether a stored slug must be re-derived before saving.
///
/// True when there is no slug yet, or when the text the slug was derived
/// from (`previous_source`) differs from the text being saved.
pub fn needs_regeneration(
    current_slug: Option<&str>,
    previous_source: Option<&str>,
    new_source: &str,
) -> bool {
    match current_slug {
        None => true,
        Some(slug) if slug.is_empty() => true,
        Some(_) => previous_source != Some(new_source),
    }
}

/// Text a litter slug is derived from: the litter's display name.
pub fn litter_slug_source(
    father: Option<&str>,
    mother: Option<&str>,
    birth_date: Option<NaiveDate>,
) -> String {
    litter_display_name(father, mother, birth_date)
}
