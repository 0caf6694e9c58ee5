//! Dual-case noun substitution

/// Replace `canonical` with `replacement` throughout `content`.
///
/// Two passes, in this order: the noun exactly as given, then its lowercase
/// form against the lowercased replacement. Matching is plain substring
/// matching, so a noun embedded in a longer word ("Restaurants",
/// "restaurateur") is rewritten too.
pub fn substitute(content: &str, canonical: &str, replacement: &str) -> String {
    content
        .replace(canonical, replacement)
        .replace(&canonical.to_lowercase(), &replacement.to_lowercase())
}
