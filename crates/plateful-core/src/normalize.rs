//! String normalization applied to accepted form values.
//!
//! Every function here is idempotent: applying it to its own output returns
//! the same string. The validation pipeline relies on that when it re-runs
//! over an already-normalized draft.

/// Collapse interior whitespace runs to single spaces and trim both ends.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lowercase the input, then capitalize the first letter of each word.
pub fn capitalize_words(value: &str) -> String {
    value
        .to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Derive the URL extension for a value: lowercase, whitespace replaced with
/// hyphens, with a leading slash (`"Beef Stew"` -> `"/beef-stew"`).
pub fn slugify(value: &str) -> String {
    let dashed: String = value
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect();
    format!("/{}", dashed)
}
