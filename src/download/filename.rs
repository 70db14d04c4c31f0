//! Case title to filename conversion.
//!
//! Case names returned by the search API are free text ("Marbury v. Madison,
//! 5 U.S. 137"). They are turned into filename stems by stripping characters
//! that are reserved on common filesystems and capping the length so a
//! directory prefix and extension still fit under path limits.

/// Maximum number of characters kept from a cleaned case title.
pub const MAX_TITLE_CHARS: usize = 225;

/// Characters removed from case titles.
///
/// `â`, `€` and `™` are the mojibake rendering of a right single quote that
/// shows up in some case names.
pub const RESERVED_TITLE_CHARS: [char; 16] = [
    '\\', '/', '*', '?', ':', '"', '<', '>', '\'', 'â', '€', '™', '.', ',', '|', ';',
];

/// Converts a case title into a filename stem.
///
/// Every character in [`RESERVED_TITLE_CHARS`] is dropped, the remaining
/// characters keep their order, and the result is truncated to
/// [`MAX_TITLE_CHARS`] characters. Defined for every input, including the
/// empty string.
#[must_use]
pub fn clean_case_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| !RESERVED_TITLE_CHARS.contains(c))
        .take(MAX_TITLE_CHARS)
        .collect()
}
