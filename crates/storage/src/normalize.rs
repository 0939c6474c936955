use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonicalizes a display name into the form used for searching and
/// duplicate detection.
///
/// The steps are: NFD-decompose and drop combining diacritical marks, replace
/// every character outside `[A-Za-z0-9 ]` with a space, collapse whitespace
/// runs, trim, lowercase. The result is stable under repeated application,
/// so "João", "JOAO" and "joao!" all map to the same key.
///
/// # Examples
///
/// ```
/// use storage::normalize::normalize_name;
///
/// assert_eq!(normalize_name("João  da Silva"), "joao da silva");
/// assert_eq!(normalize_name("MARIA-JOSÉ"), "maria jose");
/// ```
pub fn normalize_name(value: &str) -> String {
    let stripped: String = value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();

    stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
