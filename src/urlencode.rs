//! Percent-encoding for URLs and request paths.

use pct_str::{Encoder, PctStr, PctString};

/// Characters left alone by [`urlencode`]: alphanumerics, `-._~` and `/`.
struct FilterSafe;

/// Characters left alone in reversed route arguments: the unreserved set,
/// the RFC 3986 sub-delimiters, `/`, `:` and `@`.
struct PathSafe;

impl Encoder for FilterSafe {
    fn encode(&self, c: char) -> bool {
        !(c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~' | '/'))
    }
}

impl Encoder for PathSafe {
    fn encode(&self, c: char) -> bool {
        !(c.is_ascii_alphanumeric()
            || matches!(
                c,
                '-' | '.'
                    | '_'
                    | '~'
                    | '/'
                    | ':'
                    | '@'
                    | '!'
                    | '$'
                    | '&'
                    | '\''
                    | '('
                    | ')'
                    | '*'
                    | '+'
                    | ','
                    | ';'
                    | '='
            ))
    }
}

/// Percent-encodes everything except alphanumerics, `-._~` and `/`.
///
/// Non-ASCII characters are encoded as their UTF-8 bytes.
///
/// # Examples
///
/// ```
/// use volume_header::urlencode::urlencode;
///
/// assert_eq!(urlencode("/books/emory:7tk5v/"), "/books/emory%3A7tk5v/");
/// ```
pub fn urlencode(s: &str) -> String {
    PctString::encode(s.chars(), FilterSafe).to_string()
}

/// Percent-encodes a route argument for substitution into a path.
pub(crate) fn encode_path_arg(s: &str) -> String {
    PctString::encode(s.chars(), PathSafe).to_string()
}

/// Returns `true` if `request_path` is the page at `canonical`.
///
/// The canonical URL is compared in its [`urlencode`]d form. The request path
/// is percent-decoded first, or used as-is if it is not validly encoded, and
/// then encoded the same way so that both raw and decoded request paths match.
///
/// # Examples
///
/// ```
/// use volume_header::urlencode::is_current;
///
/// assert!(is_current("/books/emory:7tk5v/", "/books/emory:7tk5v/"));
/// assert!(is_current("/books/emory:7tk5v/", "/books/emory%3A7tk5v/"));
/// assert!(!is_current("/books/emory:7tk5v/", "/books/emory:7tk5v/pages/"));
/// ```
pub fn is_current(canonical: &str, request_path: &str) -> bool {
    let request = match PctStr::new(request_path) {
        Ok(p) => p.decode(),
        Err(_) => request_path.to_owned(),
    };
    urlencode(canonical) == urlencode(&request)
}
