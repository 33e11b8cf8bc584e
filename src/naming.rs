//! File naming for image sidecars.
//!
//! Images without an explicit name get one from a [`NameStrategy`]. The
//! default [`RandomNames`] strategy combines a sanitized title with a short
//! random suffix; tests can pass any `Fn(Option<&str>) -> String` instead.

use uuid::Uuid;

/// Characters used for random name segments.
const RANDOM_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of the random suffix appended to a sanitized title.
pub const TITLE_SUFFIX_LEN: usize = 4;

/// Length of a fully random name.
pub const RANDOM_NAME_LEN: usize = 10;

/// Derives a file stem for an image that has no explicit name.
pub trait NameStrategy {
    /// Produce a file stem, given the image title if any.
    fn name_for(&self, title: Option<&str>) -> String;
}

impl<F> NameStrategy for F
where
    F: Fn(Option<&str>) -> String,
{
    fn name_for(&self, title: Option<&str>) -> String {
        self(title)
    }
}

/// Default naming: `<sanitized-title>_<4 random>` or `<10 random>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomNames;

impl NameStrategy for RandomNames {
    fn name_for(&self, title: Option<&str>) -> String {
        match title.filter(|t| !t.is_empty()) {
            Some(title) => format!(
                "{}_{}",
                sanitize_title(title),
                random_string(TITLE_SUFFIX_LEN)
            ),
            None => random_string(RANDOM_NAME_LEN),
        }
    }
}

/// Make a title safe for use as a file stem.
///
/// Lowercases, keeps ASCII letters, digits, `_` and `-`, turns spaces into
/// `-` and drops everything else.
pub fn sanitize_title(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            'a'..='z' | '0'..='9' | '_' | '-' => Some(c),
            ' ' => Some('-'),
            _ => None,
        })
        .collect()
}

/// Random string of uppercase ASCII letters and digits.
pub fn random_string(len: usize) -> String {
    let mut out = String::with_capacity(len);
    while out.len() < len {
        let bytes = Uuid::new_v4();
        for idx in bytes.as_bytes().iter().filter_map(|&b| charset_index(b)) {
            if out.len() == len {
                break;
            }
            out.push(RANDOM_CHARSET[idx] as char);
        }
    }
    out
}

/// Map a random byte onto the charset, rejecting the bytes past the last
/// whole multiple of its length so every character is equally likely.
fn charset_index(byte: u8) -> Option<usize> {
    let n = RANDOM_CHARSET.len();
    let limit = 256 - 256 % n;
    let byte = byte as usize;
    (byte < limit).then(|| byte % n)
}
