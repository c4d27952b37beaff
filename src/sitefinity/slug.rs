//! URL names for new content.

pub const MAX_URL_NAME_LEN: usize = 100;

/// Derive a Sitefinity `UrlName` from a title.
///
/// Lowercases, turns spaces into hyphens, drops everything outside
/// `[a-z0-9-]`, collapses hyphen runs, trims hyphens at both ends and caps
/// the result at [`MAX_URL_NAME_LEN`] characters.
pub fn url_name(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.to_lowercase().chars() {
        let c = if c == ' ' { '-' } else { c };
        if !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-') {
            continue;
        }
        if c == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(c);
    }

    let trimmed = slug.trim_matches('-');
    trimmed.chars().take(MAX_URL_NAME_LEN).collect()
}
