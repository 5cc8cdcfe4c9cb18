/// Joins a backend base URL with an endpoint path.
///
/// An empty base means "same origin", so the path is returned as-is and stays
/// root-relative. Otherwise exactly one `/` separates the two halves, and a
/// root path `"/"` keeps its trailing slash like plain concatenation does.
pub fn join_url(base: &str, path: &str) -> String {
    if base.is_empty() {
        return path.to_string();
    }

    let base = base.trim_end_matches('/');
    let trimmed = path.trim_start_matches('/');

    if trimmed.is_empty() && path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, trimmed)
    }
}

/// Strips the scheme (`https://`) so separator checks only see the host and path.
#[cfg(test)]
fn without_scheme(url: &str) -> &str {
    url.split_once("://").map(|(_, rest)| rest).unwrap_or(url)
}

/// True when the URL has no doubled separator after its scheme.
#[cfg(test)]
pub(crate) fn has_clean_separators(url: &str) -> bool {
    !without_scheme(url).contains("//")
}
