// src/utils/url.rs

//! URL manipulation utilities.

/// Resolve an href found on the source page against the site origin.
///
/// # Examples
/// ```
/// use feed_crawler::utils::url::resolve;
///
/// assert_eq!(
///     resolve("https://goslar.de", "/files/heft.pdf"),
///     "https://goslar.de/files/heft.pdf"
/// );
/// ```
pub fn resolve(origin: &str, href: &str) -> String {
    let href = href.trim();

    // Already absolute
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }

    let origin = origin.trim_end_matches('/');
    if href.starts_with('/') {
        format!("{origin}{href}")
    } else {
        format!("{origin}/{href}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_absolute_url() {
        assert_eq!(
            resolve("https://goslar.de", "https://cdn.example.com/a.pdf"),
            "https://cdn.example.com/a.pdf"
        );
    }

    #[test]
    fn test_resolve_absolute_path() {
        assert_eq!(
            resolve("https://goslar.de", "/portal/seniorenzeitung/a.pdf"),
            "https://goslar.de/portal/seniorenzeitung/a.pdf"
        );
    }

    #[test]
    fn test_resolve_trailing_slash_origin() {
        assert_eq!(
            resolve("https://goslar.de/", "/a.pdf"),
            "https://goslar.de/a.pdf"
        );
    }

    #[test]
    fn test_resolve_relative_path() {
        assert_eq!(
            resolve("https://goslar.de", "files/a.pdf"),
            "https://goslar.de/files/a.pdf"
        );
    }
}
