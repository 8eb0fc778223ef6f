/// Build an absolute URL from a base URL and a path
pub fn absolute_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base_url.trim_end_matches('/');
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return format!("{}/", base);
    }
    format!("{}/{}", base, trimmed)
}

/// Link that re-runs the landing search for `query`.
pub fn search_href(query: &str) -> String {
    format!("/search?query={}", urlencoding::encode(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_url_joins_single_slash() {
        assert_eq!(absolute_url("http://localhost:8080/", "/chat"), "http://localhost:8080/chat");
        assert_eq!(absolute_url("http://localhost:8080", "dashboard"), "http://localhost:8080/dashboard");
        assert_eq!(absolute_url("http://localhost:8080", "/"), "http://localhost:8080/");
    }

    #[test]
    fn test_absolute_url_passes_through_absolute() {
        assert_eq!(absolute_url("http://a", "https://b/c"), "https://b/c");
    }

    #[test]
    fn test_search_href_encodes_query() {
        assert_eq!(search_href("cognitive ability test"), "/search?query=cognitive%20ability%20test");
    }
}
