/// Extract the host (and port, if any) from a URL string, dropping the
/// scheme, credentials, path and query.
pub fn hostname_from_url(u: &str) -> String {
    let s = u.trim();
    if s.is_empty() {
        return "".into();
    }
    let s = match s.find("://") {
        Some(idx) => &s[idx + 3..],
        None => s,
    };
    let authority = s.split(['/', '?', '#']).next().unwrap_or(s);
    let host = match authority.rfind('@') {
        Some(idx) => &authority[idx + 1..],
        None => authority,
    };
    host.to_string()
}
