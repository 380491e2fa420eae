use crate::{Error, Result};
use lazy_regex::regex_is_match;

/// True for dot separated labels made of `[a-z0-9_-]`, lowercase only.
pub fn is_hostname(name: &str) -> bool {
    regex_is_match!(r"^[a-z0-9_-]+(\.[a-z0-9_-]+)*$", name)
}

/// Turns operator input like `https://www.Example.com/` into `example.com`.
pub fn clean_domain(input: &str) -> Result<String> {
    let mut domain = input.trim().to_lowercase();

    for prefix in ["https://", "http://", "www."] {
        if let Some(stripped) = domain.strip_prefix(prefix) {
            domain = stripped.to_string();
        }
    }
    let domain = domain.trim_end_matches('/');

    if !domain.contains('.') || !is_hostname(domain) {
        return Err(Error::InvalidDomain(input.to_string()));
    }

    Ok(domain.to_string())
}
