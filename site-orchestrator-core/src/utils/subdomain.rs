//! Subdomain syntax and uniqueness checks.
//!
//! Subdomains become DNS labels under the hosting base domain, so the
//! syntax mirrors RFC 1035 label rules. Candidates are case-folded before
//! any check, which makes `MyBlog` and `myblog` the same label.
//! Every function here is pure.

use crate::types::SubdomainRejection;

/// Maximum length of a DNS label
pub const MAX_SUBDOMAIN_LEN: usize = 63;

/// Case-fold a subdomain for comparison and storage.
#[must_use]
pub fn normalize_subdomain(subdomain: &str) -> String {
    subdomain.to_lowercase()
}

/// Check the syntax of a candidate without looking at existing sites.
pub fn check_syntax(candidate: &str) -> Result<(), SubdomainRejection> {
    let candidate = normalize_subdomain(candidate);
    if candidate.is_empty() {
        return Err(SubdomainRejection::Empty);
    }
    if candidate.chars().count() > MAX_SUBDOMAIN_LEN {
        return Err(SubdomainRejection::TooLong);
    }
    let allowed = candidate
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !allowed || candidate.starts_with('-') || candidate.ends_with('-') {
        return Err(SubdomainRejection::BadCharacters);
    }
    Ok(())
}

/// Validate syntax, then uniqueness against `existing` (case-insensitive).
pub fn validate_subdomain<'a, I>(candidate: &str, existing: I) -> Result<(), SubdomainRejection>
where
    I: IntoIterator<Item = &'a str>,
{
    check_syntax(candidate)?;

    let normalized = normalize_subdomain(candidate);
    if existing
        .into_iter()
        .any(|taken| normalize_subdomain(taken) == normalized)
    {
        return Err(SubdomainRejection::AlreadyTaken);
    }
    Ok(())
}
