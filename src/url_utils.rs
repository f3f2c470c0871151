//! URL validation.
//!
//! A scan only starts for an absolute `http`/`https` URL with a plausible
//! host, and (optionally) after a pre-flight request proved the host
//! answers at all. The HTTP status of that pre-flight request is ignored;
//! only transport failures count.

use reqwest::blocking::Client;
use tracing::debug;
use url::{Host, Url};

use crate::error::{Error, Result};

/// Check URL syntax and scheme, returning the parsed URL.
///
/// Accepted hosts are IP addresses, `localhost`, and dotted domain names
/// whose labels are 1-63 characters of letters, digits and inner hyphens,
/// with an alphabetic (or punycode) top-level label.
///
/// # Example
///
/// ```rust
/// use keyword_frequency::url_utils::validate_url;
///
/// assert!(validate_url("https://www.python.org/").is_ok());
/// assert!(validate_url("ftp://example.com/").is_err());
/// assert!(validate_url("https://www..pl/").is_err());
/// ```
pub fn validate_url(url: &str) -> Result<Url> {
    if url.trim().is_empty() {
        return Err(Error::invalid_url(url, "url is empty"));
    }

    let parsed = Url::parse(url).map_err(|e| Error::invalid_url(url, e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(Error::invalid_url(
                url,
                format!("unsupported scheme '{other}', expected http or https"),
            ))
        }
    }

    match parsed.host() {
        None => return Err(Error::invalid_url(url, "url has no host")),
        Some(Host::Domain(domain)) => {
            if let Err(reason) = check_domain(domain) {
                return Err(Error::invalid_url(url, reason));
            }
        }
        Some(Host::Ipv4(_) | Host::Ipv6(_)) => {}
    }

    Ok(parsed)
}

/// Issue a throwaway GET to make sure the page can be reached.
///
/// Any transport error (DNS, refused connection, TLS, timeout) is reported
/// as [`Error::Unreachable`]. The body is not read.
pub fn check_reachable(client: &Client, url: &Url) -> Result<()> {
    let response = client.get(url.clone()).send().map_err(|source| Error::Unreachable {
        url: url.to_string(),
        source,
    })?;

    debug!(url = %url, status = response.status().as_u16(), "reachability check passed");
    Ok(())
}

fn check_domain(domain: &str) -> std::result::Result<(), String> {
    let domain = domain.strip_suffix('.').unwrap_or(domain);

    if domain.eq_ignore_ascii_case("localhost") {
        return Ok(());
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return Err(format!("host '{domain}' has no top-level domain"));
    }

    for label in &labels {
        if label.is_empty() {
            return Err(format!("host '{domain}' contains an empty label"));
        }
        if label.len() > 63 {
            return Err(format!("host label '{label}' is longer than 63 characters"));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(format!("host label '{label}' starts or ends with a hyphen"));
        }
        if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(format!("host label '{label}' contains invalid characters"));
        }
    }

    let tld = labels[labels.len() - 1];
    let tld_ok = tld.starts_with("xn--") || (tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()));
    if !tld_ok {
        return Err(format!("'{tld}' is not a valid top-level domain"));
    }

    Ok(())
}
