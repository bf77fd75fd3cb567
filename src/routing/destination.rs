//! Destination URI parsing.
//!
//! `url::Url` follows the WHATWG rules, which repair input (percent-encoding
//! spaces, trimming, inserting `//`). Destinations come from configuration,
//! so anything that is not already an RFC 3986 URI is rejected before it
//! reaches the parser.

use thiserror::Error;
use url::Url;

/// Schemes that require an authority (`scheme://host`).
const SPECIAL_SCHEMES: &[&str] = &["http", "https", "ws", "wss", "ftp", "file"];

/// Why a destination string is not a valid URI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UriSyntaxError {
    #[error("invalid character {ch:?} at byte {at}")]
    InvalidCharacter { ch: char, at: usize },

    #[error("incomplete percent-encoding at byte {at}")]
    BadPercentEncoding { at: usize },

    #[error("missing or invalid scheme")]
    InvalidScheme,

    #[error("scheme '{0}' requires '//' and an authority")]
    MissingAuthority(String),

    #[error(transparent)]
    Parse(#[from] url::ParseError),
}

fn is_uri_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"-._~:/?#[]@!$&'()*+,;=%".contains(&b)
}

/// Parse an absolute URI, rejecting anything the WHATWG parser would repair.
pub fn parse_destination(input: &str) -> Result<Url, UriSyntaxError> {
    let bytes = input.as_bytes();

    for (at, ch) in input.char_indices() {
        if !ch.is_ascii() || !is_uri_char(ch as u8) {
            return Err(UriSyntaxError::InvalidCharacter { ch, at });
        }
        if ch == '%' {
            let hex = bytes.get(at + 1..at + 3);
            if !hex.is_some_and(|h| h.iter().all(u8::is_ascii_hexdigit)) {
                return Err(UriSyntaxError::BadPercentEncoding { at });
            }
        }
    }

    let (scheme, rest) = input.split_once(':').ok_or(UriSyntaxError::InvalidScheme)?;
    let valid_scheme = scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !valid_scheme {
        return Err(UriSyntaxError::InvalidScheme);
    }

    let scheme = scheme.to_ascii_lowercase();
    if SPECIAL_SCHEMES.contains(&scheme.as_str()) && !rest.starts_with("//") {
        return Err(UriSyntaxError::MissingAuthority(scheme));
    }

    Ok(Url::parse(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_well_formed() {
        for uri in [
            "http://example.com",
            "https://user@backend.internal:8443/v1/a%20b?x=1&y=[2]#frag",
            "lb://orders-service",
            "mailto:ops@example.com",
        ] {
            assert!(parse_destination(uri).is_ok(), "{}", uri);
        }
    }

    #[test]
    fn test_rejects_what_whatwg_would_repair() {
        assert_eq!(
            parse_destination("http://example.com/a b"),
            Err(UriSyntaxError::InvalidCharacter { ch: ' ', at: 20 })
        );
        assert!(matches!(
            parse_destination(" http://example.com/x\t"),
            Err(UriSyntaxError::InvalidCharacter { ch: ' ', at: 0 })
        ));
        assert_eq!(
            parse_destination("http:example.com"),
            Err(UriSyntaxError::MissingAuthority("http".into()))
        );
        assert!(matches!(
            parse_destination("http://example.com/{x}|^"),
            Err(UriSyntaxError::InvalidCharacter { ch: '{', .. })
        ));
    }

    #[test]
    fn test_rejects_bad_percent_and_non_ascii() {
        assert_eq!(
            parse_destination("http://example.com/%zz"),
            Err(UriSyntaxError::BadPercentEncoding { at: 19 })
        );
        assert_eq!(
            parse_destination("http://example.com/%4"),
            Err(UriSyntaxError::BadPercentEncoding { at: 19 })
        );
        assert!(matches!(
            parse_destination("http://exämple.com"),
            Err(UriSyntaxError::InvalidCharacter { ch: 'ä', .. })
        ));
    }

    #[test]
    fn test_rejects_missing_scheme() {
        assert_eq!(parse_destination("example.com"), Err(UriSyntaxError::InvalidScheme));
        assert_eq!(parse_destination("1http://x"), Err(UriSyntaxError::InvalidScheme));
        assert_eq!(parse_destination("://x"), Err(UriSyntaxError::InvalidScheme));
    }
}
