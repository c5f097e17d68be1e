use std::fmt;

use rand::Rng;

/// Record-boundary token embedded in the xtrace format string.
///
/// A fresh token is generated for every run, so stale log contents from a
/// previous run can never be mistaken for valid records. The token is kept
/// short (8 hexadecimal characters) so that the expanded format string
/// stays well under typical line-buffering limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiter(String);

impl Delimiter {
    /// Generates a fresh random token.
    pub fn generate() -> Self {
        let bytes: [u8; 4] = rand::rng().random();

        Self(bytes.iter().map(|b| format!("{b:02x}")).collect())
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::Delimiter;

    #[test]
    fn token_is_short_hex() {
        let delim = Delimiter::generate();

        assert_eq!(delim.as_str().len(), 8);
        assert!(delim.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn tokens_differ_across_runs() {
        let tokens: Vec<_> = (0..8).map(|_| Delimiter::generate()).collect();

        assert!(tokens.windows(2).any(|w| w[0] != w[1]));
    }
}
