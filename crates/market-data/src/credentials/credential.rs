use std::fmt;
use std::sync::Arc;

/// Number of characters kept visible at each end of a masked credential.
const MASK_VISIBLE: usize = 4;

/// One API key. Interchangeable with every other key in the pool.
///
/// `Debug` and `Display` print the masked form; use [`expose`](Self::expose)
/// to get the raw secret for a request header.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Credential(Arc<str>);

impl Credential {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(Arc::from(value.as_ref()))
    }

    /// Raw secret value.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// First and last four characters with the middle elided.
    ///
    /// Keys too short to hide anything are fully masked.
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= MASK_VISIBLE * 2 {
            return "*".repeat(chars.len().max(MASK_VISIBLE));
        }
        let head: String = chars[..MASK_VISIBLE].iter().collect();
        let tail: String = chars[chars.len() - MASK_VISIBLE..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&self.masked()).finish()
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

impl From<&str> for Credential {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Credential {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
