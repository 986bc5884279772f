//! Name variants derived from a raw resource name.

use crate::error::{Error, Result};

/// Casing variants of a resource name.
///
/// Every variant is derived from the same cleaned character sequence: the raw
/// input with everything outside `[A-Za-z0-9]` removed. `pascal` and `camel`
/// only change the case of the first character and lowercase the rest, so
/// `"OrderItem"` becomes `Orderitem`, not `OrderItem`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedName {
    pub lower: String,
    pub upper: String,
    pub pascal: String,
    pub camel: String,
    /// `lower` with a trailing `s`, used for collection paths (`/api/users`).
    pub plural: String,
    pub original: String,
}

impl FormattedName {
    /// Derive all variants from `raw`. Never fails; an input without any
    /// ASCII alphanumerics yields empty variants.
    pub fn new(raw: &str) -> Self {
        let clean: String = raw.chars().filter(char::is_ascii_alphanumeric).collect();
        let lower = clean.to_ascii_lowercase();

        let (pascal, camel) = match lower.split_at_checked(1) {
            Some((first, rest)) => (
                format!("{}{rest}", first.to_ascii_uppercase()),
                format!("{first}{rest}"),
            ),
            None => (String::new(), String::new()),
        };

        Self {
            upper: clean.to_ascii_uppercase(),
            plural: format!("{lower}s"),
            lower,
            pascal,
            camel,
            original: raw.to_string(),
        }
    }

    /// Like [`FormattedName::new`], but rejects names that clean to nothing.
    pub fn parse(raw: &str) -> Result<Self> {
        let name = Self::new(raw);
        if name.is_empty() {
            return Err(Error::invalid_name(raw));
        }
        Ok(name)
    }

    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }
}
