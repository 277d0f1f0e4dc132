//! Validated email addresses.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Why an address was rejected.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailError {
    #[error("email cannot be empty")]
    Empty,
    #[error("email cannot contain whitespace")]
    ContainsWhitespace,
    #[error("email must contain an @ symbol")]
    MissingAtSymbol,
    #[error("email must contain exactly one @ symbol")]
    MultipleAtSymbols,
    #[error("email needs a name before the @")]
    EmptyLocalPart,
    #[error("email domain must look like name.tld")]
    InvalidDomain,
}

/// An address the Contact form will accept: `name@domain.tld`.
///
/// There must be exactly one `@` with something before it, no whitespace,
/// and the domain needs a dot with characters on both sides.
///
/// ```
/// use shophub_core::Email;
///
/// let email = Email::parse("help@shophub.com").unwrap();
/// assert_eq!(email.domain(), "shophub.com");
///
/// assert!(Email::parse("help@shophub").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email {
    address: String,
    /// Byte offset of the `@`.
    at: usize,
}

impl Email {
    /// Validate `s` as an address.
    ///
    /// # Errors
    ///
    /// Returns the first [`EmailError`] the input runs into.
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        if s.is_empty() {
            return Err(EmailError::Empty);
        }
        if s.contains(char::is_whitespace) {
            return Err(EmailError::ContainsWhitespace);
        }

        let at = s.find('@').ok_or(EmailError::MissingAtSymbol)?;
        if s.rfind('@') != Some(at) {
            return Err(EmailError::MultipleAtSymbols);
        }
        if at == 0 {
            return Err(EmailError::EmptyLocalPart);
        }

        let mut inner = s.get(at + 1..).unwrap_or_default().chars();
        inner.next();
        inner.next_back();
        if !inner.as_str().contains('.') {
            return Err(EmailError::InvalidDomain);
        }

        Ok(Self {
            address: s.to_owned(),
            at,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.address
    }

    /// Everything before the `@`.
    #[must_use]
    pub fn local_part(&self) -> &str {
        self.address.get(..self.at).unwrap_or_default()
    }

    /// Everything after the `@`.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.address.get(self.at + 1..).unwrap_or_default()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.address
    }
}
