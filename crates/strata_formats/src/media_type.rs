//! MIME type parsing.

use strata_error::{FormatError, FormatErrorKind};

/// A parsed `type/subtype; name=value` content type.
///
/// Type and subtype are kept exactly as written; registry lookups are
/// case-sensitive on the essence.
///
/// # Examples
///
/// ```
/// use strata_formats::MediaType;
///
/// let mt: MediaType = "text/plain; charset=utf-8".parse().unwrap();
/// assert_eq!(mt.essence(), "text/plain");
/// assert_eq!(mt.charset(), Some("utf-8"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaType {
    essence: String,
    slash: usize,
    params: Vec<(String, String)>,
}

impl MediaType {
    /// Parse a content type string.
    ///
    /// # Errors
    ///
    /// Returns `FormatErrorKind::MalformedType` when the value does not follow
    /// the `token "/" token *( ";" token "=" (token / quoted-string) )` grammar.
    pub fn parse(value: &str) -> Result<Self, FormatError> {
        let malformed = || FormatError::new(FormatErrorKind::MalformedType(value.to_string()));

        let mut parts = value.split(';');
        let essence = parts.next().map(str::trim).ok_or_else(malformed)?;
        let (kind, subtype) = essence.split_once('/').ok_or_else(malformed)?;
        if !is_token(kind) || !is_token(subtype) {
            return Err(malformed());
        }

        let mut params = Vec::new();
        for raw in parts {
            let raw = raw.trim();
            // Tolerate a trailing ';'
            if raw.is_empty() {
                continue;
            }
            let (name, val) = raw.split_once('=').ok_or_else(malformed)?;
            let name = name.trim();
            let val = val.trim();
            if !is_token(name) {
                return Err(malformed());
            }
            let val = if let Some(inner) = val.strip_prefix('"') {
                inner.strip_suffix('"').ok_or_else(malformed)?.to_string()
            } else if is_token(val) {
                val.to_string()
            } else {
                return Err(malformed());
            };
            params.push((name.to_ascii_lowercase(), val));
        }

        Ok(Self {
            essence: essence.to_string(),
            slash: kind.len(),
            params,
        })
    }

    /// The `type/subtype` portion with parameters stripped.
    pub fn essence(&self) -> &str {
        &self.essence
    }

    /// The top-level type (`text` in `text/plain`).
    pub fn top_level(&self) -> &str {
        &self.essence[..self.slash]
    }

    /// The subtype (`plain` in `text/plain`).
    pub fn subtype(&self) -> &str {
        &self.essence[self.slash + 1..]
    }

    /// Look up a parameter by (case-insensitive) name.
    pub fn param(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.params
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The `charset` parameter, if any.
    pub fn charset(&self) -> Option<&str> {
        self.param("charset")
    }
}

impl std::str::FromStr for MediaType {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.essence)?;
        for (name, value) in &self.params {
            if is_token(value) {
                write!(f, "; {}={}", name, value)?;
            } else {
                write!(f, "; {}=\"{}\"", name, value)?;
            }
        }
        Ok(())
    }
}

/// RFC 7230 `token`.
fn is_token(s: &str) -> bool {
    !s.is_empty()
        && s.bytes().all(|b| {
            b.is_ascii_alphanumeric()
                || matches!(
                    b,
                    b'!' | b'#'
                        | b'$'
                        | b'%'
                        | b'&'
                        | b'\''
                        | b'*'
                        | b'+'
                        | b'-'
                        | b'.'
                        | b'^'
                        | b'_'
                        | b'`'
                        | b'|'
                        | b'~'
                )
        })
}
