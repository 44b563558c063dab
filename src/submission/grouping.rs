//! Group key extraction from submission identifiers.
//!
//! Submission directories are usually named `<sid>-<suffix>` or
//! `<sid>_<suffix>`; the group key is the part before the first delimiter.
//! Identifiers matching an exception pattern (for example ids that contain
//! `-student` as part of the sid itself) are kept whole.

use crate::error::ApiError;
use regex::Regex;

pub const DEFAULT_DELIMITERS: &[char] = &['-', '_'];
pub const DEFAULT_EXCEPTIONS: &[&str] = &["-student"];

/// Rules for deriving a group key from a submission identifier
#[derive(Debug, Clone)]
pub struct GroupingRules {
    delimiters: Vec<char>,
    exceptions: Vec<Regex>,
}

impl Default for GroupingRules {
    fn default() -> Self {
        Self {
            delimiters: DEFAULT_DELIMITERS.to_vec(),
            exceptions: DEFAULT_EXCEPTIONS
                .iter()
                .filter_map(|p| Regex::new(p).ok())
                .collect(),
        }
    }
}

impl GroupingRules {
    /// Build rules from delimiter characters and exception regexes
    pub fn new<S: AsRef<str>>(delimiters: &[char], exceptions: &[S]) -> Result<Self, ApiError> {
        let exceptions = exceptions
            .iter()
            .map(|p| Regex::new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            delimiters: delimiters.to_vec(),
            exceptions,
        })
    }

    pub fn delimiters(&self) -> &[char] {
        &self.delimiters
    }

    pub fn is_exception(&self, identifier: &str) -> bool {
        self.exceptions.iter().any(|re| re.is_match(identifier))
    }

    /// Group key for `identifier`.
    ///
    /// Never empty for a non-empty identifier: a leading delimiter keeps the
    /// whole identifier rather than producing an empty directory name.
    pub fn group_key<'a>(&self, identifier: &'a str) -> &'a str {
        if self.is_exception(identifier) {
            return identifier;
        }
        match identifier.find(|c: char| self.delimiters.contains(&c)) {
            Some(0) | None => identifier,
            Some(idx) => &identifier[..idx],
        }
    }
}
