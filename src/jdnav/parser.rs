//! # Query Parsing
//!
//! Turns whatever the user typed into an [`Identifier`]. Only the start of
//! the input matters, so `11.01 Invoices`, `1101`, `11 01` and `11/01` all
//! land on the same id, and a pasted folder name works as a query.
//!
//! Patterns are tried from most to least specific; the first that matches
//! decides how deep the identifier goes:
//!
//! | Pattern                     | Example  | Result          |
//! |-----------------------------|----------|-----------------|
//! | `AC` + `[ ,./]?` + `I{1,2}` | `11.01`  | area, cat, id   |
//! | `AC`                        | `11`     | area, cat       |
//! | `A`                         | `1`      | area            |
//!
//! Anything else (including empty input and leading whitespace) does not
//! parse.

use crate::model::Identifier;
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

// [0-9] rather than \d: regex's \d also matches non-ASCII digits.
static ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<area>[0-9])(?P<category>[0-9])[ ,./]?(?P<id>[0-9]{1,2})")
        .expect("id pattern is valid")
});
static CATEGORY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<area>[0-9])(?P<category>[0-9])").expect("category pattern is valid")
});
static AREA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<area>[0-9])").expect("area pattern is valid"));

/// Parses the leading Johnny.Decimal code of `input`.
///
/// Returns `None` when the input does not start with a digit.
pub fn parse(input: &str) -> Option<Identifier> {
    if let Some(caps) = ID_RE.captures(input) {
        return Some(Identifier::with_id(
            &caps["area"],
            &caps["category"],
            &caps["id"],
        ));
    }
    if let Some(caps) = CATEGORY_RE.captures(input) {
        return Some(Identifier::with_category(&caps["area"], &caps["category"]));
    }
    AREA_RE
        .captures(input)
        .map(|caps| Identifier::area_only(&caps["area"]))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidQuery(pub String);

impl std::fmt::Display for InvalidQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' is not a Johnny.Decimal id", self.0)
    }
}

impl std::error::Error for InvalidQuery {}

impl FromStr for Identifier {
    type Err = InvalidQuery;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).ok_or_else(|| InvalidQuery(s.to_string()))
    }
}
