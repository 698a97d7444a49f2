use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// How far down the area → category → id hierarchy an identifier reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Depth {
    Area,
    Category,
    Id,
}

/// A parsed, possibly partial, Johnny.Decimal identifier.
///
/// Fields are private so that a coarser level can never be missing while a
/// finer one is set: only [`crate::parser`] builds these, through the three
/// constructors below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identifier {
    area: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
}

impl Identifier {
    pub(crate) fn area_only(area: &str) -> Self {
        Self {
            area: area.to_string(),
            category: None,
            id: None,
        }
    }

    /// `category` is the single category digit; the stored category is the
    /// two-digit code.
    pub(crate) fn with_category(area: &str, category: &str) -> Self {
        Self {
            area: area.to_string(),
            category: Some(format!("{}{}", area, category)),
            id: None,
        }
    }

    pub(crate) fn with_id(area: &str, category: &str, id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Self::with_category(area, category)
        }
    }

    pub fn area(&self) -> Option<&str> {
        if self.area.is_empty() {
            None
        } else {
            Some(&self.area)
        }
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn depth(&self) -> Depth {
        match (&self.category, &self.id) {
            (Some(_), Some(_)) => Depth::Id,
            (Some(_), None) => Depth::Category,
            _ => Depth::Area,
        }
    }

    /// Area folders are named after their range, e.g. `10-19 Admin`.
    pub fn area_pattern(&self) -> Option<DirPattern> {
        self.area().map(|a| DirPattern::new(format!("{a}0-{a}9")))
    }

    pub fn category_pattern(&self) -> Option<DirPattern> {
        self.category().map(DirPattern::new)
    }

    pub fn id_pattern(&self) -> Option<DirPattern> {
        match (self.category(), self.id()) {
            (Some(category), Some(id)) => Some(DirPattern::new(format!("{category}.{id}"))),
            _ => None,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.category(), self.id()) {
            (Some(category), Some(id)) => write!(f, "{}.{}", category, id),
            (Some(category), None) => write!(f, "{}", category),
            _ => write!(f, "{}", self.area),
        }
    }
}

/// Case-insensitive directory name prefix.
///
/// This is the whole of the "glob" support: `10-19*`, `11*` and `11.01*`
/// are all a literal prefix followed by anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirPattern {
    prefix: String,
}

impl DirPattern {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn glob(&self) -> String {
        format!("{}*", self.prefix)
    }

    pub fn matches(&self, name: &str) -> bool {
        name.to_lowercase().starts_with(&self.prefix.to_lowercase())
    }
}

impl fmt::Display for DirPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix)
    }
}

/// A directory found while resolving a query.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Folder {
    pub name: String,
    pub path: PathBuf,
}

impl Folder {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}
