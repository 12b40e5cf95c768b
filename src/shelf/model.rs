use serde::{Deserialize, Serialize};
use std::fmt;

pub const UNKNOWN_TITLE: &str = "Unknown Name";
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
pub const UNKNOWN_PUBLISHER: &str = "Unknown Publication";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Project,
    Global,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Project => f.write_str("project"),
            Scope::Global => f.write_str("global"),
        }
    }
}

/// One book in the catalog.
///
/// Records carry no identity of their own: a record is addressed by its
/// position in the collection at the time of the operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default = "default_publisher")]
    pub publisher: String,
}

fn default_title() -> String {
    UNKNOWN_TITLE.to_string()
}

fn default_author() -> String {
    UNKNOWN_AUTHOR.to_string()
}

fn default_publisher() -> String {
    UNKNOWN_PUBLISHER.to_string()
}

impl Default for Record {
    fn default() -> Self {
        Self {
            title: default_title(),
            author: default_author(),
            publisher: default_publisher(),
        }
    }
}

impl Record {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        publisher: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            publisher: publisher.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Author => &self.author,
            Field::Publisher => &self.publisher,
        }
    }

    /// Overwrites one field, returning the value it held before.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> String {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Author => &mut self.author,
            Field::Publisher => &mut self.publisher,
        };
        std::mem::replace(slot, value.into())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} ({})", self.title, self.author, self.publisher)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Author,
    Publisher,
}

impl Field {
    /// Every field, in the order an update tries them.
    pub const PRIORITY: [Field; 3] = [Field::Title, Field::Author, Field::Publisher];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Publisher => "publisher",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A partial filter over records. Absent, empty, or blank fields match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Title => self.title.as_deref(),
            Field::Author => self.author.as_deref(),
            Field::Publisher => self.publisher.as_deref(),
        }
    }

    /// The same criteria with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        let trim = |value: &Option<String>| value.as_ref().map(|v| v.trim().to_string());
        Self {
            title: trim(&self.title),
            author: trim(&self.author),
            publisher: trim(&self.publisher),
        }
    }

    /// True when no field constrains the match.
    pub fn is_wildcard(&self) -> bool {
        Field::PRIORITY
            .iter()
            .all(|&field| crate::matcher::is_wildcard(self.get(field)))
    }
}
