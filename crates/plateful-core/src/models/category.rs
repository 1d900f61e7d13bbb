use serde::{Deserialize, Serialize};
use std::fmt;

use crate::normalize::slugify;

/// Recipe category, the closed set offered by the form.
///
/// The declaration order is the canonical enumeration order: selections are
/// normalized to it at submission, regardless of the order the user toggled
/// the boxes in. `Ord` derives from declaration order, so a
/// `BTreeSet<Category>` already iterates canonically.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Lunch,
    Dinner,
    Sides,
    Dessert,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Lunch,
        Category::Dinner,
        Category::Sides,
        Category::Dessert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Lunch => "Lunch",
            Category::Dinner => "Dinner",
            Category::Sides => "Sides",
            Category::Dessert => "Dessert",
        }
    }

    /// URL extension for the category page (`"/dinner"`).
    pub fn slug(&self) -> String {
        slugify(self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
