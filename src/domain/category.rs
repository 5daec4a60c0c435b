use serde::{Deserialize, Serialize};

/// A gallery page theme.
///
/// `id` is the stable key used in every output file. The display fields are
/// copied into the reports as-is; only `keywords` takes part in matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    /// Short label shown on homepage tiles.
    #[serde(default)]
    pub theme_label: String,
    /// Leading part of descriptive file names for posts in this category.
    #[serde(default)]
    pub name_prefix: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl CategoryDefinition {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            subtitle: String::new(),
            description: String::new(),
            theme_label: String::new(),
            name_prefix: String::new(),
            keywords: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

/// Looks up a category by id in a configured table.
pub fn find_category<'a>(
    categories: &'a [CategoryDefinition],
    id: &str,
) -> Option<&'a CategoryDefinition> {
    categories.iter().find(|category| category.id == id)
}
