//! Category reports read by the page generator.
//!
//! `categories_full.json` carries complete post records; `categories.json`
//! only image references, for the older gallery scripts.
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::distribution::CategoryAssignment;
use crate::domain::category::find_category;
use crate::domain::{CategoryDefinition, PostRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryReport {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub posts: Vec<PostRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleCategoryReport {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub images: Vec<String>,
}

/// Reports keyed by category id, serialized in configured order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedReports<T>(pub Vec<(String, T)>);

impl<T: Serialize> Serialize for OrderedReports<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (id, report) in &self.0 {
            map.serialize_entry(id, report)?;
        }
        map.end()
    }
}

impl<T> OrderedReports<T> {
    pub fn get(&self, id: &str) -> Option<&T> {
        self.0
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, report)| report)
    }

    pub fn keys(&self) -> Vec<&str> {
        self.0.iter().map(|(key, _)| key.as_str()).collect()
    }
}

pub fn full_reports(
    assignment: &CategoryAssignment,
    categories: &[CategoryDefinition],
) -> OrderedReports<CategoryReport> {
    OrderedReports(
        assignment
            .buckets()
            .iter()
            .map(|bucket| {
                let (title, subtitle, description) = presentation(categories, &bucket.category_id);
                (
                    bucket.category_id.clone(),
                    CategoryReport {
                        title,
                        subtitle,
                        description,
                        posts: bucket.posts.clone(),
                    },
                )
            })
            .collect(),
    )
}

pub fn simple_reports(
    full: &OrderedReports<CategoryReport>,
) -> OrderedReports<SimpleCategoryReport> {
    OrderedReports(
        full.0
            .iter()
            .map(|(id, report)| {
                (
                    id.clone(),
                    SimpleCategoryReport {
                        title: report.title.clone(),
                        subtitle: report.subtitle.clone(),
                        description: report.description.clone(),
                        images: report
                            .posts
                            .iter()
                            .map(|post| post.image_ref().to_string())
                            .collect(),
                    },
                )
            })
            .collect(),
    )
}

/// Category id per post identifier, from a previously written full report.
pub fn category_index(reports: &BTreeMap<String, CategoryReport>) -> BTreeMap<String, String> {
    let mut index = BTreeMap::new();
    for (category_id, report) in reports {
        for post in &report.posts {
            if post.has_identifier() {
                index.insert(post.identifier().to_string(), category_id.clone());
            }
        }
    }
    index
}

fn presentation(categories: &[CategoryDefinition], id: &str) -> (String, String, String) {
    match find_category(categories, id) {
        Some(category) => (
            category.display_name.clone(),
            category.subtitle.clone(),
            category.description.clone(),
        ),
        None => (id.to_string(), String::new(), String::new()),
    }
}
