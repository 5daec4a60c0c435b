//! Homepage "featured cakes" selection.
//!
//! The most-liked posts form a candidate pool, which is then re-ranked by
//! elegance keywords plus a small likes bonus.
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::classifier::KeywordMatcher;
use crate::config::{ConfigError, FeaturedSettings};
use crate::domain::category::find_category;
use crate::domain::{CategoryDefinition, PostRecord};

/// Outputs of the earlier batch steps that decide which posts may be shown.
#[derive(Debug, Clone, Default)]
pub struct Eligibility {
    /// Identifiers flagged by the text screen.
    pub removed: BTreeSet<String>,
    /// Identifier to renamed image file.
    pub file_names: BTreeMap<String, String>,
}

impl Eligibility {
    /// Identified, not removed, and renamed.
    pub fn allows(&self, post: &PostRecord) -> bool {
        let identifier = post.identifier();
        !identifier.is_empty()
            && !self.removed.contains(identifier)
            && self.file_names.contains_key(identifier)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturedItem {
    pub identifier: String,
    pub file_name: String,
    pub title: String,
    pub theme_label: String,
    pub likes: u64,
    pub score: f64,
    pub caption_preview: String,
}

#[derive(Debug, Clone)]
pub struct FeaturedSelector {
    elegance: KeywordMatcher,
    candidate_pool: usize,
    featured_count: usize,
}

impl FeaturedSelector {
    pub fn new(settings: &FeaturedSettings) -> Result<Self, ConfigError> {
        Ok(Self {
            elegance: KeywordMatcher::new(&settings.elegance_keywords)?,
            candidate_pool: settings.candidate_pool,
            featured_count: settings.featured_count,
        })
    }

    /// Elegance keyword matches plus one point per hundred likes.
    pub fn elegance_score(&self, post: &PostRecord) -> f64 {
        self.elegance.score(&post.text) as f64 + post.likes as f64 / 100.0
    }

    /// Top `featured_count` of the `candidate_pool` most-liked eligible posts,
    /// highest elegance score first. Both sorts are stable.
    pub fn select<'a>(
        &self,
        posts: &'a [PostRecord],
        eligibility: &Eligibility,
    ) -> Vec<&'a PostRecord> {
        let mut candidates: Vec<&PostRecord> = posts
            .iter()
            .filter(|post| eligibility.allows(post))
            .collect();
        candidates.sort_by(|a, b| b.likes.cmp(&a.likes));
        candidates.truncate(self.candidate_pool);

        let mut scored: Vec<(f64, &PostRecord)> = candidates
            .into_iter()
            .map(|post| (self.elegance_score(post), post))
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored.truncate(self.featured_count);

        scored.into_iter().map(|(_, post)| post).collect()
    }
}

/// Display data for the selected posts.
pub struct FeaturedContext<'a> {
    pub eligibility: &'a Eligibility,
    /// Identifier to descriptive name without extension.
    pub descriptive_names: &'a BTreeMap<String, String>,
    /// Identifier to category id.
    pub category_of: &'a BTreeMap<String, String>,
    pub categories: &'a [CategoryDefinition],
    pub default_theme_label: &'a str,
    pub caption_preview_chars: usize,
}

impl FeaturedContext<'_> {
    pub fn item(&self, selector: &FeaturedSelector, post: &PostRecord) -> FeaturedItem {
        let identifier = post.identifier();
        let file_name = self
            .eligibility
            .file_names
            .get(identifier)
            .cloned()
            .unwrap_or_else(|| identifier.to_string());
        let base_name = self
            .descriptive_names
            .get(identifier)
            .cloned()
            .unwrap_or_else(|| file_name.trim_end_matches(".jpg").to_string());

        let theme_label = self
            .category_of
            .get(identifier)
            .and_then(|id| find_category(self.categories, id))
            .map(|category| category.theme_label.as_str())
            .filter(|label| !label.is_empty())
            .unwrap_or(self.default_theme_label)
            .to_string();

        FeaturedItem {
            identifier: identifier.to_string(),
            title: title_case(&base_name.replace('-', " ")),
            file_name,
            theme_label,
            likes: post.likes,
            score: selector.elegance_score(post),
            caption_preview: post.caption_preview(self.caption_preview_chars),
        }
    }
}

/// Upper-cases the first letter of every word and lower-cases the rest.
/// A "word" starts after any non-alphabetic character, so "3d-taart"
/// becomes "3D-Taart".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_alphabetic = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if previous_alphabetic {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            previous_alphabetic = true;
        } else {
            out.push(ch);
            previous_alphabetic = false;
        }
    }
    out
}
