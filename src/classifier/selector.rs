//! Keyword-score category selection with near-tie inclusion.
use serde::Serialize;

use super::keywords::KeywordMatcher;
use crate::config::{ConfigError, CuratorSettings};
use crate::domain::CategoryDefinition;

/// One category's score for a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryMatch {
    pub category_id: String,
    pub score: usize,
}

/// Why a post ended up in a fixed default category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// No category keyword, but the caption is recognisably about a cake.
    CakeIndicator,
    /// Nothing matched at all.
    CatchAll,
}

/// Ordered category choice for one post. The first entry is the primary
/// category; the rest are informational.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub matches: Vec<CategoryMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<FallbackReason>,
}

impl Classification {
    pub fn single(category_id: impl Into<String>, score: usize) -> Self {
        Self {
            matches: vec![CategoryMatch {
                category_id: category_id.into(),
                score,
            }],
            fallback: None,
        }
    }

    pub fn fallback(category_id: impl Into<String>, reason: FallbackReason) -> Self {
        Self {
            fallback: Some(reason),
            ..Self::single(category_id, 0)
        }
    }

    pub fn primary(&self) -> Option<&str> {
        self.matches.first().map(|m| m.category_id.as_str())
    }

    pub fn category_ids(&self) -> Vec<&str> {
        self.matches.iter().map(|m| m.category_id.as_str()).collect()
    }
}

#[derive(Debug, Clone)]
struct CompiledCategory {
    id: String,
    matcher: KeywordMatcher,
}

/// Scores a caption against every configured category and keeps the
/// categories within `near_tie_threshold` of the best score.
#[derive(Debug, Clone)]
pub struct KeywordSelector {
    categories: Vec<CompiledCategory>,
    indicators: KeywordMatcher,
    general_category: String,
    catch_all_category: String,
    near_tie_threshold: f64,
}

impl KeywordSelector {
    pub fn new(
        categories: &[CategoryDefinition],
        indicator_words: &[String],
        general_category: impl Into<String>,
        catch_all_category: impl Into<String>,
        near_tie_threshold: f64,
    ) -> Result<Self, ConfigError> {
        let categories = categories
            .iter()
            .map(|category| {
                Ok(CompiledCategory {
                    id: category.id.clone(),
                    matcher: KeywordMatcher::new(&category.keywords)?,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Self {
            categories,
            indicators: KeywordMatcher::new(indicator_words)?,
            general_category: general_category.into(),
            catch_all_category: catch_all_category.into(),
            near_tie_threshold,
        })
    }

    pub fn from_settings(settings: &CuratorSettings) -> Result<Self, ConfigError> {
        Self::new(
            &settings.categories,
            &settings.fallback.indicator_words,
            settings.fallback.general_category.clone(),
            settings.fallback.catch_all_category.clone(),
            settings.distribution.near_tie_threshold,
        )
    }

    /// Raw score of every category, in configured order.
    pub fn scores(&self, text: &str) -> Vec<CategoryMatch> {
        self.score_lowercased(&text.to_lowercase())
    }

    fn score_lowercased(&self, lowered: &str) -> Vec<CategoryMatch> {
        self.categories
            .iter()
            .map(|category| CategoryMatch {
                category_id: category.id.clone(),
                score: category.matcher.score_lowercased(lowered),
            })
            .collect()
    }

    pub fn select(&self, text: &str) -> Classification {
        let lowered = text.to_lowercase();
        let scores = self.score_lowercased(&lowered);

        let best = scores.iter().map(|m| m.score).max().unwrap_or(0);
        if best == 0 {
            return if self.indicators.contains_any(&lowered) {
                Classification::fallback(&self.general_category, FallbackReason::CakeIndicator)
            } else {
                Classification::fallback(&self.catch_all_category, FallbackReason::CatchAll)
            };
        }

        let cutoff = self.near_tie_threshold * best as f64;
        let mut matches: Vec<CategoryMatch> = scores
            .into_iter()
            .filter(|m| m.score > 0 && m.score as f64 >= cutoff)
            .collect();
        // stable: equal scores keep configured order
        matches.sort_by(|a, b| b.score.cmp(&a.score));

        Classification {
            matches,
            fallback: None,
        }
    }

    pub fn category_ids(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|category| category.id.as_str())
    }
}
