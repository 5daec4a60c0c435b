use super::StrategyKind;
use crate::classifier::catalog;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionSettings {
    /// Every category is topped up to this many posts where donors allow.
    pub min_quota: usize,
    /// Categories scoring at least this fraction of the best score are kept.
    pub near_tie_threshold: f64,
    pub strategy: StrategyKind,
}

impl Default for DistributionSettings {
    fn default() -> Self {
        Self {
            min_quota: 20,
            near_tie_threshold: 0.7,
            strategy: StrategyKind::Keyword,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackSettings {
    pub indicator_words: Vec<String>,
    /// Used when nothing scores but the caption mentions a cake.
    pub general_category: String,
    /// Used when nothing matches at all.
    pub catch_all_category: String,
}

impl Default for FallbackSettings {
    fn default() -> Self {
        Self {
            indicator_words: catalog::cake_indicators(),
            general_category: catalog::BIRTHDAY_CATEGORY.to_string(),
            catch_all_category: catalog::CUSTOM_CATEGORY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSettings {
    pub character_category: String,
    pub gender_reveal_category: String,
    pub birthday_category: String,
    pub custom_category: String,
    /// Checked by the birthday rule instead of the birthday category's table.
    pub birthday_keywords: Vec<String>,
    pub explicit_gender_phrases: Vec<String>,
    pub min_gender_matches: usize,
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            character_category: catalog::CHARACTER_CATEGORY.to_string(),
            gender_reveal_category: catalog::GENDER_REVEAL_CATEGORY.to_string(),
            birthday_category: catalog::BIRTHDAY_CATEGORY.to_string(),
            custom_category: catalog::CUSTOM_CATEGORY.to_string(),
            birthday_keywords: catalog::RULE_BIRTHDAY_KEYWORDS
                .iter()
                .map(|word| (*word).to_string())
                .collect(),
            explicit_gender_phrases: catalog::EXPLICIT_GENDER_PHRASES
                .iter()
                .map(|phrase| (*phrase).to_string())
                .collect(),
            min_gender_matches: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturedSettings {
    /// Most-liked posts considered for the homepage.
    pub candidate_pool: usize,
    /// Posts shown on the homepage.
    pub featured_count: usize,
    pub elegance_keywords: Vec<String>,
    pub default_theme_label: String,
    pub caption_preview_chars: usize,
}

impl Default for FeaturedSettings {
    fn default() -> Self {
        Self {
            candidate_pool: 30,
            featured_count: 15,
            elegance_keywords: catalog::elegance_keywords(),
            default_theme_label: catalog::DEFAULT_THEME_LABEL.to_string(),
            caption_preview_chars: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreeningSettings {
    /// Images whose OCR text has more words than this are dropped.
    pub max_words: usize,
    pub text_preview_chars: usize,
}

impl Default for ScreeningSettings {
    fn default() -> Self {
        Self {
            max_words: 5,
            text_preview_chars: 200,
        }
    }
}
