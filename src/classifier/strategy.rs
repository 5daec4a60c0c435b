//! Classification strategies behind a common trait.
//!
//! The distributor only needs a primary category per post, so anything that
//! can turn a post into an ordered category list plugs in here: the keyword
//! selector, the priority rules below, or an image model client.
use regex::Regex;
use tracing::debug;

use super::catalog;
use super::keywords::KeywordMatcher;
use super::selector::{Classification, FallbackReason, KeywordSelector};
use crate::config::{ConfigError, CuratorSettings, RuleSettings};
use crate::domain::category::find_category;
use crate::domain::PostRecord;

pub trait ClassificationStrategy {
    fn name(&self) -> &'static str;

    /// Ordered categories for `post`. Must never be empty.
    fn classify(&self, post: &PostRecord) -> Classification;
}

impl ClassificationStrategy for KeywordSelector {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn classify(&self, post: &PostRecord) -> Classification {
        self.select(&post.text)
    }
}

/// First-match rules: characters beat gender reveals, which beat birthdays;
/// everything unclear is custom work.
#[derive(Debug, Clone)]
pub struct RuleBasedStrategy {
    character: KeywordMatcher,
    gender_reveal: KeywordMatcher,
    birthday: KeywordMatcher,
    custom: KeywordMatcher,
    explicit_gender: KeywordMatcher,
    age_words: KeywordMatcher,
    milestone: Regex,
    min_gender_matches: usize,
    rules: RuleSettings,
}

impl RuleBasedStrategy {
    pub fn from_settings(settings: &CuratorSettings) -> Result<Self, ConfigError> {
        let rules = settings.rules.clone();
        let keywords_of = |id: &str| -> Result<KeywordMatcher, ConfigError> {
            let category = find_category(&settings.categories, id).ok_or_else(|| {
                ConfigError::InvalidConfig(format!("Rule category '{id}' is not configured"))
            })?;
            Ok(KeywordMatcher::new(&category.keywords)?)
        };

        if find_category(&settings.categories, &rules.birthday_category).is_none() {
            return Err(ConfigError::InvalidConfig(format!(
                "Rule category '{}' is not configured",
                rules.birthday_category
            )));
        }

        Ok(Self {
            character: keywords_of(&rules.character_category)?,
            gender_reveal: keywords_of(&rules.gender_reveal_category)?,
            birthday: KeywordMatcher::new(&rules.birthday_keywords)?,
            custom: keywords_of(&rules.custom_category)?,
            explicit_gender: KeywordMatcher::new(&rules.explicit_gender_phrases)?,
            age_words: KeywordMatcher::new(catalog::AGE_WORDS)?,
            milestone: Regex::new(catalog::MILESTONE_PATTERN).map_err(|e| {
                ConfigError::InvalidConfig(format!("Invalid milestone pattern: {e}"))
            })?,
            min_gender_matches: rules.min_gender_matches,
            rules,
        })
    }

    fn rule_for(&self, lowered: &str) -> (&str, usize, &'static str) {
        let character = self.character.score_lowercased(lowered);
        if character > 0 {
            return (&self.rules.character_category, character, "character");
        }

        let gender = self.gender_reveal.score_lowercased(lowered);
        if gender >= self.min_gender_matches || self.explicit_gender.contains_any(lowered) {
            return (&self.rules.gender_reveal_category, gender, "gender_reveal");
        }

        let birthday = self.birthday.score_lowercased(lowered);
        if birthday > 0 {
            return (&self.rules.birthday_category, birthday, "birthday");
        }
        if self.milestone.is_match(lowered) && self.age_words.contains_any(lowered) {
            return (&self.rules.birthday_category, 1, "milestone");
        }

        let custom = self.custom.score_lowercased(lowered);
        (&self.rules.custom_category, custom, "custom")
    }
}

impl ClassificationStrategy for RuleBasedStrategy {
    fn name(&self) -> &'static str {
        "rules"
    }

    fn classify(&self, post: &PostRecord) -> Classification {
        let lowered = post.text.to_lowercase();
        let (category, score, rule) = self.rule_for(&lowered);
        debug!(identifier = post.identifier(), category, rule, "rule matched");

        // Only a caption that no rule and no custom keyword matched is a
        // catch-all. An explicit gender phrase may still score zero.
        if rule == "custom" && score == 0 {
            Classification::fallback(category, FallbackReason::CatchAll)
        } else {
            Classification::single(category, score)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::catalog::{
        BIRTHDAY_CATEGORY, CHARACTER_CATEGORY, CUSTOM_CATEGORY, GENDER_REVEAL_CATEGORY,
    };
    use rstest::rstest;

    fn rules() -> RuleBasedStrategy {
        RuleBasedStrategy::from_settings(&CuratorSettings::default()).unwrap()
    }

    #[rstest]
    #[case("Paw Patrol taart voor de verjaardag", CHARACTER_CATEGORY)]
    #[case("Frozen gender reveal", CHARACTER_CATEGORY)]
    #[case("Gender reveal!", GENDER_REVEAL_CATEGORY)]
    #[case("Onze babyshower taart", GENDER_REVEAL_CATEGORY)]
    #[case("Roze en blauw", GENDER_REVEAL_CATEGORY)]
    #[case("Een baby taart", CUSTOM_CATEGORY)]
    #[case("Gefeliciteerd lieve Sem", BIRTHDAY_CATEGORY)]
    #[case("Hij wordt 5 jaar", BIRTHDAY_CATEGORY)]
    #[case("Al 50 jaar samen", BIRTHDAY_CATEGORY)]
    #[case("Weer een jaar voorbij!", BIRTHDAY_CATEGORY)]
    #[case("Bestelling nummer 5", CUSTOM_CATEGORY)]
    #[case("Elegante bruiloftstaart", CUSTOM_CATEGORY)]
    #[case("", CUSTOM_CATEGORY)]
    fn rules_apply_in_priority_order(#[case] caption: &str, #[case] expected: &str) {
        let post = PostRecord::new("a.jpg", caption);
        assert_eq!(rules().classify(&post).primary(), Some(expected));
    }

    #[test]
    fn only_unmatched_captions_are_catch_all() {
        let strategy = rules();

        let matched = strategy.classify(&PostRecord::new("a.jpg", "Elegante bruiloftstaart"));
        assert_eq!(matched.primary(), Some(CUSTOM_CATEGORY));
        assert_eq!(matched.fallback, None);

        let unmatched = strategy.classify(&PostRecord::new("b.jpg", "Bestelling nummer 5"));
        assert_eq!(unmatched.primary(), Some(CUSTOM_CATEGORY));
        assert_eq!(unmatched.fallback, Some(FallbackReason::CatchAll));
    }

    #[test]
    fn birthday_rule_uses_its_own_word_list() {
        let mut settings = CuratorSettings::default();
        settings.rules.birthday_keywords = vec!["feestje".to_string()];
        let strategy = RuleBasedStrategy::from_settings(&settings).unwrap();

        let post = PostRecord::new("a.jpg", "Een feestje");
        assert_eq!(strategy.classify(&post).primary(), Some(BIRTHDAY_CATEGORY));
    }

    #[test]
    fn unknown_rule_category_is_rejected() {
        let mut settings = CuratorSettings::default();
        settings.rules.birthday_category = "missing".to_string();
        assert!(matches!(
            RuleBasedStrategy::from_settings(&settings),
            Err(ConfigError::InvalidConfig(_))
        ));
    }

    #[test]
    fn keyword_selector_classifies_by_caption() {
        let selector = KeywordSelector::from_settings(&CuratorSettings::default()).unwrap();
        let post = PostRecord::new("a.jpg", "gender reveal boy or girl");
        let strategy: &dyn ClassificationStrategy = &selector;
        assert_eq!(strategy.name(), "keyword");
        assert_eq!(strategy.classify(&post).primary(), Some(GENDER_REVEAL_CATEGORY));
    }
}
