use super::{ConfigError, CuratorSettings};
use crate::domain::category::find_category;
use std::collections::HashSet;

impl CuratorSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Validate category table
        if self.categories.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "At least one category must be configured".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            if category.id.trim().is_empty() {
                return Err(ConfigError::InvalidConfig(
                    "Category id must not be empty".to_string(),
                ));
            }
            if !seen.insert(category.id.as_str()) {
                return Err(ConfigError::InvalidConfig(format!(
                    "Duplicate category id '{}'",
                    category.id
                )));
            }
            if category.keywords.iter().any(|keyword| keyword.is_empty()) {
                return Err(ConfigError::InvalidConfig(format!(
                    "Category '{}' has an empty keyword",
                    category.id
                )));
            }
        }

        // Validate fallback targets
        for (role, id) in [
            ("general", &self.fallback.general_category),
            ("catch-all", &self.fallback.catch_all_category),
        ] {
            if find_category(&self.categories, id).is_none() {
                return Err(ConfigError::InvalidConfig(format!(
                    "Fallback {role} category '{id}' is not configured"
                )));
            }
        }
        if self.fallback.indicator_words.iter().any(String::is_empty) {
            return Err(ConfigError::InvalidConfig(
                "Indicator words must not be empty".to_string(),
            ));
        }

        // Validate near-tie threshold
        let threshold = self.distribution.near_tie_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ConfigError::InvalidConfig(format!(
                "Near-tie threshold must be in (0, 1], got {threshold}"
            )));
        }

        // Validate featured selection
        if self.featured.featured_count == 0 || self.featured.candidate_pool == 0 {
            return Err(ConfigError::InvalidConfig(
                "Featured candidate pool and count must be greater than 0".to_string(),
            ));
        }
        if self.featured.featured_count > self.featured.candidate_pool {
            return Err(ConfigError::InvalidConfig(format!(
                "Featured count ({}) must not exceed candidate pool ({})",
                self.featured.featured_count, self.featured.candidate_pool
            )));
        }

        // Validate rule strategy
        if self.rules.min_gender_matches == 0 {
            return Err(ConfigError::InvalidConfig(
                "Rule min_gender_matches must be greater than 0".to_string(),
            ));
        }
        if self.rules.birthday_keywords.iter().any(String::is_empty) {
            return Err(ConfigError::InvalidConfig(
                "Rule birthday keywords must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CategoryDefinition;
    use rstest::rstest;

    fn invalid(settings: &CuratorSettings) -> String {
        match settings.validate() {
            Err(ConfigError::InvalidConfig(message)) => message,
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn empty_category_table_is_rejected() {
        let settings = CuratorSettings {
            categories: Vec::new(),
            ..CuratorSettings::default()
        };
        assert!(invalid(&settings).contains("At least one category"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut settings = CuratorSettings::default();
        settings
            .categories
            .push(CategoryDefinition::new("custom-cakes", "Nog een keer"));
        assert!(invalid(&settings).contains("Duplicate category id"));
    }

    #[test]
    fn unknown_fallback_is_rejected() {
        let mut settings = CuratorSettings::default();
        settings.fallback.catch_all_category = "cupcakes".to_string();
        assert!(invalid(&settings).contains("cupcakes"));
    }

    #[test]
    fn empty_keyword_is_rejected() {
        let mut settings = CuratorSettings::default();
        settings.categories[0].keywords.push(String::new());
        assert!(invalid(&settings).contains("empty keyword"));
    }

    #[test]
    fn empty_rule_birthday_keyword_is_rejected() {
        let mut settings = CuratorSettings::default();
        settings.rules.birthday_keywords.push(String::new());
        assert!(invalid(&settings).contains("birthday keywords"));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-0.5)]
    #[case(1.5)]
    #[case(f64::NAN)]
    fn out_of_range_threshold_is_rejected(#[case] threshold: f64) {
        let mut settings = CuratorSettings::default();
        settings.distribution.near_tie_threshold = threshold;
        assert!(invalid(&settings).contains("Near-tie threshold"));
    }

    #[test]
    fn featured_count_above_pool_is_rejected() {
        let mut settings = CuratorSettings::default();
        settings.featured.featured_count = 31;
        assert!(invalid(&settings).contains("must not exceed"));
    }

    #[test]
    fn threshold_of_one_means_exact_ties_only() {
        let mut settings = CuratorSettings::default();
        settings.distribution.near_tie_threshold = 1.0;
        assert!(settings.validate().is_ok());
    }
}
