use super::ConfigError;
use super::groups::{
    DistributionSettings, FallbackSettings, FeaturedSettings, RuleSettings, ScreeningSettings,
};
use crate::classifier::catalog;
use crate::domain::CategoryDefinition;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables and the category table, loaded from a TOML file.
///
/// Every section is optional; missing sections and keys fall back to the
/// reference configuration of the showcase site. A `[[categories]]` list in
/// the file replaces the whole built-in table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CuratorSettings {
    pub distribution: DistributionSettings,
    pub fallback: FallbackSettings,
    pub rules: RuleSettings,
    pub featured: FeaturedSettings,
    pub screening: ScreeningSettings,
    pub categories: Vec<CategoryDefinition>,
}

impl Default for CuratorSettings {
    fn default() -> Self {
        Self {
            distribution: DistributionSettings::default(),
            fallback: FallbackSettings::default(),
            rules: RuleSettings::default(),
            featured: FeaturedSettings::default(),
            screening: ScreeningSettings::default(),
            categories: catalog::reference_categories(),
        }
    }
}

impl CuratorSettings {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: CuratorSettings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Settings from `path` when given, the reference configuration otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn category_ids(&self) -> Vec<String> {
        self.categories.iter().map(|category| category.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StrategyKind;

    #[test]
    fn default_settings_are_valid() {
        let settings = CuratorSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.distribution.min_quota, 20);
        assert!((settings.distribution.near_tie_threshold - 0.7).abs() < f64::EPSILON);
        assert_eq!(
            settings.category_ids(),
            vec!["character-cakes", "birthday-cakes", "gender-reveal", "custom-cakes"]
        );
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let settings = CuratorSettings::from_toml_str(
            r#"
            [distribution]
            min_quota = 12
            strategy = "rules"

            [featured]
            featured_count = 9
            "#,
        )
        .unwrap();

        assert_eq!(settings.distribution.min_quota, 12);
        assert_eq!(settings.distribution.strategy, StrategyKind::Rules);
        assert!((settings.distribution.near_tie_threshold - 0.7).abs() < f64::EPSILON);
        assert_eq!(settings.featured.featured_count, 9);
        assert_eq!(settings.featured.candidate_pool, 30);
        assert_eq!(settings.categories.len(), 4);
    }

    #[test]
    fn toml_categories_replace_reference_table() {
        let settings = CuratorSettings::from_toml_str(
            r#"
            [fallback]
            general_category = "cookies"
            catch_all_category = "cakes"

            [rules]
            character_category = "cakes"
            gender_reveal_category = "cakes"
            birthday_category = "cakes"
            custom_category = "cakes"

            [[categories]]
            id = "cookies"
            display_name = "Koekjes"
            keywords = ["koek", "cookie"]

            [[categories]]
            id = "cakes"
            display_name = "Taarten"
            keywords = ["taart"]
            "#,
        )
        .unwrap();

        assert_eq!(settings.category_ids(), vec!["cookies", "cakes"]);
        assert_eq!(settings.categories[0].subtitle, "");
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = CuratorSettings::from_toml_str("[distribution\nmin_quota = 3");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn load_without_path_uses_reference() {
        assert_eq!(CuratorSettings::load(None).unwrap(), CuratorSettings::default());
    }
}
