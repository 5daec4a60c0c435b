pub mod catalog;
pub mod keywords;
pub mod selector;
pub mod strategy;

pub use keywords::{KeywordMatcher, keyword_score};
pub use selector::{CategoryMatch, Classification, FallbackReason, KeywordSelector};
pub use strategy::{ClassificationStrategy, RuleBasedStrategy};

use crate::config::{ConfigError, CuratorSettings, StrategyKind};

/// Builds the strategy selected in `settings`.
pub fn build_strategy(
    settings: &CuratorSettings,
) -> Result<Box<dyn ClassificationStrategy>, ConfigError> {
    Ok(match settings.distribution.strategy {
        StrategyKind::Keyword => Box::new(KeywordSelector::from_settings(settings)?),
        StrategyKind::Rules => Box::new(RuleBasedStrategy::from_settings(settings)?),
    })
}
