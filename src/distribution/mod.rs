//! Primary-category bucketing, quota rebalancing and per-category ordering.
mod assignment;
pub mod ordering;
mod rebalance;

pub use assignment::{CategoryAssignment, CategoryBucket};
pub use ordering::sort_newest_first;

use serde::Serialize;
use tracing::{info, warn};

use crate::classifier::{ClassificationStrategy, Classification};
use crate::config::{ConfigError, CuratorSettings};
use crate::domain::PostRecord;

/// Why a post sits where it initially landed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostRationale {
    pub identifier: String,
    pub primary: String,
    #[serde(flatten)]
    pub classification: Classification,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub category_id: String,
    pub initial: usize,
    #[serde(rename = "final")]
    pub final_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionSummary {
    pub strategy: &'static str,
    pub min_quota: usize,
    pub total_posts: usize,
    pub moved: usize,
    pub counts: Vec<CategoryCount>,
    /// Categories still below quota after rebalancing.
    pub under_quota: Vec<String>,
}

/// Result of one categorization run.
#[derive(Debug, Clone)]
pub struct Distribution {
    pub assignment: CategoryAssignment,
    pub summary: DistributionSummary,
    pub rationale: Vec<PostRationale>,
}

#[derive(Debug, Clone)]
pub struct Distributor {
    category_ids: Vec<String>,
    catch_all_index: usize,
    min_quota: usize,
}

impl Distributor {
    pub fn new(
        category_ids: Vec<String>,
        catch_all_category: &str,
        min_quota: usize,
    ) -> Result<Self, ConfigError> {
        let catch_all_index = category_ids
            .iter()
            .position(|id| id == catch_all_category)
            .ok_or_else(|| {
                ConfigError::InvalidConfig(format!(
                    "Catch-all category '{catch_all_category}' is not configured"
                ))
            })?;

        Ok(Self {
            category_ids,
            catch_all_index,
            min_quota,
        })
    }

    pub fn from_settings(settings: &CuratorSettings) -> Result<Self, ConfigError> {
        Self::new(
            settings.category_ids(),
            &settings.fallback.catch_all_category,
            settings.distribution.min_quota,
        )
    }

    pub fn min_quota(&self) -> usize {
        self.min_quota
    }

    /// Buckets every post under its primary category, rebalances to the
    /// minimum quota and orders each category newest first.
    ///
    /// Every input post ends up in exactly one category.
    pub fn distribute<I>(&self, strategy: &dyn ClassificationStrategy, posts: I) -> Distribution
    where
        I: IntoIterator<Item = PostRecord>,
    {
        let mut assignment = CategoryAssignment::new(self.category_ids.iter().cloned());
        let mut rationale = Vec::new();

        for post in posts {
            let classification = strategy.classify(&post);
            let identifier = post.identifier().to_string();
            let wanted = classification
                .primary()
                .unwrap_or(&self.category_ids[self.catch_all_index])
                .to_string();

            let primary = match assignment.push(&wanted, post) {
                Ok(()) => wanted,
                Err(post) => {
                    warn!(
                        identifier = %identifier,
                        category = %wanted,
                        strategy = strategy.name(),
                        "strategy returned an unknown category, using catch-all"
                    );
                    assignment.buckets_mut()[self.catch_all_index].posts.push(post);
                    self.category_ids[self.catch_all_index].clone()
                }
            };

            rationale.push(PostRationale {
                identifier,
                primary,
                classification,
            });
        }

        let initial = assignment.counts();
        let moved = rebalance::rebalance(assignment.buckets_mut(), self.min_quota);
        for bucket in assignment.buckets_mut() {
            sort_newest_first(&mut bucket.posts);
        }

        let counts: Vec<CategoryCount> = initial
            .into_iter()
            .zip(assignment.buckets())
            .map(|((category_id, initial), bucket)| CategoryCount {
                category_id,
                initial,
                final_count: bucket.posts.len(),
            })
            .collect();
        let under_quota = counts
            .iter()
            .filter(|count| count.final_count < self.min_quota)
            .map(|count| count.category_id.clone())
            .collect();

        let summary = DistributionSummary {
            strategy: strategy.name(),
            min_quota: self.min_quota,
            total_posts: assignment.total_posts(),
            moved,
            counts,
            under_quota,
        };
        log_summary(&summary);

        Distribution {
            assignment,
            summary,
            rationale,
        }
    }
}

fn log_summary(summary: &DistributionSummary) {
    for count in &summary.counts {
        info!(
            category = %count.category_id,
            initial = count.initial,
            final_count = count.final_count,
            "category distribution"
        );
    }
    info!(
        strategy = summary.strategy,
        total_posts = summary.total_posts,
        moved = summary.moved,
        "distribution complete"
    );
    if !summary.under_quota.is_empty() {
        warn!(
            categories = ?summary.under_quota,
            min_quota = summary.min_quota,
            "categories below quota after rebalancing"
        );
    }
}
