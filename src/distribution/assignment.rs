use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::PostRecord;

/// Posts of one category, in their current order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBucket {
    pub category_id: String,
    pub posts: Vec<PostRecord>,
}

/// Category id to post list, in configured category order.
///
/// Every configured category has a bucket from construction on, so empty
/// categories still show up in the output.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAssignment {
    buckets: Vec<CategoryBucket>,
}

impl CategoryAssignment {
    pub fn new<I, S>(category_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            buckets: category_ids
                .into_iter()
                .map(|id| CategoryBucket {
                    category_id: id.into(),
                    posts: Vec::new(),
                })
                .collect(),
        }
    }

    pub fn position(&self, category_id: &str) -> Option<usize> {
        self.buckets
            .iter()
            .position(|bucket| bucket.category_id == category_id)
    }

    /// Appends `post` to `category_id`; hands the post back if the category
    /// does not exist.
    pub fn push(&mut self, category_id: &str, post: PostRecord) -> Result<(), PostRecord> {
        match self.position(category_id) {
            Some(index) => {
                self.buckets[index].posts.push(post);
                Ok(())
            }
            None => Err(post),
        }
    }

    pub fn posts(&self, category_id: &str) -> Option<&[PostRecord]> {
        self.position(category_id)
            .map(|index| self.buckets[index].posts.as_slice())
    }

    pub fn len_of(&self, category_id: &str) -> usize {
        self.posts(category_id).map_or(0, <[PostRecord]>::len)
    }

    pub fn total_posts(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.posts.len()).sum()
    }

    pub fn buckets(&self) -> &[CategoryBucket] {
        &self.buckets
    }

    pub(crate) fn buckets_mut(&mut self) -> &mut [CategoryBucket] {
        &mut self.buckets
    }

    pub fn counts(&self) -> Vec<(String, usize)> {
        self.buckets
            .iter()
            .map(|bucket| (bucket.category_id.clone(), bucket.posts.len()))
            .collect()
    }

    /// Identifiers per category, the lossy view older consumers read.
    pub fn identifiers(&self) -> Vec<(String, Vec<String>)> {
        self.buckets
            .iter()
            .map(|bucket| {
                (
                    bucket.category_id.clone(),
                    bucket
                        .posts
                        .iter()
                        .map(|post| post.identifier().to_string())
                        .collect(),
                )
            })
            .collect()
    }

    pub fn into_buckets(self) -> Vec<CategoryBucket> {
        self.buckets
    }
}

impl Serialize for CategoryAssignment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for bucket in &self.buckets {
            map.serialize_entry(&bucket.category_id, &bucket.posts)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_categories_present_before_any_post() {
        let assignment = CategoryAssignment::new(["a", "b", "c"]);
        assert_eq!(
            assignment.counts(),
            vec![("a".to_string(), 0), ("b".to_string(), 0), ("c".to_string(), 0)]
        );
    }

    #[test]
    fn push_to_unknown_category_returns_post() {
        let mut assignment = CategoryAssignment::new(["a"]);
        let post = PostRecord::new("x.jpg", "");
        assert_eq!(assignment.push("zzz", post.clone()), Err(post));
        assert_eq!(assignment.total_posts(), 0);
    }

    #[test]
    fn serializes_in_configured_order() {
        let mut assignment = CategoryAssignment::new(["zebra", "aap"]);
        assignment.push("aap", PostRecord::new("1.jpg", "")).unwrap();

        let json = serde_json::to_string(&assignment).unwrap();
        assert!(json.find("zebra").unwrap() < json.find("aap").unwrap());
        assert!(json.contains(r#""zebra":[]"#));
    }
}
