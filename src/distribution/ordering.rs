use crate::domain::PostRecord;

/// Newest first by ISO-8601 `date`. The sort is stable, so posts with equal
/// dates keep their order, and undated posts (empty string) go last.
pub fn sort_newest_first(posts: &mut [PostRecord]) {
    posts.sort_by(|a, b| b.date.cmp(&a.date));
}
