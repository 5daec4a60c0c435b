//! Caption keyword matching.
//!
//! A keyword counts when it occurs anywhere in the lower-cased caption, also
//! inside an unrelated longer word ("oude" matches "gouden"). Each distinct
//! keyword counts once no matter how often it occurs.
use aho_corasick::{AhoCorasick, BuildError};

/// Compiled keyword set for one category or word list.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    automaton: AhoCorasick,
    keywords: Vec<String>,
}

impl KeywordMatcher {
    pub fn new<I, S>(keywords: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut distinct: Vec<String> = Vec::new();
        for keyword in keywords {
            let lowered = keyword.as_ref().to_lowercase();
            if !distinct.contains(&lowered) {
                distinct.push(lowered);
            }
        }

        // Standard match kind: overlapping search needs every pattern reported,
        // not just the leftmost-longest one.
        let automaton = AhoCorasick::new(&distinct)?;

        Ok(Self {
            automaton,
            keywords: distinct,
        })
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Number of distinct keywords contained in `text`.
    pub fn score(&self, text: &str) -> usize {
        self.score_lowercased(&text.to_lowercase())
    }

    /// Same as [`score`](Self::score) for text that is already lower-cased.
    pub fn score_lowercased(&self, lowered: &str) -> usize {
        if self.keywords.is_empty() {
            return 0;
        }

        let mut seen = vec![false; self.keywords.len()];
        let mut count = 0;
        for mat in self.automaton.find_overlapping_iter(lowered) {
            let slot = &mut seen[mat.pattern().as_usize()];
            if !*slot {
                *slot = true;
                count += 1;
                if count == self.keywords.len() {
                    break;
                }
            }
        }
        count
    }

    /// The distinct keywords contained in `lowered`, in keyword order.
    pub fn matched_keywords(&self, lowered: &str) -> Vec<&str> {
        let mut seen = vec![false; self.keywords.len()];
        for mat in self.automaton.find_overlapping_iter(lowered) {
            seen[mat.pattern().as_usize()] = true;
        }
        self.keywords
            .iter()
            .zip(seen)
            .filter_map(|(keyword, hit)| hit.then_some(keyword.as_str()))
            .collect()
    }

    pub fn contains_any(&self, lowered: &str) -> bool {
        !self.keywords.is_empty() && self.automaton.find_overlapping_iter(lowered).next().is_some()
    }
}

/// Uncompiled form of [`KeywordMatcher::score`], for one-off checks.
#[must_use]
pub fn keyword_score<S: AsRef<str>>(text: &str, keywords: &[S]) -> usize {
    let lowered = text.to_lowercase();
    let mut matched: Vec<String> = Vec::new();
    for keyword in keywords {
        let keyword = keyword.as_ref().to_lowercase();
        if lowered.contains(&keyword) && !matched.contains(&keyword) {
            matched.push(keyword);
        }
    }
    matched.len()
}
