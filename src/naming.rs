//! Descriptive image file names derived from captions.
//!
//! Names are built from up to four parts: the category prefix, a character,
//! an occasion and a style. Each table is searched in order and the first
//! keyword contained in the lower-cased caption wins.
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::LazyLock;
use tracing::debug;

use crate::domain::category::find_category;
use crate::domain::{CategoryDefinition, PostRecord};

/// Keyword to slug, searched in order.
type SlugTable = &'static [(&'static str, &'static str)];

const CHARACTER_SLUGS: SlugTable = &[
    ("spiderman", "spiderman"),
    ("spider-man", "spiderman"),
    ("frozen", "frozen"),
    ("elsa", "frozen-elsa"),
    ("anna", "frozen-anna"),
    ("disney", "disney"),
    ("mickey", "mickey-mouse"),
    ("minnie", "minnie-mouse"),
    ("princess", "prinses"),
    ("prinses", "prinses"),
    ("unicorn", "eenhoorn"),
    ("eenhoorn", "eenhoorn"),
    ("paw patrol", "paw-patrol"),
    ("peppa", "peppa-pig"),
    ("cars", "cars"),
    ("marvel", "marvel"),
    ("avengers", "avengers"),
    ("batman", "batman"),
    ("superman", "superman"),
    ("barbie", "barbie"),
    ("pokemon", "pokemon"),
    ("pikachu", "pikachu"),
    ("minecraft", "minecraft"),
    ("fortnite", "fortnite"),
    ("hulk", "hulk"),
    ("iron man", "iron-man"),
    ("captain america", "captain-america"),
];

const OCCASION_SLUGS: SlugTable = &[
    ("verjaardag", "verjaardag"),
    ("birthday", "verjaardag"),
    ("bruiloft", "bruiloft"),
    ("wedding", "bruiloft"),
    ("baby", "baby"),
    ("gender reveal", "gender-reveal"),
    ("communie", "communie"),
    ("communion", "communie"),
    ("kerst", "kerst"),
    ("christmas", "kerst"),
    ("paas", "paas"),
    ("easter", "paas"),
    ("sinterklaas", "sinterklaas"),
    ("carnaval", "carnaval"),
    ("annivers", "jubileum"),
    ("jubileum", "jubileum"),
];

const STYLE_SLUGS: SlugTable = &[
    ("roze", "roze"),
    ("pink", "roze"),
    ("blauw", "blauw"),
    ("blue", "blauw"),
    ("goud", "goud"),
    ("gold", "goud"),
    ("zilver", "zilver"),
    ("silver", "zilver"),
    ("regenboog", "regenboog"),
    ("rainbow", "regenboog"),
    ("bloemen", "bloemen"),
    ("flowers", "bloemen"),
    ("drip", "drip"),
    ("naked", "naked-cake"),
    ("ombre", "ombre"),
];

const STOP_WORDS: &[&str] = &["deze", "this", "voor", "that", "with"];
const FALLBACK_NAME: &str = "taart";
const LEADING_WORDS: usize = 5;

static NON_NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid regex"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static HYPHEN_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("valid regex"));

/// Result of one naming run, keyed by post identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameAssignments {
    /// Identifier to new file name, `name.jpg`.
    pub file_names: BTreeMap<String, String>,
    /// Identifier to name without extension.
    pub descriptive_names: BTreeMap<String, String>,
}

impl NameAssignments {
    pub fn len(&self) -> usize {
        self.file_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.file_names.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DescriptiveNamer<'a> {
    categories: &'a [CategoryDefinition],
}

impl<'a> DescriptiveNamer<'a> {
    pub fn new(categories: &'a [CategoryDefinition]) -> Self {
        Self { categories }
    }

    /// Name for one caption, before duplicate suffixing.
    pub fn base_name(&self, text: &str, category_id: Option<&str>) -> String {
        let lowered = text.to_lowercase();
        let mut parts: Vec<String> = Vec::new();

        if let Some(id) = category_id {
            let prefix = find_category(self.categories, id)
                .map(|category| category.name_prefix.as_str())
                .filter(|prefix| !prefix.is_empty());
            if let Some(prefix) = prefix {
                parts.push(prefix.to_string());
            }
        }

        for table in [CHARACTER_SLUGS, OCCASION_SLUGS, STYLE_SLUGS] {
            let found = table
                .iter()
                .find(|(keyword, slug)| {
                    lowered.contains(*keyword) && !parts.iter().any(|part| part == *slug)
                });
            if let Some((_, slug)) = found {
                parts.push((*slug).to_string());
            }
        }

        if parts.is_empty() {
            if let Some(word) = leading_word(text) {
                parts.push(word);
            }
        }

        if parts.is_empty() {
            parts.push(match category_id {
                Some(id) => id.to_lowercase().replace(' ', "-"),
                None => FALLBACK_NAME.to_string(),
            });
        }

        clean_name(&parts.join("-"))
    }

    /// Names every identified post not listed in `removed`, in input order.
    /// The n-th post sharing a base name (n >= 2) gets `base-n`.
    pub fn assign<'p, I>(
        &self,
        posts: I,
        category_of: &BTreeMap<String, String>,
        removed: &BTreeSet<String>,
    ) -> NameAssignments
    where
        I: IntoIterator<Item = &'p PostRecord>,
    {
        let mut seen: HashMap<String, usize> = HashMap::new();
        let mut names = NameAssignments::default();

        for post in posts {
            let identifier = post.identifier();
            if identifier.is_empty() || removed.contains(identifier) {
                continue;
            }

            let base = self.base_name(&post.text, category_of.get(identifier).map(String::as_str));
            let occurrence = seen.entry(base.clone()).or_insert(0);
            *occurrence += 1;
            let name = if *occurrence > 1 {
                format!("{base}-{occurrence}")
            } else {
                base
            };

            debug!(identifier, name = %name, "descriptive name");
            names
                .file_names
                .insert(identifier.to_string(), format!("{name}.jpg"));
            names.descriptive_names.insert(identifier.to_string(), name);
        }

        names
    }
}

fn leading_word(text: &str) -> Option<String> {
    text.split_whitespace()
        .take(LEADING_WORDS)
        .map(|word| NON_NAME_CHARS.replace_all(word, "").trim().to_lowercase())
        .find(|word| word.chars().count() > 3 && !STOP_WORDS.contains(&word.as_str()))
}

fn clean_name(raw: &str) -> String {
    let name = NON_NAME_CHARS.replace_all(raw, "");
    let name = WHITESPACE_RUN.replace_all(&name, "-");
    let name = HYPHEN_RUN.replace_all(&name, "-");
    name.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::catalog::{self, BIRTHDAY_CATEGORY, CHARACTER_CATEGORY};
    use rstest::rstest;

    #[rstest]
    #[case::prefix_character_occasion_style(
        "Paw Patrol verjaardag taart in het blauw",
        Some(CHARACTER_CATEGORY),
        "karakter-paw-patrol-verjaardag-blauw"
    )]
    #[case::occasion_already_present(
        "Happy birthday! Roze drip",
        Some(BIRTHDAY_CATEGORY),
        "verjaardag-roze"
    )]
    #[case::uncategorized("Spider-Man wedding", None, "spiderman-bruiloft")]
    #[case::first_long_word("Deze prachtige creatie!", None, "prachtige")]
    #[case::stop_words_and_short_words("Voor de opa", None, "taart")]
    #[case::category_id_when_nothing_else("", Some("cookies"), "cookies")]
    #[case::empty_caption("", None, "taart")]
    fn base_name_cases(
        #[case] caption: &str,
        #[case] category: Option<&str>,
        #[case] expected: &str,
    ) {
        let categories = catalog::reference_categories();
        let namer = DescriptiveNamer::new(&categories);
        assert_eq!(namer.base_name(caption, category), expected);
    }

    #[test]
    fn leading_word_strips_punctuation() {
        assert_eq!(leading_word("**Chocolade**, lekker"), Some("chocolade".to_string()));
        assert_eq!(leading_word("a b c d e vijfde"), None);
    }

    #[test]
    fn substring_matches_inside_longer_words() {
        let namer = DescriptiveNamer::new(&[]);
        // "roze" sits inside "frozen"
        assert_eq!(namer.base_name("Frozen", None), "frozen-roze");
    }

    #[test]
    fn clean_name_collapses_separators() {
        assert_eq!(clean_name("-karakter--frozen elsa!-"), "karakter-frozen-elsa");
    }

    #[test]
    fn duplicates_get_numbered_and_removed_are_skipped() {
        let categories = catalog::reference_categories();
        let namer = DescriptiveNamer::new(&categories);
        let posts = vec![
            PostRecord::new("a.jpg", "Batman"),
            PostRecord::new("b.jpg", "Batman"),
            PostRecord::new("gone.jpg", "Batman"),
            PostRecord::new("c.jpg", "batman!"),
            PostRecord::new("", "Batman"),
        ];
        let removed = BTreeSet::from(["gone.jpg".to_string()]);

        let names = namer.assign(&posts, &BTreeMap::new(), &removed);

        assert_eq!(names.len(), 3);
        assert_eq!(names.descriptive_names["a.jpg"], "batman");
        assert_eq!(names.descriptive_names["b.jpg"], "batman-2");
        assert_eq!(names.descriptive_names["c.jpg"], "batman-3");
        assert_eq!(names.file_names["c.jpg"], "batman-3.jpg");
        assert!(!names.file_names.contains_key("gone.jpg"));
    }

    #[test]
    fn category_lookup_uses_index() {
        let categories = catalog::reference_categories();
        let namer = DescriptiveNamer::new(&categories);
        let posts = vec![PostRecord::new("a.jpg", "Oh baby")];
        let index = BTreeMap::from([(
            "a.jpg".to_string(),
            catalog::GENDER_REVEAL_CATEGORY.to_string(),
        )]);

        let names = namer.assign(&posts, &index, &BTreeSet::new());

        assert_eq!(names.descriptive_names["a.jpg"], "gender-reveal-baby");
    }
}
