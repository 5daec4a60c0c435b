//! Reference keyword tables for the Taart en Koek showcase.
//!
//! Captions are mostly Dutch with some English, so every table lists both.

use crate::domain::CategoryDefinition;

pub const CHARACTER_CATEGORY: &str = "character-cakes";
pub const BIRTHDAY_CATEGORY: &str = "birthday-cakes";
pub const GENDER_REVEAL_CATEGORY: &str = "gender-reveal";
pub const CUSTOM_CATEGORY: &str = "custom-cakes";

/// Words that mark a caption as being about a cake at all.
pub const CAKE_INDICATORS: &[&str] = &["taart", "cake", "ganache", "vulling", "filled"];

/// Homepage bias towards wedding-style, classic designs.
pub const ELEGANCE_KEYWORDS: &[&str] = &[
    "bruiloft", "wedding", "elegante", "elegant", "goud", "gold", "zilver", "silver", "naked",
    "bloemen", "flowers", "classic", "marble", "marmer", "drip", "minimal",
];

/// Used by the rule strategy to confirm that a bare number is an age.
pub const AGE_WORDS: &[&str] = &["jaar", "year", "verjaardag", "birthday", "gefeliciteerd"];

/// Whole-number ages and milestone words for the rule strategy.
pub const MILESTONE_PATTERN: &str = r"\b(?:[1-9]|10|16|18|21|25|30|40|50|60|70|80|90|100)\b|eerste|first|tweede|derde|milestone|mijlpaal|sweet sixteen";

/// Birthday words for the rule strategy. Unlike the category table this keeps
/// "jaar", since the rules never weigh birthday against another category.
pub const RULE_BIRTHDAY_KEYWORDS: &[&str] = &[
    "verjaardag", "birthday", "happy birthday", "jarig", "gefeliciteerd", "congratulations",
    "jaar", "years", "age", "oude", "first birthday",
];

pub const EXPLICIT_GENDER_PHRASES: &[&str] = &["gender reveal", "babyshower"];

pub const DEFAULT_THEME_LABEL: &str = "Speciale Taart";

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|word| (*word).to_string()).collect()
}

/// The four gallery pages in the order they appear in the site navigation.
#[must_use]
pub fn reference_categories() -> Vec<CategoryDefinition> {
    vec![
        CategoryDefinition {
            id: CHARACTER_CATEGORY.to_string(),
            display_name: "Thema & Karakter Taarten".to_string(),
            subtitle: "Breng hun favoriete karakters tot leven".to_string(),
            description: "Van Paw Patrol tot Pokemon, van Nijntje tot Frozen—wij maken droomtaarten met de meest geliefde karakters en thema's".to_string(),
            theme_label: "Karaktertaart".to_string(),
            name_prefix: "karakter".to_string(),
            keywords: words(&[
                "paw patrol", "pokemon", "pikachu", "frozen", "elsa", "anna", "olaf",
                "nijntje", "miffy", "mickey", "minnie", "disney", "marvel", "spiderman",
                "spider-man", "hulk", "iron man", "captain america", "avengers",
                "batman", "superman", "dc", "sonic", "mario", "luigi",
                "peppa", "spongebob", "dora", "barbie", "princess", "prins", "prinses",
                "hello kitty", "my little pony", "cars", "lightning mcqueen",
                "toy story", "woody", "buzz", "nemo", "finding nemo", "dory",
                "moana", "rapunzel", "belle", "ariel", "cinderella", "snow white",
                "mulan", "jasmine", "pocahontas", "tiana",
                "thomas", "thomas de trein", "thomas train",
                "winnie", "pooh", "tigger", "eeyore",
                "stitch", "lilo", "simba", "lion king",
                "encanto", "mirabel", "isabela", "luisa",
                "karakter", "character", "cartoon", "thema", "theme", "superhero",
            ]),
        },
        CategoryDefinition {
            id: BIRTHDAY_CATEGORY.to_string(),
            display_name: "Verjaardagstaarten".to_string(),
            subtitle: "Maak elke verjaardag onvergetelijk".to_string(),
            description: "Prachtige verjaardagstaarten voor elk leeftijd, van eerste verjaardag tot mijlpalen".to_string(),
            theme_label: "Verjaardagstaart".to_string(),
            name_prefix: "verjaardag".to_string(),
            // no "jaar": every "verjaardag" caption already contains it
            keywords: words(&[
                "verjaardag", "birthday", "happy birthday", "jarig", "gefeliciteerd",
                "congratulations", "years", "age", "oude", "first birthday",
                "milestone", "mijlpaal",
            ]),
        },
        CategoryDefinition {
            id: GENDER_REVEAL_CATEGORY.to_string(),
            display_name: "Baby & Gender Reveal".to_string(),
            subtitle: "Vier het grote nieuws in stijl".to_string(),
            description: "Onvergetelijke babyshower en gender reveal taarten om de mooiste momenten te markeren".to_string(),
            theme_label: "Gender Reveal".to_string(),
            name_prefix: "gender-reveal".to_string(),
            keywords: words(&[
                "gender reveal", "boy or girl", "jongen of meisje",
                "baby shower", "babyshower", "baby", "geboorte",
                "zwanger", "pregnant", "roze", "blauw",
                "pink", "blue", "jongen", "meisje",
                "boy", "girl", "oh baby", "newborn",
                "pasgeboren", "welkom", "welcome baby",
            ]),
        },
        CategoryDefinition {
            id: CUSTOM_CATEGORY.to_string(),
            display_name: "Maatwerk Taarten".to_string(),
            subtitle: "Unieke creaties voor jouw speciale moment".to_string(),
            description: "Volledig gepersonaliseerde taarten op maat—vertel ons jouw idee en wij maken het waar".to_string(),
            theme_label: "Custom Taart".to_string(),
            name_prefix: "custom".to_string(),
            keywords: words(&[
                "bruiloft", "wedding", "trouw", "huwelijk",
                "jubileum", "anniversary", "feest", "party",
                "celebration", "viering", "elegant", "luxury",
                "bloemen", "flowers", "roos", "rose",
                "goud", "gold", "zilver", "silver",
                "maatwerk", "custom", "op maat", "special",
                "speciaal", "uniek", "unique", "gepersonaliseerd", "personalized",
            ]),
        },
    ]
}

#[must_use]
pub fn cake_indicators() -> Vec<String> {
    words(CAKE_INDICATORS)
}

#[must_use]
pub fn elegance_keywords() -> Vec<String> {
    words(ELEGANCE_KEYWORDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn reference_ids_are_unique() {
        let categories = reference_categories();
        let ids: HashSet<&str> = categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), categories.len());
    }

    #[test]
    fn reference_keywords_are_lowercase() {
        for category in reference_categories() {
            for keyword in &category.keywords {
                assert_eq!(keyword, &keyword.to_lowercase(), "{}", category.id);
            }
        }
    }

    #[test]
    fn milestone_pattern_compiles() {
        let pattern = regex::Regex::new(MILESTONE_PATTERN).unwrap();
        assert!(pattern.is_match("50 jaar getrouwd"));
        assert!(!pattern.is_match("150 cupcakes"));
    }
}
