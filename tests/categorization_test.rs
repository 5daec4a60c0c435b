use showcase_curator::classifier::catalog::{
    BIRTHDAY_CATEGORY, CHARACTER_CATEGORY, CUSTOM_CATEGORY, GENDER_REVEAL_CATEGORY,
};
use showcase_curator::classifier::{KeywordSelector, RuleBasedStrategy, build_strategy};
use showcase_curator::config::StrategyKind;
use showcase_curator::{CuratorSettings, Distributor, PostRecord};

fn settings_with_quota(min_quota: usize) -> CuratorSettings {
    let mut settings = CuratorSettings::default();
    settings.distribution.min_quota = min_quota;
    settings
}

fn ids_in(distribution: &showcase_curator::Distribution, category: &str) -> Vec<String> {
    distribution
        .assignment
        .posts(category)
        .unwrap_or_default()
        .iter()
        .map(|post| post.identifier().to_string())
        .collect()
}

fn scenario_posts() -> Vec<PostRecord> {
    vec![
        PostRecord::new("P1", "Paw Patrol verjaardag taart").with_likes(50),
        PostRecord::new("P2", "gender reveal boy or girl").with_likes(80),
        PostRecord::new("P3", "bruiloft elegant gouden taart").with_likes(120),
        PostRecord::new("P4", "").with_likes(5),
    ]
}

#[test]
fn four_post_scenario_with_reference_keywords() {
    let settings = CuratorSettings::default();
    let selector = KeywordSelector::from_settings(&settings).unwrap();
    let distributor = Distributor::from_settings(&settings).unwrap();

    let distribution = distributor.distribute(&selector, scenario_posts());

    assert_eq!(ids_in(&distribution, CHARACTER_CATEGORY), vec!["P1"]);
    assert_eq!(ids_in(&distribution, GENDER_REVEAL_CATEGORY), vec!["P2"]);
    assert_eq!(ids_in(&distribution, CUSTOM_CATEGORY), vec!["P3", "P4"]);
    assert!(ids_in(&distribution, BIRTHDAY_CATEGORY).is_empty());
    // no category exceeds the quota, so nothing can move
    assert_eq!(distribution.summary.moved, 0);
}

#[test]
fn four_post_scenario_with_rule_strategy() {
    let settings = CuratorSettings::default();
    let rules = RuleBasedStrategy::from_settings(&settings).unwrap();
    let distributor = Distributor::from_settings(&settings).unwrap();

    let distribution = distributor.distribute(&rules, scenario_posts());

    assert_eq!(ids_in(&distribution, CHARACTER_CATEGORY), vec!["P1"]);
    assert_eq!(ids_in(&distribution, GENDER_REVEAL_CATEGORY), vec!["P2"]);
    // "oude" inside "gouden" is a birthday hit, and birthday outranks custom
    assert_eq!(ids_in(&distribution, BIRTHDAY_CATEGORY), vec!["P3"]);
    assert_eq!(ids_in(&distribution, CUSTOM_CATEGORY), vec!["P4"]);
}

#[test]
fn every_category_present_even_when_empty() {
    let settings = CuratorSettings::default();
    let selector = KeywordSelector::from_settings(&settings).unwrap();
    let distribution = Distributor::from_settings(&settings)
        .unwrap()
        .distribute(&selector, Vec::new());

    let json = serde_json::to_value(&distribution.assignment).unwrap();
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 4);
    assert!(object.values().all(|posts| posts.as_array().unwrap().is_empty()));
}

#[test]
fn quota_is_met_when_donors_suffice() {
    let settings = settings_with_quota(20);
    let selector = KeywordSelector::from_settings(&settings).unwrap();
    let posts: Vec<PostRecord> = (0..100)
        .map(|n| PostRecord::new(format!("paw-{n:03}.jpg"), "Paw Patrol taart"))
        .collect();

    let distribution = Distributor::from_settings(&settings)
        .unwrap()
        .distribute(&selector, posts);

    for (category, count) in distribution.assignment.counts() {
        assert!(count >= 20, "{category} has {count}");
    }
    assert_eq!(distribution.assignment.len_of(CHARACTER_CATEGORY), 40);
    assert!(distribution.summary.under_quota.is_empty());
}

#[test]
fn greedy_donor_order_across_categories() {
    let settings = settings_with_quota(20);
    let selector = KeywordSelector::from_settings(&settings).unwrap();
    let mut posts = Vec::new();
    posts.extend((0..25).map(|n| PostRecord::new(format!("char-{n}"), "paw patrol")));
    posts.extend((0..25).map(|n| PostRecord::new(format!("bday-{n}"), "verjaardag")));
    posts.extend((0..5).map(|n| PostRecord::new(format!("gender-{n}"), "gender reveal")));
    posts.extend((0..5).map(|n| PostRecord::new(format!("custom-{n}"), "bruiloft")));

    let distribution = Distributor::from_settings(&settings)
        .unwrap()
        .distribute(&selector, posts);

    let sizes: Vec<usize> = distribution
        .assignment
        .counts()
        .into_iter()
        .map(|(_, count)| count)
        .collect();
    assert_eq!(sizes, vec![20, 20, 15, 5]);

    // undated posts keep their order, so the moved ones sit at the end
    let gender = ids_in(&distribution, GENDER_REVEAL_CATEGORY);
    assert_eq!(
        &gender[5..],
        &[
            "char-24", "bday-24", "char-23", "bday-23", "char-22", "bday-22", "char-21",
            "bday-21", "char-20", "bday-20"
        ]
    );
    assert_eq!(
        distribution.summary.under_quota,
        vec![GENDER_REVEAL_CATEGORY.to_string(), CUSTOM_CATEGORY.to_string()]
    );
}

#[test]
fn categories_are_sorted_newest_first() {
    let settings = settings_with_quota(0);
    let selector = KeywordSelector::from_settings(&settings).unwrap();
    let posts = vec![
        PostRecord::new("old", "bruiloft").with_date("2022-06-01T10:00:00"),
        PostRecord::new("undated", "bruiloft"),
        PostRecord::new("new", "bruiloft").with_date("2024-09-12T08:15:00"),
    ];

    let distribution = Distributor::from_settings(&settings)
        .unwrap()
        .distribute(&selector, posts);

    assert_eq!(ids_in(&distribution, CUSTOM_CATEGORY), vec!["new", "old", "undated"]);
}

#[test]
fn strategy_follows_settings() {
    let mut settings = CuratorSettings::default();
    assert_eq!(build_strategy(&settings).unwrap().name(), "keyword");

    settings.distribution.strategy = StrategyKind::Rules;
    assert_eq!(build_strategy(&settings).unwrap().name(), "rules");
}

mod prop {
    use super::*;
    use proptest::prelude::*;

    const VOCABULARY: &[&str] = &[
        "paw patrol", "frozen", "verjaardag", "birthday", "gender reveal", "baby", "roze",
        "bruiloft", "goud", "taart", "cake", "ganache", "chocolade", "met", "voor", "",
    ];

    fn posts_strategy() -> impl Strategy<Value = Vec<PostRecord>> {
        proptest::collection::vec(
            (
                proptest::collection::vec(0..VOCABULARY.len(), 0..5),
                0u64..500,
                proptest::option::of(0u32..30),
            ),
            0..120,
        )
        .prop_map(|raw| {
            raw.into_iter()
                .enumerate()
                .map(|(n, (words, likes, day))| {
                    let text: Vec<&str> = words.into_iter().map(|w| VOCABULARY[w]).collect();
                    let post = PostRecord::new(format!("post-{n:03}.jpg"), text.join(" "))
                        .with_likes(likes);
                    match day {
                        Some(day) => post.with_date(format!("2024-03-{:02}T12:00:00", day + 1)),
                        None => post,
                    }
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn every_post_lands_in_exactly_one_category(
            posts in posts_strategy(),
            min_quota in 0usize..40,
            rules in any::<bool>(),
        ) {
            let mut settings = settings_with_quota(min_quota);
            if rules {
                settings.distribution.strategy = StrategyKind::Rules;
            }
            let strategy = build_strategy(&settings).unwrap();
            let mut expected: Vec<String> =
                posts.iter().map(|p| p.identifier().to_string()).collect();

            let distribution = Distributor::from_settings(&settings)
                .unwrap()
                .distribute(strategy.as_ref(), posts);

            let mut actual: Vec<String> = distribution
                .assignment
                .identifiers()
                .into_iter()
                .flat_map(|(_, ids)| ids)
                .collect();
            expected.sort();
            actual.sort();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn rerun_yields_identical_output(posts in posts_strategy(), min_quota in 0usize..40) {
            let settings = settings_with_quota(min_quota);
            let selector = KeywordSelector::from_settings(&settings).unwrap();
            let distributor = Distributor::from_settings(&settings).unwrap();

            let first = distributor.distribute(&selector, posts.clone());
            let second = distributor.distribute(&selector, posts);

            prop_assert_eq!(
                serde_json::to_string(&first.assignment).unwrap(),
                serde_json::to_string(&second.assignment).unwrap()
            );
        }

        #[test]
        fn fallback_never_leaves_a_post_unassigned(text in ".{0,40}") {
            let settings = CuratorSettings::default();
            let selector = KeywordSelector::from_settings(&settings).unwrap();

            let classification = selector.select(&text);

            prop_assert!(classification.primary().is_some());
        }
    }
}
