//! One handler per subcommand. Each reads its inputs from the data
//! directory, runs the library step and writes its outputs.
use std::collections::{BTreeMap, BTreeSet};
use tracing::info;

use super::io::{load_posts, read_json, read_json_or_default, write_json};
use crate::classifier::build_strategy;
use crate::config::{
    CategorizeArgs, Command, Config, CuratorSettings, FeatureArgs, NameArgs, ScreenArgs,
};
use crate::distribution::{DistributionSummary, Distributor};
use crate::domain::CuratorError;
use crate::export::{CategoryReport, category_index, full_reports, simple_reports};
use crate::featured::{Eligibility, FeaturedContext, FeaturedItem, FeaturedSelector};
use crate::naming::{DescriptiveNamer, NameAssignments};
use crate::screening::{ScreeningReport, TextScreen};

pub fn execute(config: &Config, settings: &CuratorSettings) -> Result<(), CuratorError> {
    match &config.command {
        Command::Categorize(args) => run_categorize(config, args, settings).map(|_| ()),
        Command::Screen(args) => run_screen(config, args, settings).map(|_| ()),
        Command::Name(args) => run_name(config, args, settings).map(|_| ()),
        Command::Feature(args) => run_feature(config, args, settings).map(|_| ()),
    }
}

pub fn run_categorize(
    config: &Config,
    args: &CategorizeArgs,
    settings: &CuratorSettings,
) -> Result<DistributionSummary, CuratorError> {
    let posts = load_posts(&config.resolve(&args.posts))?;
    let strategy = build_strategy(settings)?;
    let distributor = Distributor::from_settings(settings)?;

    let distribution = distributor.distribute(strategy.as_ref(), posts);

    let full = full_reports(&distribution.assignment, &settings.categories);
    write_json(&config.resolve(&args.full_output), &full)?;
    write_json(&config.resolve(&args.simple_output), &simple_reports(&full))?;
    if let Some(path) = &args.rationale {
        write_json(&config.resolve(path), &distribution.rationale)?;
    }

    Ok(distribution.summary)
}

pub fn run_screen(
    config: &Config,
    args: &ScreenArgs,
    settings: &CuratorSettings,
) -> Result<ScreeningReport, CuratorError> {
    let ocr_text: BTreeMap<String, String> = read_json(&config.resolve(&args.ocr_text))?;
    let screen = TextScreen::new(
        settings.screening.max_words,
        settings.screening.text_preview_chars,
    );

    let report = screen.screen(&ocr_text);

    write_json(&config.resolve(&args.output), &report.removals)?;
    write_json(&config.resolve(&args.analysis_output), &report.analysis)?;
    info!(
        analyzed = report.analysis.len(),
        flagged = report.removals.len(),
        max_words = settings.screening.max_words,
        "text screening complete"
    );
    Ok(report)
}

pub fn run_name(
    config: &Config,
    args: &NameArgs,
    settings: &CuratorSettings,
) -> Result<NameAssignments, CuratorError> {
    let posts = load_posts(&config.resolve(&args.posts))?;
    let reports: BTreeMap<String, CategoryReport> =
        read_json_or_default(&config.resolve(&args.categories))?;
    let removed: BTreeSet<String> = read_json_or_default(&config.resolve(&args.removals))?;

    let names = DescriptiveNamer::new(&settings.categories).assign(
        &posts,
        &category_index(&reports),
        &removed,
    );

    write_json(&config.resolve(&args.name_mapping_output), &names.file_names)?;
    write_json(
        &config.resolve(&args.descriptive_names_output),
        &names.descriptive_names,
    )?;
    info!(
        named = names.len(),
        removed = removed.len(),
        "descriptive names generated"
    );
    Ok(names)
}

pub fn run_feature(
    config: &Config,
    args: &FeatureArgs,
    settings: &CuratorSettings,
) -> Result<Vec<FeaturedItem>, CuratorError> {
    let posts = load_posts(&config.resolve(&args.posts))?;
    let reports: BTreeMap<String, CategoryReport> =
        read_json_or_default(&config.resolve(&args.categories))?;
    let eligibility = Eligibility {
        removed: read_json_or_default(&config.resolve(&args.removals))?,
        file_names: read_json(&config.resolve(&args.name_mapping))?,
    };
    let descriptive_names: BTreeMap<String, String> =
        read_json_or_default(&config.resolve(&args.descriptive_names))?;
    let category_of = category_index(&reports);

    let selector = FeaturedSelector::new(&settings.featured)?;
    let context = FeaturedContext {
        eligibility: &eligibility,
        descriptive_names: &descriptive_names,
        category_of: &category_of,
        categories: &settings.categories,
        default_theme_label: &settings.featured.default_theme_label,
        caption_preview_chars: settings.featured.caption_preview_chars,
    };
    let items: Vec<FeaturedItem> = selector
        .select(&posts, &eligibility)
        .into_iter()
        .map(|post| context.item(&selector, post))
        .collect();

    write_json(&config.resolve(&args.output), &items)?;
    info!(
        featured = items.len(),
        candidate_pool = settings.featured.candidate_pool,
        "featured selection complete"
    );
    Ok(items)
}
