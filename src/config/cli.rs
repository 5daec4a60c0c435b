use super::{ConfigError, CuratorSettings, LogFormat, LogLevel, StrategyKind};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Directory holding the pipeline's JSON files
    #[arg(long, env = "DATA_DIR", default_value = ".", global = true)]
    pub data_dir: PathBuf,

    /// TOML file with categories and tunables (optional)
    #[arg(long, env = "CURATOR_CONFIG", global = true)]
    pub config_file: Option<PathBuf>,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info", global = true)]
    pub log_level: LogLevel,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", default_value = "compact", global = true)]
    pub log_format: LogFormat,

    /// Extra per-target log filters, e.g. showcase_curator::distribution=debug
    #[arg(
        long = "log-directive",
        env = "LOG_DIRECTIVES",
        value_delimiter = ',',
        global = true
    )]
    pub log_directives: Vec<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Sort posts into gallery categories and write the category reports
    Categorize(CategorizeArgs),
    /// Flag images whose OCR text has too many words
    Screen(ScreenArgs),
    /// Generate descriptive file names for the kept images
    Name(NameArgs),
    /// Pick the homepage's featured cakes
    Feature(FeatureArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CategorizeArgs {
    /// Scraped posts
    #[arg(long, env = "POSTS_FILE", default_value = "instagram_posts_full.json")]
    pub posts: PathBuf,

    /// Full report with complete post records
    #[arg(long, default_value = "categories_full.json")]
    pub full_output: PathBuf,

    /// Simplified report with image references only
    #[arg(long, default_value = "categories.json")]
    pub simple_output: PathBuf,

    /// Also write the per-post scoring rationale to this file
    #[arg(long)]
    pub rationale: Option<PathBuf>,

    /// Minimum posts per category (overrides the config file)
    #[arg(long, env = "MIN_QUOTA")]
    pub min_quota: Option<usize>,

    /// Near-tie threshold (overrides the config file)
    #[arg(long, env = "NEAR_TIE_THRESHOLD")]
    pub near_tie_threshold: Option<f64>,

    /// Classification strategy (overrides the config file)
    #[arg(long, env = "STRATEGY")]
    pub strategy: Option<StrategyKind>,
}

#[derive(Args, Debug, Clone)]
pub struct ScreenArgs {
    /// OCR text per image file name, as a JSON object
    #[arg(long, default_value = "image_text.json")]
    pub ocr_text: PathBuf,

    #[arg(long, default_value = "images_to_remove.json")]
    pub output: PathBuf,

    /// Per-image word counts and previews
    #[arg(long, default_value = "image_text_analysis.json")]
    pub analysis_output: PathBuf,

    /// Word limit (overrides the config file)
    #[arg(long)]
    pub max_words: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct NameArgs {
    #[arg(long, env = "POSTS_FILE", default_value = "instagram_posts_full.json")]
    pub posts: PathBuf,

    #[arg(long, default_value = "categories_full.json")]
    pub categories: PathBuf,

    /// Removal list; a missing file means nothing is removed
    #[arg(long, default_value = "images_to_remove.json")]
    pub removals: PathBuf,

    #[arg(long, default_value = "image_name_mapping.json")]
    pub name_mapping_output: PathBuf,

    #[arg(long, default_value = "descriptive_names.json")]
    pub descriptive_names_output: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct FeatureArgs {
    #[arg(long, env = "POSTS_FILE", default_value = "instagram_posts_full.json")]
    pub posts: PathBuf,

    #[arg(long, default_value = "categories_full.json")]
    pub categories: PathBuf,

    #[arg(long, default_value = "images_to_remove.json")]
    pub removals: PathBuf,

    #[arg(long, default_value = "image_name_mapping.json")]
    pub name_mapping: PathBuf,

    #[arg(long, default_value = "descriptive_names.json")]
    pub descriptive_names: PathBuf,

    #[arg(long, default_value = "featured.json")]
    pub output: PathBuf,

    /// Most-liked posts considered (overrides the config file)
    #[arg(long)]
    pub candidate_pool: Option<usize>,

    /// Posts featured (overrides the config file)
    #[arg(long)]
    pub featured_count: Option<usize>,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Categorize(_) => "categorize",
            Command::Screen(_) => "screen",
            Command::Name(_) => "name",
            Command::Feature(_) => "feature",
        }
    }
}

impl Config {
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Config::try_parse_from(args)
    }

    /// Resolves `path` against the data directory unless it is absolute.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_dir.join(path)
        }
    }

    /// Loads the settings file (if any) and applies command-line overrides.
    pub fn settings(&self) -> Result<CuratorSettings, ConfigError> {
        let mut settings = CuratorSettings::load(self.config_file.as_deref())?;

        match &self.command {
            Command::Categorize(args) => {
                if let Some(min_quota) = args.min_quota {
                    settings.distribution.min_quota = min_quota;
                }
                if let Some(threshold) = args.near_tie_threshold {
                    settings.distribution.near_tie_threshold = threshold;
                }
                if let Some(strategy) = args.strategy {
                    settings.distribution.strategy = strategy;
                }
            }
            Command::Screen(args) => {
                if let Some(max_words) = args.max_words {
                    settings.screening.max_words = max_words;
                }
            }
            Command::Name(_) => {}
            Command::Feature(args) => {
                if let Some(pool) = args.candidate_pool {
                    settings.featured.candidate_pool = pool;
                }
                if let Some(count) = args.featured_count {
                    settings.featured.featured_count = count;
                }
            }
        }

        settings.validate()?;
        Ok(settings)
    }
}
