use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use chatwrap_lib::services::chat_wrappers::randomize_chat_wrappers;
use chatwrap_lib::services::config::{load_config, GeneratorConfig};
use chatwrap_lib::services::core::progress::ProgressState;

const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Rewrite the game's chat format strings with invisible name/message markers.
#[derive(Parser, Debug)]
#[command(name = "chatwrap", version, about)]
struct Cli {
    /// The game's `tf` directory
    #[arg(long)]
    tf_dir: Option<PathBuf>,

    /// JSON config file; flags given here take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible wrappers
    #[arg(long)]
    seed: Option<u64>,

    /// Only process these languages (repeatable)
    #[arg(long = "language", value_name = "LANG")]
    languages: Vec<String>,

    /// Also write the generated wrappers to this JSON file
    #[arg(long)]
    wrappers_json: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn resolve_config(&self) -> anyhow::Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => GeneratorConfig::default(),
        };

        if let Some(tf_dir) = &self.tf_dir {
            config.tf_dir = tf_dir.clone();
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if !self.languages.is_empty() {
            config.languages = self.languages.clone();
        }
        if self.wrappers_json.is_some() {
            config.wrappers_json = self.wrappers_json.clone();
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = cli.resolve_config()?;
    let progress = ProgressState::new();
    let done = AtomicBool::new(false);

    let report = thread::scope(|scope| {
        scope.spawn(|| {
            let mut last = None;
            while !done.load(Ordering::SeqCst) {
                let snapshot = progress.snapshot();
                if last != Some(snapshot) && snapshot.max > 0 {
                    log::debug!("Progress {}/{}", snapshot.value, snapshot.max);
                    last = Some(snapshot);
                }
                thread::sleep(POLL_INTERVAL);
            }
        });

        let result = randomize_chat_wrappers(&config, &progress);
        done.store(true, Ordering::SeqCst);
        result
    })
    .with_context(|| format!("generating chat wrappers in {}", config.tf_dir.display()))?;

    if !report.failed_languages.is_empty() {
        log::warn!(
            "Could not write translations for: {}",
            report.failed_languages.join(", ")
        );
    }
    Ok(())
}
