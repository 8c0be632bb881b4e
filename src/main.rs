use clap::Parser;
use hacer::Action;
use hacer::core::cache::ConjugationCache;
use hacer::core::config;
use hacer::fetch::SpanishDictSource;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hacer", about = "Interactive quiz on Spanish verb conjugations")]
struct Args {
    /// If no action is specified, update, then play
    #[arg(value_enum)]
    action: Option<Action>,

    /// Directory holding the list files and their defaults
    #[arg(long, default_value = config::DEFAULT_CONFIG_DIR)]
    config_dir: PathBuf,

    /// Directory for the conjugation cache
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run(Args::parse()).await {
        log::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Initialize file logger - writes to hacer.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("hacer.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Hacer starting up with action: {:?}", args.action);

    config::initialize(&args.config_dir)?;
    let settings = config::load_settings(&args.config_dir)?;
    let resolved = config::resolve(&settings, args.data_dir.as_deref());
    let lists = config::load_lists(&args.config_dir)?;

    let (do_update, do_play) = Action::phases(args.action);

    if do_update {
        let source = SpanishDictSource::new(Some(resolved.base_url.clone()));
        let mut cache = ConjugationCache::open(resolved.cache_path())?;
        hacer::update::update(&lists.verbs, &mut cache, &source).await?;
        cache.close()?;
    }

    if do_play {
        let cache = ConjugationCache::open(resolved.cache_path())?;
        let score = hacer::quiz::play(&lists, &cache)?;
        log::info!("Session score: {}/{}", score.correct, score.asked);
        cache.close()?;
    }

    Ok(())
}
