use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Clock, PetBoardService, QuestionBank, QuizService};
use storage::repository::Storage;
use storage::rest::RestStoreConfig;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidStoreUrl { raw: String },
    MissingStoreKey,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidStoreUrl { raw } => write!(f, "invalid --store-url value: {raw}"),
            ArgsError::MissingStoreKey => {
                write!(f, "--store-url was given without --store-key (or HUB_STORE_KEY)")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    quiz: Arc<QuizService>,
    pet_board: Arc<PetBoardService>,
}

impl UiApp for DesktopApp {
    fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    fn pet_board(&self) -> Arc<PetBoardService> {
        Arc::clone(&self.pet_board)
    }
}

struct Args {
    store_url: Option<String>,
    store_key: Option<String>,
    offline: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--store-url <url> --store-key <key>] [--offline]");
    eprintln!();
    eprintln!("Without a remote store the lost-pet board runs on a bundled demo set.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  HUB_STORE_URL, HUB_STORE_KEY");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut store_url = std::env::var("HUB_STORE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty());
        let mut store_key = std::env::var("HUB_STORE_KEY")
            .ok()
            .filter(|value| !value.trim().is_empty());
        let mut offline = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--store-url" => {
                    let value = require_value(args, "--store-url")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidStoreUrl { raw: value });
                    }
                    store_url = Some(value);
                }
                "--store-key" => {
                    store_key = Some(require_value(args, "--store-key")?);
                }
                "--offline" => offline = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            store_url,
            store_key,
            offline,
        })
    }
}

fn open_store(args: &Args) -> Result<Storage, Box<dyn std::error::Error>> {
    if args.offline {
        tracing::info!("running offline, board uses the bundled demo set");
        return Ok(Storage::in_memory_demo());
    }

    match (&args.store_url, &args.store_key) {
        (Some(url), Some(key)) => {
            let config = RestStoreConfig {
                base_url: url.clone(),
                api_key: key.clone(),
            };
            let store = Storage::rest(&config)?;
            tracing::info!(url = %url, "board uses the remote animal store");
            Ok(store)
        }
        (Some(_), None) => Err(ArgsError::MissingStoreKey.into()),
        _ => {
            tracing::info!("no remote store configured, board uses the bundled demo set");
            Ok(Storage::in_memory_demo())
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let store = open_store(&parsed)?;

    let bank = QuestionBank::load_bundled()?;
    let quiz = Arc::new(QuizService::new(bank));
    let pet_board = Arc::new(PetBoardService::new(
        Arc::clone(&store.animals),
        Clock::default_clock(),
    ));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { quiz, pet_board });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    // Explicitly disable it so the app doesn't behave like a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Ouroborus Hub")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
