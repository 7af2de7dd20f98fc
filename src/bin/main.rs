use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moviefinder_rs::config::Config;
use moviefinder_rs::PageKind;

#[derive(Parser, Debug)]
#[command(name = "moviefinder")]
#[command(about = "Drive the movie search pages against a backend", long_about = None)]
struct Args {
    #[arg(short, long, default_value = "moviefinder.yaml")]
    config: String,

    /// Overrides backend.baseurl from the config file.
    #[arg(short, long)]
    baseurl: Option<String>,

    #[arg(value_enum)]
    page: Page,

    query: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Page {
    Movie,
    Recs,
    Actor,
}

impl From<Page> for PageKind {
    fn from(page: Page) -> Self {
        match page {
            Page::Movie => PageKind::Movie,
            Page::Recs => PageKind::Recommendations,
            Page::Actor => PageKind::Actor,
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moviefinder_rs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut config = match Config::from_file_or_default(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(baseurl) = args.baseurl {
        config.backend.base_url = baseurl;
    }

    if let Err(e) = moviefinder_rs::run(config, args.page.into(), &args.query).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
