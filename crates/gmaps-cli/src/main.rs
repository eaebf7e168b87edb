use clap::Parser;

use gmaps_scraper::{
    OutputMode, PageBudget, ReviewsClient, ScrapeOutput, ScrapeRequest, SortOrder,
};

#[derive(Debug, Parser)]
#[command(name = "gmaps-cli")]
#[command(about = "Scrape Google Maps reviews from a shareable place URL")]
struct Cli {
    /// Shareable place URL (https://www.google.com/maps/place/...).
    url: String,

    /// Review ordering: relevant, newest, highest_rating, lowest_rating.
    #[arg(long, default_value = "relevant")]
    sort: SortOrder,

    /// Only return reviews matching this text.
    #[arg(long, default_value = "")]
    search: String,

    /// Page budget: "max" or a positive integer.
    #[arg(long, default_value = "max")]
    pages: PageBudget,

    /// Decode reviews into normalized records instead of raw entries.
    #[arg(long)]
    normalize: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let client = ReviewsClient::with_defaults()?;
    let mut request = ScrapeRequest::new(cli.url);
    request.sort = cli.sort;
    request.search_query = cli.search;
    request.pages = cli.pages;
    request.output = if cli.normalize {
        OutputMode::Normalized
    } else {
        OutputMode::Raw
    };

    match client.scrape(&request).await {
        Some(ScrapeOutput::Empty) => {
            println!("[]");
            Ok(())
        }
        Some(ScrapeOutput::Raw(entries)) => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
            Ok(())
        }
        Some(ScrapeOutput::Normalized(records)) => {
            println!("{}", serde_json::to_string_pretty(&records)?);
            Ok(())
        }
        None => anyhow::bail!("scrape failed; see log output"),
    }
}
