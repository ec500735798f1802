mod commands;
mod logging;
mod screen;

use anyhow::Result;
use clap::Parser;
use fni_core::{AssetClass, Sentiment, DEFAULT_API_URL};
use fni_storage::{BackendKind, ClientConfig};
use tracing::error;

use commands::SubmitArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Save financial news and browse its summaries", long_about = None)]
pub struct Cli {
    /// Base address of the Articles API
    #[arg(long, global = true, default_value = DEFAULT_API_URL)]
    api_url: String,
    /// Keep articles in memory instead of talking to the Articles API
    #[arg(long, global = true)]
    offline: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Interactive screen: form, search, list and detail panel (default)
    Tui,
    /// Print the stored articles
    List {
        /// Only articles whose title, source or summary contain this text
        #[arg(short, long)]
        search: Option<String>,
        /// Print whole summaries instead of the 200 character preview
        #[arg(long)]
        full: bool,
    },
    /// Print one article in full
    Show {
        id: String,
    },
    /// Submit a new article
    Submit {
        #[arg(long)]
        title: String,
        /// Article text, or `-` to read it from stdin
        #[arg(long)]
        content: String,
        #[arg(long, default_value = "")]
        source: String,
        #[arg(long, value_enum)]
        asset_class: Option<AssetClass>,
        #[arg(long, value_enum)]
        sentiment: Option<Sentiment>,
    },
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        let backend = if self.offline { BackendKind::Memory } else { BackendKind::Http };
        ClientConfig::new().with_url(&self.api_url).with_backend(backend)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let interactive = cli.command.as_ref().map_or(true, |c| matches!(c, Commands::Tui));
    logging::init_logging(interactive);

    let api = fni_storage::create_api(&cli.client_config())?;

    let result = match cli.command {
        None | Some(Commands::Tui) => screen::run(api).await,
        Some(Commands::List { search, full }) => commands::list(api.as_ref(), search, full).await,
        Some(Commands::Show { id }) => commands::show(api.as_ref(), &id).await,
        Some(Commands::Submit { title, content, source, asset_class, sentiment }) => {
            let args = SubmitArgs { title, source, content, asset_class, sentiment };
            commands::submit(api.as_ref(), args).await
        }
    };

    if let Err(e) = &result {
        error!("{:#}", e);
    }
    result
}
