use anyhow::Result;
use clap::{Parser, Subcommand};
use fabrag_core::{RetrieverCache, RetrieverConfig};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "fabrag")]
#[command(about = "Query a fabrication-research corpus with BM25", long_about = None)]
struct Cli {
    /// Corpus CSV path
    #[arg(long, default_value = "./data/fabrication.csv")]
    dataset: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the corpus against a query and print the hits
    Search {
        query: String,
        /// Maximum number of results (defaults to the retriever's top-k)
        #[arg(long)]
        top_k: Option<usize>,
        /// Emit hits as JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Also print the assembled generation context block
        #[arg(long, default_value_t = false)]
        context: bool,
    },
    /// Print corpus statistics
    Stats,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    let cache = RetrieverCache::new(RetrieverConfig::default());
    let retriever = cache.get_or_build(&cli.dataset)?;

    match cli.command {
        Commands::Search {
            query,
            top_k,
            json,
            context,
        } => {
            let top_k = top_k.unwrap_or(retriever.config().default_top_k);
            let ranked = retriever.search(&query, top_k);
            let hits = retriever.hits(&ranked);
            if json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else if hits.is_empty() {
                println!("no results");
            } else {
                for (rank, hit) in hits.iter().enumerate() {
                    println!("{:>2}. {:8.4}  {}", rank + 1, hit.score, hit.title);
                    println!("    {}", hit.snippet.replace('\n', " "));
                }
            }
            if context {
                println!("\n{}", retriever.context_block(&ranked));
            }
        }
        Commands::Stats => {
            let index = retriever.index();
            println!("documents:    {}", index.num_docs());
            println!("terms:        {}", index.num_terms());
            println!("avg doc len:  {:.2}", index.avg_doc_len());
        }
    }
    Ok(())
}
