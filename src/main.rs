use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use shakesearch::index::{DEFAULT_CONTEXT_RADIUS, ExtractMode, Index, SearchOptions};
use shakesearch::query::{case_variants, search_variants};
use shakesearch::server::protocol::MAX_RESULTS_CAP;
use shakesearch::server::{self, ServerConfig, ServerLimits};
use shakesearch::utils::progress::spinner;
use shakesearch::{logging, output};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "shakesearch")]
#[command(about = "In-memory suffix-array search over a text corpus")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Server options (when no subcommand is given)
    #[command(flatten)]
    serve: ServeArgs,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the corpus and serve the HTTP search API (default)
    Serve(ServeArgs),
    /// Run a single search and print the results
    Query {
        /// Search query
        #[arg(required = true, trailing_var_arg = true)]
        query: Vec<String>,

        #[command(flatten)]
        corpus: CorpusArgs,

        /// Result style
        #[arg(short, long, value_enum, default_value_t = ModeArg::Word)]
        mode: ModeArg,

        /// Context radius in bytes (with --mode context)
        #[arg(short, long, default_value_t = DEFAULT_CONTEXT_RADIUS)]
        radius: usize,

        /// Maximum number of results
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Search only the query as typed, without case variants
        #[arg(long)]
        exact: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Show index statistics
    Stats {
        #[command(flatten)]
        corpus: CorpusArgs,
    },
}

#[derive(Args, Clone)]
struct CorpusArgs {
    /// The name of the file to read
    #[arg(short = 'f', long = "file", env = "CORPUS_FILE", default_value = "completeworks.txt")]
    file: PathBuf,
}

#[derive(Args, Clone)]
struct ServeArgs {
    #[command(flatten)]
    corpus: CorpusArgs,

    /// Port to listen on
    // Kept as text so a bad `PORT` only fails when actually serving
    #[arg(long, env = "PORT", default_value = "3001")]
    port: String,

    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Directory of static files served at `/`
    #[arg(long, default_value = "./static")]
    static_dir: PathBuf,

    /// Default context radius for `mode=context` requests
    #[arg(long, default_value_t = DEFAULT_CONTEXT_RADIUS)]
    context_radius: usize,

    /// Upper bound on results per request
    #[arg(long, default_value_t = MAX_RESULTS_CAP)]
    max_results: usize,
}

impl ServeArgs {
    fn port(&self) -> Result<u16> {
        self.port
            .parse()
            .with_context(|| format!("Invalid port {:?}", self.port))
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Word,
    Context,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Some(Commands::Serve(args)) => run_server(args)?,
        None => run_server(cli.serve)?,
        Some(Commands::Query {
            query,
            corpus,
            mode,
            radius,
            limit,
            exact,
            no_color,
        }) => {
            let index = load_index(&corpus.file)?;
            let query = query.join(" ");
            let options = SearchOptions {
                mode: match mode {
                    ModeArg::Word => ExtractMode::Word,
                    ModeArg::Context => ExtractMode::Context { radius },
                },
                limit,
            };

            let start = Instant::now();
            let (results, needles) = if exact {
                (index.search_with(&query, &options), vec![query.clone()])
            } else {
                (search_variants(&index, &query, &options), case_variants(&query))
            };
            let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

            output::print_results(&results, &needles, !no_color)?;
            output::print_summary(results.len(), duration_ms, !no_color)?;
        }
        Some(Commands::Stats { corpus }) => {
            let index = load_index(&corpus.file)?;
            shakesearch::index::stats::show_stats(&index);
        }
    }

    Ok(())
}

fn load_index(path: &Path) -> Result<Index> {
    let pb = spinner(&format!("Indexing {}", path.display()));
    let index = Index::load(path);
    pb.finish_and_clear();
    index.with_context(|| format!("Failed to load corpus {}", path.display()))
}

fn run_server(args: ServeArgs) -> Result<()> {
    let port = args.port()?;
    let index = Arc::new(load_index(&args.corpus.file)?);

    let config = ServerConfig {
        host: args.host,
        port,
        static_dir: args.static_dir,
        limits: ServerLimits {
            context_radius: args.context_radius,
            max_results: args.max_results,
        },
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start tokio runtime")?;

    runtime.block_on(server::serve(index, config))
}
