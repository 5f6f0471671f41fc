use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use recommender::{
    FeatureField, QueryOutcome, RecommendationOrchestrator, RecommendationReport,
    RecommenderConfig, SimilarityStrategy, DEFAULT_LIVE_SUGGESTION_LIMIT, DEFAULT_MIN_TOKEN_LEN,
    DEFAULT_SUGGESTION_LIMIT, DEFAULT_TOP_K,
};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Content-based movie recommender
#[derive(Parser)]
#[command(name = "movie-recommender")]
#[command(about = "Recommends movies that share keywords, cast, genres and director", long_about = None)]
struct Cli {
    /// Path to the movie dataset CSV
    #[arg(short, long, default_value = "movie_dataset.csv")]
    data_file: PathBuf,

    /// Number of recommendations per query
    #[arg(long, global = true, default_value_t = DEFAULT_TOP_K)]
    top_k: usize,

    /// Similarity strategy: eager (full matrix at startup) or lazy (rows per query)
    #[arg(long, global = true, default_value = "eager")]
    strategy: SimilarityStrategy,

    /// Shortest token kept when vectorizing features
    #[arg(long, global = true, default_value_t = DEFAULT_MIN_TOKEN_LEN)]
    min_token_len: usize,

    /// "Did you mean" titles offered when a title has no exact match
    #[arg(long, global = true, default_value_t = DEFAULT_SUGGESTION_LIMIT)]
    suggestion_limit: usize,

    /// Completions offered by the shell's :suggest
    #[arg(long, global = true, default_value_t = DEFAULT_LIVE_SUGGESTION_LIMIT)]
    live_suggestion_limit: usize,

    /// Comma-separated feature fields to compare on (default: all four)
    #[arg(long, global = true, value_delimiter = ',')]
    fields: Vec<FeatureField>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend movies similar to a title
    Recommend {
        /// Movie title (case-insensitive, exact)
        #[arg(long)]
        title: String,

        /// Also save the plain-text report to this file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Complete a partially typed title
    Suggest {
        /// Title prefix (case-insensitive)
        #[arg(long)]
        prefix: String,

        /// Maximum number of completions
        #[arg(long, default_value_t = DEFAULT_LIVE_SUGGESTION_LIMIT)]
        limit: usize,
    },

    /// Search titles containing some text
    Search {
        /// Text to look for (case-insensitive substring match)
        #[arg(long)]
        text: String,

        /// Maximum number of results
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Interactive session reading titles from stdin
    Shell,

    /// Run benchmark to test query latency
    Benchmark {
        /// Number of distinct random queries
        #[arg(long, default_value = "100")]
        queries: usize,

        /// Times each query is repeated back to back (exercises the row cache)
        #[arg(long, default_value = "2")]
        repeat: usize,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so `--json` output stays clean on stdout
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = RecommenderConfig::default()
        .with_top_k(cli.top_k)
        .with_strategy(cli.strategy)
        .with_min_token_len(cli.min_token_len)
        .with_suggestion_limit(cli.suggestion_limit)
        .with_live_suggestion_limit(cli.live_suggestion_limit);
    if !cli.fields.is_empty() {
        config = config.with_fields(cli.fields.iter().copied());
    }

    println!("Loading movie dataset from {}...", cli.data_file.display());
    let start = Instant::now();
    let mut orchestrator = RecommendationOrchestrator::load(&cli.data_file, config)
        .with_context(|| format!("Failed to load movie dataset from {}", cli.data_file.display()))?;
    println!(
        "{} Indexed {} movies ({} similarity) in {:?}",
        "✓".green(),
        orchestrator.catalog().len(),
        cli.strategy,
        start.elapsed()
    );

    match cli.command {
        Commands::Recommend {
            title,
            output,
            json,
        } => handle_recommend(&mut orchestrator, &title, output.as_deref(), json)?,
        Commands::Suggest { prefix, limit } => handle_suggest(&orchestrator, &prefix, limit),
        Commands::Search { text, limit } => handle_search(&orchestrator, &text, limit),
        Commands::Shell => handle_shell(&mut orchestrator)?,
        Commands::Benchmark { queries, repeat } => {
            handle_benchmark(&mut orchestrator, queries, repeat)?
        }
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    orchestrator: &mut RecommendationOrchestrator,
    title: &str,
    output: Option<&Path>,
    json: bool,
) -> Result<()> {
    match orchestrator.recommend(title)? {
        QueryOutcome::Recommendations(report) => {
            if json {
                println!("{}", report.to_json()?);
            } else {
                print_report(&report);
            }
            if let Some(path) = output {
                orchestrator
                    .save_last_report(path)
                    .with_context(|| format!("Failed to save results to {}", path.display()))?;
                println!("{} Saved results to {}", "✓".green(), path.display());
            }
        }
        QueryOutcome::NotFound { query, suggestions } => print_not_found(&query, &suggestions),
    }
    Ok(())
}

/// Handle the 'suggest' command
fn handle_suggest(orchestrator: &RecommendationOrchestrator, prefix: &str, limit: usize) {
    let completions = orchestrator.resolver().complete_title(prefix, limit);
    print_titles(&format!("Titles starting with '{}':", prefix), &completions);
}

/// Handle the 'search' command
fn handle_search(orchestrator: &RecommendationOrchestrator, text: &str, limit: usize) {
    let matches = orchestrator.search_titles(text, limit);
    print_titles(&format!("Search results for '{}':", text), &matches);
}

/// One line of shell input
#[derive(Debug, PartialEq, Eq)]
enum ShellCommand<'a> {
    Empty,
    Help,
    Quit,
    Clear,
    Reset,
    Suggest(&'a str),
    Save(&'a str),
    Query(&'a str),
}

impl<'a> ShellCommand<'a> {
    fn parse(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return ShellCommand::Empty;
        }
        let Some(command) = line.strip_prefix(':') else {
            return ShellCommand::Query(line);
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };
        match name {
            "quit" | "q" | "exit" => ShellCommand::Quit,
            "clear" => ShellCommand::Clear,
            "reset" => ShellCommand::Reset,
            "suggest" | "s" => ShellCommand::Suggest(arg),
            "save" => ShellCommand::Save(arg),
            _ => ShellCommand::Help,
        }
    }
}

/// Handle the 'shell' command
fn handle_shell(orchestrator: &mut RecommendationOrchestrator) -> Result<()> {
    println!("Type a movie title, or :help for commands.");
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("{} ", ">".cyan());
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match ShellCommand::parse(&line) {
            ShellCommand::Empty => continue,
            ShellCommand::Quit => break,
            ShellCommand::Help => print_shell_help(),
            ShellCommand::Clear => {
                orchestrator.clear();
                println!("Cleared last results.");
            }
            ShellCommand::Reset => {
                orchestrator.reset();
                println!("Cleared last results and cached similarities.");
            }
            ShellCommand::Suggest(prefix) => {
                let completions = orchestrator.complete_title(prefix);
                print_titles(&format!("Titles starting with '{}':", prefix), &completions);
            }
            ShellCommand::Save("") => println!("Usage: :save FILE"),
            ShellCommand::Save(path) => match orchestrator.save_last_report(Path::new(path)) {
                Ok(()) => println!("{} Saved results to {}", "✓".green(), path),
                Err(e) => eprintln!("{} {}", "✗".red(), e),
            },
            ShellCommand::Query(title) => match orchestrator.recommend(title)? {
                QueryOutcome::Recommendations(report) => print_report(&report),
                QueryOutcome::NotFound { query, suggestions } => {
                    print_not_found(&query, &suggestions)
                }
            },
        }
    }

    Ok(())
}

/// Handle the 'benchmark' command
fn handle_benchmark(
    orchestrator: &mut RecommendationOrchestrator,
    queries: usize,
    repeat: usize,
) -> Result<()> {
    let catalog = orchestrator.catalog().clone();
    if catalog.is_empty() {
        bail!("Cannot benchmark an empty dataset");
    }
    if queries == 0 || repeat == 0 {
        bail!("Benchmark needs at least one query and one repetition");
    }

    // Pick random titles from the catalog
    let titles: Vec<&str> = (0..queries)
        .filter_map(|_| {
            let index = rand::random::<u32>() as usize % catalog.len();
            catalog.title_of(index)
        })
        .collect();

    let hits_before = orchestrator.engine().cache_hits();
    let rows_before = orchestrator.engine().computed_rows();

    let mut timings: Vec<Duration> = Vec::with_capacity(titles.len() * repeat);
    for title in &titles {
        for _ in 0..repeat {
            let start = Instant::now();
            orchestrator.recommend(title)?;
            timings.push(start.elapsed());
        }
    }

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[(timings.len() as f32 * 0.95) as usize];
    let p99 = timings[(timings.len() as f32 * 0.99) as usize];
    let throughput = timings.len() as f32 / total_time.as_secs_f32();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Queries: {} ({} x {})", timings.len(), titles.len(), repeat);
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} queries/second", throughput);
    println!(
        "Similarity rows: {} computed, {} served from cache",
        orchestrator.engine().computed_rows() - rows_before,
        orchestrator.engine().cache_hits() - hits_before
    );

    Ok(())
}

fn print_report(report: &RecommendationReport) {
    println!("{}", report.header().bold().blue());
    println!();
    if report.is_empty() {
        println!("No other movies to compare against.");
        return;
    }
    for (rank, rec) in report.recommendations.iter().enumerate() {
        println!("{}. {}", (rank + 1).to_string().green(), rec);
    }
}

fn print_not_found(query: &str, suggestions: &[String]) {
    if suggestions.is_empty() {
        println!(
            "{}",
            format!("Sorry, '{}' was not found in the dataset.", query).red()
        );
        return;
    }
    println!("{}", format!("No exact match for '{}'. Did you mean:", query).yellow());
    for title in suggestions {
        println!("  - {}", title);
    }
}

fn print_titles(header: &str, titles: &[&str]) {
    println!("{}", header.bold().blue());
    if titles.is_empty() {
        println!("No matching titles.");
    }
    for title in titles {
        println!("  - {}", title);
    }
}

fn print_shell_help() {
    println!("Commands:");
    println!("  <title>          recommend movies similar to <title>");
    println!("  :suggest PREFIX  list titles starting with PREFIX");
    println!("  :save FILE       save the last results to FILE");
    println!("  :clear           forget the last results");
    println!("  :reset           forget the last results and cached similarities");
    println!("  :quit            leave the shell");
}
