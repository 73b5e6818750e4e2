use anyhow::{Context, Result, bail};
use chat_splitter::driver::Status;
use chat_splitter::{
    AutoSubmitter, DriverConfig, HostError, HostRegistry, PartFormatter, Preferences, RunOutcome,
    Separators, Session, TerminalHost, TextSplitter, char_len, parse_limit,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "chat-splitter", version, about = "Split long text into framed chat-sized parts")]
struct Cli {
    /// Preferences file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the raw chunks, without part markers
    Split(InputArgs),

    /// Print every framed part
    Parts {
        #[command(flatten)]
        input: InputArgs,

        /// Emit the part sequence as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a single part, ready to paste
    Part {
        /// 1-based part index
        index: usize,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Submit every part to stdout, one after another
    Send {
        #[command(flatten)]
        input: InputArgs,

        /// Pause after each part, in milliseconds
        #[arg(long, default_value_t = 0)]
        delay_ms: u64,

        /// Destination host to dispatch to
        #[arg(long, default_value = "localhost")]
        host: String,
    },

    /// Read or change the stored size limit
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the stored limit
    Get,
    /// Store a new limit
    SetLimit { limit: String },
    /// Show where preferences are kept
    Path,
}

#[derive(Args)]
struct InputArgs {
    /// Read text from a file instead of stdin
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Maximum characters per part (overrides the stored limit)
    #[arg(short, long)]
    limit: Option<String>,

    /// Boundary profile used when splitting
    #[arg(long, value_enum, default_value_t = Profile::Prose)]
    separators: Profile,
}

#[derive(Clone, Copy, ValueEnum)]
enum Profile {
    Prose,
    Markdown,
}

impl Profile {
    fn separators(self) -> Separators {
        match self {
            Profile::Prose => Separators::prose(),
            Profile::Markdown => Separators::markdown(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let prefs_path = match cli.config {
        Some(path) => path,
        None => Preferences::default_path().context("Failed to locate preferences")?,
    };
    let mut prefs = Preferences::load(&prefs_path).context("Failed to load preferences")?;

    match cli.command {
        Command::Split(input) => {
            let text = read_text(&input)?;
            let limit = resolve_limit(&input, &prefs);
            let chunks = TextSplitter::new(limit)
                .with_separators(input.separators.separators())
                .split(&text);

            info!(limit, chunks = chunks.len(), "split complete");
            for (i, chunk) in chunks.iter().enumerate() {
                println!("--- chunk {}/{} ({} chars) ---", i + 1, chunks.len(), char_len(chunk));
                println!("{}", chunk);
            }
        }

        Command::Parts { input, json } => {
            let text = read_text(&input)?;
            let limit = resolve_limit(&input, &prefs);
            let parts = PartFormatter::new(limit)
                .with_separators(input.separators.separators())
                .format(&text)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&parts)?);
            } else {
                for part in &parts {
                    println!("{}\n", part.text);
                }
            }
            info!(limit, parts = parts.len(), "formatted");
        }

        Command::Part { index, input } => {
            let text = read_text(&input)?;
            let limit = resolve_limit(&input, &prefs);
            let mut session = Session::with_separators(limit, input.separators.separators());
            session.set_text(text);

            let part = session.mark_copied(index)?;
            println!("{}", part.text);
            info!(index, total = part.total, chars = part.len(), "part ready to paste");
        }

        Command::Send {
            input,
            delay_ms,
            host,
        } => {
            let text = read_text(&input)?;
            let limit = resolve_limit(&input, &prefs);
            let parts = PartFormatter::new(limit)
                .with_separators(input.separators.separators())
                .format(&text)?;

            let mut registry = HostRegistry::new();
            registry.register(TerminalHost::new(io::stdout()));
            let adapter = registry
                .select(&host)
                .ok_or_else(|| HostError::UnknownHost(host.clone()))?;

            let submitter = AutoSubmitter::new(DriverConfig {
                min_delay: Duration::from_millis(delay_ms),
                poll_interval: Duration::from_millis(10),
                ..DriverConfig::default()
            });
            let run = submitter.run(adapter, &parts, |progress| {
                if progress.status == Status::Pending {
                    info!(current = progress.current, total = progress.total, "sent part");
                }
            });

            tokio::pin!(run);

            let finished = tokio::select! {
                outcome = &mut run => Some(outcome?),
                _ = tokio::signal::ctrl_c() => None,
            };
            // On ctrl-c the run is stopped, then drained so it reports what was sent
            let outcome = match finished {
                Some(outcome) => outcome,
                None => {
                    warn!("interrupted");
                    submitter.stop(adapter);
                    run.await?
                }
            };

            match outcome {
                RunOutcome::Completed { submitted } => info!(submitted, "all parts sent"),
                RunOutcome::Cancelled { submitted } => warn!(submitted, "send cancelled"),
            }
        }

        Command::Config { action } => match action {
            ConfigAction::Get => println!("{}", prefs.limit()),
            ConfigAction::SetLimit { limit } => {
                let limit = parse_limit(&limit);
                if limit == 0 {
                    bail!("Limit must be a positive integer");
                }
                prefs.set_limit(limit);
                prefs.save().context("Failed to save preferences")?;
                info!(limit, path = %prefs.path().display(), "limit saved");
            }
            ConfigAction::Path => println!("{}", prefs.path().display()),
        },
    }

    Ok(())
}

/// Limit from the flag when given (invalid input becomes 0), else the stored one
fn resolve_limit(input: &InputArgs, prefs: &Preferences) -> usize {
    match &input.limit {
        Some(raw) => parse_limit(raw),
        None => prefs.limit(),
    }
}

fn read_text(input: &InputArgs) -> Result<String> {
    match &input.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}
