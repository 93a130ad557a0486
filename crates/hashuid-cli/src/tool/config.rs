use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use hashuid::{DEFAULT_SEED, Extra};
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Command-line arguments of the `hashuid` binary.
///
/// Global options may also be set through environment variables, or through
/// a `.env` file in the working directory.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "hashuid",
    version,
    about = "Derive, inspect, sort and convert content-hash identifiers"
)]
pub struct CliArgs {
    /// Seed of the content hasher.
    ///
    /// Identifiers are only comparable between runs that share a seed.
    ///
    /// Environment variable: `HASHUID_SEED`
    #[arg(long, global = true, env = "HASHUID_SEED", default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Format of the diagnostics written to stderr. Verbosity is controlled
    /// by `RUST_LOG` and defaults to `warn`.
    ///
    /// Environment variable: `HASHUID_LOG_FORMAT`
    #[arg(
        long,
        global = true,
        env = "HASHUID_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact
    )]
    pub log_format: LogFormat,

    /// Print results as JSON instead of plain text.
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Derive an identifier from record content.
    New(NewArgs),
    /// Parse an identifier and print its components.
    Parse {
        id: String,
        /// Keep at most this many extra segments. Negative keeps them all.
        #[arg(long, allow_negative_numbers = true, default_value_t = -1)]
        depth: isize,
    },
    /// Print the base identifier (hash and time only) of each input. Reads
    /// stdin, one identifier per line, when none is given.
    Base { ids: Vec<String> },
    /// Sort identifiers read from stdin, one per line.
    Sort {
        /// Order by sharded portion only, keeping the input order within a
        /// shard.
        #[arg(long, conflicts_with = "group")]
        by_shard: bool,
        /// Group identifiers under their sharded portion.
        #[arg(long)]
        group: bool,
    },
    /// Encode an identifier into its binary form, printed as hex.
    Encode { id: String },
    /// Decode the hex of a binary form back into an identifier.
    Decode { hex: String },
}

#[derive(Args, Debug, Clone)]
pub struct NewArgs {
    /// Record content. Stdin is read when neither `--data` nor `--file` is
    /// given.
    #[arg(long, conflicts_with = "file")]
    pub data: Option<String>,

    /// Read the record content from this file.
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Hash absent content instead of reading any input.
    #[arg(long, conflicts_with_all = ["data", "file"])]
    pub empty: bool,

    /// Stamp the identifier with the current time.
    #[arg(long)]
    pub now: bool,

    /// Stamp the identifier with this instant, in milliseconds since the
    /// Unix epoch.
    #[arg(long)]
    pub time_millis: Option<u64>,

    /// Dot-separated uniqueifier appended to the identifier.
    #[arg(long)]
    pub extra: Option<String>,
}

/// Validated configuration derived from [`CliArgs`].
#[derive(Debug, Clone)]
pub struct ToolConfig {
    pub seed: u64,
    pub log_format: LogFormat,
    pub json: bool,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    New {
        source: Source,
        stamp: Stamp,
        extra: Option<Extra>,
    },
    Parse {
        id: String,
        depth: isize,
    },
    Base {
        ids: Vec<String>,
    },
    Sort {
        order: SortOrder,
    },
    Encode {
        id: String,
    },
    Decode {
        bytes: Vec<u8>,
    },
}

/// Where `new` reads record content from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Absent,
    Inline(Vec<u8>),
    File(PathBuf),
    Stdin,
}

/// Which time, if any, `new` stamps into the identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stamp {
    Untimed,
    Now,
    At(SystemTime),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Text,
    Shard,
    Group,
}

impl TryFrom<CliArgs> for ToolConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let action = match args.command {
            Command::New(new) => new_action(new)?,
            Command::Parse { id, depth } => Action::Parse { id, depth },
            Command::Base { ids } => Action::Base { ids },
            Command::Sort { by_shard, group } => Action::Sort {
                order: match (by_shard, group) {
                    (_, true) => SortOrder::Group,
                    (true, false) => SortOrder::Shard,
                    (false, false) => SortOrder::Text,
                },
            },
            Command::Encode { id } => Action::Encode { id },
            Command::Decode { hex: input } => Action::Decode {
                bytes: hex::decode(input.trim())
                    .with_context(|| format!("`{input}` is not a valid hex string"))?,
            },
        };

        Ok(Self {
            seed: args.seed,
            log_format: args.log_format,
            json: args.json,
            action,
        })
    }
}

fn new_action(args: NewArgs) -> anyhow::Result<Action> {
    let stamp = match (args.now, args.time_millis) {
        (true, Some(_)) => bail!("--now and --time-millis cannot be combined"),
        (true, None) => Stamp::Now,
        (false, Some(millis)) => Stamp::At(UNIX_EPOCH + Duration::from_millis(millis)),
        (false, None) => Stamp::Untimed,
    };

    let source = match (args.empty, args.data, args.file) {
        (true, _, _) => Source::Absent,
        (false, Some(data), _) => Source::Inline(data.into_bytes()),
        (false, None, Some(path)) => Source::File(path),
        (false, None, None) => Source::Stdin,
    };

    let extra = args.extra.map(Extra::new).transpose()?;

    Ok(Action::New {
        source,
        stamp,
        extra,
    })
}
