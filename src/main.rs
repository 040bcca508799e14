use clap::{Parser, Subcommand};

use git_tagger::commands;
use git_tagger::config::{self, RunConfig, WriteTarget};
use git_tagger::domain::strategy::Strategy;
use git_tagger::git::Git2Repository;
use git_tagger::ui;

const STRATEGY_HELP: &str = "\
Strategies
Following strategies are available: patch, minor, major, datetime (default is patch).

patch, minor and major increase the position by 1 and reset the later positions.
E.g. \"--minor\" changes v1.2.3 to v1.3.0: the minor is increased from 2 to 3,
and the patch position is reset to 0.

The datetime strategy is more special. It stores the current unix timestamp in
the version: the major part is kept, the minor part becomes the seconds of the
day (timestamp % 86400) and the patch part the day index (timestamp / 86400).
E.g. tagging v1.0.0 at 09:30:00 on 01 Jan 2020 (timestamp 1577867400) results
in v1.30600.18262. Such tags do not order like semantic versions.";

#[derive(Parser)]
#[command(
    name = "git-tagger",
    about = "Create git version tags with selectable increment strategies",
    after_long_help = STRATEGY_HELP
)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    #[arg(long, group = "strategy", help = "Increase the major part")]
    major: bool,

    #[arg(long, group = "strategy", help = "Increase the minor part")]
    minor: bool,

    #[arg(long, group = "strategy", help = "Increase the patch part (default)")]
    patch: bool,

    #[arg(
        long,
        group = "strategy",
        help = "Store the current unix timestamp in minor and patch"
    )]
    datetime: bool,

    #[arg(
        long,
        value_name = "N",
        value_parser = clap::value_parser!(u8).range(1..=40),
        help = "Append the first N characters of the commit hash to the tag"
    )]
    hash: Option<u8>,

    #[arg(long, help = "Append a free-form note to the tag")]
    note: Option<String>,

    #[arg(short = 'd', long, help = "Show the new tag but don't apply it")]
    dry: bool,

    #[arg(
        long,
        value_name = "TARGET",
        value_parser = parse_write_target,
        help = "Write the new version into a manifest (npm, flutter or flutter+)"
    )]
    write: Option<WriteTarget>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Create an explicit tag, prompting for the version when not given
    Tag { version: Option<String> },

    /// List all version tags
    List,

    /// Tag the version currently in package.json
    Npm,

    /// Tag the version currently in pubspec.yaml
    Flutter {
        #[arg(long, help = "Increment the pubspec build counter first")]
        build: bool,
    },
}

fn parse_write_target(s: &str) -> Result<WriteTarget, String> {
    s.parse()
}

fn strategy_from_args(args: &Args) -> Strategy {
    if args.major {
        Strategy::Major
    } else if args.minor {
        Strategy::Minor
    } else if args.datetime {
        Strategy::Datetime
    } else {
        Strategy::Patch
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let file_config = config::load_config(args.config.as_deref())?;
    let run_config = RunConfig::new(
        strategy_from_args(&args),
        args.hash.map(usize::from),
        args.note.clone(),
        args.dry,
        args.write,
        &file_config,
    );

    if run_config.hash_len == Some(1) {
        ui::display_hash_advisory();
    }

    let repo = Git2Repository::discover()?;

    match args.command {
        None => {
            let outcome = commands::auto(&repo, &run_config)?;
            ui::display_outcome(&outcome);
        }
        Some(Command::Tag { version }) => {
            let version = match version {
                Some(version) => version,
                None => ui::prompt_version()?,
            };
            let outcome = commands::explicit_tag(&repo, &run_config, &version)?;
            ui::display_outcome(&outcome);
        }
        Some(Command::List) => {
            let versions = commands::list(&repo)?;
            ui::display_versions(&versions);
        }
        Some(Command::Npm) => {
            let outcome = commands::npm(&repo, &run_config)?;
            ui::display_outcome(&outcome);
        }
        Some(Command::Flutter { build }) => {
            let outcome = commands::flutter(&repo, &run_config, build)?;
            ui::display_outcome(&outcome);
        }
    }

    Ok(())
}
