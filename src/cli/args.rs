use crate::domain::namespace::Namespace;
use clap::{
    ArgAction, ArgMatches, Args as ClapArgs, CommandFactory, FromArgMatches, Parser, Subcommand,
    ValueEnum,
};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;

/// Command line arguments for argdemo
#[derive(Parser, Debug)]
#[command(
    name = "argdemo",
    version = env!("CARGO_PKG_VERSION"),
    about = "Command-line parsing showcase",
    long_about = "Parses a command line with one of three parser variants (aliases, positional, groups) and prints the resulting namespace."
)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Parser variant to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available parser variants
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Aliased options writing one shared destination
    #[command(args_override_self = true)]
    Aliases(AliasArgs),
    /// Required option plus a single positional value
    #[command(args_override_self = true)]
    Positional(PositionalArgs),
    /// Value counts, help groups, exclusive groups and nested subcommands
    #[command(args_override_self = true)]
    Groups(GroupArgs),
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Namespace(...) line
    #[default]
    Text,
    /// JSON object
    Json,
    /// Name/value table
    Table,
}

/// `-r` and `-f` both feed `bla`; the later one on the command line wins.
#[derive(ClapArgs, Debug)]
pub struct AliasArgs {
    /// Value for bla
    #[arg(
        short = 'r',
        long = "rabit",
        visible_alias = "abit",
        value_name = "BLA",
        required = true
    )]
    pub rabit: String,

    /// Value for bla
    #[arg(short = 'f', long = "fabit", value_name = "BLA", required = true)]
    pub fabit: String,

    /// Switch p on
    #[arg(short = 'p')]
    pub p: bool,

    /// Resolved destination of `-r`/`-f`
    #[arg(skip)]
    pub bla: String,
}

#[derive(ClapArgs, Debug)]
pub struct PositionalArgs {
    /// Rabit value
    #[arg(
        short = 'r',
        long = "rabit",
        visible_alias = "abit",
        value_name = "RABIT",
        required = true
    )]
    pub rabit: String,

    /// Exactly one positional value
    #[arg(value_name = "P")]
    pub p: String,
}

#[derive(ClapArgs, Debug)]
pub struct GroupArgs {
    /// AA FDSA FFDA FF
    #[arg(
        short = 'r',
        long = "rabit",
        visible_alias = "abit",
        required = true,
        num_args = 3,
        action = ArgAction::Set,
        value_names = ["RABIT", "RABIT", "RABIT"]
    )]
    pub rabit: Vec<String>,

    #[arg(value_name = "P")]
    pub p: String,

    /// foo help
    #[arg(long, value_name = "FOO1", help_heading = "group")]
    pub foo1: Option<String>,

    /// bar help
    #[arg(value_name = "BAR", help_heading = "group")]
    pub bar: String,

    #[arg(long, group = "exclusive_a")]
    pub foo2: bool,

    #[arg(id = "bar_flag", long = "bar", action = ArgAction::SetFalse, group = "exclusive_a")]
    pub bar_flag: bool,

    #[arg(long, group = "exclusive_b")]
    pub foo3: bool,

    #[arg(long, action = ArgAction::SetFalse, group = "exclusive_b")]
    pub bar2: bool,

    #[arg(value_name = "BAR3", group = "exclusive_b")]
    pub bar3: Option<String>,

    /// subcommand help
    #[command(subcommand)]
    pub command: GroupCommand,
}

/// Nested subcommands of the groups variant
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum GroupCommand {
    /// a help
    A {
        /// bar help
        #[arg(allow_negative_numbers = true)]
        bar: i64,
    },
    /// b help
    B {
        /// baz help
        #[arg(long, value_enum)]
        baz: Option<Choice>,
    },
}

/// Accepted values of `b --baz`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    #[value(name = "X")]
    X,
    #[value(name = "Y")]
    Y,
    #[value(name = "Z")]
    Z,
}

impl Args {
    /// Parse the process arguments, exiting with a usage message on error
    pub fn parse_resolved() -> Self {
        try_parse_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }
}

/// Parse `itr` and resolve destinations shared between several options.
pub fn try_parse_from<I, T>(itr: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = Args::command().try_get_matches_from(itr)?;
    let mut args = Args::from_arg_matches(&matches)?;

    if let Command::Aliases(aliases) = &mut args.command {
        if let Some(sub_matches) = matches.subcommand_matches("aliases") {
            aliases.resolve_bla(sub_matches);
        }
    }

    Ok(args)
}

impl AliasArgs {
    fn resolve_bla(&mut self, matches: &ArgMatches) {
        let rabit_at = matches.index_of("rabit");
        let fabit_at = matches.index_of("fabit");
        self.bla = if fabit_at > rabit_at {
            self.fabit.clone()
        } else {
            self.rabit.clone()
        };
    }
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Aliases(_) => "aliases",
            Command::Positional(_) => "positional",
            Command::Groups(_) => "groups",
        }
    }

    pub fn to_namespace(&self) -> Namespace {
        match self {
            Command::Aliases(args) => args.into(),
            Command::Positional(args) => args.into(),
            Command::Groups(args) => args.into(),
        }
    }
}

impl GroupCommand {
    pub fn name(&self) -> &'static str {
        match self {
            GroupCommand::A { .. } => "a",
            GroupCommand::B { .. } => "b",
        }
    }
}

impl From<&AliasArgs> for Namespace {
    fn from(args: &AliasArgs) -> Self {
        Namespace::new()
            .with("bla", args.bla.as_str())
            .with("p", args.p)
    }
}

impl From<&PositionalArgs> for Namespace {
    fn from(args: &PositionalArgs) -> Self {
        Namespace::new()
            .with("rabit", args.rabit.as_str())
            .with("p", vec![args.p.as_str()])
    }
}

impl From<&GroupArgs> for Namespace {
    fn from(args: &GroupArgs) -> Self {
        let mut ns = Namespace::new()
            .with("rabit", args.rabit.clone())
            .with("p", vec![args.p.as_str()])
            .with("foo1", args.foo1.clone())
            .with("bar", args.bar.as_str())
            .with("foo2", args.foo2)
            .with("bar_flag", args.bar_flag)
            .with("foo3", args.foo3)
            .with("bar2", args.bar2)
            .with("bar3", args.bar3.clone())
            .with("command", args.command.name());

        match &args.command {
            GroupCommand::A { bar } => ns.insert("a_bar", *bar),
            GroupCommand::B { baz } => ns.insert("baz", baz.map(|c| c.to_string())),
        }
        ns
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Choice::X => write!(f, "X"),
            Choice::Y => write!(f, "Y"),
            Choice::Z => write!(f, "Z"),
        }
    }
}
