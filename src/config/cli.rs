//! CLI argument parsing using clap.
//!
//! Defines the command-line interface. Flags are parsed into plain booleans
//! here; expanding `--all` and the "no flags means everything" default happen
//! in [`super::ValidatedConfig`].

use clap::{Arg, ArgAction, CommandFactory, FromArgMatches, Parser};

/// myip: list IP addresses
///
/// Prints the ethernet, loopback and public IPv4/IPv6 addresses of this
/// machine. With no category flag, all categories are shown.
#[derive(Debug, Parser)]
#[command(name = "myip")]
#[command(version, about, long_about = None, disable_version_flag = true)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct Cli {
    /// Same as --ethernet --loopback --public
    #[arg(short, long)]
    pub all: bool,

    /// Print ethernet IP addresses
    #[arg(short, long)]
    pub ethernet: bool,

    /// Print loopback IP addresses
    #[arg(short, long)]
    pub loopback: bool,

    /// Print public IP addresses
    #[arg(short, long)]
    pub public: bool,

    /// Print the result as a JSON object
    #[arg(long)]
    pub json: bool,

    /// Timeout in seconds for each public address lookup
    #[arg(long, short, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Enable verbose logging on stderr
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Builds the clap command, including the `-v, --version` flag.
    ///
    /// clap's built-in version flag uses `-V`; it is replaced here so that
    /// `-v` prints the version.
    #[must_use]
    pub fn build_command() -> clap::Command {
        <Self as CommandFactory>::command().arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .action(ArgAction::Version)
                .help("Print version"),
        )
    }

    /// Parses CLI arguments from the command line.
    ///
    /// Exits the process for `--help`, `--version`, and parse errors.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::try_parse_from_iter(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns the clap error for unknown flags, bad values, and the
    /// help/version "errors" clap uses to request an early exit.
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut command = Self::build_command();
        let matches = command.try_get_matches_from_mut(iter)?;
        Self::from_arg_matches(&matches).map_err(|e| e.format(&mut command))
    }

    /// Parses CLI arguments from an iterator, panicking on error.
    #[cfg(test)]
    pub(crate) fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from_iter(iter).unwrap()
    }
}
