use clap::{Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description, crate_name, crate_version};

use crate::constants::{DRY_RUN_HELP, FILES_HELP, LOG_FILE_HELP, VERBOSE_HELP};
use crate::logging::LogLevel;

/// Everything the command line asked for, parsed once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Paths as given, in order (possibly a single wildcard entry)
    pub files: Vec<String>,
    /// Logging verbosity derived from the number of `-v` flags
    pub verbosity: LogLevel,
    /// Report new names without renaming
    pub dry_run: bool,
    /// Optional file receiving a copy of every log record
    pub log_file: Option<String>,
}

impl Invocation {
    /// Builds the invocation record from parsed arguments
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let files = matches
            .get_many::<String>("files")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        Invocation {
            files,
            verbosity: get_verbosity(matches),
            dry_run: matches.get_flag("dry"),
            log_file: matches.get_one::<String>("log_file").cloned(),
        }
    }
}

/// Defines the command-line interface
///
/// Defines the following arguments:
/// - `files`: Zero or more invoice paths
/// - `dry`: Run without renaming any files
/// - `verbose`: Increase verbosity level
/// - `log_file`: Also log to a file
pub fn build_command() -> Command {
    // invoice paths, a lone quoted wildcard is resolved internally
    let arg_files = Arg::new("files")
        .value_name("FILE")
        .help(FILES_HELP)
        .num_args(0..)
        .action(ArgAction::Append);

    // define arg for dry run
    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(ArgAction::SetTrue);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    // define arg for log file
    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .value_name("PATH")
        .help(LOG_FILE_HELP);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_files)
        .arg(arg_dry)
        .arg(log_file)
        .arg(arg_verbose)
}

/// Parses the process arguments, exiting with clap's usage message on error
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the verbosity level from the command-line arguments
///
/// # Examples
/// ```
/// # use invoice_rename::cli::{build_command, get_verbosity};
/// # use invoice_rename::logging::LogLevel;
/// let matches = build_command().get_matches_from(["invrename", "-v", "invoice.xml"]);
/// assert_eq!(get_verbosity(&matches), LogLevel::Debug);
/// ```
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}
