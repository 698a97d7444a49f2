use clap::{Args, CommandFactory, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// Subcommand inserted in front of a naked query.
const DEFAULT_COMMAND: &str = "find";

#[derive(Parser, Debug)]
#[command(
    name = "jdnav",
    bin_name = "jdnav",
    version,
    about = "Jump to Johnny.Decimal folders by typing their number",
    long_about = None,
    after_help = "A query without a subcommand runs find: `jdnav 11.01` is `jdnav find 11.01`."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Root of the Johnny.Decimal tree (overrides the config file and $JDNAV_ROOT)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Parses process arguments, routing a naked query to `find`.
    pub fn parse_args() -> Self {
        Self::parse_from(with_default_command(std::env::args_os()))
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct FindArgs {
    /// Query such as 11.01, 1101, "11 01", 11 or 1; trailing text is ignored
    #[arg(num_args = 0..)]
    pub query: Vec<String>,

    /// Open the first match in the file manager
    #[arg(short, long)]
    pub open: bool,

    /// Copy the path of the first match to the clipboard
    #[arg(short, long)]
    pub copy: bool,

    /// Print bare paths only, e.g. cd "$(jdnav -p 11.01)"
    #[arg(short, long, conflicts_with = "json")]
    pub path_only: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl FindArgs {
    /// Query words joined back together, so `11 01` needs no quoting.
    pub fn query_text(&self) -> String {
        self.query.join(" ")
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the folder for an id, category or area
    #[command(alias = "f", display_order = 1)]
    Find(FindArgs),

    /// Show how a query is read, without touching the disk
    #[command(display_order = 2)]
    Parse {
        /// Query to parse
        #[arg(num_args = 0..)]
        query: Vec<String>,
    },

    /// Get or set configuration
    #[command(display_order = 3)]
    Config {
        /// Configuration key (root, opener)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,

        /// Remove the key from the config file
        #[arg(long, requires = "key", conflicts_with = "value")]
        unset: bool,
    },
}

/// Inserts `find` after the binary name unless the first positional
/// argument is already a subcommand.
///
/// Options are skipped while looking for that positional, along with the
/// value of `-r`/`--root`. Without any positional, or with `-h`/`-V`, the
/// arguments are left alone so clap prints help or version.
pub fn with_default_command<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    let mut tokens = args
        .iter()
        .skip(1)
        .map(|a| a.to_string_lossy().into_owned());
    let mut first_positional = None;
    while let Some(token) = tokens.next() {
        if token == "--" {
            first_positional = tokens.next();
            break;
        }
        if let Some(long) = token.strip_prefix("--") {
            match long {
                "help" | "version" => return args,
                "root" => {
                    tokens.next();
                }
                _ => {}
            }
            continue;
        }
        if let Some(short) = token.strip_prefix('-').filter(|s| !s.is_empty()) {
            for (i, c) in short.char_indices() {
                match c {
                    'h' | 'V' => return args,
                    // `-r PATH` or `-vr PATH`; in `-r/jd` the value is attached
                    'r' => {
                        if i + 1 == short.len() {
                            tokens.next();
                        }
                        break;
                    }
                    _ => {}
                }
            }
            continue;
        }
        first_positional = Some(token);
        break;
    }

    let Some(first) = first_positional else {
        return args;
    };
    if first == "help" || Cli::command().find_subcommand(first.as_str()).is_some() {
        return args;
    }

    args.insert(1, OsString::from(DEFAULT_COMMAND));
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let argv = std::iter::once("jdnav").chain(args.iter().copied());
        Cli::try_parse_from(with_default_command(argv)).unwrap()
    }

    fn find_args(cli: Cli) -> FindArgs {
        match cli.command {
            Some(Commands::Find(args)) => args,
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_naked_query() {
        let args = find_args(parse(&["11", "01", "--open"]));
        assert_eq!(args.query_text(), "11 01");
        assert!(args.open);
    }

    #[test]
    fn test_naked_query_after_flags() {
        let cli = parse(&["-p", "--root", "/jd", "11.01 Invoices"]);
        assert_eq!(cli.root, Some(PathBuf::from("/jd")));
        let args = find_args(cli);
        assert!(args.path_only);
        assert_eq!(args.query_text(), "11.01 Invoices");
    }

    #[test]
    fn test_root_value_is_not_a_subcommand() {
        let cli = parse(&["--root", "config", "11"]);
        assert_eq!(cli.root, Some(PathBuf::from("config")));
        assert_eq!(find_args(cli).query_text(), "11");

        let cli = parse(&["-vr", "parse", "12"]);
        assert!(cli.verbose);
        assert_eq!(cli.root, Some(PathBuf::from("parse")));
        assert_eq!(find_args(cli).query_text(), "12");
    }

    #[test]
    fn test_find_subcommand_and_alias() {
        for name in ["find", "f"] {
            let args = find_args(parse(&[name, "-p", "11.01 Invoices"]));
            assert!(args.path_only);
            assert_eq!(args.query_text(), "11.01 Invoices");
        }
    }

    #[test]
    fn test_global_root_after_subcommand() {
        let cli = parse(&["find", "11", "--root", "/jd"]);
        assert_eq!(cli.root, Some(PathBuf::from("/jd")));
    }

    #[test]
    fn test_global_root_before_subcommand() {
        let cli = parse(&["--root", "/jd", "find", "11"]);
        assert_eq!(cli.root, Some(PathBuf::from("/jd")));
        assert_eq!(find_args(cli).query_text(), "11");

        let cli = parse(&["--root=/jd", "config"]);
        assert_eq!(cli.root, Some(PathBuf::from("/jd")));
        assert!(matches!(cli.command, Some(Commands::Config { key: None, .. })));
    }

    #[test]
    fn test_verbose_before_subcommand() {
        let cli = parse(&["-v", "parse", "11"]);
        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Parse { query }) => assert_eq!(query, vec!["11"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_path_only_conflicts_with_json() {
        let argv = with_default_command(["jdnav", "11", "-p", "--json"]);
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_config_unset() {
        let cli = parse(&["config", "root", "--unset"]);
        match cli.command {
            Some(Commands::Config { key, value, unset }) => {
                assert_eq!(key.as_deref(), Some("root"));
                assert!(value.is_none());
                assert!(unset);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_no_query_is_left_alone() {
        assert_eq!(with_default_command(["jdnav"]), vec![OsString::from("jdnav")]);
        assert_eq!(
            with_default_command(["jdnav", "-v"]),
            vec![OsString::from("jdnav"), OsString::from("-v")]
        );
        assert!(parse(&[]).command.is_none());
    }

    #[test]
    fn test_help_and_version_are_left_alone() {
        for flag in ["--help", "-h", "--version", "-V"] {
            let argv = with_default_command(["jdnav", flag, "11"]);
            assert_eq!(argv[1], OsString::from(flag));
        }
        let argv = with_default_command(["jdnav", "help", "find"]);
        assert_eq!(argv[1], OsString::from("help"));
    }
}
