use clap::{Args, Parser, Subcommand};
use shelf::model::{Criteria, Record};

#[derive(Parser, Debug)]
#[command(name = "shelf", bin_name = "shelf", version)]
#[command(about = "A small, file-backed book catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Operate on the global catalog
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CriteriaArgs {
    /// Match books with this title (case-insensitive, whole title)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Match books by this author (case-insensitive, whole name)
    #[arg(short, long)]
    pub author: Option<String>,

    /// Match books from this publisher (case-insensitive, whole name)
    #[arg(short, long)]
    pub publisher: Option<String>,
}

impl From<CriteriaArgs> for Criteria {
    fn from(args: CriteriaArgs) -> Self {
        Criteria {
            title: args.title,
            author: args.author,
            publisher: args.publisher,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct RecordArgs {
    pub title: String,
    pub author: String,
    pub publisher: String,
}

impl From<RecordArgs> for Record {
    fn from(args: RecordArgs) -> Self {
        Record::new(args.title, args.author, args.publisher)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every book with its index
    #[command(alias = "ls")]
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Add a book at the end of the catalog
    #[command(alias = "a")]
    Add {
        #[command(flatten)]
        record: RecordArgs,
    },

    /// Remove the book at an index (0-based)
    #[command(alias = "rm")]
    Remove {
        /// Index as shown by `list`
        #[arg(allow_hyphen_values = true)]
        index: String,
    },

    /// Overwrite the book at an index
    Replace {
        /// Index as shown by `list`
        #[arg(allow_hyphen_values = true)]
        index: String,

        #[command(flatten)]
        record: RecordArgs,
    },

    /// Find books by title, author and/or publisher
    #[command(alias = "s")]
    Search {
        #[command(flatten)]
        criteria: CriteriaArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Change one field of the first matching book that holds OLD
    #[command(alias = "u")]
    Update {
        #[command(flatten)]
        criteria: CriteriaArgs,

        /// Current value (exact, case-sensitive)
        old: String,

        /// Replacement value
        new: String,
    },

    /// Delete the first book matching the given fields
    Delete {
        #[command(flatten)]
        criteria: CriteriaArgs,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (snapshot-file, on-malformed)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the catalog directory and an empty snapshot
    Init,

    /// Print the path of the snapshot file
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("shelf").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_subcommand_is_allowed() {
        assert!(parse(&[]).command.is_none());
    }

    #[test]
    fn add_takes_three_positionals() {
        match parse(&["add", "Dune", "Herbert", "Ace"]).command {
            Some(Commands::Add { record }) => {
                assert_eq!(Record::from(record), Record::new("Dune", "Herbert", "Ace"))
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn remove_accepts_negative_index_text() {
        match parse(&["rm", "-1"]).command {
            Some(Commands::Remove { index }) => assert_eq!(index, "-1"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn update_parses_criteria_and_values() {
        match parse(&["update", "-a", "Herbert", "Ace", "Chilton"]).command {
            Some(Commands::Update { criteria, old, new }) => {
                assert_eq!(
                    Criteria::from(criteria),
                    Criteria::new().with_author("Herbert")
                );
                assert_eq!(old, "Ace");
                assert_eq!(new, "Chilton");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn global_flag_works_after_subcommand() {
        let cli = parse(&["list", "--json", "-g"]);
        assert!(cli.global);
        assert!(matches!(cli.command, Some(Commands::List { json: true })));
    }
}
