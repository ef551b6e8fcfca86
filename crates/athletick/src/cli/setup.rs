use athletickapp::commands::Index;
use athletickapp::model::{AthletickDate, Email, Gender, Phone, Tag, Timing, YearJoined};
use clap::{ArgGroup, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "athletick",
    bin_name = "athletick",
    version,
    disable_help_subcommand = true,
    about = "Keep track of your team's athletes, trainings and performance records",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Team data file (defaults to the path in your preferences)
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

/// One line typed into the interactive shell.
#[derive(Parser, Debug)]
#[command(
    name = "athletick",
    no_binary_name = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add an athlete
    #[command(display_order = 1)]
    Add(AddArgs),

    /// Delete an athlete, a training session or an event
    #[command(alias = "rm", display_order = 2)]
    #[command(group(ArgGroup::new("target").required(true).args(["index", "training", "event"])))]
    Delete {
        /// Index of the athlete in the current list
        index: Option<Index>,

        /// Date of the training session to delete (ddMMyyyy)
        #[arg(long, value_name = "DATE")]
        training: Option<AthletickDate>,

        /// Name of the event to delete, with all its records
        #[arg(long, num_args = 1.., value_name = "NAME")]
        event: Option<Vec<String>>,
    },

    /// Edit an athlete's details
    #[command(display_order = 3)]
    Edit(EditArgs),

    /// Remove every athlete, event and training
    #[command(display_order = 4)]
    Clear,

    /// Sort athletes by name
    #[command(display_order = 5)]
    Sort,

    /// Record a training session; listed indexes attended
    #[command(display_order = 10)]
    Training {
        /// Date of the session (ddMMyyyy)
        date: AthletickDate,

        /// Indexes of the athletes who attended
        present: Vec<Index>,
    },

    /// Add a performance event
    #[command(display_order = 11)]
    Event {
        /// Event name, e.g. 100m or freestyle 50m
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Add a performance record for an athlete
    #[command(display_order = 12)]
    Record {
        /// Event the record belongs to
        #[arg(short, long, required = true, num_args = 1..)]
        event: Vec<String>,

        /// Index of the athlete in the current list
        #[arg(short, long)]
        index: Index,

        /// Timing in seconds, e.g. 12.34
        #[arg(short, long)]
        timing: Timing,

        /// Date of the record (ddMMyyyy)
        #[arg(short, long)]
        date: AthletickDate,
    },

    /// Find athletes whose name contains any of the keywords
    #[command(display_order = 20)]
    Find {
        #[arg(required = true, num_args = 1..)]
        keywords: Vec<String>,
    },

    /// List all athletes
    #[command(alias = "ls", display_order = 21)]
    List,

    /// Show one athlete in detail
    #[command(display_order = 22)]
    Select { index: Index },

    /// Show attendance and records on a date
    #[command(display_order = 23)]
    View {
        /// Date to show (ddMMyyyy)
        date: AthletickDate,
    },

    /// Undo the last change (within a shell session)
    #[command(display_order = 30)]
    Undo,

    /// Redo the last undone change (within a shell session)
    #[command(display_order = 31)]
    Redo,

    /// Start an interactive session
    #[command(display_order = 40)]
    Shell,

    /// List the available commands
    #[command(display_order = 41)]
    Help,

    /// Leave the interactive session
    #[command(alias = "quit", hide = true)]
    Exit,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Full name
    #[arg(short, long, required = true, num_args = 1..)]
    pub name: Vec<String>,

    #[arg(short, long)]
    pub phone: Phone,

    #[arg(short, long)]
    pub email: Email,

    #[arg(short, long, required = true, num_args = 1..)]
    pub address: Vec<String>,

    /// male/female (or m/f)
    #[arg(short, long)]
    pub gender: Gender,

    /// Year the athlete joined the team
    #[arg(short, long = "year")]
    pub year_joined: YearJoined,

    /// Repeat for several tags
    #[arg(short, long = "tag")]
    pub tags: Vec<Tag>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Index of the athlete in the current list
    pub index: Index,

    #[arg(short, long, num_args = 1..)]
    pub name: Option<Vec<String>>,

    #[arg(short, long)]
    pub phone: Option<Phone>,

    #[arg(short, long)]
    pub email: Option<Email>,

    #[arg(short, long, num_args = 1..)]
    pub address: Option<Vec<String>>,

    #[arg(short, long)]
    pub gender: Option<Gender>,

    #[arg(short, long = "year")]
    pub year_joined: Option<YearJoined>,

    /// Replaces all tags; repeat for several
    #[arg(short, long = "tag", conflicts_with = "clear_tags")]
    pub tags: Vec<Tag>,

    /// Remove every tag
    #[arg(long)]
    pub clear_tags: bool,
}
