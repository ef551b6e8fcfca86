//! # CLI Layer
//!
//! The CLI layer is the **only** place that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: clap turns arguments into [`Commands`]
//! 2. **Context Setup**: config, logging, storage and the API facade
//! 3. **Translation**: [`Commands`] → library [`Command`] values
//! 4. **Output Formatting**: `print.rs` renders each `CmdResult`
//!
//! ## One-shot vs. Shell
//!
//! Every invocation loads the team, runs one command and saves. Undo history
//! is per process, so `undo`/`redo` are only useful inside `athletick shell`,
//! which keeps one model alive across many lines.

use super::print;
use super::setup::{AddArgs, Cli, Commands, EditArgs, ShellLine};
use anyhow::{Context, Result};
use athletickapp::api::AthletickApi;
use athletickapp::commands::{Command, EditPersonDescriptor};
use athletickapp::config::AthletickConfig;
use athletickapp::logging::init_logging;
use athletickapp::model::{Address, Name, Person};
use athletickapp::store::json::JsonFileStorage;
use athletickapp::store::TeamStorage;
use clap::{CommandFactory, Parser};
use std::io::{BufRead, IsTerminal, Write};

const PROMPT: &str = "athletick> ";

type Api = AthletickApi<JsonFileStorage>;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = AthletickConfig::load().context("failed to load configuration")?;

    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    if let Err(err) = init_logging(level, config.log_dir.as_deref()) {
        print::print_error(&format!("Logging disabled: {err}"));
    }

    let mut api = create_api(&cli, &config)?;

    match cli.command {
        None => execute(&mut api, Command::List).map(|_| ()),
        Some(Commands::Shell) => run_shell(&mut api),
        Some(command) => execute(&mut api, to_command(command)?).map(|_| ()),
    }
}

fn create_api(cli: &Cli, config: &AthletickConfig) -> Result<Api> {
    let prefs_path = config.prefs_file();
    let mut storage = JsonFileStorage::new(Default::default(), prefs_path);
    let prefs = storage.read_prefs().unwrap_or_else(|err| {
        log::warn!("preferences unreadable: {err}");
        None
    });
    let team_path = cli
        .data
        .clone()
        .or_else(|| prefs.map(|p| p.athletick_file_path))
        .unwrap_or_else(|| athletickapp::model::UserPrefs::default().athletick_file_path);
    log::debug!("team data at {}", team_path.display());
    storage.set_team_path(team_path.clone());

    let mut api = AthletickApi::load(storage, config.history_limit)?;
    api.model_mut().set_athletick_file_path(team_path);
    Ok(api)
}

/// Runs one command and prints its outcome. Returns whether the user asked to exit.
fn execute(api: &mut Api, command: Command) -> Result<bool> {
    let is_select = matches!(command, Command::Select { .. });
    let result = api.execute(command)?;
    if result.show_help {
        ShellLine::command().print_help()?;
    }
    print::print_result(&result, is_select);
    Ok(result.exit)
}

fn run_shell(api: &mut Api) -> Result<()> {
    let interactive = std::io::stdin().is_terminal();
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    if interactive {
        println!("Welcome to Athletick! Type `help` for commands, `exit` to leave.");
    }

    loop {
        if interactive {
            print!("{PROMPT}");
            std::io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let parsed = match ShellLine::try_parse_from(line.split_whitespace()) {
            Ok(parsed) => parsed,
            Err(err) => {
                // clap renders help and usage errors itself
                let _ = err.print();
                continue;
            }
        };
        let command = match parsed.command {
            Commands::Shell => {
                print::print_error("Already in a shell session.");
                continue;
            }
            other => to_command(other),
        };
        match command.and_then(|command| execute(api, command)) {
            Ok(true) => break,
            Ok(false) => {}
            Err(err) => print::print_error(&err.to_string()),
        }
    }

    if let Err(err) = api.save_prefs() {
        log::warn!("saving preferences failed: {err}");
    }
    Ok(())
}

/// Maps parsed arguments to a library command.
pub(super) fn to_command(command: Commands) -> Result<Command> {
    let command = match command {
        Commands::Add(args) => Command::Add {
            person: person_from(args)?,
        },
        Commands::Delete {
            index,
            training,
            event,
        } => match (index, training, event) {
            (Some(index), _, _) => Command::Delete { index },
            (_, Some(date), _) => Command::DeleteTraining { date },
            (_, _, Some(name)) => Command::DeleteEvent {
                name: name.join(" "),
            },
            (None, None, None) => anyhow::bail!("nothing to delete"),
        },
        Commands::Edit(args) => {
            let index = args.index;
            Command::Edit {
                index,
                descriptor: descriptor_from(args)?,
            }
        }
        Commands::Clear => Command::Clear,
        Commands::Sort => Command::Sort,
        Commands::Training { date, present } => Command::Training { date, present },
        Commands::Event { name } => Command::AddEvent {
            name: name.join(" "),
        },
        Commands::Record {
            event,
            index,
            timing,
            date,
        } => Command::AddRecord {
            event: event.join(" "),
            index,
            record: athletickapp::model::Record::new(timing, date),
        },
        Commands::Find { keywords } => Command::Find { keywords },
        Commands::List => Command::List,
        Commands::Select { index } => Command::Select { index },
        Commands::View { date } => Command::View { date },
        Commands::Undo => Command::Undo,
        Commands::Redo => Command::Redo,
        Commands::Help => Command::Help,
        Commands::Exit => Command::Exit,
        Commands::Shell => anyhow::bail!("`shell` cannot be nested"),
    };
    Ok(command)
}

fn person_from(args: AddArgs) -> Result<Person> {
    Ok(Person::new(
        Name::new(args.name.join(" "))?,
        args.phone,
        args.email,
        Address::new(args.address.join(" "))?,
        args.gender,
        args.year_joined,
        args.tags.into_iter().collect(),
    ))
}

fn descriptor_from(args: EditArgs) -> Result<EditPersonDescriptor> {
    let tags = if args.clear_tags {
        Some(Default::default())
    } else if args.tags.is_empty() {
        None
    } else {
        Some(args.tags.into_iter().collect())
    };
    Ok(EditPersonDescriptor {
        name: args.name.map(|n| Name::new(n.join(" "))).transpose()?,
        phone: args.phone,
        email: args.email,
        address: args.address.map(|a| Address::new(a.join(" "))).transpose()?,
        gender: args.gender,
        year_joined: args.year_joined,
        tags,
    })
}
