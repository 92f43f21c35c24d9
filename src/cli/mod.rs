mod output;

use crate::dispatch::dispatch;
use crate::model::{AssignmentError, Mapping};
use crate::store::{Bootstrap, ConfigStore, resolve_config_path};
use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use log::debug;
use std::env;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_COMMIT_HASH"),
    ")"
);

const EXIT_USAGE: i32 = 1;
const EXIT_NOT_FOUND: i32 = 2;

#[derive(Parser)]
#[command(
    name = "qcmd",
    version,
    long_version = LONG_VERSION,
    about = "Run shell commands by short names stored in qcmd.conf",
    after_help = "Run `qcmd <name>` to execute the command mapped to <name>.\n\
                  Example: qcmd add build=cargo build --release"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all command mappings
    #[command(visible_alias = "ls")]
    List,
    /// Add or update a mapping (the command may contain spaces)
    Add(AddArgs),
    /// Remove a mapping
    #[command(visible_aliases = ["rm", "del"])]
    Remove(RemoveArgs),
    /// Print a shell completion script
    Completions(CompletionsArgs),
    #[command(external_subcommand)]
    Run(Vec<String>),
}

#[derive(Args)]
struct AddArgs {
    #[arg(
        value_name = "NAME=COMMAND",
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    words: Vec<String>,
}

#[derive(Args)]
struct RemoveArgs {
    name: Option<String>,
}

#[derive(Args)]
struct CompletionsArgs {
    #[arg(value_enum)]
    shell: Shell,
}

/// Parses the process arguments and returns the exit code to finish with.
pub fn run() -> Result<i32> {
    let args: Vec<OsString> = env::args_os().collect();
    let command = match parse_command(&args) {
        Ok(command) => command,
        Err(err) => {
            // Nothing left to report to if stdout/stderr are gone.
            let _ = err.print();
            return Ok(if err.use_stderr() { EXIT_USAGE } else { 0 });
        }
    };

    let Some(command) = command else {
        print_help()?;
        return Ok(0);
    };

    let store = ConfigStore::new(config_path(&args));
    debug!("using config {}", store.path().display());

    match command {
        Commands::List => Ok(list_mappings(&store)),
        Commands::Add(args) => Ok(add_mapping(&store, args)),
        Commands::Remove(args) => Ok(remove_mapping(&store, args)),
        Commands::Completions(args) => {
            generate_completions(args.shell);
            Ok(0)
        }
        Commands::Run(args) => match args.first() {
            Some(name) => run_mapping(&store, name),
            None => {
                print_help()?;
                Ok(0)
            }
        },
    }
}

const CLAP_FLAGS: [&str; 4] = ["-h", "--help", "-V", "--version"];

// clap rejects unknown flags before the external subcommand sees them, so a
// leading token starting with '-' that clap does not own is a mapping name.
fn parse_command(args: &[OsString]) -> Result<Option<Commands>, clap::Error> {
    if let Some(first) = args.get(1).and_then(|arg| arg.to_str()) {
        if first.starts_with('-') && first != "--" && !CLAP_FLAGS.contains(&first) {
            let rest = args[1..]
                .iter()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect();
            return Ok(Some(Commands::Run(rest)));
        }
    }
    Cli::try_parse_from(args).map(|cli| cli.command)
}

fn config_path(args: &[OsString]) -> PathBuf {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let argv0 = args.first().and_then(|arg| arg.to_str());
    resolve_config_path(argv0, &cwd)
}

fn print_help() -> Result<()> {
    Cli::command().print_long_help()?;
    Ok(())
}

fn bootstrap(store: &ConfigStore) {
    match store.ensure_exists() {
        Bootstrap::Existing => {}
        Bootstrap::Created => {
            println!("Config file not found, created {}", store.path().display());
        }
        Bootstrap::Failed(err) => {
            eprintln!(
                "Config file not found, failed to create {}: {:#}",
                store.path().display(),
                err
            );
        }
    }
}

fn list_mappings(store: &ConfigStore) -> i32 {
    bootstrap(store);
    let mappings = store.load();
    output::print_mappings(&mappings, store.path());
    0
}

fn add_mapping(store: &ConfigStore, args: AddArgs) -> i32 {
    if args.words.is_empty() {
        eprintln!("Usage: qcmd add name=command");
        return EXIT_USAGE;
    }

    let mapping = match Mapping::parse_assignment(&args.words.join(" ")) {
        Ok(mapping) => mapping,
        Err(AssignmentError::MissingSeparator) => {
            eprintln!("Invalid add argument, expected name=command (e.g. qcmd add build=cargo build)");
            return EXIT_USAGE;
        }
        Err(err @ AssignmentError::EmptyName) => {
            eprintln!("Invalid add argument: {}", err);
            return EXIT_USAGE;
        }
    };

    if let Err(err) = store.add_or_update(&mapping.name, &mapping.command) {
        eprintln!("Failed to write config: {:#}", err);
        return EXIT_USAGE;
    }
    println!("Added/updated mapping: {} -> {}", mapping.name, mapping.command);
    0
}

fn remove_mapping(store: &ConfigStore, args: RemoveArgs) -> i32 {
    let name = args.name.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        eprintln!("Usage: qcmd remove name");
        return EXIT_USAGE;
    }

    match store.remove(name) {
        Ok(true) => {
            println!("Removed mapping: {}", name);
            0
        }
        Ok(false) => {
            eprintln!("Mapping not found: {}", name);
            EXIT_NOT_FOUND
        }
        Err(err) => {
            eprintln!("Failed to write config: {:#}", err);
            EXIT_USAGE
        }
    }
}

fn run_mapping(store: &ConfigStore, name: &str) -> Result<i32> {
    bootstrap(store);
    let mappings = store.load();
    let Some(command) = mappings.get(name) else {
        eprintln!("Mapping not found: {}", name);
        return Ok(EXIT_NOT_FOUND);
    };

    println!("Running '{}' -> {}", name, command);
    let code = dispatch(command)?;
    println!("Exit code: {}", code);
    Ok(code)
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "qcmd", &mut io::stdout());
}
