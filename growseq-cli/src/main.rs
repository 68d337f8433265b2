//! Command-line interface for growseq
//! Runs the fruit demo, the loop demos or the whole walkthrough against the loaded configuration.
//!
//! Usage:
//!   growseq fruits [--format `<format>`]         - Grow the fruit sequence and report it
//!   growseq tour [--format `<format>`]           - Run the full walkthrough
//!   growseq loops                              - Run the counted and while loops
//!   growseq config [--format `<format>`]         - Show the effective configuration
//!
//! Global options: --config `<path>` layers a TOML file over the defaults, -v raises log verbosity.
//! `PORT` and `GROWSEQ__SECTION__KEY` environment variables override file values. They are also
//! read from `./.env` when present, or from the file named by --env-file `<path>` (which must exist).

mod settings;

use clap::{Arg, ArgAction, ArgMatches, Command};
use growseq::growseq::walkthrough::{counted_loop, while_loop};
use growseq::{
    run_fruit_demo, run_walkthrough, GrowableSequence, MemorySink, OutputSink, WriterSink,
};
use growseq_config::{GrowseqConfig, Loader};
use settings::{fruit_settings, tour_settings};
use std::io;
use std::path::PathBuf;
use tracing::{debug, Level};

fn main() {
    let matches = Command::new("growseq")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A walkthrough built around a growable sequence")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML file layered over the built-in defaults (must exist)"),
        )
        .arg(
            Arg::new("env-file")
                .long("env-file")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Env file with PORT and GROWSEQ__* variables (default: ./.env if present)"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .global(true)
                .help("Output format")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .help("Increase log verbosity (repeatable)")
                .action(ArgAction::Count),
        )
        .subcommand(Command::new("fruits").about("Grow the fruit sequence and report it"))
        .subcommand(Command::new("tour").about("Run the full walkthrough"))
        .subcommand(Command::new("loops").about("Run the counted and while loops"))
        .subcommand(Command::new("config").about("Show the effective configuration"))
        .get_matches();

    // Global args are propagated into the subcommand's matches
    let (command, sub_matches) = matches.subcommand().expect("subcommand is required");

    init_logging(sub_matches.get_count("verbose"));

    let config = load_config(sub_matches).unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(1);
    });

    let json = sub_matches
        .get_one::<String>("format")
        .is_some_and(|format| format == "json");

    let result = match command {
        "fruits" => handle_fruits_command(&config, json),
        "tour" => handle_tour_command(&config, json),
        "loops" => handle_loops_command(&config, json),
        "config" => handle_config_command(&config, json),
        other => unreachable!("clap rejects unknown subcommand '{}'", other),
    };

    if let Err(e) = result {
        eprintln!("Error writing output: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(io::stderr)
        .init();
}

/// Layer the optional `--config` file, the env file, the environment and `PORT` over the defaults
fn load_config(matches: &ArgMatches) -> Result<GrowseqConfig, growseq_config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        debug!(path = %path, "layering configuration file");
        loader = loader.with_file(path);
    }
    let env_file = matches.get_one::<PathBuf>("env-file");
    loader
        .with_dotenv(env_file.map(PathBuf::as_path))?
        .with_environment()
        .with_env_port()?
        .build()
}

fn print_json<T: serde::Serialize>(value: &T) -> io::Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    println!("{}", text);
    Ok(())
}

/// Handle the fruits command
fn handle_fruits_command(config: &GrowseqConfig, json: bool) -> io::Result<()> {
    let fruits = fruit_settings(config);
    if json {
        let report = run_fruit_demo(&mut MemorySink::new(), &fruits)?;
        return print_json(&report);
    }
    run_fruit_demo(&mut WriterSink::stdout(), &fruits)?;
    Ok(())
}

/// Handle the tour command
fn handle_tour_command(config: &GrowseqConfig, json: bool) -> io::Result<()> {
    let tour = tour_settings(config);
    let fruits = fruit_settings(config);
    if json {
        let report = run_walkthrough(&mut MemorySink::new(), &tour, &fruits)?;
        return print_json(&report);
    }
    run_walkthrough(&mut WriterSink::stdout(), &tour, &fruits)?;
    Ok(())
}

/// Handle the loops command
fn handle_loops_command(config: &GrowseqConfig, json: bool) -> io::Result<()> {
    let tour = tour_settings(config);
    if json {
        let mut sink = MemorySink::new();
        let visited = counted_loop(&mut sink, tour.counted_loop_bound)?;
        let counter = while_loop(&mut sink, tour.while_loop_bound)?;
        return print_json(&serde_json::json!({
            "counted": visited,
            "final_counter": counter,
        }));
    }
    let mut sink = WriterSink::stdout();
    counted_loop(&mut sink, tour.counted_loop_bound)?;
    while_loop(&mut sink, tour.while_loop_bound)?;
    Ok(())
}

/// Handle the config command
fn handle_config_command(config: &GrowseqConfig, json: bool) -> io::Result<()> {
    if json {
        return print_json(config);
    }
    let fruits = GrowableSequence::from_elements(config.fruits.initial.iter());
    let mut sink = WriterSink::stdout();
    sink.field("Port", &config.server.port)?;
    sink.field("Name", &config.tour.name)?;
    sink.field("Fruits", &fruits)?;
    sink.field("Appended fruit", &config.fruits.appended)
}
