use clap::{arg, Arg, ArgAction, ArgMatches, Command};
use kvmap::{demos, open_engine, KvsError, Result, Script, StoreConfig};
use log::{error, info};
use std::io::{stdout, BufWriter};
use std::process::exit;
use stderrlog::{self, LogLevelNum, Timestamp};

fn log_level(verbosity: usize) -> LogLevelNum {
    match verbosity {
        0 => LogLevelNum::Error,
        1 => LogLevelNum::Warn,
        2 => LogLevelNum::Info,
        3 => LogLevelNum::Debug,
        _ => LogLevelNum::Trace,
    }
}

fn cli() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .subcommand_required(true)
        .disable_help_subcommand(true)
        .subcommand(
            Command::new("demo")
                .about("Run one of the built-in country/capital scenarios")
                .arg(Arg::new("NAME").help("A scenario name, see `list`").required(true)),
        )
        .subcommand(
            Command::new("run")
                .about("Apply a JSON array of records to an empty store")
                .arg(Arg::new("SCRIPT").help("Path to the script").required(true)),
        )
        .subcommand(Command::new("list").about("List the built-in scenarios"))
        .subcommand(
            Command::new("init")
                .about("Write a config file naming the engine")
                .arg(Arg::new("PATH").help("Where to write the config").required(true)),
        )
        .args([
            arg!(-e --engine <ENGINE_NAME> "Either \"kvs\" (hash table, unordered) or 
                \"skiplist\" (ascending key order). Overrides the config file. 
                Defaults to \"skiplist\"")
            .global(true),
            arg!(-c --config <PATH> "A JSON config file written by `init`").global(true),
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity, may be repeated")
                .action(ArgAction::Count)
                .global(true),
        ])
}

fn run(matches: &ArgMatches, config: &StoreConfig) -> Result<()> {
    let engine = matches
        .get_one::<String>("engine")
        .unwrap_or(&config.engine);
    info!(env!("CARGO_PKG_VERSION"));
    info!("ENGINE: {engine}");

    match matches.subcommand() {
        Some(("demo", _matches)) => {
            let name = _matches.get_one::<String>("NAME").expect("required");
            let script =
                demos::scenario(name).ok_or_else(|| KvsError::UnknownDemo(name.to_string()))?;
            let mut store = open_engine(engine)?;
            script.run(store.as_mut(), &mut BufWriter::new(stdout().lock()))?;
        }
        Some(("run", _matches)) => {
            let path = _matches.get_one::<String>("SCRIPT").expect("required");
            let mut store = open_engine(engine)?;
            let script = Script::load(path)?;
            script.run(store.as_mut(), &mut BufWriter::new(stdout().lock()))?;
        }
        Some(("list", _)) => {
            for name in demos::NAMES {
                println!("{name}");
            }
        }
        Some(("init", _matches)) => {
            let path = _matches.get_one::<String>("PATH").expect("required");
            open_engine(engine)?;
            StoreConfig::new(path, engine.to_string())?;
            info!("Config written to {path}");
        }
        _ => unreachable!(),
    }
    Ok(())
}

fn main() {
    let matches = cli().get_matches();

    let config = match matches.get_one::<String>("config") {
        Some(path) => match StoreConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{e}");
                exit(1);
            }
        },
        None => StoreConfig::default(),
    };

    let verbose = matches.get_count("verbose") as usize;
    let verbosity = if verbose > 0 {
        verbose
    } else {
        config.verbosity.unwrap_or(0)
    };
    if let Err(e) = stderrlog::new()
        .module(module_path!())
        .timestamp(Timestamp::Second)
        .verbosity(log_level(verbosity))
        .init()
    {
        eprintln!("{e}");
    }

    if let Err(e) = run(&matches, &config) {
        error!("{e}");
        eprintln!("{e}");
        exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kvmap::config::DEFAULT_ENGINE;

    #[test]
    fn verify_cli() {
        cli().debug_assert();
    }

    #[test]
    fn engine_flag_after_subcommand() {
        let matches = cli()
            .try_get_matches_from(["kvmap", "demo", "keys", "-e", "kvs", "-vv"])
            .unwrap();
        assert_eq!(matches.get_one::<String>("engine").unwrap(), "kvs");
        assert_eq!(matches.get_count("verbose"), 2);
    }

    #[test]
    fn default_engine_is_sorted() {
        let matches = cli().try_get_matches_from(["kvmap", "list"]).unwrap();
        assert!(matches.get_one::<String>("engine").is_none());
        assert_eq!(StoreConfig::default().engine, DEFAULT_ENGINE);
    }
}
