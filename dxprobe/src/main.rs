mod demo;
mod listing;

use std::{path::PathBuf, process::ExitCode};

use clap::{ArgAction, Parser, Subcommand, crate_version};
use dxportlib::{DxLib, LoadError};
use log::{error, info};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("DxLib_Init failed")]
    Init,

    #[error("unknown constant family `{0}`")]
    UnknownFamily(String),
}

#[derive(Parser)]
#[clap(version = crate_version!(), about = "Checks a DxPortLib build against the binding table")]
struct Opt {
    /// Shared library to load, overrides `DXPORTLIB_PATH`.
    #[clap(short, long, global = true)]
    library: Option<PathBuf>,

    #[clap(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every bound entry point.
    Symbols {
        /// Only print the table, without opening the library.
        #[clap(long)]
        offline: bool,
    },

    /// Dump the native constants.
    Constants {
        /// Restrict the dump to one family, e.g. `BlendMode`.
        #[clap(short, long)]
        family: Option<String>,
    },

    /// Open a window and draw a test scene until Escape is pressed.
    Demo(demo::Options),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => None,
        1 => Some(log::LevelFilter::Info),
        2 => Some(log::LevelFilter::Debug),
        _ => Some(log::LevelFilter::Trace),
    };

    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.init();
}

fn open(opt: &Opt) -> Result<DxLib, Error> {
    // Safety: the library is picked by the user and trusted to be a DxPortLib build.
    Ok(unsafe { DxLib::open(opt.library.as_deref()) }?)
}

fn run(opt: &Opt) -> Result<(), Error> {
    match &opt.command {
        Command::Symbols { offline } => {
            if !offline {
                let dx = open(opt)?;
                info!("every entry point resolved (dynamic: {})", dx.is_dynamic());
            }
            for line in listing::symbols() {
                println!("{line}");
            }
        }
        Command::Constants { family } => {
            let family = family
                .as_deref()
                .map(|name| {
                    listing::parse_family(name)
                        .ok_or_else(|| Error::UnknownFamily(name.to_owned()))
                })
                .transpose()?;
            for line in listing::constants(family) {
                println!("{line}");
            }
        }
        Command::Demo(options) => {
            let dx = open(opt)?;
            demo::run(&dx, options)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let opt = Opt::parse();
    init_logging(opt.verbose);

    match run(&opt) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            let mut source = std::error::Error::source(&err);
            while let Some(cause) = source {
                error!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
