use super::{
    app_helper::AppHelper, command::Command, AuthorsCommand, CheckCommand, EvaluateCommand,
    StandardsCommand,
};
use anyhow::{Context, Result};
use carneades::{
    caes::{Thresholds, DEFAULT_ALPHA, DEFAULT_BETA, DEFAULT_GAMMA},
    io::{CaesInstance, CaesReader, InstanceReader},
};
use clap::{Arg, ArgMatches};
use log::{info, warn};
use std::{
    fs::{self, File},
    io::BufReader,
    path::PathBuf,
};

pub(crate) fn create_app_helper() -> AppHelper<'static> {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let authors = option_env!("CARGO_PKG_AUTHORS").unwrap_or("unknown authors");
    let mut app = AppHelper::new(
        app_name,
        app_version,
        authors,
        "Carneades, an evaluator for Carneades argument evaluation structures.",
    );
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(AuthorsCommand::new(app_name, app_version, authors)),
        Box::new(CheckCommand::new()),
        Box::new(EvaluateCommand::new()),
        Box::new(StandardsCommand::new()),
    ];
    for c in commands {
        app.add_command(c);
    }
    app
}

pub(crate) const ARG_INPUT: &str = "INPUT";

pub(crate) fn input_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_INPUT)
        .short("f")
        .empty_values(false)
        .multiple(false)
        .help("the input file that contains the CAES")
        .required(true)
}

const ARG_ALPHA: &str = "ALPHA";
const ARG_BETA: &str = "BETA";
const ARG_GAMMA: &str = "GAMMA";

pub(crate) fn threshold_args() -> Vec<Arg<'static, 'static>> {
    vec![
        Arg::with_name(ARG_ALPHA)
            .long("alpha")
            .empty_values(false)
            .multiple(false)
            .help("the weight the strongest pro argument must exceed for the clear and convincing standard")
            .required(false),
        Arg::with_name(ARG_BETA)
            .long("beta")
            .empty_values(false)
            .multiple(false)
            .help("the beta threshold (not used by the proof standards)")
            .required(false),
        Arg::with_name(ARG_GAMMA)
            .long("gamma")
            .empty_values(false)
            .multiple(false)
            .help("the margin used by the clear and convincing and beyond reasonable doubt standards")
            .required(false),
    ]
}

fn read_threshold(arg_matches: &ArgMatches<'_>, arg: &str, default: f64) -> Result<f64> {
    match arg_matches.value_of(arg) {
        Some(s) => s
            .parse::<f64>()
            .with_context(|| format!("while reading the value of {} ({:?})", arg.to_lowercase(), s)),
        None => Ok(default),
    }
}

pub(crate) fn read_thresholds(arg_matches: &ArgMatches<'_>) -> Result<Thresholds> {
    let thresholds = Thresholds::new(
        read_threshold(arg_matches, ARG_ALPHA, DEFAULT_ALPHA)?,
        read_threshold(arg_matches, ARG_BETA, DEFAULT_BETA)?,
        read_threshold(arg_matches, ARG_GAMMA, DEFAULT_GAMMA)?,
    )?;
    info!(
        "thresholds are alpha={}, beta={}, gamma={}",
        thresholds.alpha(),
        thresholds.beta(),
        thresholds.gamma()
    );
    Ok(thresholds)
}

pub(crate) fn read_file_path(file_path: &str) -> Result<CaesInstance> {
    let mut reader = CaesReader::default();
    reader.add_warning_handler(Box::new(|line, msg| warn!("at line {}: {}", line, msg)));
    let canonicalized = canonicalize_file_path(file_path)?;
    info!("reading input file {:?}", canonicalized);
    let mut file_reader = BufReader::new(
        File::open(&canonicalized)
            .with_context(|| format!("while opening file {:?}", canonicalized))?,
    );
    let instance = reader.read(&mut file_reader)?;
    info!(
        "the CAES has {} argument(s), {} proposition(s) and {} assumption(s)",
        instance.argument_set().n_arguments(),
        instance.argument_set().n_propositions(),
        instance.audience().n_assumptions(),
    );
    Ok(instance)
}

/// Canonicalize a path given by the user.
pub(crate) fn canonicalize_file_path(file_path: &str) -> Result<PathBuf> {
    fs::canonicalize(PathBuf::from(file_path))
        .with_context(|| format!(r#"while opening file "{}""#, file_path))
}
