use super::{app_helper, command::Command, common};
use anyhow::{anyhow, Context, Result};
use carneades::{
    caes::{LoggingObserver, Proposition},
    io::{CaesWriter, ResponseWriter},
};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::info;

const CMD_NAME: &str = "evaluate";

const ARG_PROPOSITION: &str = "PROPOSITION";
const ARG_TRACE: &str = "TRACE";
const ARG_LIST_ARGUMENTS: &str = "LIST_ARGUMENTS";

pub(crate) struct EvaluateCommand;

impl EvaluateCommand {
    pub(crate) fn new() -> Self {
        EvaluateCommand
    }
}

impl<'a> Command<'a> for EvaluateCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Evaluates the acceptability of propositions")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_arg())
            .arg(
                Arg::with_name(ARG_PROPOSITION)
                    .short("p")
                    .empty_values(false)
                    .multiple(false)
                    .allow_hyphen_values(true)
                    .help("the proposition to evaluate (all the propositions if absent)")
                    .required(false),
            )
            .args(&common::threshold_args())
            .arg(
                Arg::with_name(ARG_TRACE)
                    .long("trace")
                    .takes_value(false)
                    .help("logs the recursive calls made by the evaluator (at the info level)"),
            )
            .arg(
                Arg::with_name(ARG_LIST_ARGUMENTS)
                    .long("list-arguments")
                    .takes_value(false)
                    .help("prints the arguments before the answer"),
            )
            .arg(app_helper::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches
            .value_of(common::ARG_INPUT)
            .ok_or_else(|| anyhow!("missing input file"))?;
        let instance = common::read_file_path(file)?;
        let proposition = arg_matches
            .value_of(ARG_PROPOSITION)
            .map(|p| p.parse::<Proposition>())
            .transpose()
            .context("while parsing the proposition passed to the command line")?;
        let thresholds = common::read_thresholds(arg_matches)?;
        let mut caes = instance.caes(thresholds);
        if arg_matches.is_present(ARG_TRACE) {
            caes.set_observer(Box::new(LoggingObserver::new(log::Level::Info)));
        }
        let writer = CaesWriter::default();
        let mut out = std::io::stdout();
        if arg_matches.is_present(ARG_LIST_ARGUMENTS) {
            writer.write_arguments(&mut out, instance.argument_set())?;
        }
        match proposition {
            Some(p) => {
                info!("evaluating the acceptability of {}", p);
                let status = caes.acceptable(&p)?;
                writer.write_acceptance_status(&mut out, status)
            }
            None => {
                info!("evaluating the acceptability of all the propositions");
                let mut propositions = instance
                    .argument_set()
                    .iter_propositions()
                    .collect::<Vec<&Proposition>>();
                propositions.sort_unstable();
                let statuses = propositions
                    .into_iter()
                    .map(|p| caes.acceptable(p).map(|status| (p, status)))
                    .collect::<Result<Vec<(&Proposition, bool)>>>()?;
                writer.write_proposition_status(&mut out, &statuses)
            }
        }
    }
}
