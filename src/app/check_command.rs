use super::{app_helper, command::Command, common};
use anyhow::{anyhow, Result};
use carneades::caes::Thresholds;
use clap::{App, AppSettings, ArgMatches, SubCommand};
use log::info;

const CMD_NAME: &str = "check";

pub(crate) struct CheckCommand;

impl CheckCommand {
    pub(crate) fn new() -> Self {
        CheckCommand
    }
}

impl<'a> Command<'a> for CheckCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Checks input CAES files for errors")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_arg())
            .arg(app_helper::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches
            .value_of(common::ARG_INPUT)
            .ok_or_else(|| anyhow!("missing input file"))?;
        let instance = common::read_file_path(file)?;
        let caes = instance.caes(Thresholds::default());
        let mut n_acceptable = 0;
        for p in instance.argument_set().iter_propositions() {
            if caes.acceptable(p)? {
                n_acceptable += 1;
            }
        }
        info!(
            "all propositions could be evaluated ({} acceptable with default thresholds)",
            n_acceptable
        );
        Ok(())
    }
}
