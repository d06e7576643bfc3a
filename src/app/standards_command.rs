use super::{app_helper, command::Command};
use anyhow::Result;
use carneades::caes::ProofStandardKind;
use clap::{App, AppSettings, ArgMatches, SubCommand};

const CMD_NAME: &str = "standards";

pub(crate) struct StandardsCommand;

impl StandardsCommand {
    pub(crate) fn new() -> Self {
        StandardsCommand
    }
}

impl<'a> Command<'a> for StandardsCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Displays the proof standards handled by the evaluator")
            .setting(AppSettings::DisableVersion)
            .arg(app_helper::logging_level_cli_arg())
    }

    fn execute(&self, _arg_matches: &ArgMatches<'_>) -> Result<()> {
        let standards = ProofStandardKind::iter_names().fold(String::new(), |mut acc, s| {
            if !acc.is_empty() {
                acc.push(',')
            };
            acc.push_str(s);
            acc
        });
        println!("[{}]", standards);
        Ok(())
    }
}
