mod app_helper;

mod authors_command;
pub(crate) use authors_command::AuthorsCommand;

mod check_command;
pub(crate) use check_command::CheckCommand;

mod command;

pub(crate) mod common;

mod evaluate_command;
pub(crate) use evaluate_command::EvaluateCommand;

mod standards_command;
pub(crate) use standards_command::StandardsCommand;
