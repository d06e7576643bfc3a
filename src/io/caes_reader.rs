use super::{warning_result::WarningResult, CaesInstance, InstanceReader, WarningHandler};
use crate::caes::{
    self, Argument, ArgumentSet, Audience, ProofStandard, ProofStandardKind, Proposition,
};
use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::{
    collections::{HashMap, HashSet},
    io::{BufRead, BufReader, Read},
};

lazy_static! {
    static ref STATEMENT_PATTERN: Regex =
        Regex::new(r"^\s*([_[:alpha:]]+)\s*\((.*)\)\s*\.\s*$").unwrap();
    static ref ARG_CONTENT_PATTERN: Regex =
        Regex::new(r"^([^,\[\]]*),([^,\[\]]*),\s*\[([^\[\]]*)\]\s*,\s*\[([^\[\]]*)\]\s*$").unwrap();
    static ref PAIR_CONTENT_PATTERN: Regex = Regex::new(r"^([^,]*),([^,]*)$").unwrap();
    static ref IDENTIFIER_PATTERN: Regex = Regex::new(r"^[_[:alpha:]][_[:alpha:]\d]*$").unwrap();
}

enum Statement {
    Arg(String, Argument),
    Assume(Proposition),
    Weight(String, f64),
    Standard(Proposition, ProofStandardKind),
    DefaultStandard(ProofStandardKind),
}

fn group<'h>(c: &Captures<'h>, i: usize) -> &'h str {
    c.get(i).map_or("", |m| m.as_str())
}

fn read_identifier(s: &str) -> Result<String> {
    let id = s.trim();
    if IDENTIFIER_PATTERN.is_match(id) {
        Ok(id.to_string())
    } else {
        Err(anyhow!("invalid argument identifier \"{}\"", id))
    }
}

fn read_literal(s: &str) -> Result<Proposition> {
    s.trim().parse()
}

fn read_literal_list(s: &str) -> Result<WarningResult<Vec<Proposition>>> {
    if s.trim().is_empty() {
        return Ok(WarningResult::Ok(vec![]));
    }
    let mut seen = HashSet::new();
    s.split(',')
        .map(|item| -> Result<WarningResult<Proposition>> {
            let p = read_literal(item)?;
            if seen.insert(p.clone()) {
                Ok(WarningResult::Ok(p))
            } else {
                let warning = format!("{} is listed more than once", p);
                Ok(WarningResult::Warned(p, vec![warning]))
            }
        })
        .collect()
}

fn read_pair<'h>(content: &'h str, what: &str) -> Result<(&'h str, &'h str)> {
    match PAIR_CONTENT_PATTERN.captures(content) {
        Some(c) => Ok((group(&c, 1), group(&c, 2))),
        None => Err(anyhow!("expected two parameters for {}", what)),
    }
}

fn read_arg(content: &str) -> Result<WarningResult<Statement>> {
    let c = ARG_CONTENT_PATTERN.captures(content).ok_or_else(|| {
        anyhow!("expected an identifier, a conclusion, a list of premises and a list of exceptions")
    })?;
    let id = read_identifier(group(&c, 1))?;
    let conclusion = read_literal(group(&c, 2))?;
    let lists = read_literal_list(group(&c, 3))?.zip(read_literal_list(group(&c, 4))?);
    Ok(lists.map(|(premises, exceptions)| {
        Statement::Arg(id, Argument::new(conclusion, premises, exceptions))
    }))
}

fn read_weight(content: &str) -> Result<Statement> {
    let (str_id, str_weight) = read_pair(content, "a weight")?;
    let id = read_identifier(str_id)?;
    let weight = str_weight
        .trim()
        .parse::<f64>()
        .with_context(|| format!("invalid weight \"{}\"", str_weight.trim()))?;
    caes::check_unit_interval(&format!("the weight of argument '{}'", id), weight)?;
    Ok(Statement::Weight(id, weight))
}

fn read_statement(line: &str) -> Result<Option<WarningResult<Statement>>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('%') {
        return Ok(None);
    }
    let c = STATEMENT_PATTERN
        .captures(trimmed)
        .ok_or_else(|| anyhow!("syntax error in line \"{}\"", trimmed))?;
    let content = group(&c, 2);
    let statement = match group(&c, 1) {
        "arg" => read_arg(content)?,
        "assume" => WarningResult::Ok(Statement::Assume(read_literal(content)?)),
        "weight" => WarningResult::Ok(read_weight(content)?),
        "standard" => {
            let (literal, name) = read_pair(content, "a proof standard")?;
            WarningResult::Ok(Statement::Standard(
                read_literal(literal)?,
                ProofStandardKind::from_name(name.trim())?,
            ))
        }
        "default_standard" => WarningResult::Ok(Statement::DefaultStandard(
            ProofStandardKind::from_name(content.trim())?,
        )),
        other => return Err(anyhow!("unknown statement \"{}\"", other)),
    };
    Ok(Some(statement))
}

/// A reader for CAES instances.
///
/// # Format
///
/// Each non-empty line holds a single statement; lines beginning with `%` are comments.
/// The following content defines the arguments, the audience and the proof standards of the murder example.
///
/// ```text
/// % arguments: identifier, conclusion, premises, exceptions
/// arg(arg1, murder, [kill, intent], []).
/// arg(arg2, intent, [witness1], [unreliable1]).
/// arg(arg3, -intent, [witness2], [unreliable2]).
/// % audience
/// assume(kill).
/// assume(witness1).
/// assume(witness2).
/// assume(unreliable2).
/// weight(arg1, 0.8).
/// weight(arg2, 0.3).
/// weight(arg3, 0.8).
/// % proof standards
/// standard(intent, beyond_reasonable_doubt).
/// default_standard(scintilla).
/// ```
///
/// Arguments are registered in the order they appear.
/// The default proof standard is `scintilla` unless a `default_standard` statement sets it.
///
/// Warnings are raised for duplicated assumptions, redefined weights and proof standards,
/// weights given to unknown arguments and arguments without weight.
///
/// # Example
///
/// ```
/// # use carneades::io::{CaesReader, InstanceReader};
/// let mut reader = CaesReader::default();
/// reader.add_warning_handler(Box::new(|line, msg| eprintln!("line {}: {}", line, msg)));
/// let instance = reader.read(&mut "arg(arg1, a, [b], []).\nassume(b).".as_bytes()).unwrap();
/// assert_eq!(1, instance.argument_set().n_arguments());
/// ```
#[derive(Default)]
pub struct CaesReader {
    warning_handlers: Vec<WarningHandler>,
}

impl CaesReader {
    fn warn(&self, line_index: usize, warning: String) {
        self.warning_handlers
            .iter()
            .for_each(|h| (h)(1 + line_index, warning.clone()));
    }
}

impl InstanceReader for CaesReader {
    fn read(&self, reader: &mut dyn Read) -> Result<CaesInstance> {
        let mut argset = ArgumentSet::default();
        let mut arg_lines = HashMap::new();
        let mut assumptions = HashSet::new();
        let mut weights: HashMap<String, (usize, f64)> = HashMap::new();
        let mut standards = HashMap::new();
        let mut default_standard = None;
        let br = BufReader::new(reader);
        for (i, line) in br.lines().enumerate() {
            let context = || format!("while reading line with index {}", i);
            let l = &line.with_context(context)?;
            let statement = match read_statement(l).with_context(context)? {
                Some(s) => s.consume_warnings(|warnings| {
                    warnings.into_iter().for_each(|w| self.warn(i, w))
                }),
                None => continue,
            };
            match statement {
                Statement::Arg(id, argument) => {
                    argset
                        .add_argument(argument, Some(id.as_str()))
                        .with_context(context)?;
                    arg_lines.insert(id, i);
                }
                Statement::Assume(p) => {
                    if assumptions.contains(&p) {
                        self.warn(i, format!("assumption {} is declared more than once", p));
                    }
                    assumptions.insert(p);
                }
                Statement::Weight(id, w) => {
                    if weights.contains_key(&id) {
                        self.warn(i, format!("the weight of argument '{}' is redefined", id));
                    }
                    weights.insert(id, (i, w));
                }
                Statement::Standard(p, kind) => {
                    if standards.contains_key(&p) {
                        self.warn(i, format!("the proof standard of {} is redefined", p));
                    }
                    standards.insert(p, kind);
                }
                Statement::DefaultStandard(kind) => {
                    if default_standard.is_some() {
                        self.warn(i, "the default proof standard is redefined".to_string());
                    }
                    default_standard = Some(kind);
                }
            }
        }
        let mut unknown_weighted = weights
            .iter()
            .filter(|(id, _)| argset.get_argument(id).is_none())
            .map(|(id, (i, _))| (*i, id))
            .collect::<Vec<(usize, &String)>>();
        unknown_weighted.sort_unstable();
        for (i, id) in unknown_weighted {
            self.warn(i, format!("a weight is given to unknown argument '{}'", id));
        }
        for (id, i) in argset
            .iter_arguments()
            .filter_map(|a| a.id())
            .filter_map(|id| arg_lines.get(id).map(|i| (id, *i)))
        {
            if !weights.contains_key(id) {
                self.warn(i, format!("argument '{}' has no weight", id));
            }
        }
        let audience = Audience::new(
            assumptions,
            weights.into_iter().map(|(id, (_, w))| (id, w)),
        )?;
        let mut proof_standard = ProofStandard::with_default(default_standard.unwrap_or_default());
        standards
            .into_iter()
            .for_each(|(p, kind)| proof_standard.set_standard(p, kind));
        Ok(CaesInstance::new(argset, audience, proof_standard))
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caes::{CaesError, Thresholds};
    use std::{cell::RefCell, rc::Rc};

    const MURDER_INSTANCE: &str = r#"% the murder example
arg(arg1, murder, [kill, intent], []).
arg(arg2, intent, [witness1], [unreliable1]).
arg(arg3, -intent, [witness2], [unreliable2]).

assume(kill).
assume(witness1).
assume(witness2).
assume(unreliable2).
weight(arg1, 0.8).
weight(arg2, 0.3).
weight(arg3, 0.8).
standard(intent, beyond_reasonable_doubt).
default_standard(scintilla).
"#;

    fn prop(s: &str) -> Proposition {
        s.parse().unwrap()
    }

    fn read_with_warnings(content: &str) -> (Result<CaesInstance>, Vec<(usize, String)>) {
        let warnings = Rc::new(RefCell::new(vec![]));
        let mut reader = CaesReader::default();
        let handler_warnings = Rc::clone(&warnings);
        reader.add_warning_handler(Box::new(move |line, w| {
            handler_warnings.borrow_mut().push((line, w))
        }));
        let result = reader.read(&mut content.as_bytes());
        let collected = warnings.borrow().clone();
        (result, collected)
    }

    fn read_error(content: &str) -> anyhow::Error {
        CaesReader::default()
            .read(&mut content.as_bytes())
            .err()
            .unwrap()
    }

    #[test]
    fn test_read_murder_instance() {
        let (result, warnings) = read_with_warnings(MURDER_INSTANCE);
        let instance = result.unwrap();
        assert!(warnings.is_empty());
        assert_eq!(3, instance.argument_set().n_arguments());
        assert_eq!(9, instance.argument_set().n_propositions());
        assert_eq!(4, instance.audience().n_assumptions());
        assert_eq!(Some(0.3), instance.audience().weight("arg2"));
        assert_eq!(
            ProofStandardKind::BeyondReasonableDoubt,
            instance.proof_standard().get_proofstandard(&prop("intent"))
        );
        assert_eq!(
            "[witness2], ~[unreliable2] => -intent",
            instance.argument_set().get_argument("arg3").unwrap().to_string()
        );
        let caes = instance.caes(Thresholds::default());
        assert!(!caes.acceptable(&prop("intent")).unwrap());
        assert!(!caes.acceptable(&prop("murder")).unwrap());
    }

    #[test]
    fn test_read_empty() {
        let instance = CaesReader::default().read(&mut "".as_bytes()).unwrap();
        assert_eq!(0, instance.argument_set().n_arguments());
        assert_eq!(
            ProofStandardKind::Scintilla,
            instance.proof_standard().default_standard()
        );
    }

    #[test]
    fn test_spaces_and_default_standard() {
        let instance = CaesReader::default()
            .read(&mut "  arg( a1 ,-p,[ q , r ],[s]) .  \ndefault_standard( preponderance ).".as_bytes())
            .unwrap();
        let arg = instance.argument_set().get_argument("a1").unwrap();
        assert_eq!("[q, r], ~[s] => -p", arg.to_string());
        assert_eq!(
            ProofStandardKind::Preponderance,
            instance.proof_standard().default_standard()
        );
    }

    #[test]
    fn test_syntax_errors() {
        for content in [
            "arg(a1, p, [q]).",
            "arg(a1, p, [q], [])",
            "foo(p).",
            "assume p.",
            "weight(a1).",
            "arg(1a, p, [], []).",
            "weight(a1, heavy).",
        ] {
            assert!(
                CaesReader::default().read(&mut content.as_bytes()).is_err(),
                "{}",
                content
            );
        }
    }

    #[test]
    fn test_error_context() {
        let err = read_error("arg(a1, p, [], []).\n\nassume(1p).");
        assert_eq!("while reading line with index 2", err.to_string());
        assert_eq!(
            Some(&CaesError::TypeMismatch("1p".to_string())),
            err.downcast_ref::<CaesError>()
        );
    }

    #[test]
    fn test_invalid_weight() {
        let err = read_error("weight(a1, 1.5).");
        assert!(matches!(
            err.downcast_ref::<CaesError>(),
            Some(CaesError::Validation(_))
        ));
    }

    #[test]
    fn test_invalid_standard() {
        let err = read_error("standard(p, strong).");
        assert_eq!(
            Some(&CaesError::Validation(
                "strong is not a valid proof standard".to_string()
            )),
            err.downcast_ref::<CaesError>()
        );
    }

    #[test]
    fn test_duplicate_argument_id() {
        let err = read_error("arg(a1, p, [], []).\narg(a1, q, [], []).");
        assert_eq!("while reading line with index 1", err.to_string());
        assert!(matches!(
            err.downcast_ref::<CaesError>(),
            Some(CaesError::Validation(_))
        ));
    }

    #[test]
    fn test_warnings() {
        let content = r#"arg(a1, p, [q, q], []).
arg(a2, q, [], []).
weight(a1, 0.5).
weight(a1, 0.6).
weight(a3, 0.1).
assume(r).
assume(r).
standard(p, preponderance).
standard(p, scintilla).
default_standard(scintilla).
default_standard(preponderance).
"#;
        let (result, warnings) = read_with_warnings(content);
        let instance = result.unwrap();
        assert_eq!(
            vec![
                (1, "q is listed more than once".to_string()),
                (4, "the weight of argument 'a1' is redefined".to_string()),
                (7, "assumption r is declared more than once".to_string()),
                (9, "the proof standard of p is redefined".to_string()),
                (11, "the default proof standard is redefined".to_string()),
                (5, "a weight is given to unknown argument 'a3'".to_string()),
                (2, "argument 'a2' has no weight".to_string()),
            ],
            warnings
        );
        assert_eq!(Some(0.6), instance.audience().weight("a1"));
        assert_eq!(
            ProofStandardKind::Scintilla,
            instance.proof_standard().get_proofstandard(&prop("p"))
        );
        assert_eq!(
            ProofStandardKind::Preponderance,
            instance.proof_standard().default_standard()
        );
    }
}
