use super::{CaesInstance, ResponseWriter};
use crate::caes::{Argument, ArgumentSet, Proposition};
use anyhow::{Context, Result};
use std::io::Write;

/// A writer for the answers to CAES queries.
///
/// The answers are written this way:
///   * acceptance status: `YES` or `NO`
///   * status of several propositions: one line per proposition, made of the literal, a space and its acceptance status
///   * arguments: one line per argument, made of its identifier, a colon and the rendered argument
///
/// This writer is also able to write whole instances, using the format read by [CaesReader](super::CaesReader).
#[derive(Default)]
pub struct CaesWriter;

fn status_str(status: bool) -> &'static str {
    if status {
        "YES"
    } else {
        "NO"
    }
}

fn literal_list(props: impl Iterator<Item = impl ToString>) -> String {
    props.map(|p| p.to_string()).collect::<Vec<String>>().join(", ")
}

fn write_arg_statement(writer: &mut dyn Write, arg: &Argument) -> std::io::Result<()> {
    writeln!(
        writer,
        "arg({}, {}, [{}], [{}]).",
        arg.id().unwrap_or_default(),
        arg.conclusion(),
        literal_list(arg.premises()),
        literal_list(arg.exceptions())
    )
}

impl CaesWriter {
    /// Writes an instance.
    ///
    /// Arguments are written in registration order; assumptions, weights and proof standards are sorted.
    ///
    /// # Example
    ///
    /// ```
    /// # use carneades::io::{CaesReader, CaesWriter, InstanceReader};
    /// let instance = CaesReader::default()
    ///     .read(&mut "arg(a1, p, [q], []).\nweight(a1, 0.5).".as_bytes())
    ///     .unwrap();
    /// let mut buffer = Vec::new();
    /// CaesWriter::default().write_instance(&mut buffer, &instance).unwrap();
    /// assert_eq!(
    ///     "arg(a1, p, [q], []).\nweight(a1, 0.5).\ndefault_standard(scintilla).\n",
    ///     String::from_utf8(buffer).unwrap()
    /// );
    /// ```
    pub fn write_instance(&self, writer: &mut dyn Write, instance: &CaesInstance) -> Result<()> {
        let context = "while writing an instance";
        for arg in instance.argument_set().iter_arguments() {
            write_arg_statement(writer, arg).context(context)?;
        }
        let mut assumptions = instance.audience().iter_assumptions().collect::<Vec<_>>();
        assumptions.sort_unstable();
        for p in assumptions {
            writeln!(writer, "assume({}).", p).context(context)?;
        }
        let mut weighted = instance.audience().iter_weighted().collect::<Vec<_>>();
        weighted.sort_unstable();
        for id in weighted {
            if let Some(w) = instance.audience().weight(id) {
                writeln!(writer, "weight({}, {}).", id, w).context(context)?;
            }
        }
        let mut standards = instance
            .proof_standard()
            .iter_configured()
            .collect::<Vec<_>>();
        standards.sort_unstable_by(|(p1, _), (p2, _)| p1.cmp(p2));
        for (p, standard) in standards {
            writeln!(writer, "standard({}, {}).", p, standard).context(context)?;
        }
        writeln!(
            writer,
            "default_standard({}).",
            instance.proof_standard().default_standard()
        )
        .context(context)?;
        writer.flush().context(context)
    }
}

impl ResponseWriter for CaesWriter {
    fn write_acceptance_status(
        &self,
        writer: &mut dyn Write,
        acceptance_status: bool,
    ) -> Result<()> {
        let context = "while writing an acceptance status";
        writeln!(writer, "{}", status_str(acceptance_status)).context(context)?;
        writer.flush().context(context)
    }

    fn write_proposition_status(
        &self,
        writer: &mut dyn Write,
        statuses: &[(&Proposition, bool)],
    ) -> Result<()> {
        let context = "while writing the status of propositions";
        statuses.iter().try_for_each(|(p, status)| {
            writeln!(writer, "{} {}", p, status_str(*status)).context(context)
        })?;
        writer.flush().context(context)
    }

    fn write_arguments(&self, writer: &mut dyn Write, argset: &ArgumentSet) -> Result<()> {
        let context = "while writing arguments";
        argset.iter_arguments().try_for_each(|arg| {
            writeln!(writer, "{}: {}", arg.id().unwrap_or_default(), arg).context(context)
        })?;
        writer.flush().context(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{CaesReader, InstanceReader};
    use std::io::BufWriter;

    fn murder_instance() -> CaesInstance {
        let content = r#"arg(arg1, murder, [kill, intent], []).
arg(arg2, intent, [witness1], [unreliable1]).
arg(arg3, -intent, [witness2], [unreliable2]).
assume(witness2).
assume(kill).
assume(unreliable2).
assume(witness1).
weight(arg3, 0.8).
weight(arg1, 0.8).
weight(arg2, 0.3).
standard(intent, beyond_reasonable_doubt).
"#;
        CaesReader::default().read(&mut content.as_bytes()).unwrap()
    }

    fn written<F>(f: F) -> String
    where
        F: FnOnce(&mut dyn Write),
    {
        let mut buffer = BufWriter::new(Vec::new());
        f(&mut buffer);
        String::from_utf8(buffer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_write_acceptance_status() {
        let writer = CaesWriter::default();
        assert_eq!(
            "YES\n",
            written(|w| writer.write_acceptance_status(w, true).unwrap())
        );
        assert_eq!(
            "NO\n",
            written(|w| writer.write_acceptance_status(w, false).unwrap())
        );
    }

    #[test]
    fn test_write_proposition_status() {
        let writer = CaesWriter::default();
        let p: Proposition = "murder".parse().unwrap();
        let q: Proposition = "-intent".parse().unwrap();
        assert_eq!(
            "murder NO\n-intent YES\n",
            written(|w| writer
                .write_proposition_status(w, &[(&p, false), (&q, true)])
                .unwrap())
        );
        assert_eq!(
            "",
            written(|w| writer.write_proposition_status(w, &[]).unwrap())
        );
    }

    #[test]
    fn test_write_arguments() {
        let instance = murder_instance();
        let writer = CaesWriter::default();
        assert_eq!(
            "arg1: [intent, kill], ~[] => murder\narg2: [witness1], ~[unreliable1] => intent\narg3: [witness2], ~[unreliable2] => -intent\n",
            written(|w| writer.write_arguments(w, instance.argument_set()).unwrap())
        );
    }

    #[test]
    fn test_write_instance_is_read_back() {
        let instance = murder_instance();
        let writer = CaesWriter::default();
        let text = written(|w| writer.write_instance(w, &instance).unwrap());
        assert_eq!(
            r#"arg(arg1, murder, [intent, kill], []).
arg(arg2, intent, [witness1], [unreliable1]).
arg(arg3, -intent, [witness2], [unreliable2]).
assume(kill).
assume(unreliable2).
assume(witness1).
assume(witness2).
weight(arg1, 0.8).
weight(arg2, 0.3).
weight(arg3, 0.8).
standard(intent, beyond_reasonable_doubt).
default_standard(scintilla).
"#,
            text
        );
        let reread = CaesReader::default().read(&mut text.as_bytes()).unwrap();
        assert_eq!(
            text,
            written(|w| writer.write_instance(w, &reread).unwrap())
        );
    }
}
