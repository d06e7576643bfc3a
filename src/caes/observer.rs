use super::{Argument, ProofStandardKind, Proposition};
use log::{log, Level};
use std::fmt::Display;

/// A call to one of the recursive predicates of a [Caes](super::Caes).
#[derive(Clone, Copy, Debug)]
pub enum EvaluationCall<'a> {
    /// A check of the applicability of an argument.
    Applicable(&'a Argument),
    /// A check of the acceptability of a proposition.
    Acceptable(&'a Proposition),
    /// A check of whether a proposition meets a proof standard.
    MeetsProofStandard(&'a Proposition, ProofStandardKind),
}

impl Display for EvaluationCall<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvaluationCall::Applicable(a) => match a.id() {
                Some(id) => write!(f, "applicable({})", id),
                None => write!(f, "applicable({})", a),
            },
            EvaluationCall::Acceptable(p) => write!(f, "acceptable({})", p),
            EvaluationCall::MeetsProofStandard(p, s) => {
                write!(f, "meets_proof_standard({}, {})", p, s)
            }
        }
    }
}

/// A trait for objects that are notified of the recursive calls made while evaluating a CAES.
///
/// Both functions do nothing by default.
/// The depth given to the functions is the number of enclosing calls.
pub trait EvaluationObserver {
    /// Called before a predicate is evaluated.
    fn on_enter(&self, _call: &EvaluationCall, _depth: usize) {}

    /// Called after a predicate is evaluated.
    ///
    /// The result is `None` if the evaluation failed.
    fn on_exit(&self, _call: &EvaluationCall, _result: Option<bool>, _depth: usize) {}
}

/// An observer that does nothing.
#[derive(Default)]
pub struct NoopObserver;

impl EvaluationObserver for NoopObserver {}

/// An observer that logs the calls, indented by their depth.
///
/// # Example
///
/// ```
/// # use carneades::caes::{ArgumentSet, Audience, Caes, LoggingObserver, ProofStandard};
/// # let (argset, audience, ps) = (ArgumentSet::default(), Audience::default(), ProofStandard::default());
/// let mut caes = Caes::new(&argset, &audience, &ps);
/// caes.set_observer(Box::new(LoggingObserver::new(log::Level::Info)));
/// ```
pub struct LoggingObserver {
    level: Level,
    indent_step: usize,
}

impl LoggingObserver {
    /// Builds a new logging observer, logging at the provided level.
    pub fn new(level: Level) -> Self {
        LoggingObserver {
            level,
            indent_step: 2,
        }
    }

    /// Sets the number of spaces added for each level of depth.
    pub fn with_indent_step(mut self, indent_step: usize) -> Self {
        self.indent_step = indent_step;
        self
    }

    fn indent(&self, depth: usize) -> String {
        " ".repeat(depth * self.indent_step)
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new(Level::Debug)
    }
}

impl EvaluationObserver for LoggingObserver {
    fn on_enter(&self, call: &EvaluationCall, depth: usize) {
        log!(self.level, "{}calling {}", self.indent(depth), call);
    }

    fn on_exit(&self, call: &EvaluationCall, result: Option<bool>, depth: usize) {
        match result {
            Some(r) => log!(self.level, "{}{} --> {}", self.indent(depth), call, r),
            None => log!(self.level, "{}{} --> failed", self.indent(depth), call),
        }
    }
}
