use super::Proposition;
use std::{collections::BTreeSet, fmt::Display};

/// An argument, made of a conclusion, a set of premises and a set of exceptions.
///
/// Premises and exceptions may be empty; they are kept sorted by their rendered form,
/// which gives a canonical order to the arguments components.
///
/// Arguments get their identifier when they are registered in an [ArgumentSet](super::ArgumentSet).
/// This identifier is the key used by an [Audience](super::Audience) to weight the argument.
///
/// # Example
///
/// ```
/// # use carneades::caes::{Argument, Proposition};
/// let prop = |s: &str| s.parse::<Proposition>().unwrap();
/// let arg = Argument::new(prop("murder"), [prop("kill"), prop("intent")], []);
/// assert_eq!("[intent, kill], ~[] => murder", arg.to_string());
/// assert!(arg.id().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Argument {
    id: Option<String>,
    conclusion: Proposition,
    premises: BTreeSet<Proposition>,
    exceptions: BTreeSet<Proposition>,
}

impl Argument {
    /// Builds a new argument.
    ///
    /// Repeated premises (resp. exceptions) are considered only once.
    pub fn new<P, E>(conclusion: Proposition, premises: P, exceptions: E) -> Self
    where
        P: IntoIterator<Item = Proposition>,
        E: IntoIterator<Item = Proposition>,
    {
        Argument {
            id: None,
            conclusion,
            premises: premises.into_iter().collect(),
            exceptions: exceptions.into_iter().collect(),
        }
    }

    /// Returns the identifier of the argument, or `None` if it has not been registered yet.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub(crate) fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    /// Returns the conclusion of the argument.
    pub fn conclusion(&self) -> &Proposition {
        &self.conclusion
    }

    /// Returns an iterator to the premises, in canonical order.
    pub fn premises(&self) -> impl Iterator<Item = &Proposition> + '_ {
        self.premises.iter()
    }

    /// Returns an iterator to the exceptions, in canonical order.
    pub fn exceptions(&self) -> impl Iterator<Item = &Proposition> + '_ {
        self.exceptions.iter()
    }

    /// Returns the number of premises.
    pub fn n_premises(&self) -> usize {
        self.premises.len()
    }

    /// Returns the number of exceptions.
    pub fn n_exceptions(&self) -> usize {
        self.exceptions.len()
    }
}

fn write_propositions(
    f: &mut std::fmt::Formatter<'_>,
    props: &BTreeSet<Proposition>,
) -> std::fmt::Result {
    write!(f, "[")?;
    for (i, p) in props.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", p)?;
    }
    write!(f, "]")
}

impl Display for Argument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_propositions(f, &self.premises)?;
        write!(f, ", ~")?;
        write_propositions(f, &self.exceptions)?;
        write!(f, " => {}", self.conclusion)
    }
}
