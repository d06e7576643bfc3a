use super::CaesError;
use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use std::{cmp::Ordering, fmt::Display, str::FromStr};

lazy_static! {
    static ref IDENTIFIER_PATTERN: Regex = Regex::new(r"^[_[:alpha:]][_[:alpha:]\d]*$").unwrap();
}

/// An atomic proposition, that is a positive or a negative literal.
///
/// A proposition is made of an identifier and a polarity.
/// Its rendered form is the identifier, prefixed by a hyphen when the polarity is negative.
/// Propositions are ordered by their rendered form, so `-intent` comes before `intent`.
///
/// Identifiers must begin by a letter or an underscore, followed by letters, digits and underscores.
///
/// # Example
///
/// ```
/// # use carneades::caes::Proposition;
/// let intent = Proposition::positive("intent").unwrap();
/// let neg_intent = intent.negate();
/// assert_eq!("-intent", neg_intent.to_string());
/// assert!(!neg_intent.polarity());
/// assert_ne!(intent, neg_intent);
/// assert_eq!(intent, neg_intent.negate());
/// assert_eq!(neg_intent, "-intent".parse().unwrap());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Proposition {
    name: String,
    polarity: bool,
}

impl Proposition {
    /// Builds a new proposition given its identifier and its polarity.
    ///
    /// An error is returned if the identifier is not well-formed.
    pub fn new(name: &str, polarity: bool) -> Result<Self> {
        if IDENTIFIER_PATTERN.is_match(name) {
            Ok(Proposition {
                name: name.to_string(),
                polarity,
            })
        } else {
            Err(CaesError::TypeMismatch(name.to_string()).into())
        }
    }

    /// Builds a new positive proposition.
    pub fn positive(name: &str) -> Result<Self> {
        Self::new(name, true)
    }

    /// Returns the identifier of the proposition, without its polarity.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the polarity of the proposition (`true` for positive literals).
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// Returns the negation of this proposition.
    pub fn negate(&self) -> Self {
        Proposition {
            name: self.name.clone(),
            polarity: !self.polarity,
        }
    }

    fn rendered_chars(&self) -> impl Iterator<Item = char> + '_ {
        (!self.polarity)
            .then_some('-')
            .into_iter()
            .chain(self.name.chars())
    }
}

impl Display for Proposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.polarity {
            write!(f, "{}", self.name)
        } else {
            write!(f, "-{}", self.name)
        }
    }
}

impl Ord for Proposition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rendered_chars().cmp(other.rendered_chars())
    }
}

impl PartialOrd for Proposition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Proposition {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix('-') {
            Some(name) => Proposition::new(name, false),
            None => Proposition::new(s, true),
        }
    }
}
