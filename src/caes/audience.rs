use super::{CaesError, Proposition};
use anyhow::Result;
use std::collections::{HashMap, HashSet};

pub(crate) fn check_unit_interval(what: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(CaesError::Validation(format!(
            "{} must be a real number in [0, 1], got {}",
            what, value
        ))
        .into())
    }
}

/// The audience (or jury) of a CAES.
///
/// An audience holds assumptions, that is propositions taken as given,
/// and assigns a weight to each argument, given by its identifier.
/// Weights are real numbers in the interval `[0, 1]`.
///
/// # Example
///
/// ```
/// # use carneades::caes::{Audience, Proposition};
/// let kill = Proposition::positive("kill").unwrap();
/// let audience = Audience::new([kill.clone()], [("arg1", 0.8)]).unwrap();
/// assert!(audience.is_assumed(&kill));
/// assert!(!audience.is_assumed(&kill.negate()));
/// assert_eq!(Some(0.8), audience.weight("arg1"));
/// assert_eq!(None, audience.weight("arg2"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Audience {
    assumptions: HashSet<Proposition>,
    weights: HashMap<String, f64>,
}

impl Audience {
    /// Builds a new audience given its assumptions and the weights of the arguments.
    ///
    /// An error is returned if a weight does not belong to `[0, 1]`.
    pub fn new<A, W, S>(assumptions: A, weights: W) -> Result<Self>
    where
        A: IntoIterator<Item = Proposition>,
        W: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut audience_weights = HashMap::new();
        for (arg_id, w) in weights {
            let arg_id = arg_id.into();
            check_unit_interval(&format!("the weight of argument '{}'", arg_id), w)?;
            audience_weights.insert(arg_id, w);
        }
        Ok(Audience {
            assumptions: assumptions.into_iter().collect(),
            weights: audience_weights,
        })
    }

    /// Returns `true` iff the proposition is one of the assumptions.
    pub fn is_assumed(&self, proposition: &Proposition) -> bool {
        self.assumptions.contains(proposition)
    }

    /// Returns the weight of the argument with the given identifier, if any.
    pub fn weight(&self, arg_id: &str) -> Option<f64> {
        self.weights.get(arg_id).copied()
    }

    /// Returns an iterator to the assumptions.
    pub fn iter_assumptions(&self) -> impl Iterator<Item = &Proposition> + '_ {
        self.assumptions.iter()
    }

    /// Returns the number of assumptions.
    pub fn n_assumptions(&self) -> usize {
        self.assumptions.len()
    }

    /// Returns an iterator to the identifiers of the weighted arguments.
    pub fn iter_weighted(&self) -> impl Iterator<Item = &str> + '_ {
        self.weights.keys().map(|k| k.as_str())
    }
}

/// The thresholds used by the strongest proof standards.
///
/// * `alpha` is the weight the strongest pro argument must exceed for the clear and convincing and beyond reasonable doubt standards;
/// * `beta` is accepted for compatibility with the Carneades model but is not used by any standard;
/// * `gamma` is the margin the pro arguments must have over the con arguments for the clear and convincing standard,
///   and the weight the con arguments must stay below for the beyond reasonable doubt standard.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    alpha: f64,
    beta: f64,
    gamma: f64,
}

/// The default value of alpha.
pub const DEFAULT_ALPHA: f64 = 0.4;

/// The default value of beta.
pub const DEFAULT_BETA: f64 = 0.3;

/// The default value of gamma.
pub const DEFAULT_GAMMA: f64 = 0.2;

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
            gamma: DEFAULT_GAMMA,
        }
    }
}

impl Thresholds {
    /// Builds new thresholds.
    ///
    /// An error is returned if one of them does not belong to `[0, 1]`.
    ///
    /// # Example
    ///
    /// ```
    /// # use carneades::caes::Thresholds;
    /// assert!(Thresholds::new(0.5, 0.3, 0.1).is_ok());
    /// assert!(Thresholds::new(1.5, 0.3, 0.1).is_err());
    /// ```
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Result<Self> {
        check_unit_interval("alpha", alpha)?;
        check_unit_interval("beta", beta)?;
        check_unit_interval("gamma", gamma)?;
        Ok(Thresholds { alpha, beta, gamma })
    }

    /// Returns alpha.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns beta.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Returns gamma.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}
