use super::{CaesError, Proposition};
use anyhow::Result;
use std::{collections::HashMap, str::FromStr};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// The decision rules a proposition may have to satisfy to be acceptable.
///
/// The names of the standards are their snake case identifiers (`scintilla`, `clear_and_convincing`, ...).
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum ProofStandardKind {
    /// At least one applicable argument supports the proposition.
    #[default]
    Scintilla,
    /// The strongest applicable pro argument outweighs the strongest applicable con argument.
    Preponderance,
    /// The strongest pro argument exceeds alpha and outweighs the strongest con argument by more than gamma.
    ClearAndConvincing,
    /// Clear and convincing, and the strongest con argument stays below gamma.
    BeyondReasonableDoubt,
    /// At least one applicable pro argument, and no applicable con argument.
    DialecticalValidity,
}

impl ProofStandardKind {
    /// Reads a proof standard given its name.
    ///
    /// An error is returned if the name does not match any proof standard.
    ///
    /// # Example
    ///
    /// ```
    /// # use carneades::caes::ProofStandardKind;
    /// assert_eq!(
    ///     ProofStandardKind::BeyondReasonableDoubt,
    ///     ProofStandardKind::from_name("beyond_reasonable_doubt").unwrap()
    /// );
    /// assert!(ProofStandardKind::from_name("reasonable_suspicion").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self> {
        ProofStandardKind::from_str(name).map_err(|_| {
            CaesError::Validation(format!("{} is not a valid proof standard", name)).into()
        })
    }

    /// Returns an iterator to the names of all the proof standards, from the weakest to the strongest one.
    pub fn iter_names() -> impl Iterator<Item = &'static str> {
        ProofStandardKind::iter().map(|k| k.into())
    }
}

/// Associates proof standards to propositions.
///
/// Propositions without an explicit proof standard get the default one.
///
/// # Example
///
/// ```
/// # use carneades::caes::{ProofStandard, ProofStandardKind, Proposition};
/// let intent = Proposition::positive("intent").unwrap();
/// let ps = ProofStandard::new(&[(intent.clone(), "beyond_reasonable_doubt")], "scintilla").unwrap();
/// assert_eq!(ProofStandardKind::BeyondReasonableDoubt, ps.get_proofstandard(&intent));
/// assert_eq!(ProofStandardKind::Scintilla, ps.get_proofstandard(&intent.negate()));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ProofStandard {
    default: ProofStandardKind,
    config: HashMap<Proposition, ProofStandardKind>,
}

impl ProofStandard {
    /// Builds the proof standards given a list of `(proposition, standard name)` pairs and the name of the default standard.
    ///
    /// An error is returned as soon as an invalid proof standard name is encountered.
    /// If a proposition appears more than once, the last pair wins.
    pub fn new(propstandards: &[(Proposition, &str)], default: &str) -> Result<Self> {
        let mut proof_standard = ProofStandard::with_default(ProofStandardKind::from_name(default)?);
        for (prop, standard) in propstandards {
            proof_standard.set_standard(prop.clone(), ProofStandardKind::from_name(standard)?);
        }
        Ok(proof_standard)
    }

    /// Builds proof standards where all the propositions get the provided standard.
    pub fn with_default(default: ProofStandardKind) -> Self {
        ProofStandard {
            default,
            config: HashMap::new(),
        }
    }

    /// Sets the proof standard of a proposition.
    pub fn set_standard(&mut self, proposition: Proposition, standard: ProofStandardKind) {
        self.config.insert(proposition, standard);
    }

    /// Returns the proof standard a proposition must meet.
    pub fn get_proofstandard(&self, proposition: &Proposition) -> ProofStandardKind {
        self.config.get(proposition).copied().unwrap_or(self.default)
    }

    /// Returns the default proof standard.
    pub fn default_standard(&self) -> ProofStandardKind {
        self.default
    }

    /// Returns an iterator to the propositions having an explicit proof standard.
    pub fn iter_configured(&self) -> impl Iterator<Item = (&Proposition, ProofStandardKind)> + '_ {
        self.config.iter().map(|(p, k)| (p, *k))
    }
}
