use crate::caes::{ArgumentSet, Audience, Caes, ProofStandard, Thresholds};

/// Everything needed to evaluate a CAES, as read from an instance file.
///
/// # Example
///
/// ```
/// # use carneades::caes::Thresholds;
/// # use carneades::io::{CaesReader, InstanceReader};
/// let instance = CaesReader::default()
///     .read(&mut "arg(arg1, a, [], []).\nweight(arg1, 0.5).".as_bytes())
///     .unwrap();
/// let caes = instance.caes(Thresholds::default());
/// assert!(caes.acceptable(&"a".parse().unwrap()).unwrap());
/// ```
#[derive(Default)]
pub struct CaesInstance {
    argument_set: ArgumentSet,
    audience: Audience,
    proof_standard: ProofStandard,
}

impl CaesInstance {
    /// Builds a new instance from its components.
    pub fn new(argument_set: ArgumentSet, audience: Audience, proof_standard: ProofStandard) -> Self {
        CaesInstance {
            argument_set,
            audience,
            proof_standard,
        }
    }

    /// Returns the arguments of the instance.
    pub fn argument_set(&self) -> &ArgumentSet {
        &self.argument_set
    }

    /// Returns the audience of the instance.
    pub fn audience(&self) -> &Audience {
        &self.audience
    }

    /// Returns the proof standards of the instance.
    pub fn proof_standard(&self) -> &ProofStandard {
        &self.proof_standard
    }

    /// Builds an evaluator for this instance.
    pub fn caes(&self, thresholds: Thresholds) -> Caes<'_> {
        Caes::new_with_thresholds(
            &self.argument_set,
            &self.audience,
            &self.proof_standard,
            thresholds,
        )
    }
}
