//! Carneades Argument Evaluation Structures.
//!
//! An [ArgumentSet] stores the arguments and the propositions they involve.
//! An [Audience] holds the assumptions and the weights of the arguments,
//! and a [ProofStandard] tells which standard each proposition must meet.
//! The [Caes] evaluator combines them to decide the applicability of arguments and the acceptability of propositions.
//!
//! ```
//! # use carneades::caes::{Argument, ArgumentSet, Audience, Caes, ProofStandard, Proposition, Thresholds};
//! # fn main() -> anyhow::Result<()> {
//! let kill: Proposition = "kill".parse()?;
//! let intent: Proposition = "intent".parse()?;
//! let murder: Proposition = "murder".parse()?;
//! let mut argset = ArgumentSet::default();
//! argset.add_argument(Argument::new(murder.clone(), [kill.clone(), intent.clone()], []), None)?;
//! argset.add_argument(Argument::new(intent.clone(), ["witness1".parse::<Proposition>()?], ["unreliable1".parse::<Proposition>()?]), None)?;
//! let audience = Audience::new([kill, "witness1".parse()?], [("arg1", 0.8), ("arg2", 0.3)])?;
//! let ps = ProofStandard::new(&[(intent.clone(), "beyond_reasonable_doubt")], "scintilla")?;
//!
//! let caes = Caes::new(&argset, &audience, &ps);
//! assert!(!caes.acceptable(&murder)?);
//!
//! let caes = Caes::new_with_thresholds(&argset, &audience, &ps, Thresholds::new(0.25, 0.3, 0.2)?);
//! assert!(caes.acceptable(&murder)?);
//! # Ok(())
//! # }
//! ```

mod argument;
pub use argument::Argument;

mod argument_set;
pub use argument_set::ArgumentSet;
pub use argument_set::Edge;
pub use argument_set::Vertex;

mod audience;
pub(crate) use audience::check_unit_interval;
pub use audience::Audience;
pub use audience::Thresholds;
pub use audience::DEFAULT_ALPHA;
pub use audience::DEFAULT_BETA;
pub use audience::DEFAULT_GAMMA;

mod error;
pub use error::CaesError;

mod evaluator;
pub use evaluator::Caes;

mod observer;
pub use observer::EvaluationCall;
pub use observer::EvaluationObserver;
pub use observer::LoggingObserver;
pub use observer::NoopObserver;

mod proof_standard;
pub use proof_standard::ProofStandard;
pub use proof_standard::ProofStandardKind;

mod proposition;
pub use proposition::Proposition;
