use thiserror::Error;

/// The kinds of errors raised while building or evaluating a CAES.
///
/// Functions of this crate return [anyhow::Result] values;
/// when the failure comes from the model itself, the underlying error is a [CaesError] that can be recovered with [anyhow::Error::downcast_ref].
///
/// # Example
///
/// ```
/// # use carneades::caes::{ArgumentSet, CaesError, Proposition};
/// let argset = ArgumentSet::default();
/// let p = Proposition::positive("p").unwrap();
/// let err = argset.get_arguments(&p).unwrap_err();
/// assert_eq!(
///     Some(&CaesError::NotFound("p".to_string())),
///     err.downcast_ref::<CaesError>()
/// );
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CaesError {
    /// A value that is not a well-formed proposition literal was given where a proposition was expected.
    #[error("{0:?} is not a well-formed proposition")]
    TypeMismatch(String),

    /// A proposition was looked up in a graph it was never added to.
    #[error("proposition '{0}' is not in the current graph")]
    NotFound(String),

    /// A configuration value was rejected.
    #[error("{0}")]
    Validation(String),

    /// The audience assigns no weight to an argument.
    #[error("no weight assigned to argument '{0}'")]
    MissingWeight(String),

    /// The acceptability of a proposition depends on itself.
    #[error("cycle detected while evaluating the acceptability of '{0}'")]
    CycleDetected(String),
}
