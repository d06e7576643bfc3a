use super::CaesInstance;
use crate::caes::{ArgumentSet, Proposition};
use anyhow::Result;
use std::io::{Read, Write};

/// The type of callback functions to call when warnings are raised while parsing an instance.
///
/// The first parameter is the (1-based) index of the line the warning refers to.
pub type WarningHandler = Box<dyn Fn(usize, String)>;

/// A trait implemented by objects able to read CAES instances.
pub trait InstanceReader {
    /// Reads a [`CaesInstance`].
    ///
    /// In case warnings are raised, the callback functions registered by [add_warning_handler](Self::add_warning_handler) are triggered.
    ///
    /// # Example
    ///
    /// ```
    /// # use carneades::io::{CaesInstance, CaesReader, InstanceReader};
    /// fn read_instance_from_str(s: &str) -> CaesInstance {
    ///     let reader = CaesReader::default();
    ///     reader.read(&mut s.as_bytes()).expect("invalid CAES instance")
    /// }
    /// # read_instance_from_str("arg(arg1, a, [], []).");
    /// ```
    fn read(&self, reader: &mut dyn Read) -> Result<CaesInstance>;

    /// Adds a callback function to call when warnings are raised while parsing an instance.
    fn add_warning_handler(&mut self, h: WarningHandler);
}

/// A trait implemented by objects that write the results of CAES queries.
pub trait ResponseWriter {
    /// Writes the acceptability of a single proposition.
    fn write_acceptance_status(
        &self,
        writer: &mut dyn Write,
        acceptance_status: bool,
    ) -> Result<()>;

    /// Writes the acceptability of a list of propositions.
    fn write_proposition_status(
        &self,
        writer: &mut dyn Write,
        statuses: &[(&Proposition, bool)],
    ) -> Result<()>;

    /// Writes the arguments of a set, in registration order.
    fn write_arguments(&self, writer: &mut dyn Write, argset: &ArgumentSet) -> Result<()>;
}
