//! Objects used to read CAES instances and write the answers to queries.

mod caes_reader;
pub use caes_reader::CaesReader;

mod caes_writer;
pub use caes_writer::CaesWriter;

mod instance;
pub use instance::CaesInstance;

mod specs;
pub use specs::InstanceReader;
pub use specs::ResponseWriter;
pub use specs::WarningHandler;

mod warning_result;
