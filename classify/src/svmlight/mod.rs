//! SVMlight training-data writing.
//!
//! [`SvmlightDataWriter`] appends one `<±1> <index>:<value>…` line per
//! instance to `training-data.svmlight` and persists its encoder state on
//! [`finish`](SvmlightDataWriter::finish). [`SvmlightDataWriterFactory`]
//! constructs writers, restoring persisted encoder state from the output
//! directory when present and wiring the default pipeline otherwise.

pub mod factory;
pub mod writer;

pub use factory::SvmlightDataWriterFactory;
pub use writer::SvmlightDataWriter;
