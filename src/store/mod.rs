//! Record store: typed tables cached per session on top of a sheet backend.

pub mod cell;
pub mod schema;
pub mod session;
pub mod table;

pub use schema::{IdFormat, TableKind};
pub use session::Session;
pub use table::{FromRecord, Record, Table, ToRecord};
