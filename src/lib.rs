#[macro_use]
mod macros;

pub mod config;
pub mod db;
pub mod derive;
pub mod flush;
pub mod model;
pub mod session;

pub use config::LedgerConfig;
pub use derive::report::{CountryReport, build_report};
pub use model::{BiomeCatalog, CountrySnapshot};
pub use session::{RequestContext, Role};
