//! Read-time projections over a `CountrySnapshot`. Nothing here mutates
//! its input or touches the database.

pub mod cities;
pub mod economy;
pub mod events;
pub mod military;
pub mod report;
pub mod standing;
