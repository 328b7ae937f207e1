//! Five person records keyed by id, and the age of the oldest among them.

pub mod age;
pub mod error;
pub mod models;
pub mod seeds;
pub mod store;

pub use age::{oldest_age, today};
pub use error::RecordError;
pub use models::{Person, PersonSeed};
pub use store::{People, PeopleBuilder, RECORD_COUNT, build_records};
