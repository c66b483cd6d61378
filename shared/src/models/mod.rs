//! Domain models for the Weather Gateway

mod current;
mod forecast;
mod location;
mod snapshot;

pub use current::*;
pub use forecast::*;
pub use location::*;
pub use snapshot::*;
