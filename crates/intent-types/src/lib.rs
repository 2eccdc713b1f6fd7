//! Shared types for the intent resolver: requests, policy tables, the intent
//! document, analysis output, and the error taxonomy.

pub mod analysis;
pub mod common;
pub mod errors;
pub mod intent;
pub mod market;
pub mod params;
pub mod policy;
pub mod request;
mod selector;
pub mod tokens;
pub mod units;
pub mod validation;

pub use analysis::*;
pub use common::*;
pub use errors::*;
pub use intent::*;
pub use market::*;
pub use params::*;
pub use policy::*;
pub use request::*;
pub use tokens::*;
pub use units::*;
pub use validation::*;
