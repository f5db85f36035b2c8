//! Geo-targeting: where a visitor is, and which checkout platform to offer.

mod locate;
mod resolver;

pub use locate::*;
pub use resolver::*;
