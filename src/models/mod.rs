mod admin;
mod analytics;
mod ebook;
mod geo;
mod proof;
mod sections;
mod site_content;
mod vsl;

pub use admin::*;
pub use analytics::*;
pub use ebook::*;
pub use geo::*;
pub use proof::*;
pub use sections::*;
pub use site_content::*;
pub use vsl::*;
