#[macro_use]
extern crate lazy_static;

pub mod properties;
pub mod ucd;
pub mod validation;

mod bundled;
mod enumerate;
mod error;
mod registry;

pub use bundled::bundled;

pub use enumerate::Enumeration;
pub use enumerate::Scope;

pub use error::CodepointError;
pub use error::DatasetError;
pub use error::InvariantViolations;
pub use error::LoadError;

pub use properties::codename;
pub use properties::Block;
pub use properties::Category;
pub use properties::CategoryTree;
pub use properties::CodepointInfo;
pub use properties::CodepointRecord;
pub use properties::Plane;

pub use registry::Registry;

pub use ucd::Dataset;
pub use ucd::UcdSources;

pub use validation::Violation;

/// последний кодпоинт кодового пространства Unicode
pub const LAST_CODEPOINT: u32 = 0x10FFFF;
