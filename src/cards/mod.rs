//! Card system: templates, handles and the catalog.
//!
//! ## Key Types
//!
//! - `CardTemplate`: Immutable card data, identified by name
//! - `CardKind`: The five card types
//! - `CardHandle`: Index of a template in its catalog
//! - `CardCatalog`: Validated arena of templates, shared read-only by matches

pub mod content;
pub mod definition;
pub mod registry;

pub use content::standard_templates;
pub use definition::{CardHandle, CardKind, CardTemplate};
pub use registry::CardCatalog;
