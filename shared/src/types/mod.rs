//! Type definitions shared between the pipeline and its callers
//!
//! - `domain` - The admin/auth areas that own a translation table
//! - `style` - How multiple messages are combined for display
//! - `result` - Field-addressable translation results

pub mod domain;
pub mod result;
pub mod style;

pub use domain::Domain;
pub use result::{DomainErrorResult, FieldMessages};
pub use style::RenderStyle;
