//! Style layers and resolved styles.

mod properties;
mod resolved;

pub use properties::StyleProperties;
pub use resolved::ResolvedStyle;
