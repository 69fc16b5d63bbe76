//! Style requests and their composition into resolved styles.

mod compose;
mod request;

pub use compose::{compose, CIRCLE_FALLBACK_HEIGHT, CIRCLE_SHAPE, CONTENT_KEYS};
pub use request::{CustomSize, StyleOverrides, StyleRequest};
