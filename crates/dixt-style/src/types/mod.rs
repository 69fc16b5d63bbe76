//! Value types shared by templates, layers and resolved styles.

mod value;

pub use value::{
    ButtonState, Color, Font, FontSpec, FontValue, FontWeight, ImageHandle, ImageSide,
};
