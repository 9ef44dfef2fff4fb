//! Landmark field input and output.
//!
//! Supports a YAML layout and the plain `x y` text dump. See
//! [`load_field`] for format selection.

mod field;

pub use field::{
    FieldLoadError, Result, load_field, parse_field_text, parse_field_yaml, save_field_yaml,
};
