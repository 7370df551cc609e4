//! Reference resolution for custom properties.
//!
//! A value is a reference only when the whole trimmed value is `var(--name)`.
//! References are looked up in the table they came from and followed until a
//! literal is reached or [`MAX_REFERENCE_DEPTH`] substitutions have been made.

mod references;

pub use references::{
    is_reference, reference_name, resolve, resolve_traced, Resolution, ResolutionStatus,
    MAX_REFERENCE_DEPTH,
};
