//! themescope-io: theme directory aggregation.
//!
//! A theme root is laid out as:
//!
//! ```text
//! themes/
//! ├── dark.css            -> theme "dark", one file "dark.css"
//! └── light/              -> theme "light"
//!     ├── variables.css   -> file "variables.css"
//!     └── parts/extra.css -> file "parts/extra.css"
//! ```
//!
//! Every stylesheet is run through the custom-property extractor and the
//! results are collected into a [`ThemeCollection`](themescope_core::ThemeCollection).
//!
//! # Quick Start
//!
//! ```ignore
//! use themescope_io::{aggregate, AggregateOptions};
//!
//! let aggregation = aggregate(Path::new("/srv/themes"), &AggregateOptions::default())?;
//! println!("Loaded {} themes", aggregation.themes.len());
//! ```

pub mod aggregate;
pub mod options;

pub use aggregate::{aggregate, read_table, Aggregation, SkippedFile};
pub use options::AggregateOptions;
