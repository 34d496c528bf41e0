//! plotcover-cli
//! =============
//!
//! Command-line interface for the `plotcover-core` building coverage
//! library.
//!
//! This crate primarily provides a binary (`plotcover-cli`). We include a
//! small library target so that docs.rs renders a documentation page and
//! shows this overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! ```text
//! plotcover-cli --help
//! plotcover-cli query --plot plot.geojson 06075
//! plotcover-cli buildings --plot plot.geojson 06075 --export subset.shp
//! ```
//!
//! For programmatic access, use the [`plotcover-core`] crate directly.
//!
//! [`plotcover-core`]: https://docs.rs/plotcover-core
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
