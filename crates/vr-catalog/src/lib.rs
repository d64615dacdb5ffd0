//! `vr-catalog` — the data-source side of vendor-radar: loading vendor
//! records from CSV.
//!
//! # Crate layout
//!
//! | Module     | Contents                                   |
//! |------------|--------------------------------------------|
//! | [`loader`] | `load_vendors_csv`, `load_vendors_reader`  |
//! | [`error`]  | `CatalogError`, `CatalogResult<T>`         |
//!
//! The computation crates treat vendor records as immutable input; this
//! crate is where they come from.  It is also the layer responsible for any
//! coordinate validation a deployment wants — the loader itself passes
//! lat/lng values through unchecked, matching the computation crates'
//! documented boundary.

pub mod error;
pub mod loader;

#[cfg(test)]
mod tests;

pub use error::{CatalogError, CatalogResult};
pub use loader::{load_vendors_csv, load_vendors_reader};
