//! `vr-view` — assembles ranking and projection outputs into the structure
//! the presentation layer iterates.
//!
//! # Crate layout
//!
//! | Module   | Contents                                |
//! |----------|-----------------------------------------|
//! | [`view`] | `RadarView`, `ViewTransform`            |
//!
//! This crate contains no computation of its own beyond composition order:
//! annotate first, recommend from the *original* vendor list, project the
//! full annotated list.  Interaction state (zoom, pan) is applied as a
//! rendering transform after projection and never enters the core math.

pub mod view;


pub use view::{RadarView, ViewTransform};
