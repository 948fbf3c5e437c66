//! Surfview - a terminal-based explorer for surfaces of two-variable functions.
//!
//! Surfview parses an expression such as `1/sin(7*x)+1/sin(4*y)`, evaluates
//! it on a fixed 100×100 grid over [-5, 5]², and renders a colormapped
//! surface view plus two orthogonal slice charts that follow a probe cursor.
//!
//! # Features
//!
//! - Expression parser with the usual math functions (sin, cos, tan, log, ...)
//! - Colormapped surface view with Viridis and friends
//! - Probe cursor driving two live slice charts
//! - Info panel with an expression gallery
//! - Dark/light themes
//! - Clipboard integration
//!
//! # Example
//!
//! ```
//! use surfview::field::SurfaceField;
//!
//! let surface = SurfaceField::evaluate("x+y").unwrap();
//! let slice = surface.slice_at_x(3.0);
//! assert_eq!(slice.points.len(), 100);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod clipboard;
pub mod error;
pub mod expr;
pub mod field;
pub mod help;
pub mod input;
pub mod ui;
pub mod util;

pub use error::{Result, SurfviewError};
