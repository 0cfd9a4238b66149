#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::must_use_candidate,
    clippy::float_cmp
)]
//! # Strider Render
//!
//! Static charts written straight to PNG.
//!
//! A [`Figure`] is a grid of panels rasterized onto an [`image::RgbImage`]
//! with a built-in bitmap font, so no system fonts or plotting backend are
//! needed. [`figures`] assembles the concrete report and slide figures from
//! rollouts and synthetic curves.

pub mod canvas;
pub mod chart;
pub mod error;
pub mod figures;
pub mod font;

pub use canvas::{Canvas, Color, Rect};
pub use chart::{Figure, HistogramPanel, LineStyle, Panel, Plot, RefLine, Series, TextPanel};
pub use error::RenderError;
