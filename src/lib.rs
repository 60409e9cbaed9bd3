#![warn(clippy::all, rust_2018_idioms)]
//! Thumbnail and metadata previews for DotTHz terahertz imaging files.
//!
//! The first 3-axis dataset in the file is reduced to a grayscale magnitude image, every
//! group is summarised as text, and both end up in a self-contained HTML document. Any
//! failure along the imaging path falls back to a file icon, so a request always gets
//! a document.

pub mod config;
pub mod diagnostics;
pub mod document;
pub mod encode;
pub mod error;
pub mod extract;
pub mod file_info;
pub mod icon;
pub mod preview;
pub mod summary;
pub mod thumbnail;

pub use config::PreviewConfig;
pub use diagnostics::Diagnostics;
pub use document::{PreviewDocument, Visual, VisualSource};
pub use error::PreviewError;
pub use icon::{GenericFileIcon, IconProvider};
pub use preview::{PreviewComposer, preview_file};
