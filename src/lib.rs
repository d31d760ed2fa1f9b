//! Htmlpress converts HTML pages into PDF or image files by driving the
//! `wkhtmltopdf` / `wkhtmltoimage` binaries.
//!
//! The crate contains no rendering logic of its own; everything about HTML,
//! CSS and layout is delegated to the external binary. What htmlpress owns is
//! the contract around that binary:
//!
//! - Validate and merge renderer options against a fixed per-renderer schema
//! - Build the exact command line (and its shell-quoted diagnostic rendering)
//! - Manage temporary input/output artifacts
//! - Invoke the binary with a wall-clock timeout and classify failures
//! - Verify that the produced artifact exists and is non-empty
//!
//! # Getting started
//!
//! ```no_run
//! use htmlpress::{Generator, RendererKind};
//!
//! # fn main() -> htmlpress::HtmlpressResult<()> {
//! let mut pdf = Generator::new(RendererKind::Pdf);
//! pdf.set_option("orientation", "Landscape")?;
//! pdf.generate("https://example.org/", "example.pdf".as_ref(), &[], false)?;
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod command;
mod exec;
mod foundation;
mod generator;
mod options;

pub use command::{Arg, CommandLine, build_command_line, shell_quote};
pub use foundation::error::{HtmlpressError, HtmlpressResult};
pub use generator::{DEFAULT_TIMEOUT, Generator, RendererKind};
pub use options::schema::{IMAGE_OPTIONS, PDF_OPTIONS};
pub use options::set::OptionSet;
pub use options::value::OptionValue;
