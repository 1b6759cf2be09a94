//! # Pak Core API
//!
//! Hides a ZIP or 7z archive inside a JPEG image by appending it behind the
//! image's end-of-image marker, where decoders stop reading. The archive is
//! stored as is, anyone looking at the tail of the file can see it.
//!
//! All work is done by [`Carrier`][carrier], the builders in [`api`] wrap
//! it for one-shot use.
//!
//! # Usage Examples
//!
//! ## Hide an archive inside an image
//!
//! ```rust,no_run
//! let bytes = pak_core::api::inject::prepare()
//!     .with_payload("secrets.zip")
//!     .into_image("holiday.jpg")
//!     .execute()
//!     .expect("Failed to hide archive in image");
//! ```
//!
//! ## Get it back, and clean the image afterwards
//!
//! ```rust,no_run
//! use pak_core::{CarrierOptions, ScanMode};
//!
//! let options = CarrierOptions::default().with_scan(ScanMode::SegmentWalk);
//!
//! let extracted = pak_core::api::extract::prepare()
//!     .with_options(options)
//!     .from_image("holiday.jpg")
//!     .into_file("secrets") // becomes secrets.zip or secrets.7z
//!     .execute()
//!     .expect("Failed to extract archive from image");
//!
//! let removed = pak_core::api::clear::prepare()
//!     .with_options(options)
//!     .of_image("holiday.jpg")
//!     .execute()
//!     .expect("Failed to clear image");
//! assert_eq!(removed, extracted.bytes);
//! ```
//!
//! [carrier]: ./struct.Carrier.html

#![warn(clippy::redundant_else)]

pub mod api;
pub mod carrier;
pub mod error;
pub mod jpeg;
pub mod options;
pub mod payload;
pub mod result;

pub use crate::carrier::{Carrier, CarrierReport, Extracted};
pub use crate::error::PakError;
pub use crate::options::{CarrierOptions, ScanMode, SignaturePolicy};
pub use crate::payload::PayloadKind;
pub use crate::result::Result;
