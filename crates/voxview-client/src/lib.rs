//! Voxview client SDK
//!
//! Typed Rust bindings for the Voxview imaging workstation's automation
//! interface. The workstation exposes its object model - studies, series,
//! images, the database browser, viewer windows, volume render windows and
//! their ROI volumes - over gRPC; this crate wraps each remote object in a
//! thin handle.
//!
//! A handle holds nothing but the remote object's identifier and a cheap
//! clone of the service stub. Every accessor performs exactly one round trip
//! and unwraps one field; there is no local caching, so two reads of the
//! same property may see the host change state in between. Handles stay
//! valid only as long as the objects they name exist in the host - a stale
//! handle fails with [`Error::NotFound`] on its next use.
//!
//! # Quick Start
//!
//! ```ignore
//! use voxview_client::Client;
//!
//! let client = Client::connect("http://127.0.0.1:50051").await?;
//! let browser = client.current_browser().await?;
//! let (studies, _series) = browser.database_selection().await?;
//!
//! for study in &studies {
//!     println!("{} ({})", study.name().await?, study.modalities().await?);
//! }
//! ```
//!
//! # Errors
//!
//! All failures surface through one taxonomy ([`Error`]): `NotFound` for
//! handles that no longer resolve, `InvalidArgument` for values rejected
//! before a request is sent, `RemoteFailure` for anything else the host
//! reports, and `Transport` for channel-level problems.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod browser;
pub mod client;
mod convert;
pub mod error;
pub mod image;
pub mod roi_volume;
pub mod series;
pub mod study;
pub mod viewer;
pub mod vr;

// Re-exports for convenience
pub use browser::BrowserController;
pub use client::{Client, ClientConfig};
pub use error::{Error, Result};
pub use image::DicomImage;
pub use roi_volume::RoiVolume;
pub use series::DicomSeries;
pub use study::DicomStudy;
pub use viewer::ViewerController;
pub use vr::VrController;
