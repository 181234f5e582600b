//! LocalLens Core - domain model for the photo insight service
//!
//! This crate holds the pieces of LocalLens that need no I/O:
//!
//! - [`classify`]: filename keyword classifier producing an [`Insight`]
//! - [`UploadRecord`]: the metadata logged for each completed upload
//! - [`stored_name`]: unique, filesystem- and URL-safe names for stored photos
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use locallens_core::{classify, stored_name, UploadRecord};
//!
//! let original = "Menu_Cafe.PNG";
//! let insight = classify(original);
//! let record = UploadRecord::new(stored_name(Utc::now(), original), insight, Utc::now());
//!
//! assert!(record.insight.contains("menu"));
//! assert!(record.stored_name.ends_with("-Menu_Cafe.PNG"));
//! ```

pub mod classifier;
pub mod naming;
pub mod record;

pub use classifier::{classify, Insight, RULES};
pub use naming::{sanitize_file_name, stored_name};
pub use record::{sort_descending, UploadRecord};
