//! nvsync core library — config catalogue, path resolution, errors.
//!
//! Public API surface:
//! - [`types`] — newtypes and domain enums
//! - [`error`] — [`PathError`], [`ManifestError`]
//! - [`paths`] — repository / home resolution and `~` expansion
//! - [`manifest`] — built-in catalogue and `nvsync.yaml` loading

pub mod error;
pub mod manifest;
pub mod paths;
pub mod types;

pub use error::{ManifestError, PathError};
pub use manifest::{Manifest, ALL_CONFIGS, DEFAULT_CONFIG, MANIFEST_FILE};
pub use paths::Locations;
pub use types::{ConfigEntry, ConfigKind, ConfigName, Direction, Side};
