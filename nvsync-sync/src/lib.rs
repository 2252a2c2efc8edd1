//! # nvsync-sync
//!
//! Transfer planning and the rsync invoker.
//!
//! Call [`pipeline::run`] to update or back up one catalogue entry (or all
//! of them) through a [`Mirror`]; [`Rsync`] is the production mirror.

pub mod error;
pub mod pipeline;
pub mod rsync;
pub mod validate;

pub use error::SyncError;
pub use pipeline::{SyncEvent, SyncOptions, SyncOutcome, SyncPlan, SyncScope};
pub use rsync::{Mirror, MirrorJob, MirrorReport, Rsync};
