//! Domain layer: the status update entity and its creation payload.
//!
//! These are the types exchanged with the calling API layer. They carry
//! no persistence machinery; the persistence module maps them to and
//! from `ssu` table rows.

pub mod status_update;

pub use status_update::{SENTINEL_ID, StatusUpdate, StatusUpdatePostData};
