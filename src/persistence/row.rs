//! Row mapper for the `ssu` table.
//!
//! A pure function from one returned row to one [`StatusUpdate`]. No
//! state, no I/O beyond reading the row; query execution and ordering
//! live in [`super::postgres`].

use chrono::NaiveDate;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::domain::StatusUpdate;
use crate::error::StoreError;

/// Maps one `ssu` row into a [`StatusUpdate`].
///
/// Expects the columns `userid`, `ssuid`, `title`, `description`,
/// `dateposted`, `likes`. The generated key `ssuid` is an integer column
/// rendered as the entity's opaque string id; `dateposted` is a `DATE`
/// column; `likes` must be non-negative.
///
/// # Errors
///
/// Returns [`StoreError::Mapping`] when a column is absent, of an
/// incompatible type, or when `likes` is negative.
pub fn map_status_update(row: &PgRow) -> Result<StatusUpdate, StoreError> {
    let user_id: String = row.try_get("userid")?;
    let key: i32 = row.try_get("ssuid")?;
    let title: String = row.try_get("title")?;
    let description: String = row.try_get("description")?;
    let post_date: NaiveDate = row.try_get("dateposted")?;
    let likes: i32 = row.try_get("likes")?;

    let likes = u32::try_from(likes)
        .map_err(|_| StoreError::Mapping(format!("negative likes count {likes}")))?;

    Ok(StatusUpdate::new(
        key.to_string(),
        user_id,
        title,
        description,
        post_date,
        likes,
    ))
}
