//! The RAP file catalogue.
//!
//! Two stored procedures own everything relational about a rejection:
//! `create_rap_file_by_tap_loader` allocates the filename, sequence number
//! and header parameters for a new RAP file, `load_return_batch` registers
//! the finished batch. Both run with their own transactional semantics; the
//! emitter issues one call each per rejection and never opens a transaction
//! of its own.

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

use tap3_core::models::rap::ReturnBatch;

/// Outbound file status written when the batch is registered. The status is
/// recorded before the upload happens; a later upload failure leaves it
/// stale (kept as-is, flagged for product review).
pub const OUTFILE_CREATED_AND_SENT: i32 = 2;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalogue call failed: {0}")]
    Db(#[from] sqlx::Error),
    #[error("catalogue rejected the return batch with status {0}")]
    Rejected(i64),
    #[error("return batch could not be serialised: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Everything the allocation procedure hands back for one new RAP file.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct RapAllocation {
    pub rap_filename: String,
    // Alphanumeric, at most 10 characters.
    pub rap_sequence_number: String,
    pub mobile_network_id: i64,
    pub roaming_hub_id: i64,
    pub roaming_hub_name: String,
    // Local timestamp ("yyyymmddhh24miss") and UTC offset for the RAP
    // header fields.
    pub rap_timestamp: String,
    pub rap_utc_offset: String,
    pub tap_version: i64,
    pub tap_release: i64,
    pub rap_version: i64,
    pub rap_release: i64,
    pub tap_decimal_places: i32,
    pub rap_file_id: i64,
}

#[async_trait]
pub trait RapCatalog: Send + Sync {
    /// Allocates the next RAP file for `recipient`, keyed by the TAP
    /// file-available timestamp ("yyyymmddhh24miss").
    async fn create_rap_file_by_tap_loader(
        &self,
        recipient: &str,
        is_test_data: bool,
        tap_available_timestamp: &str,
    ) -> Result<RapAllocation, CatalogError>;

    /// Registers the finished batch under the allocated file id. Returns
    /// the catalogue's load result; negative results surface as
    /// [`CatalogError::Rejected`].
    async fn load_return_batch(
        &self,
        batch: &ReturnBatch,
        file_id: i64,
        filename: &str,
        status: i32,
    ) -> Result<i64, CatalogError>;
}

pub struct PgRapCatalog {
    pool: PgPool,
}

impl PgRapCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RapCatalog for PgRapCatalog {
    async fn create_rap_file_by_tap_loader(
        &self,
        recipient: &str,
        is_test_data: bool,
        tap_available_timestamp: &str,
    ) -> Result<RapAllocation, CatalogError> {
        let allocation = sqlx::query_as::<_, RapAllocation>(
            r#"
            SELECT rap_filename, rap_sequence_number, mobile_network_id,
                   roaming_hub_id, roaming_hub_name, rap_timestamp,
                   rap_utc_offset, tap_version, tap_release, rap_version,
                   rap_release, tap_decimal_places, rap_file_id
            FROM billing.create_rap_file_by_tap_loader(
                $1, $2, to_timestamp($3, 'yyyymmddhh24miss'))
            "#,
        )
        .bind(recipient)
        .bind(i32::from(is_test_data))
        .bind(tap_available_timestamp)
        .fetch_one(&self.pool)
        .await?;

        Ok(allocation)
    }

    async fn load_return_batch(
        &self,
        batch: &ReturnBatch,
        file_id: i64,
        filename: &str,
        status: i32,
    ) -> Result<i64, CatalogError> {
        let batch_json = serde_json::to_value(batch)?;
        let load_result: i64 =
            sqlx::query_scalar("SELECT billing.load_return_batch($1, $2, $3, $4)")
                .bind(batch_json)
                .bind(file_id)
                .bind(filename)
                .bind(status)
                .fetch_one(&self.pool)
                .await?;

        if load_result < 0 {
            return Err(CatalogError::Rejected(load_result));
        }
        Ok(load_result)
    }
}
