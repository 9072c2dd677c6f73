//! RAP file emission.
//!
//! Turns one ReturnDetail into a registered, encoded and (when the hub has
//! an FTP account) uploaded RAP file: allocate the sequence through the
//! catalogue, build the RAP header around the detail, register the batch,
//! write `<output_dir>/<filename>` through the encoder seam, upload.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use suppaftp::FtpStream;
use thiserror::Error;
use tracing::{error, info};

use tap3_core::asn::octets::{octet_string_from_i64, AmountOutOfRange};
use tap3_core::codec::{EncodeError, RapEncoder};
use tap3_core::models::rap::{
    RapAuditControlInfo, RapBatchControlInfo, ReturnBatch, ReturnDetail,
};
use tap3_core::models::tap::DateTimeStamp;
use tap3_db::{CatalogError, RapCatalog, OUTFILE_CREATED_AND_SENT};

use crate::settings::{FtpSettings, Settings};

#[derive(Debug, Error)]
pub enum RapFileError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Amount(#[from] AmountOutOfRange),
    #[error("unable to open file {} for writing: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error("upload to FTP server {host} failed: {reason}")]
    Upload { host: String, reason: String },
}

/// What the caller gets back after a successful emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RapFileRecord {
    pub file_id: i64,
    pub sequence_number: String,
    pub filename: String,
}

pub struct RapFile<'a> {
    catalog: &'a dyn RapCatalog,
    settings: &'a Settings,
    encoder: &'a (dyn RapEncoder + Send + Sync),
}

impl<'a> RapFile<'a> {
    pub fn new(
        catalog: &'a dyn RapCatalog,
        settings: &'a Settings,
        encoder: &'a (dyn RapEncoder + Send + Sync),
    ) -> Self {
        Self {
            catalog,
            settings,
            encoder,
        }
    }

    /// Allocates a RAP file for the rejected interchange, wraps `detail`
    /// into a return batch, registers it and writes it out.
    ///
    /// `sender`/`recipient` are the TAP header values; the RAP travels the
    /// other way, so they swap places in the RAP header. A non-empty
    /// `file_type_indicator` marks test data end to end.
    pub async fn create_rap_file(
        &self,
        detail: ReturnDetail,
        sender: &str,
        recipient: &str,
        tap_available_timestamp: &str,
        file_type_indicator: Option<&str>,
    ) -> Result<RapFileRecord, RapFileError> {
        let is_test_data = file_type_indicator.is_some_and(|ind| !ind.is_empty());
        let allocation = self
            .catalog
            .create_rap_file_by_tap_loader(recipient, is_test_data, tap_available_timestamp)
            .await?;

        let rap_stamp = DateTimeStamp {
            local_time_stamp: Some(allocation.rap_timestamp.clone()),
            utc_time_offset: Some(allocation.rap_utc_offset.clone()),
        };
        let batch = ReturnBatch {
            rap_batch_control_info: RapBatchControlInfo {
                // Sender and recipient switch their places.
                sender: recipient.to_string(),
                recipient: sender.to_string(),
                rap_file_sequence_number: allocation.rap_sequence_number.clone(),
                rap_file_creation_time_stamp: rap_stamp.clone(),
                rap_file_available_time_stamp: rap_stamp,
                rap_specification_version_number: allocation.rap_version,
                rap_release_version_number: allocation.rap_release,
                specification_version_number: Some(allocation.tap_version),
                release_version_number: Some(allocation.tap_release),
                tap_decimal_places: Some(allocation.tap_decimal_places),
                file_type_indicator: file_type_indicator
                    .filter(|ind| !ind.is_empty())
                    .map(str::to_string),
                operator_spec_information: None,
            },
            return_details: vec![detail],
            rap_audit_control_info: RapAuditControlInfo {
                // Fatal errors only: one return detail, no severe value.
                return_details_count: 1,
                total_severe_return_value: octet_string_from_i64(0)?,
            },
        };

        self.catalog
            .load_return_batch(
                &batch,
                allocation.rap_file_id,
                &allocation.rap_filename,
                OUTFILE_CREATED_AND_SENT,
            )
            .await?;

        self.encode_and_upload(&batch, &allocation.rap_filename, &allocation.roaming_hub_name)?;

        Ok(RapFileRecord {
            file_id: allocation.rap_file_id,
            sequence_number: allocation.rap_sequence_number,
            filename: allocation.rap_filename,
        })
    }

    fn encode_and_upload(
        &self,
        batch: &ReturnBatch,
        filename: &str,
        roaming_hub_name: &str,
    ) -> Result<(), RapFileError> {
        let full_path = self.settings.output_dir.join(filename);

        let mut out = File::create(&full_path).map_err(|source| {
            error!(filename, "Unable to open file {} for writing.", full_path.display());
            RapFileError::File {
                path: full_path.clone(),
                source,
            }
        })?;
        self.encoder.encode(batch, &mut out).map_err(|encode_error| {
            error!(
                filename,
                "Error while encoding ASN file. Failed type {}", encode_error.failed_type
            );
            encode_error
        })?;

        info!(
            filename,
            "RAP file successfully created for roaming hub {roaming_hub_name}"
        );

        match self.settings.ftp_for_hub(roaming_hub_name) {
            Some(ftp) => self.upload_file_to_ftp(filename, &full_path, ftp),
            None => {
                info!(
                    filename,
                    "FTP server is not set in config for roaming hub {roaming_hub_name}. No uploading done."
                );
                Ok(())
            }
        }
    }

    fn upload_file_to_ftp(
        &self,
        filename: &str,
        full_path: &Path,
        ftp: &FtpSettings,
    ) -> Result<(), RapFileError> {
        let upload = || -> Result<(), suppaftp::FtpError> {
            let port = ftp.port.unwrap_or(21);
            let mut stream = FtpStream::connect((ftp.host.as_str(), port))?;
            stream.login(&ftp.username, &ftp.password)?;
            if !ftp.directory.is_empty() {
                stream.cwd(&ftp.directory)?;
            }
            let mut local = File::open(full_path)
                .map_err(|e| suppaftp::FtpError::ConnectionError(e))?;
            stream.put_file(filename, &mut local)?;
            stream.quit()?;
            Ok(())
        };

        match upload() {
            Ok(()) => {
                info!(filename, "Successful upload to FTP server {}", ftp.host);
                Ok(())
            }
            Err(ftp_error) => {
                error!(
                    filename,
                    "Error while uploading file {filename} on FTP server {}: {ftp_error}", ftp.host
                );
                Err(RapFileError::Upload {
                    host: ftp.host.clone(),
                    reason: ftp_error.to_string(),
                })
            }
        }
    }
}
