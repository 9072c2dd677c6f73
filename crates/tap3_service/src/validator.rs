//! The validation entry point.
//!
//! Runs the core rule check against a decoded interchange and, when a rule
//! is violated, drives the RAP emission for it. The three-way outcome is
//! the contract with the loader: `TapValid` to proceed, `FatalError` when a
//! rejection is on its way back, `ValidationImpossible` when the input
//! cannot even be rejected.

use tracing::error;

use tap3_core::codec::RapEncoder;
use tap3_core::models::tap::{DataInterchange, TransferBatch};
use tap3_core::validation::detail::build_return_detail;
use tap3_core::validation::{check, CheckOutcome, TapValidationResult, Violation};
use tap3_db::RapCatalog;

use crate::rap_file::RapFile;
use crate::settings::Settings;

pub struct TapValidator<'a> {
    catalog: &'a dyn RapCatalog,
    settings: &'a Settings,
    encoder: &'a (dyn RapEncoder + Send + Sync),
    rap_file_id: Option<i64>,
    rap_sequence_number: Option<String>,
}

impl<'a> TapValidator<'a> {
    pub fn new(
        catalog: &'a dyn RapCatalog,
        settings: &'a Settings,
        encoder: &'a (dyn RapEncoder + Send + Sync),
    ) -> Self {
        Self {
            catalog,
            settings,
            encoder,
            rap_file_id: None,
            rap_sequence_number: None,
        }
    }

    pub async fn validate(&mut self, interchange: &DataInterchange) -> TapValidationResult {
        match check(interchange) {
            CheckOutcome::Valid => TapValidationResult::TapValid,
            CheckOutcome::Unaddressable(reason) => {
                error!("Validation: {reason}. Unable to create RAP file.");
                TapValidationResult::ValidationImpossible
            }
            CheckOutcome::Violation(violation) => match interchange {
                DataInterchange::TransferBatch(batch) => self.reject(batch, &violation).await,
                // Notification rules never produce a violation today; a
                // violation on any other variant cannot be scoped to a
                // transfer batch.
                DataInterchange::Notification(_) => TapValidationResult::ValidationImpossible,
            },
        }
    }

    async fn reject(
        &mut self,
        batch: &TransferBatch,
        violation: &Violation,
    ) -> TapValidationResult {
        error!(
            "Validating {}: {}. Creating RAP file",
            violation.scope, violation.message
        );

        let detail = build_return_detail(batch, violation);

        let control = batch.batch_control_info.as_ref();
        let sender = control
            .and_then(|c| c.sender.clone())
            .unwrap_or_default();
        let recipient = control
            .and_then(|c| c.recipient.clone())
            .unwrap_or_default();
        let tap_available_timestamp = control
            .and_then(|c| c.file_available_time_stamp.as_ref())
            .and_then(|stamp| stamp.local_time_stamp.clone())
            .unwrap_or_default();
        let file_type_indicator = control.and_then(|c| c.file_type_indicator.as_deref());

        let rap_file = RapFile::new(self.catalog, self.settings, self.encoder);
        match rap_file
            .create_rap_file(
                detail,
                &sender,
                &recipient,
                &tap_available_timestamp,
                file_type_indicator,
            )
            .await
        {
            Ok(record) => {
                self.rap_file_id = Some(record.file_id);
                self.rap_sequence_number = Some(record.sequence_number);
                TapValidationResult::FatalError
            }
            Err(rap_error) => {
                error!("RAP file creation failed: {rap_error}");
                TapValidationResult::ValidationImpossible
            }
        }
    }

    /// Catalogue id of the RAP file produced by the last fatal outcome.
    pub fn rap_file_id(&self) -> Option<i64> {
        self.rap_file_id
    }

    /// Sequence number of the RAP file produced by the last fatal outcome.
    pub fn rap_sequence_number(&self) -> Option<&str> {
        self.rap_sequence_number.as_deref()
    }
}
