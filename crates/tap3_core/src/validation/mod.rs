//! TD.57 mandatory-element validation.
//!
//! The pure side of the validator: walking a decoded interchange and naming
//! the first rule violation, if any. Producing and persisting the RAP file
//! for a violation is the service layer's job.

use std::fmt;

use serde::Serialize;

use crate::asn::tags::TapStructure;
use crate::models::tap::{DataInterchange, Notification, TransferBatch};

pub mod codes;
pub mod detail;
pub mod predicates;
pub mod rules;

pub use codes::ErrorCode;

/// Overall outcome of a validation run, least to most severe.
///
/// `FatalError` means a RAP file was produced and registered;
/// `ValidationImpossible` means the input cannot even be rejected (the
/// rejection could not be addressed, or producing it failed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum TapValidationResult {
    TapValid,
    FatalError,
    ValidationImpossible,
}

/// The TAP section a violation is reported against; selects the
/// ReturnDetail variant and the error context path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorScope {
    TransferBatch,
    BatchControl,
    Accounting,
    Network,
    AuditControl,
}

impl ErrorScope {
    /// The level-2 path structure for section scopes; the transfer batch
    /// scope has no second level.
    pub fn section_structure(self) -> Option<TapStructure> {
        match self {
            ErrorScope::TransferBatch => None,
            ErrorScope::BatchControl => Some(TapStructure::BatchControlInfo),
            ErrorScope::Accounting => Some(TapStructure::AccountingInfo),
            ErrorScope::Network => Some(TapStructure::NetworkInfo),
            ErrorScope::AuditControl => Some(TapStructure::AuditControlInfo),
        }
    }
}

impl fmt::Display for ErrorScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorScope::TransferBatch => "Transfer Batch",
            ErrorScope::BatchControl => "Batch Control Info",
            ErrorScope::Accounting => "Accounting Info",
            ErrorScope::Network => "Network Info",
            ErrorScope::AuditControl => "Audit Control Info",
        })
    }
}

/// The first rule violated by an interchange, with everything the return
/// detail factory needs to point at it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub scope: ErrorScope,
    pub code: ErrorCode,
    pub message: String,
    pub level3: Option<TapStructure>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    Valid,
    /// Sender, recipient or file sequence number is missing, so no RAP can
    /// name an addressee. The message is the log line explaining why.
    Unaddressable(String),
    Violation(Violation),
}

/// Runs the full mandatory-element rule set against a decoded interchange
/// and reports the first violation in rule order.
pub fn check(interchange: &DataInterchange) -> CheckOutcome {
    match interchange {
        DataInterchange::TransferBatch(batch) => check_transfer_batch(batch),
        DataInterchange::Notification(notification) => check_notification(notification),
    }
}

fn check_transfer_batch(batch: &TransferBatch) -> CheckOutcome {
    // The minimum addressable triple: without sender, recipient and file
    // sequence number the rejection file itself cannot be addressed.
    if let Some(control) = &batch.batch_control_info {
        if control.sender.is_none()
            || control.recipient.is_none()
            || control.file_sequence_number.is_none()
        {
            return CheckOutcome::Unaddressable(
                "Sender, Recipient or FileSequenceNumber is missing in Batch Control Info"
                    .to_string(),
            );
        }
    }

    // Presence of the mandatory groups, reported at transfer batch scope.
    let sections = match rules::check_section_presence(batch) {
        Ok(sections) => sections,
        Err(violation) => return CheckOutcome::Violation(violation),
    };

    // Section rule sets, in TD.57 order, first hit wins.
    let violation = rules::check_batch_control(sections.control)
        .or_else(|| rules::check_accounting(batch, sections.accounting))
        .or_else(|| rules::check_network(sections.network))
        .or_else(|| rules::check_audit_control(batch, sections.audit));

    match violation {
        Some(violation) => CheckOutcome::Violation(violation),
        None => CheckOutcome::Valid,
    }
}

fn check_notification(notification: &Notification) -> CheckOutcome {
    if notification.sender.is_none()
        || notification.recipient.is_none()
        || notification.file_sequence_number.is_none()
    {
        return CheckOutcome::Unaddressable(
            "Sender, Recipient or FileSequenceNumber is missing in Notification".to_string(),
        );
    }
    CheckOutcome::Valid
}
