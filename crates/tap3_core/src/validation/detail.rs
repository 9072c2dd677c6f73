//! Return detail construction.
//!
//! Assembles the single ReturnDetail a fatal violation produces: the scoped
//! error variant, a clone of the offending TAP section, the fixed error
//! code and the error context path locating the item. Mirrored sections are
//! deep clones; the detail owns everything it carries so the return batch
//! can outlive the interchange it rejects.

use crate::asn::tags::{self, TapStructure};
use crate::models::rap::{
    AccountingInfoError, AuditControlInfoError, BatchControlError, ErrorDetail, FatalError,
    FatalReturn, NetworkInfoError, ReturnDetail, TransferBatchError,
};
use crate::models::tap::TransferBatch;
use crate::validation::{ErrorScope, Violation};

/// Builds the ReturnDetail for a violation found in `batch`.
pub fn build_return_detail(batch: &TransferBatch, violation: &Violation) -> ReturnDetail {
    let error_detail = vec![ErrorDetail {
        error_code: violation.code.value(),
        error_context: tags::error_context(&context_path(violation)),
    }];

    let error = match violation.scope {
        ErrorScope::TransferBatch => FatalError::TransferBatchError(TransferBatchError {
            error_detail,
        }),
        ErrorScope::BatchControl => FatalError::BatchControlError(Box::new(BatchControlError {
            batch_control_info: batch.batch_control_info.clone().unwrap_or_default(),
            error_detail,
        })),
        ErrorScope::Accounting => FatalError::AccountingInfoError(Box::new(AccountingInfoError {
            accounting_info: batch.accounting_info.clone().unwrap_or_default(),
            error_detail,
        })),
        ErrorScope::Network => FatalError::NetworkInfoError(Box::new(NetworkInfoError {
            network_info: batch.network_info.clone().unwrap_or_default(),
            error_detail,
        })),
        ErrorScope::AuditControl => {
            FatalError::AuditControlInfoError(Box::new(AuditControlInfoError {
                audit_control_info: batch.audit_control_info.clone().unwrap_or_default(),
                error_detail,
            }))
        }
    };

    ReturnDetail::FatalReturn(FatalReturn {
        file_sequence_number: batch
            .batch_control_info
            .as_ref()
            .and_then(|control| control.file_sequence_number.clone())
            .unwrap_or_default(),
        error,
    })
}

// [TransferBatch] for batch scope, [TransferBatch, <section>] for section
// scopes, plus the level-3 item when the rule names one.
fn context_path(violation: &Violation) -> Vec<TapStructure> {
    let mut path = vec![TapStructure::TransferBatch];
    if let Some(section) = violation.scope.section_structure() {
        path.push(section);
    }
    if let Some(level3) = violation.level3 {
        path.push(level3);
    }
    path
}
