use serde::{Deserialize, Serialize};

use crate::models::tap::{
    AccountingInfo, AuditControlInfo, BatchControlInfo, DateTimeStamp, NetworkInfo,
};

// ---------------------------------------------------------------------------
// The Root: ReturnBatch (TD.52)
// The rejection file sent back to the operator whose TAP file failed
// validation. Every mirrored TAP section inside a ReturnDetail is an owned
// clone of the input; the batch never borrows from the interchange it
// rejects.
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnBatch {
    pub rap_batch_control_info: RapBatchControlInfo,
    pub return_details: Vec<ReturnDetail>,
    pub rap_audit_control_info: RapAuditControlInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RapBatchControlInfo {
    // The RAP travels back: its sender is the TAP recipient and vice versa.
    pub sender: String,
    pub recipient: String,
    pub rap_file_sequence_number: String,
    pub rap_file_creation_time_stamp: DateTimeStamp,
    pub rap_file_available_time_stamp: DateTimeStamp,
    pub rap_specification_version_number: i64,
    pub rap_release_version_number: i64,
    // TAP versions echoed from the catalogue for the rejected interchange.
    pub specification_version_number: Option<i64>,
    pub release_version_number: Option<i64>,
    pub tap_decimal_places: Option<i32>,
    pub file_type_indicator: Option<String>,
    pub operator_spec_information: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReturnDetail {
    FatalReturn(FatalReturn),
    // Severe returns (per-event rejection) are not produced yet; the variant
    // exists so the encoded CHOICE keeps its TD.52 shape.
    SevereReturn(SevereReturn),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FatalReturn {
    pub file_sequence_number: String,
    #[serde(flatten)]
    pub error: FatalError,
}

// Exactly one scoped error per fatal return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FatalError {
    TransferBatchError(TransferBatchError),
    BatchControlError(Box<BatchControlError>),
    AccountingInfoError(Box<AccountingInfoError>),
    NetworkInfoError(Box<NetworkInfoError>),
    AuditControlInfoError(Box<AuditControlInfoError>),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransferBatchError {
    pub error_detail: Vec<ErrorDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchControlError {
    pub batch_control_info: BatchControlInfo,
    pub error_detail: Vec<ErrorDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountingInfoError {
    pub accounting_info: AccountingInfo,
    pub error_detail: Vec<ErrorDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkInfoError {
    pub network_info: NetworkInfo,
    pub error_detail: Vec<ErrorDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuditControlInfoError {
    pub audit_control_info: AuditControlInfo,
    pub error_detail: Vec<ErrorDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SevereReturn {
    pub file_sequence_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrorDetail {
    pub error_code: i32,
    pub error_context: Vec<ErrorContext>,
}

// One step of the path locating the offending item, outermost first.
// item_level is 1-based nesting depth; path_item_id is the structural tag
// number of the level's type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrorContext {
    pub path_item_id: u32,
    pub item_level: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RapAuditControlInfo {
    pub return_details_count: i64,
    // Amount in RAP octet encoding; always zero while only fatal returns are
    // produced.
    pub total_severe_return_value: Vec<u8>,
}

impl ReturnDetail {
    pub fn error_details(&self) -> &[ErrorDetail] {
        match self {
            ReturnDetail::FatalReturn(fatal) => match &fatal.error {
                FatalError::TransferBatchError(e) => &e.error_detail,
                FatalError::BatchControlError(e) => &e.error_detail,
                FatalError::AccountingInfoError(e) => &e.error_detail,
                FatalError::NetworkInfoError(e) => &e.error_detail,
                FatalError::AuditControlInfoError(e) => &e.error_detail,
            },
            ReturnDetail::SevereReturn(_) => &[],
        }
    }
}
