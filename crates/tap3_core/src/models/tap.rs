use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// The Root: DataInterchange (TD.57)
// A TAP file decodes to exactly one of these two shapes. A TransferBatch
// carries the roaming call events; a Notification is the empty-file variant
// that carries only header identification.
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataInterchange {
    TransferBatch(TransferBatch),
    Notification(Notification),
}

// Every sub-structure is optional on input. The decoder hands the tree over
// exactly as it appeared on the wire; presence of the mandatory groups is
// asserted by the validator, not the model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransferBatch {
    pub batch_control_info: Option<BatchControlInfo>,
    pub accounting_info: Option<AccountingInfo>,
    pub network_info: Option<NetworkInfo>,
    pub audit_control_info: Option<AuditControlInfo>,
    pub call_event_details: Option<Vec<CallEventDetail>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Notification {
    pub sender: Option<String>,
    pub recipient: Option<String>,
    pub file_sequence_number: Option<String>,
    pub rap_file_sequence_number: Option<String>,
    pub file_creation_time_stamp: Option<DateTimeStamp>,
    pub file_available_time_stamp: Option<DateTimeStamp>,
    pub transfer_cut_off_time_stamp: Option<DateTimeStamp>,
    pub specification_version_number: Option<i64>,
    pub release_version_number: Option<i64>,
    pub file_type_indicator: Option<String>,
    pub operator_spec_information: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Batch Control Information (TD.57 chapter 5.1)
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchControlInfo {
    pub sender: Option<String>,
    pub recipient: Option<String>,
    pub file_sequence_number: Option<String>,
    pub file_available_time_stamp: Option<DateTimeStamp>,
    pub file_creation_time_stamp: Option<DateTimeStamp>,
    pub transfer_cut_off_time_stamp: Option<DateTimeStamp>,
    // Empty/absent means production data, anything else means test data.
    pub file_type_indicator: Option<String>,
    pub specification_version_number: Option<i64>,
    pub release_version_number: Option<i64>,
    pub rap_file_sequence_number: Option<String>,
    pub operator_spec_information: Option<Vec<String>>,
}

// Local time plus the UTC offset it was recorded in, both kept in the wire
// format ("yyyyMMddhhmmss" / "+hhmm").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DateTimeStamp {
    pub local_time_stamp: Option<String>,
    pub utc_time_offset: Option<String>,
}

// ---------------------------------------------------------------------------
// Accounting Information
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountingInfo {
    pub local_currency: Option<String>,
    pub tap_currency: Option<String>,
    // Integer d: a stored amount v represents the real value v * 10^-d.
    pub tap_decimal_places: Option<i32>,
    pub taxation: Option<Vec<Taxation>>,
    pub discounting: Option<Vec<Discounting>>,
    pub currency_conversion_info: Option<Vec<CurrencyConversion>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Taxation {
    pub tax_code: Option<i64>,
    pub tax_type: Option<String>,
    pub tax_rate: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Discounting {
    pub discount_code: Option<i64>,
    pub discount_rate: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrencyConversion {
    pub exchange_rate_code: Option<i64>,
    pub number_of_decimal_places: Option<i32>,
    pub exchange_rate: Option<i64>,
}

// ---------------------------------------------------------------------------
// Network Information
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkInfo {
    pub utc_time_offset_info: Option<Vec<UtcTimeOffsetInfo>>,
    pub rec_entity_info: Option<Vec<RecEntityInformation>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UtcTimeOffsetInfo {
    pub utc_time_offset_code: Option<i64>,
    pub utc_time_offset: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecEntityInformation {
    pub rec_entity_code: Option<i64>,
    pub rec_entity_type: Option<i64>,
    pub rec_entity_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Audit Control Information
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuditControlInfo {
    pub total_charge: Option<i64>,
    pub total_charge_refund: Option<i64>,
    pub total_tax_value: Option<i64>,
    pub total_tax_refund: Option<i64>,
    pub total_discount_value: Option<i64>,
    pub total_discount_refund: Option<i64>,
    pub call_event_details_count: Option<i64>,
    pub earliest_call_time_stamp: Option<DateTimeStamp>,
    pub latest_call_time_stamp: Option<DateTimeStamp>,
    pub operator_spec_information: Option<Vec<String>>,
    pub total_advised_charge_value_list: Option<Vec<AdvisedChargeValue>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvisedChargeValue {
    pub advised_charge_currency: Option<String>,
    pub total_advised_charge: Option<i64>,
    pub total_advised_charge_refund: Option<i64>,
    pub total_commission: Option<i64>,
    pub total_commission_refund: Option<i64>,
}

// ---------------------------------------------------------------------------
// Call events
// The variants the validator inspects. MO/MT events reach their charges
// through the basic-service-used list; GPRS events through the single
// gprsServiceUsed group.
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CallEventDetail {
    MobileOriginatedCall(MobileOriginatedCall),
    MobileTerminatedCall(MobileTerminatedCall),
    GprsCall(GprsCall),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MobileOriginatedCall {
    pub basic_service_used_list: Option<Vec<BasicServiceUsed>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MobileTerminatedCall {
    pub basic_service_used_list: Option<Vec<BasicServiceUsed>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GprsCall {
    pub gprs_service_used: Option<GprsServiceUsed>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicServiceUsed {
    pub charge_information_list: Option<Vec<ChargeInformation>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GprsServiceUsed {
    pub charge_information_list: Option<Vec<ChargeInformation>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChargeInformation {
    pub tax_information: Option<Vec<TaxInformation>>,
    pub discount_information: Option<DiscountInformation>,
    pub charge_detail_list: Option<Vec<ChargeDetail>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaxInformation {
    pub tax_code: Option<i64>,
    pub tax_value: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiscountInformation {
    pub discount_code: Option<i64>,
    pub discount: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChargeDetail {
    pub charge_type: Option<String>,
    // Signed amount scaled by AccountingInfo::tap_decimal_places.
    pub charge: Option<i64>,
    pub chargeable_units: Option<i64>,
    pub charged_units: Option<i64>,
}
