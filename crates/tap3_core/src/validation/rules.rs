//! Per-section mandatory-element rule sets.
//!
//! Rules run in TD.57 document order and every function reports the first
//! hit only: one TAP file is rejected for one reason, the rest is the
//! sender's problem after resubmission.

use std::collections::HashSet;

use crate::asn::tags::TapStructure;
use crate::models::tap::{
    AccountingInfo, AuditControlInfo, BatchControlInfo, NetworkInfo, TransferBatch,
};
use crate::validation::codes::ErrorCode;
use crate::validation::predicates;
use crate::validation::{ErrorScope, Violation};

/// References to the four mandatory groups, proof that presence has been
/// checked.
pub(crate) struct Sections<'a> {
    pub control: &'a BatchControlInfo,
    pub accounting: &'a AccountingInfo,
    pub network: &'a NetworkInfo,
    pub audit: &'a AuditControlInfo,
}

fn missing_section(code: ErrorCode, name: &str) -> Violation {
    Violation {
        scope: ErrorScope::TransferBatch,
        code,
        message: format!("{name} missing in Transfer Batch"),
        level3: None,
    }
}

pub(crate) fn check_section_presence(
    batch: &TransferBatch,
) -> Result<Sections<'_>, Violation> {
    let Some(control) = &batch.batch_control_info else {
        return Err(missing_section(
            ErrorCode::TransferBatchBatchControlInfoMissing,
            "Batch Control Info",
        ));
    };
    let Some(accounting) = &batch.accounting_info else {
        return Err(missing_section(
            ErrorCode::TransferBatchAccountingInfoMissing,
            "Accounting Info",
        ));
    };
    let Some(network) = &batch.network_info else {
        return Err(missing_section(
            ErrorCode::TransferBatchNetworkInfoMissing,
            "Network Info",
        ));
    };
    let Some(audit) = &batch.audit_control_info else {
        return Err(missing_section(
            ErrorCode::TransferBatchAuditControlInfoMissing,
            "Audit Control Info",
        ));
    };
    Ok(Sections {
        control,
        accounting,
        network,
        audit,
    })
}

fn batch_control_violation(code: ErrorCode, message: &str) -> Violation {
    Violation {
        scope: ErrorScope::BatchControl,
        code,
        message: message.to_string(),
        level3: None,
    }
}

pub(crate) fn check_batch_control(control: &BatchControlInfo) -> Option<Violation> {
    if control.file_available_time_stamp.is_none() {
        return Some(batch_control_violation(
            ErrorCode::BatchControlFileAvailableTimestampMissing,
            "fileAvailableTimeStamp is missing in Batch Control Info",
        ));
    }
    if control.specification_version_number.is_none() {
        return Some(batch_control_violation(
            ErrorCode::BatchControlSpecVersionMissing,
            "specificationVersionNumber is missing in Batch Control Info",
        ));
    }
    if control.transfer_cut_off_time_stamp.is_none() {
        return Some(batch_control_violation(
            ErrorCode::BatchControlTransferCutOffMissing,
            "transferCutOffTimeStamp is missing in Batch Control Info",
        ));
    }
    None
}

fn accounting_violation(code: ErrorCode, message: &str) -> Violation {
    Violation {
        scope: ErrorScope::Accounting,
        code,
        message: message.to_string(),
        level3: None,
    }
}

fn currency_conversion_violation(code: ErrorCode, message: &str) -> Violation {
    Violation {
        scope: ErrorScope::Accounting,
        code,
        message: message.to_string(),
        level3: Some(TapStructure::CurrencyConversionList),
    }
}

pub(crate) fn check_accounting(
    batch: &TransferBatch,
    accounting: &AccountingInfo,
) -> Option<Violation> {
    if accounting.local_currency.is_none() {
        return Some(accounting_violation(
            ErrorCode::AccountingLocalCurrencyMissing,
            "localCurrency is missing in Accounting Info",
        ));
    }
    let Some(tap_decimal_places) = accounting.tap_decimal_places else {
        return Some(accounting_violation(
            ErrorCode::AccountingTapDecimalPlacesMissing,
            "tapDecimalPlaces is missing in Accounting Info",
        ));
    };
    if accounting.taxation.is_none() && predicates::batch_contains_taxes(batch) {
        return Some(accounting_violation(
            ErrorCode::AccountingTaxationMissing,
            "taxation group is missing in Accounting Info and batch contains taxes",
        ));
    }
    if accounting.discounting.is_none() && predicates::batch_contains_discounts(batch) {
        return Some(accounting_violation(
            ErrorCode::AccountingDiscountingMissing,
            "discounting group is missing in Accounting Info and batch contains discounts",
        ));
    }
    if accounting.currency_conversion_info.is_none()
        && predicates::batch_contains_positive_charges(batch, tap_decimal_places)
    {
        return Some(accounting_violation(
            ErrorCode::AccountingCurrencyConversionMissing,
            "currencyConversion group is missing in Accounting Info and batch contains charges greater than 0",
        ));
    }

    // The currency conversion table itself: every entry complete, every
    // exchange rate code unique.
    if let Some(conversions) = &accounting.currency_conversion_info {
        let mut exchange_rate_codes = HashSet::new();
        for conversion in conversions {
            let Some(exchange_rate_code) = conversion.exchange_rate_code else {
                return Some(currency_conversion_violation(
                    ErrorCode::CurrencyConversionExchangeRateCodeMissing,
                    "Mandatory item Exchange Rate Code missing within group Currency Conversion",
                ));
            };
            if conversion.number_of_decimal_places.is_none() {
                return Some(currency_conversion_violation(
                    ErrorCode::CurrencyConversionNumOfDecimalPlacesMissing,
                    "Mandatory item Number Of Decimal Places missing within group Currency Conversion",
                ));
            }
            if conversion.exchange_rate.is_none() {
                return Some(currency_conversion_violation(
                    ErrorCode::CurrencyConversionExchangeRateMissing,
                    "Mandatory item Exchange Rate missing within group Currency Conversion",
                ));
            }
            if !exchange_rate_codes.insert(exchange_rate_code) {
                return Some(currency_conversion_violation(
                    ErrorCode::CurrencyConversionExchangeRateCodeDuplication,
                    "More than one occurrence of group with same Exchange Rate Code within group Currency Conversion",
                ));
            }
        }
    }

    None
}

fn network_violation(code: ErrorCode, message: &str) -> Violation {
    Violation {
        scope: ErrorScope::Network,
        code,
        message: message.to_string(),
        level3: None,
    }
}

pub(crate) fn check_network(network: &NetworkInfo) -> Option<Violation> {
    if network.utc_time_offset_info.is_none() {
        return Some(network_violation(
            ErrorCode::NetworkUtcTimeOffsetMissing,
            "utcTimeOffsetInfo is missing in Network Info",
        ));
    }
    if network.rec_entity_info.is_none() {
        return Some(network_violation(
            ErrorCode::NetworkRecEntityMissing,
            "recEntityInfo is missing in Network Info",
        ));
    }
    None
}

fn audit_violation(code: ErrorCode, message: &str) -> Violation {
    Violation {
        scope: ErrorScope::AuditControl,
        code,
        message: message.to_string(),
        level3: None,
    }
}

pub(crate) fn check_audit_control(
    batch: &TransferBatch,
    audit: &AuditControlInfo,
) -> Option<Violation> {
    if audit.total_charge.is_none() {
        return Some(audit_violation(
            ErrorCode::AuditControlTotalChargeMissing,
            "totalCharge is missing in Audit Control Info",
        ));
    }
    if audit.total_tax_value.is_none() {
        return Some(audit_violation(
            ErrorCode::AuditControlTotalTaxValueMissing,
            "totalTaxValue is missing in Audit Control Info",
        ));
    }
    if audit.total_discount_value.is_none() {
        return Some(audit_violation(
            ErrorCode::AuditControlTotalDiscountMissing,
            "totalDiscountValue is missing in Audit Control Info",
        ));
    }
    let Some(call_event_details_count) = audit.call_event_details_count else {
        return Some(audit_violation(
            ErrorCode::AuditControlCallCountMissing,
            "callEventDetailsCount is missing in Audit Control Info",
        ));
    };
    let actual_count = batch
        .call_event_details
        .as_ref()
        .map_or(0, |events| events.len()) as i64;
    if call_event_details_count != actual_count {
        return Some(Violation {
            scope: ErrorScope::AuditControl,
            code: ErrorCode::CallCountMismatch,
            message:
                "Audit Control Info/CallEventDetailsCount does not match the count of Call Event Details"
                    .to_string(),
            level3: Some(TapStructure::CallEventDetailsCount),
        });
    }
    None
}
