//! Fatal error code catalogue (GSMA TD.52).
//!
//! One variant per mandatory-element rule; the integer values travel in the
//! RAP file as-is and must stay in sync with the operator's RAP loader
//! tables.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum ErrorCode {
    // Transfer batch level: a whole mandatory group is absent.
    TransferBatchBatchControlInfoMissing = 30,
    TransferBatchAccountingInfoMissing = 31,
    TransferBatchNetworkInfoMissing = 32,
    TransferBatchAuditControlInfoMissing = 33,

    // Batch control info.
    BatchControlFileAvailableTimestampMissing = 40,
    BatchControlSpecVersionMissing = 41,
    BatchControlTransferCutOffMissing = 42,

    // Accounting info.
    AccountingLocalCurrencyMissing = 50,
    AccountingTapDecimalPlacesMissing = 51,
    AccountingTaxationMissing = 52,
    AccountingDiscountingMissing = 53,
    AccountingCurrencyConversionMissing = 54,

    // Currency conversion table entries.
    CurrencyConversionExchangeRateCodeMissing = 60,
    CurrencyConversionNumOfDecimalPlacesMissing = 61,
    CurrencyConversionExchangeRateMissing = 62,
    CurrencyConversionExchangeRateCodeDuplication = 63,

    // Network info.
    NetworkUtcTimeOffsetMissing = 70,
    NetworkRecEntityMissing = 71,

    // Audit control info.
    AuditControlTotalChargeMissing = 80,
    AuditControlTotalTaxValueMissing = 81,
    AuditControlTotalDiscountMissing = 82,
    AuditControlCallCountMissing = 83,
    CallCountMismatch = 84,
}

impl ErrorCode {
    pub const fn value(self) -> i32 {
        self as i32
    }
}
