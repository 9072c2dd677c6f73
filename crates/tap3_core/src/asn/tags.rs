//! Structural tag descriptors for the TAP types named in RAP error context
//! paths.
//!
//! The codec identifies every TAP structure by its outermost BER tag. The
//! descriptor keeps the tag the way the codec tables carry it: value shifted
//! left by two, the low two bits holding the tag-class marker. RAP error
//! contexts want the bare tag number, so the class bits are stripped off.

use serde::{Deserialize, Serialize};

use crate::models::rap::ErrorContext;

const TAG_CLASS_APPLICATION: u32 = 0b01;

const fn application_tag(value: u32) -> u32 {
    (value << 2) | TAG_CLASS_APPLICATION
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub name: &'static str,
    // First tag as carried by the codec table, class marker included.
    pub first_tag: u32,
}

impl TypeDescriptor {
    // The two rightmost bits are the tag class; the error context carries
    // the plain tag number.
    pub const fn tag_number(&self) -> u32 {
        self.first_tag >> 2
    }
}

/// TAP structures that can appear on an error context path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TapStructure {
    TransferBatch,
    Notification,
    BatchControlInfo,
    AccountingInfo,
    NetworkInfo,
    AuditControlInfo,
    CurrencyConversionList,
    CallEventDetailsCount,
}

impl TapStructure {
    pub fn descriptor(self) -> &'static TypeDescriptor {
        match self {
            TapStructure::TransferBatch => &TRANSFER_BATCH,
            TapStructure::Notification => &NOTIFICATION,
            TapStructure::BatchControlInfo => &BATCH_CONTROL_INFO,
            TapStructure::AccountingInfo => &ACCOUNTING_INFO,
            TapStructure::NetworkInfo => &NETWORK_INFO,
            TapStructure::AuditControlInfo => &AUDIT_CONTROL_INFO,
            TapStructure::CurrencyConversionList => &CURRENCY_CONVERSION_LIST,
            TapStructure::CallEventDetailsCount => &CALL_EVENT_DETAILS_COUNT,
        }
    }

    pub fn path_item_id(self) -> u32 {
        self.descriptor().tag_number()
    }
}

// TD.57 application-class tags.
pub static TRANSFER_BATCH: TypeDescriptor = TypeDescriptor {
    name: "TransferBatch",
    first_tag: application_tag(1),
};
pub static NOTIFICATION: TypeDescriptor = TypeDescriptor {
    name: "Notification",
    first_tag: application_tag(2),
};
pub static BATCH_CONTROL_INFO: TypeDescriptor = TypeDescriptor {
    name: "BatchControlInfo",
    first_tag: application_tag(4),
};
pub static ACCOUNTING_INFO: TypeDescriptor = TypeDescriptor {
    name: "AccountingInfo",
    first_tag: application_tag(5),
};
pub static NETWORK_INFO: TypeDescriptor = TypeDescriptor {
    name: "NetworkInfo",
    first_tag: application_tag(6),
};
pub static AUDIT_CONTROL_INFO: TypeDescriptor = TypeDescriptor {
    name: "AuditControlInfo",
    first_tag: application_tag(15),
};
pub static CURRENCY_CONVERSION_LIST: TypeDescriptor = TypeDescriptor {
    name: "CurrencyConversionList",
    first_tag: application_tag(80),
};
pub static CALL_EVENT_DETAILS_COUNT: TypeDescriptor = TypeDescriptor {
    name: "CallEventDetailsCount",
    first_tag: application_tag(43),
};

/// Builds the ordered error context for a path of structures, outermost
/// first. Levels are numbered 1..=n with no gaps; paths are always rooted at
/// TransferBatch.
pub fn error_context(path: &[TapStructure]) -> Vec<ErrorContext> {
    path.iter()
        .enumerate()
        .map(|(depth, structure)| ErrorContext {
            path_item_id: structure.path_item_id(),
            item_level: depth as i32 + 1,
        })
        .collect()
}
