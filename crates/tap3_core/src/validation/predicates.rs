//! Batch-wide facts consulted by the accounting rules.
//!
//! Each predicate walks every charge information group reachable through the
//! call event list and stops at the first match. Absent intermediate lists
//! count as empty; none of these can fail.

use crate::models::tap::{CallEventDetail, ChargeInformation, TransferBatch};

/// Flattens every ChargeInformation reachable through MO, MT and GPRS call
/// events, in batch order.
pub(crate) fn charge_informations<'a>(
    batch: &'a TransferBatch,
) -> impl Iterator<Item = &'a ChargeInformation> + 'a {
    batch
        .call_event_details
        .iter()
        .flatten()
        .flat_map(|event| -> Box<dyn Iterator<Item = &'a ChargeInformation> + 'a> {
            match event {
                CallEventDetail::MobileOriginatedCall(call) => Box::new(
                    call.basic_service_used_list
                        .iter()
                        .flatten()
                        .flat_map(|service| service.charge_information_list.iter().flatten()),
                ),
                CallEventDetail::MobileTerminatedCall(call) => Box::new(
                    call.basic_service_used_list
                        .iter()
                        .flatten()
                        .flat_map(|service| service.charge_information_list.iter().flatten()),
                ),
                CallEventDetail::GprsCall(call) => Box::new(
                    call.gprs_service_used
                        .iter()
                        .flat_map(|service| service.charge_information_list.iter().flatten()),
                ),
            }
        })
}

pub fn batch_contains_taxes(batch: &TransferBatch) -> bool {
    charge_informations(batch).any(|info| info.tax_information.is_some())
}

pub fn batch_contains_discounts(batch: &TransferBatch) -> bool {
    charge_informations(batch).any(|info| info.discount_information.is_some())
}

/// True iff any charge detail is positive once scaled by tapDecimalPlaces.
/// Only meaningful when tapDecimalPlaces has already been checked present.
pub fn batch_contains_positive_charges(batch: &TransferBatch, tap_decimal_places: i32) -> bool {
    let tap_power = 10f64.powi(tap_decimal_places);
    charge_informations(batch).any(|info| {
        info.charge_detail_list
            .iter()
            .flatten()
            .filter_map(|detail| detail.charge)
            .any(|charge| charge as f64 / tap_power > 0.0)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tap::{
        BasicServiceUsed, ChargeDetail, GprsCall, GprsServiceUsed, MobileOriginatedCall,
        TaxInformation,
    };

    fn mo_event(info: ChargeInformation) -> CallEventDetail {
        CallEventDetail::MobileOriginatedCall(MobileOriginatedCall {
            basic_service_used_list: Some(vec![BasicServiceUsed {
                charge_information_list: Some(vec![info]),
            }]),
        })
    }

    #[test]
    fn empty_batch_contains_nothing() {
        let batch = TransferBatch::default();
        assert!(!batch_contains_taxes(&batch));
        assert!(!batch_contains_discounts(&batch));
        assert!(!batch_contains_positive_charges(&batch, 2));
    }

    #[test]
    fn taxes_found_through_mo_service_used_list() {
        let batch = TransferBatch {
            call_event_details: Some(vec![mo_event(ChargeInformation {
                tax_information: Some(vec![TaxInformation::default()]),
                ..Default::default()
            })]),
            ..Default::default()
        };
        assert!(batch_contains_taxes(&batch));
        assert!(!batch_contains_discounts(&batch));
    }

    #[test]
    fn zero_charge_is_not_positive() {
        let batch = TransferBatch {
            call_event_details: Some(vec![CallEventDetail::GprsCall(GprsCall {
                gprs_service_used: Some(GprsServiceUsed {
                    charge_information_list: Some(vec![ChargeInformation {
                        charge_detail_list: Some(vec![ChargeDetail {
                            charge: Some(0),
                            ..Default::default()
                        }]),
                        ..Default::default()
                    }]),
                }),
            })]),
            ..Default::default()
        };
        assert!(!batch_contains_positive_charges(&batch, 2));
    }

    #[test]
    fn scaled_charge_above_zero_is_positive() {
        let batch = TransferBatch {
            call_event_details: Some(vec![mo_event(ChargeInformation {
                charge_detail_list: Some(vec![ChargeDetail {
                    charge: Some(500),
                    ..Default::default()
                }]),
                ..Default::default()
            })]),
            ..Default::default()
        };
        assert!(batch_contains_positive_charges(&batch, 2));
    }

    #[test]
    fn negative_charge_is_not_positive() {
        let batch = TransferBatch {
            call_event_details: Some(vec![mo_event(ChargeInformation {
                charge_detail_list: Some(vec![ChargeDetail {
                    charge: Some(-500),
                    ..Default::default()
                }]),
                ..Default::default()
            })]),
            ..Default::default()
        };
        assert!(!batch_contains_positive_charges(&batch, 2));
    }
}
