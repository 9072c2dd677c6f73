// Rule-set scenarios over hand-built transfer batches: one compliant batch,
// then targeted mutations that must each trip a specific rule, carry the
// right error code and point at the right place in the structure.

use tap3_core::codec::{JsonCodec, TapDecoder};
use tap3_core::models::tap::{
    AccountingInfo, AuditControlInfo, BasicServiceUsed, BatchControlInfo, CallEventDetail,
    ChargeDetail, ChargeInformation, CurrencyConversion, DataInterchange, DateTimeStamp, GprsCall,
    GprsServiceUsed, MobileOriginatedCall, NetworkInfo, Notification, RecEntityInformation,
    TransferBatch, UtcTimeOffsetInfo,
};
use tap3_core::validation::detail::build_return_detail;
use tap3_core::validation::{check, CheckOutcome, ErrorCode};

fn timestamp() -> Option<DateTimeStamp> {
    Some(DateTimeStamp {
        local_time_stamp: Some("20260315120000".to_string()),
        utc_time_offset: Some("+0100".to_string()),
    })
}

fn batch_control_info() -> BatchControlInfo {
    BatchControlInfo {
        sender: Some("AAABB".to_string()),
        recipient: Some("CCCDD".to_string()),
        file_sequence_number: Some("00042".to_string()),
        file_available_time_stamp: timestamp(),
        file_creation_time_stamp: timestamp(),
        transfer_cut_off_time_stamp: timestamp(),
        specification_version_number: Some(3),
        release_version_number: Some(12),
        ..Default::default()
    }
}

fn mo_call(charge: i64) -> CallEventDetail {
    CallEventDetail::MobileOriginatedCall(MobileOriginatedCall {
        basic_service_used_list: Some(vec![BasicServiceUsed {
            charge_information_list: Some(vec![ChargeInformation {
                charge_detail_list: Some(vec![ChargeDetail {
                    charge: Some(charge),
                    ..Default::default()
                }]),
                ..Default::default()
            }]),
        }]),
    })
}

fn gprs_call(charge: i64) -> CallEventDetail {
    CallEventDetail::GprsCall(GprsCall {
        gprs_service_used: Some(GprsServiceUsed {
            charge_information_list: Some(vec![ChargeInformation {
                charge_detail_list: Some(vec![ChargeDetail {
                    charge: Some(charge),
                    ..Default::default()
                }]),
                ..Default::default()
            }]),
        }),
    })
}

// A transfer batch that passes every rule: one GPRS call with a zero
// charge, no taxes, no discounts.
fn compliant_batch() -> TransferBatch {
    TransferBatch {
        batch_control_info: Some(batch_control_info()),
        accounting_info: Some(AccountingInfo {
            local_currency: Some("EUR".to_string()),
            tap_currency: Some("SDR".to_string()),
            tap_decimal_places: Some(2),
            ..Default::default()
        }),
        network_info: Some(NetworkInfo {
            utc_time_offset_info: Some(vec![UtcTimeOffsetInfo {
                utc_time_offset_code: Some(1),
                utc_time_offset: Some("+0100".to_string()),
            }]),
            rec_entity_info: Some(vec![RecEntityInformation {
                rec_entity_code: Some(1),
                rec_entity_type: Some(1),
                rec_entity_id: Some("mscid01".to_string()),
            }]),
        }),
        audit_control_info: Some(AuditControlInfo {
            total_charge: Some(0),
            total_tax_value: Some(0),
            total_discount_value: Some(0),
            call_event_details_count: Some(1),
            ..Default::default()
        }),
        call_event_details: Some(vec![gprs_call(0)]),
    }
}

fn expect_violation(batch: TransferBatch) -> tap3_core::validation::Violation {
    match check(&DataInterchange::TransferBatch(batch)) {
        CheckOutcome::Violation(violation) => violation,
        other => panic!("expected a violation, got {other:?}"),
    }
}

fn context_ids(batch: &TransferBatch, violation: &tap3_core::validation::Violation) -> Vec<u32> {
    let detail = build_return_detail(batch, violation);
    let details = detail.error_details();
    assert_eq!(details.len(), 1, "a fatal return carries one error detail");
    let context = &details[0].error_context;
    for (i, item) in context.iter().enumerate() {
        assert_eq!(item.item_level, i as i32 + 1, "levels must be gapless");
    }
    context.iter().map(|item| item.path_item_id).collect()
}

#[test]
fn compliant_batch_is_valid() {
    let interchange = DataInterchange::TransferBatch(compliant_batch());
    assert_eq!(check(&interchange), CheckOutcome::Valid);
}

#[test]
fn positive_charge_without_currency_conversion() {
    let mut batch = compliant_batch();
    batch.call_event_details = Some(vec![mo_call(500)]);
    let violation = expect_violation(batch.clone());
    assert_eq!(violation.code, ErrorCode::AccountingCurrencyConversionMissing);
    // [TransferBatch, AccountingInfo]
    assert_eq!(context_ids(&batch, &violation), vec![1, 5]);
}

#[test]
fn call_count_mismatch() {
    let mut batch = compliant_batch();
    batch.call_event_details = Some(vec![gprs_call(0), gprs_call(0)]);
    if let Some(audit) = batch.audit_control_info.as_mut() {
        audit.call_event_details_count = Some(3);
    }
    let violation = expect_violation(batch.clone());
    assert_eq!(violation.code, ErrorCode::CallCountMismatch);
    // [TransferBatch, AuditControlInfo, CallEventDetailsCount]
    assert_eq!(context_ids(&batch, &violation), vec![1, 15, 43]);
}

#[test]
fn duplicated_exchange_rate_code() {
    let mut batch = compliant_batch();
    if let Some(accounting) = batch.accounting_info.as_mut() {
        accounting.currency_conversion_info = Some(vec![
            CurrencyConversion {
                exchange_rate_code: Some(1),
                number_of_decimal_places: Some(5),
                exchange_rate: Some(10000),
            },
            CurrencyConversion {
                exchange_rate_code: Some(1),
                number_of_decimal_places: Some(5),
                exchange_rate: Some(20000),
            },
        ]);
    }
    let violation = expect_violation(batch.clone());
    assert_eq!(
        violation.code,
        ErrorCode::CurrencyConversionExchangeRateCodeDuplication
    );
    // [TransferBatch, AccountingInfo, CurrencyConversionList]
    assert_eq!(context_ids(&batch, &violation), vec![1, 5, 80]);
}

#[test]
fn incomplete_currency_conversion_entries() {
    let cases = [
        (
            CurrencyConversion {
                exchange_rate_code: None,
                number_of_decimal_places: Some(5),
                exchange_rate: Some(10000),
            },
            ErrorCode::CurrencyConversionExchangeRateCodeMissing,
        ),
        (
            CurrencyConversion {
                exchange_rate_code: Some(1),
                number_of_decimal_places: None,
                exchange_rate: Some(10000),
            },
            ErrorCode::CurrencyConversionNumOfDecimalPlacesMissing,
        ),
        (
            CurrencyConversion {
                exchange_rate_code: Some(1),
                number_of_decimal_places: Some(5),
                exchange_rate: None,
            },
            ErrorCode::CurrencyConversionExchangeRateMissing,
        ),
    ];

    for (entry, expected_code) in cases {
        let mut batch = compliant_batch();
        if let Some(accounting) = batch.accounting_info.as_mut() {
            accounting.currency_conversion_info = Some(vec![entry]);
        }
        let violation = expect_violation(batch);
        assert_eq!(violation.code, expected_code);
    }
}

#[test]
fn missing_batch_control_info_is_rejected_at_batch_scope() {
    let mut batch = compliant_batch();
    batch.batch_control_info = None;
    let violation = expect_violation(batch.clone());
    assert_eq!(
        violation.code,
        ErrorCode::TransferBatchBatchControlInfoMissing
    );
    // [TransferBatch] only.
    assert_eq!(context_ids(&batch, &violation), vec![1]);
}

#[test]
fn missing_sender_makes_validation_impossible() {
    let mut batch = compliant_batch();
    if let Some(control) = batch.batch_control_info.as_mut() {
        control.sender = None;
    }
    let outcome = check(&DataInterchange::TransferBatch(batch));
    assert!(matches!(outcome, CheckOutcome::Unaddressable(_)));
}

#[test]
fn section_rules_run_in_document_order() {
    // Both a batch control field and an audit field missing: the batch
    // control rule is the one that fires.
    let mut batch = compliant_batch();
    if let Some(control) = batch.batch_control_info.as_mut() {
        control.transfer_cut_off_time_stamp = None;
    }
    if let Some(audit) = batch.audit_control_info.as_mut() {
        audit.total_charge = None;
    }
    let violation = expect_violation(batch);
    assert_eq!(violation.code, ErrorCode::BatchControlTransferCutOffMissing);
}

#[test]
fn taxation_required_only_when_batch_carries_taxes() {
    // No taxes anywhere: absent taxation group is fine.
    let batch = compliant_batch();
    assert!(batch.accounting_info.as_ref().unwrap().taxation.is_none());
    assert_eq!(
        check(&DataInterchange::TransferBatch(batch)),
        CheckOutcome::Valid
    );

    // A taxed charge appears: the group becomes mandatory.
    let mut batch = compliant_batch();
    batch.call_event_details = Some(vec![CallEventDetail::MobileOriginatedCall(
        MobileOriginatedCall {
            basic_service_used_list: Some(vec![BasicServiceUsed {
                charge_information_list: Some(vec![ChargeInformation {
                    tax_information: Some(vec![Default::default()]),
                    ..Default::default()
                }]),
            }]),
        },
    )]);
    let violation = expect_violation(batch);
    assert_eq!(violation.code, ErrorCode::AccountingTaxationMissing);
}

#[test]
fn notification_needs_only_the_addressing_triple() {
    let notification = Notification {
        sender: Some("AAABB".to_string()),
        recipient: Some("CCCDD".to_string()),
        file_sequence_number: Some("00001".to_string()),
        ..Default::default()
    };
    assert_eq!(
        check(&DataInterchange::Notification(notification.clone())),
        CheckOutcome::Valid
    );

    let broken = Notification {
        recipient: None,
        ..notification
    };
    assert!(matches!(
        check(&DataInterchange::Notification(broken)),
        CheckOutcome::Unaddressable(_)
    ));
}

#[test]
fn json_fixture_decodes_to_the_same_tree() {
    let fixture = r#"
    {
      "transferBatch": {
        "batchControlInfo": {
          "sender": "AAABB",
          "recipient": "CCCDD",
          "fileSequenceNumber": "00042"
        },
        "callEventDetails": [
          { "gprsCall": { "gprsServiceUsed": { "chargeInformationList": [] } } }
        ]
      }
    }
    "#;

    let decoded = JsonCodec
        .decode(fixture.as_bytes())
        .expect("fixture must decode");
    let DataInterchange::TransferBatch(batch) = decoded else {
        panic!("expected a transfer batch");
    };
    let control = batch.batch_control_info.expect("control info present");
    assert_eq!(control.sender.as_deref(), Some("AAABB"));
    assert_eq!(control.file_sequence_number.as_deref(), Some("00042"));
    assert_eq!(batch.call_event_details.map(|e| e.len()), Some(1));
}
