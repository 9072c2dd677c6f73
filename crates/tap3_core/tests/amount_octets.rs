// Checks the RAP amount octet encoding against known TD.52 byte layouts and
// the round-trip/minimality properties the standard implies.

use tap3_core::asn::octets::{i64_from_octets, octet_string_from_i64};

struct AmountCase {
    value: i64,
    expected: &'static [u8],
}

const KNOWN_AMOUNTS: &[AmountCase] = &[
    AmountCase { value: 0, expected: &[0x00] },
    AmountCase { value: 1, expected: &[0x01] },
    AmountCase { value: 0x7F, expected: &[0x7F] },
    // High bit set: one pad octet keeps the value positive.
    AmountCase { value: 0x80, expected: &[0x00, 0x80] },
    AmountCase { value: 0xFF, expected: &[0x00, 0xFF] },
    AmountCase { value: 0x100, expected: &[0x01, 0x00] },
    AmountCase { value: 500, expected: &[0x01, 0xF4] },
    AmountCase { value: 0x8000, expected: &[0x00, 0x80, 0x00] },
    AmountCase {
        value: i64::MAX,
        expected: &[0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
    },
    AmountCase { value: -1, expected: &[0xFF] },
    AmountCase { value: -128, expected: &[0x80] },
    AmountCase { value: -129, expected: &[0xFF, 0x7F] },
    AmountCase { value: -256, expected: &[0xFF, 0x00] },
    AmountCase {
        value: i64::MIN,
        expected: &[0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    },
];

#[test]
fn known_amount_layouts() {
    for case in KNOWN_AMOUNTS {
        let octets = octet_string_from_i64(case.value).expect("amount must encode");
        assert_eq!(
            octets, case.expected,
            "wrong octets for amount {}",
            case.value
        );
    }
}

#[test]
fn round_trip_preserves_value() {
    let samples: Vec<i64> = (0..63)
        .flat_map(|shift: u32| {
            let base = 1i64 << shift;
            [base - 1, base, base + 1, -base, -base - 1]
        })
        .collect();

    for value in samples {
        let octets = octet_string_from_i64(value).expect("amount must encode");
        assert!(octets.len() <= 8, "more than 8 octets for {value}");
        assert_eq!(i64_from_octets(&octets), value, "round trip of {value}");
    }
}

#[test]
fn leading_pad_octet_only_when_sign_would_flip() {
    for value in [0i64, 1, 42, 127, 128, 255, 256, 32767, 32768, 1 << 40, i64::MAX] {
        let octets = octet_string_from_i64(value).expect("amount must encode");
        if octets[0] == 0x00 && octets.len() > 1 {
            // The pad is there for a reason: without it the amount would
            // decode negative.
            assert!(
                octets[1] & 0x80 != 0,
                "unnecessary pad octet for {value}: {octets:02X?}"
            );
        } else {
            assert!(
                octets[0] & 0x80 == 0,
                "positive amount {value} encodes with sign bit set: {octets:02X?}"
            );
        }
    }
}
