use qrce_core::{encode, CodeEcc, EncodeOptions, Version};

// A finished symbol must carry the three finder patterns, the single dark
// module, and a valid mask/version pair, regardless of payload.
fn assert_well_formed_symbol(qr: &qrce_core::QrCode) {
    let size = qr.size();
    assert!((21..=177).contains(&size));
    assert_eq!((size - 17) % 4, 0);

    // Top-left finder pattern center is always dark.
    assert!(qr.get_module(3, 3));
    // Top-left finder pattern ring is always light.
    assert!(!qr.get_module(1, 1));
}

#[test]
fn encodes_numeric_payload_end_to_end() {
    let qr = encode(b"0123456789012345", CodeEcc::Medium, EncodeOptions::default()).unwrap();
    assert_well_formed_symbol(&qr);
}

#[test]
fn encodes_alphanumeric_payload_end_to_end() {
    let qr = encode(
        b"HTTPS://EXAMPLE.COM/PATH",
        CodeEcc::Quartile,
        EncodeOptions::default(),
    )
    .unwrap();
    assert_well_formed_symbol(&qr);
}

#[test]
fn encodes_byte_payload_end_to_end() {
    let qr = encode(
        b"Hello, world! Mixed-case text with punctuation.",
        CodeEcc::Low,
        EncodeOptions::default(),
    )
    .unwrap();
    assert_well_formed_symbol(&qr);
}

#[test]
fn optimize_flag_yields_a_no_larger_symbol_than_single_mode() {
    let payload = b"Order #12345 shipped 2026-07-31, tracking ABC-998877-XYZ";
    let plain = encode(payload, CodeEcc::Medium, EncodeOptions::default()).unwrap();
    let optimized = encode(
        payload,
        CodeEcc::Medium,
        EncodeOptions {
            optimize: true,
            ..Default::default()
        },
    )
    .unwrap();
    assert_well_formed_symbol(&optimized);
    assert!(optimized.version.value() <= plain.version.value());
}

#[test]
fn large_payload_forces_a_higher_version() {
    let payload = vec![b'A'; 500];
    let qr = encode(&payload, CodeEcc::Low, EncodeOptions::default()).unwrap();
    assert_well_formed_symbol(&qr);
    assert!(qr.version.value() > 5);
}

#[test]
fn input_longer_than_every_version_capacity_is_rejected() {
    // Numeric mode has the largest capacity of any mode (7089 digits at
    // version 40, low EC), so this overflows every version at every level.
    let payload = vec![b'9'; 8000];
    let result = encode(&payload, CodeEcc::High, EncodeOptions::default());
    assert!(result.is_err());
}

#[test]
fn optimized_kanji_run_long_enough_to_bypass_the_single_segment_shortcut() {
    // 10 Shift_JIS Kanji pairs (20 bytes), long enough that
    // `create_mixed_mode_segments` builds a real Kanji segment instead of
    // falling back to a single-mode shortcut.
    let mut payload = Vec::new();
    for _ in 0..10 {
        payload.extend_from_slice(&[0x81, 0x40]);
    }
    let qr = encode(
        &payload,
        CodeEcc::Medium,
        EncodeOptions {
            optimize: true,
            use_kanji_mode: true,
            ..Default::default()
        },
    )
    .unwrap();
    assert_well_formed_symbol(&qr);
}

#[test]
fn requesting_a_version_below_the_recommendation_fails() {
    let payload = vec![b'9'; 200];
    let options = EncodeOptions {
        version: Some(Version::new(1)),
        ..Default::default()
    };
    let result = encode(&payload, CodeEcc::High, options);
    assert!(result.is_err());
}

#[test]
fn version_7_and_above_embeds_version_information() {
    let payload = vec![b'A'; 200];
    let qr = encode(&payload, CodeEcc::Low, EncodeOptions::default()).unwrap();
    assert!(qr.version.value() >= 7);
    assert_well_formed_symbol(&qr);
}
