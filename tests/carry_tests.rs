// Carry / advance primitive tests
// Fixed-width big-endian addition with overflow reporting.

use record_store::successor::{BigEndianSuccessor, Successor, add_be, increment_be};

#[test]
fn add_without_carry() {
    let mut r = [0, 0, 0, 4];
    assert!(!add_be(&mut r, 4));
    assert_eq!(r, [0, 0, 0, 8]);
}

#[test]
fn add_carries_through_every_byte() {
    let mut r = [0x00, 0xFF, 0xFF, 0xFF];
    assert!(!add_be(&mut r, 1));
    assert_eq!(r, [0x01, 0x00, 0x00, 0x00]);
}

#[test]
fn add_zero_is_identity() {
    let mut r = [0xFF; 4];
    assert!(!add_be(&mut r, 0));
    assert_eq!(r, [0xFF; 4]);
}

#[test]
fn add_reports_overflow() {
    let mut r = [255, 255, 255, 253];
    assert!(add_be(&mut r, 4));
}

#[test]
fn delta_wider_than_record_overflows() {
    let mut r = [0u8; 2];
    assert!(add_be(&mut r, 0x1_0000));
    let mut r = [0u8; 2];
    assert!(!add_be(&mut r, 0xFFFF));
    assert_eq!(r, [0xFF, 0xFF]);
}

#[test]
fn matches_u128_arithmetic_on_wide_records() {
    let start: u128 = 0x2001_0DB8_0000_0000_FFFF_FFFF_FFFF_FF00;
    let mut r = start.to_be_bytes();
    assert!(!add_be(&mut r, u64::MAX));
    assert_eq!(u128::from_be_bytes(r), start + u128::from(u64::MAX));
}

#[test]
fn increment_wraps_and_reports() {
    let mut r = [0xFF, 0xFF];
    assert!(increment_be(&mut r));
    assert_eq!(r, [0x00, 0x00]);
}

#[test]
fn big_endian_successor_fills_consecutive_run() {
    let mut out = [0u8; 12];
    BigEndianSuccessor.fill(&[0, 0, 0xFF, 0xFE], &mut out);
    assert_eq!(
        out,
        [0, 0, 0xFF, 0xFE, 0, 0, 0xFF, 0xFF, 0, 1, 0x00, 0x00]
    );
}
