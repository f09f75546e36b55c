/// Add `delta` to `record`, read as an unsigned big-endian integer, in place.
///
/// Returns true if the sum does not fit in `record.len()` bytes. The record
/// then holds the sum truncated to its width.
///
/// ```text
/// [0x00, 0xFF] + 1  →  [0x01, 0x00], false
/// [0xFF, 0xFE] + 3  →  [0x00, 0x01], true
/// ```
pub fn add_be(record: &mut [u8], delta: u64) -> bool {
    let mut carry = delta;
    for byte in record.iter_mut().rev() {
        if carry == 0 {
            return false;
        }
        let sum = u64::from(*byte) + (carry & 0xFF);
        *byte = sum as u8;
        carry = (carry >> 8) + (sum >> 8);
    }
    carry != 0
}

/// `add_be(record, 1)`.
pub fn increment_be(record: &mut [u8]) -> bool {
    for byte in record.iter_mut().rev() {
        let (next, wrapped) = byte.overflowing_add(1);
        *byte = next;
        if !wrapped {
            return false;
        }
    }
    true
}
