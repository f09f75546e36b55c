pub mod carry;

pub use carry::{add_be, increment_be};

/// Generates the consecutive keys that make up a range.
///
/// `fill` writes `out.len() / base.len()` records into `out`, the first
/// being `base` itself and each following one the successor of the last,
/// in ascending byte order. It must not assume anything about `out`'s
/// previous contents.
///
/// The store infers "this range is already present" from how many records
/// fall inside `[base, base + num)`, so every successor must produce
/// exactly the keys that the big-endian `base + num` bound encloses.
pub trait Successor {
    fn fill(&self, base: &[u8], out: &mut [u8]);
}

/// Default successor: the key is an unsigned big-endian integer and the run
/// is `base, base+1, …, base+n-1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BigEndianSuccessor;

impl Successor for BigEndianSuccessor {
    fn fill(&self, base: &[u8], out: &mut [u8]) {
        let width = base.len();
        debug_assert!(width > 0 && out.len() % width == 0);
        if out.is_empty() {
            return;
        }

        out[..width].copy_from_slice(base);
        let mut filled = width;
        while filled < out.len() {
            let (prev, rest) = out.split_at_mut(filled);
            let slot = &mut rest[..width];
            slot.copy_from_slice(&prev[filled - width..]);
            // Callers bound the run with add_be first; a wrap here is a
            // caller bug, and the record simply rolls over.
            increment_be(slot);
            filled += width;
        }
    }
}

impl<F> Successor for F
where
    F: Fn(&[u8], &mut [u8]),
{
    fn fill(&self, base: &[u8], out: &mut [u8]) {
        self(base, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn big_endian_run_crosses_byte_boundary() {
        let mut out = [0u8; 6];
        BigEndianSuccessor.fill(&[0x00, 0xFE], &mut out);
        assert_eq!(out, [0x00, 0xFE, 0x00, 0xFF, 0x01, 0x00]);
    }

    #[test]
    fn empty_region_is_untouched() {
        let mut out: [u8; 0] = [];
        BigEndianSuccessor.fill(&[1, 2, 3, 4], &mut out);
    }

    #[test]
    fn closures_are_successors() {
        let step_by_two = |base: &[u8], out: &mut [u8]| {
            let mut v = base[0];
            for slot in out.iter_mut() {
                *slot = v;
                v = v.wrapping_add(2);
            }
        };
        let mut out = [0u8; 3];
        step_by_two.fill(&[10], &mut out);
        assert_eq!(out, [10, 12, 14]);
    }
}
