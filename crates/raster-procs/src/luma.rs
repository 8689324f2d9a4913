//! Fixed-point luma quantization shared by grayscale, histogram and
//! the corner detector
//!
//! Weights are the BT.601 triple `0.299 / 0.587 / 0.114` scaled by
//! 1000. The scaled terms are summed before a single truncating
//! division, so a gray pixel `(v, v, v)` maps back to exactly `v`;
//! that keeps grayscale idempotent and the histogram in agreement
//! with it.

pub(crate) const LUMA_SCALE: u32 = 1000;

/// Scaled per-channel weight tables, built once per operator call
pub(crate) fn luma_tables() -> [[u32; 256]; 3] {
    let mut tables = [[0_u32; 256]; 3];

    for i in 0..256 {
        tables[0][i] = 299 * i as u32;
        tables[1][i] = 587 * i as u32;
        tables[2][i] = 114 * i as u32;
    }
    tables
}

/// Quantize one packed RGB pixel to its 8-bit luma
#[inline]
pub(crate) fn luma(tables: &[[u32; 256]; 3], px: &[u8]) -> u8 {
    let sum = tables[0][usize::from(px[0])]
        + tables[1][usize::from(px[1])]
        + tables[2][usize::from(px[2])];

    (sum / LUMA_SCALE) as u8
}

#[cfg(test)]
mod tests {
    use crate::luma::{luma, luma_tables};

    #[test]
    fn gray_pixels_are_fixed_points() {
        let tables = luma_tables();
        for v in 0..=255_u8 {
            assert_eq!(luma(&tables, &[v, v, v]), v);
        }
    }

    #[test]
    fn known_weights() {
        let tables = luma_tables();
        // 299 * 255 / 1000 truncates to 76
        assert_eq!(luma(&tables, &[255, 0, 0]), 76);
        assert_eq!(luma(&tables, &[0, 255, 0]), 149);
        assert_eq!(luma(&tables, &[0, 0, 255]), 29);
    }
}
