//! Pixel format conversion helpers for presentation adapters.

/// Expands 8-bit grayscale pixels into opaque RGBA, repeating the intensity
/// on all three colour channels.
///
/// # Panics
/// Panics if `dst` is not exactly four times as long as `src`.
pub fn copy_gray_to_rgba(src: &[u8], dst: &mut [u8]) {
    let expected_dst_len = src.len() * 4;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (&intensity, dst_pixel) in src.iter().zip(dst.chunks_exact_mut(4)) {
        dst_pixel[0] = intensity;
        dst_pixel[1] = intensity;
        dst_pixel[2] = intensity;
        dst_pixel[3] = 255;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_gray_to_rgba_known_values() {
        let src = vec![0, 128, 255];
        let mut dst = vec![7; 12];

        copy_gray_to_rgba(&src, &mut dst);

        assert_eq!(dst, vec![0, 0, 0, 255, 128, 128, 128, 255, 255, 255, 255, 255]);
    }

    #[test]
    fn test_copy_gray_to_rgba_empty_buffers() {
        let mut dst: Vec<u8> = vec![];

        copy_gray_to_rgba(&[], &mut dst);

        assert!(dst.is_empty());
    }

    #[test]
    #[should_panic(expected = "does not match expected")]
    fn test_copy_gray_to_rgba_rejects_mismatched_lengths() {
        let mut dst = vec![0; 7];

        copy_gray_to_rgba(&[1, 2], &mut dst);
    }
}
