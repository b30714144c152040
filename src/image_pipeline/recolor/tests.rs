#[cfg(test)]
mod tests {
    use image::Rgb;
    use crate::image_pipeline::recolor::{is_gray, pack_opaque, transform, transform_pixel, unpack, GRAY_THRESHOLD};

    #[test]
    fn test_gray_threshold_is_exclusive() {
        assert!(is_gray(100, 100, 100));
        assert!(is_gray(100, 129, 110));
        assert!(!is_gray(100, 130, 110));
        assert!(!is_gray(0, 0, GRAY_THRESHOLD as u8));
        assert!(is_gray(0, 0, GRAY_THRESHOLD as u8 - 1));
    }

    #[test]
    fn test_is_gray_symmetric() {
        let samples = [
            (0u8, 0u8, 0u8),
            (10, 35, 20),
            (10, 40, 20),
            (255, 226, 240),
            (255, 225, 240),
            (200, 50, 60),
        ];
        for (r, g, b) in samples {
            let expected = is_gray(r, g, b);
            for permuted in [(r, b, g), (g, r, b), (g, b, r), (b, r, g), (b, g, r)] {
                assert_eq!(
                    is_gray(permuted.0, permuted.1, permuted.2),
                    expected,
                    "{:?} vs {:?}",
                    (r, g, b),
                    permuted
                );
            }
        }
    }

    #[test]
    fn test_gray_pixels_shift_warm() {
        // exhaustive over a coarse lattice of gray triples
        for base in (0u16..=255).step_by(5) {
            for dg in 0..3u16 {
                for db in 0..3u16 {
                    let r = base as u8;
                    let g = (base + dg * 9).min(255) as u8;
                    let b = (base + db * 9).min(255) as u8;
                    if !is_gray(r, g, b) {
                        continue;
                    }
                    let expected = (
                        (r as u16 + 10).min(255) as u8,
                        (g as i16 - 80).max(0) as u8,
                        (b as i16 - 20).max(0) as u8,
                    );
                    assert_eq!(transform(r, g, b), expected);
                }
            }
        }
    }

    #[test]
    fn test_colored_pixels_unchanged() {
        for (r, g, b) in [(200, 50, 60), (0, 30, 0), (255, 0, 255), (12, 200, 42)] {
            assert!(!is_gray(r, g, b));
            assert_eq!(transform(r, g, b), (r, g, b));
        }
    }

    #[test]
    fn test_channel_extremes_clamp() {
        assert_eq!(transform(255, 255, 255), (255, 175, 235));
        assert_eq!(transform(250, 250, 250), (255, 170, 230));
        assert_eq!(transform(0, 0, 0), (10, 0, 0));
        assert_eq!(transform(5, 15, 19), (15, 0, 0));
        assert_eq!(transform(246, 240, 255), (255, 160, 235));
    }

    #[test]
    fn test_transform_is_not_idempotent() {
        let once = transform(10, 10, 10);
        assert_eq!(once, (20, 0, 0));
        // still gray after one pass, so a second pass shifts it again
        let twice = transform(once.0, once.1, once.2);
        assert_eq!(twice, (30, 0, 0));
        assert_ne!(once, twice);

        // a pixel that leaves the gray band after one pass is stable from then on
        let once = transform(200, 200, 200);
        assert_eq!(once, (210, 120, 180));
        assert_eq!(transform(once.0, once.1, once.2), once);
    }

    #[test]
    fn test_transform_pixel_matches_channels() {
        assert_eq!(transform_pixel(Rgb([100, 100, 101])), Rgb([110, 20, 81]));
        assert_eq!(transform_pixel(Rgb([200, 50, 60])), Rgb([200, 50, 60]));
    }

    #[test]
    fn test_packed_pixels_are_opaque() {
        let packed = pack_opaque(0x12, 0x34, 0x56);
        assert_eq!(packed, 0xFF12_3456);
        assert_eq!(unpack(packed), (0x12, 0x34, 0x56));
        assert_eq!(unpack(0x00AB_CDEF), (0xAB, 0xCD, 0xEF));
        assert_eq!(pack_opaque(0, 0, 0) >> 24, 0xFF);
    }
}
