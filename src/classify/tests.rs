use super::*;
use crate::image::RgbImageU8;

fn solid(w: usize, h: usize, color: [u8; 3]) -> RgbImageU8 {
    let mut img = RgbImageU8::new(w, h);
    for y in 0..h {
        for x in 0..w {
            img.set(x, y, color);
        }
    }
    img
}

#[test]
fn percentile_interpolates_linearly() {
    let values = [0.0, 10.0];
    assert_eq!(percentile(&values, 0.0), 0.0);
    assert_eq!(percentile(&values, 50.0), 5.0);
    assert_eq!(percentile(&values, 100.0), 10.0);

    let values = [1.0, 2.0, 3.0, 4.0];
    // rank 1.5 between 2.0 and 3.0
    assert_eq!(percentile(&values, 50.0), 2.5);
}

#[test]
fn percentile_of_empty_slice_is_zero() {
    assert_eq!(percentile(&[], 85.0), 0.0);
}

#[test]
fn box_filter_preserves_flat_plane() {
    let mut plane = crate::image::ImageF32::new(9, 7);
    plane.data.fill(42.0);
    let smoothed = box_filter_5x5(&plane);
    assert_eq!(smoothed.w, 9);
    assert_eq!(smoothed.h, 7);
    for &v in &smoothed.data {
        assert!((v - 42.0).abs() < 1e-4, "flat plane perturbed: {v}");
    }
}

#[test]
fn luminance_is_unweighted_channel_mean() {
    let img = solid(2, 2, [30, 60, 90]);
    let lum = luminance_plane(&img);
    assert_eq!(lum.get(1, 1), 60.0);
}

#[test]
fn road_mask_uses_strict_comparison() {
    // Pixels exactly at the threshold are not road.
    let img = solid(3, 3, [80, 80, 80]);
    let mask = road_mask(&img, 80);
    assert_eq!(mask.count_true(), 0);

    let mask = road_mask(&img, 81);
    assert_eq!(mask.count_true(), 9);
}

#[test]
fn text_mask_rejects_out_of_range_percentile() {
    let img = solid(4, 4, [128, 128, 128]);
    assert!(matches!(
        text_candidate_mask(&img, 120.0),
        Err(ClassifyError::PercentileOutOfRange(_))
    ));
    assert!(matches!(
        text_candidate_mask(&img, -1.0),
        Err(ClassifyError::PercentileOutOfRange(_))
    ));
}
