//! Whole-pipeline properties that hold for every filter.
//!
//! Run with: `cargo test -p tinct-core`

use tinct_core::{FilterError, FilterKind, Pipeline, Pixel, Raster, process};

/// Deterministic 8x6 test image covering dark, mid and bright values with
/// varied alpha.
fn create_test_pattern() -> Raster {
    let (width, height) = (8u32, 6u32);
    let mut pixels = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 37 + y * 11) % 256;
            let g = (x * 5 + y * 53) % 256;
            let b = (x * y * 29 + 7) % 256;
            let a = (x * 31 + y * 17) % 256;
            pixels.push(Pixel::new(r as u8, g as u8, b as u8, a as u8));
        }
    }
    Raster::from_pixels(width, height, pixels).expect("pattern dimensions match")
}

#[test]
fn test_every_filter_preserves_alpha() {
    let source = create_test_pattern();
    for &kind in FilterKind::all() {
        let out = kind.apply(source.clone()).unwrap();
        assert_eq!(out.width(), source.width());
        assert_eq!(out.height(), source.height());
        for (i, (before, after)) in source.pixels().iter().zip(out.pixels()).enumerate() {
            assert_eq!(before.alpha, after.alpha, "{kind} changed alpha at pixel {i}");
        }
    }
}

#[test]
fn test_greyscale_is_idempotent() {
    let once = process(create_test_pattern(), &[FilterKind::Greyscale]).unwrap();
    let twice = process(once.clone(), &[FilterKind::Greyscale]).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_empty_pipeline_returns_source() {
    let source = create_test_pattern();
    let out = process(source.clone(), &[]).unwrap();
    assert_eq!(out, source);
}

#[test]
fn test_darken_then_brighten_differs_from_reverse() {
    let a = process(
        create_test_pattern(),
        &[FilterKind::Darken, FilterKind::DoubleBrightness],
    )
    .unwrap();
    let b = process(
        create_test_pattern(),
        &[FilterKind::DoubleBrightness, FilterKind::Darken],
    )
    .unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_pipeline_matches_manual_fold() {
    let source = create_test_pattern();
    let pipeline = Pipeline::playground();

    let mut expected = source.clone();
    for &kind in pipeline.filters() {
        expected = kind.apply(expected).unwrap();
    }

    assert_eq!(pipeline.process(source).unwrap(), expected);
}

#[test]
fn test_averages_are_recomputed_per_stage() {
    // After darkening, the contrast pivot is the darkened average, so the
    // uniform image stays uniform at the darkened value.
    let source = Raster::filled(3, 3, Pixel::new(100, 50, 25, 255)).unwrap();
    let out = process(source, &[FilterKind::Darken, FilterKind::HighContrast]).unwrap();
    for px in out.pixels() {
        assert_eq!(*px, Pixel::new(50, 0, 0, 255));
    }
}

#[test]
fn test_uniform_image_scenario() {
    let source = Raster::filled(4, 4, Pixel::new(100, 50, 25, 255)).unwrap();

    let contrasted = process(source.clone(), &[FilterKind::HighContrast]).unwrap();
    assert_eq!(contrasted, source);

    let saturated = process(source, &[FilterKind::Saturate]).unwrap();
    for px in saturated.pixels() {
        assert_eq!(*px, Pixel::new(130, 20, 25, 255));
    }
}

#[test]
fn test_zero_pixel_raster_fails_average_filters() {
    for kind in [FilterKind::HighContrast, FilterKind::Saturate] {
        let empty = Raster::from_pixels(0, 0, Vec::new()).unwrap();
        let err = process(empty, &[kind]).unwrap_err();
        assert!(
            matches!(err.root_cause(), FilterError::DivisionUndefined),
            "{kind}: unexpected error {err:?}"
        );
    }
}

#[test]
fn test_zero_pixel_raster_passes_tone_filters() {
    let empty = Raster::from_pixels(0, 5, Vec::new()).unwrap();
    let out = process(
        empty.clone(),
        &[FilterKind::Greyscale, FilterKind::DoubleBrightness, FilterKind::Darken],
    )
    .unwrap();
    assert_eq!(out, empty);
}
