use float_eq::assert_float_eq;
use trirast::{intersect, rasterize, rasterize_parallel, shade, RasterConfig, Ray};
use trirast_math::{Triangle, Vector3};
use trirast_scenes::{CYAN, MAGENTA, REFERENCE_SCENE, YELLOW};

#[test]
fn first_vertex_is_inside_with_its_own_color() {
    let t = REFERENCE_SCENE.triangle;
    let color = shade(&t, 80, 80, &RasterConfig::default());
    assert_eq!(Some(YELLOW), color);

    let hit = intersect(&Ray::through_pixel(80, 80), &t);
    assert_float_eq!(hit.distance, 100.0, abs <= 0.001);
}

#[test]
fn colors_approach_vertex_color() {
    let t = REFERENCE_SCENE.triangle;
    let config = RasterConfig::default();
    let mut last = f32::INFINITY;
    // Walk along the A-C edge towards A.
    for k in (0..=8).rev() {
        let c = shade(&t, 80 + 5 * k, 80 + 3 * k, &config).unwrap();
        let err = (c.x - YELLOW.x).abs() + (c.y - YELLOW.y).abs() + (c.z - YELLOW.z).abs();
        assert!(err <= last);
        last = err;
    }
    assert_eq!(0.0, last);
}

#[test]
fn weights_sum_to_one_everywhere() {
    let t = REFERENCE_SCENE.triangle;
    for y in (0..REFERENCE_SCENE.height).step_by(31) {
        for x in (0..REFERENCE_SCENE.width).step_by(29) {
            let hit = intersect(&Ray::through_pixel(x, y), &t);
            assert_float_eq!(hit.barycentric.sum(), 1.0, abs <= 0.00001);
        }
    }
}

#[test]
fn pixel_outside_keeps_fill_color() {
    let mut frame = REFERENCE_SCENE.frame();
    rasterize(&REFERENCE_SCENE.triangle, &mut frame, &RasterConfig::default());
    assert_eq!(REFERENCE_SCENE.background, frame.get_pixel(0, 0));
    assert_eq!(REFERENCE_SCENE.background, frame.get_pixel(1023, 1023));
    assert_eq!(REFERENCE_SCENE.background, frame.get_pixel(79, 80));
    assert_eq!(YELLOW, frame.get_pixel(80, 80));
}

#[test]
fn centroid_is_average_of_vertex_colors() {
    let t = REFERENCE_SCENE.triangle;
    let centroid = t.centroid();
    assert_eq!(240.0, centroid.x);
    assert_eq!(400.0, centroid.y);

    let hit = intersect(&Ray::through_pixel(240, 400), &t);
    assert_float_eq!(hit.barycentric.alpha, 1.0 / 3.0, abs <= 0.00001);
    assert_float_eq!(hit.barycentric.beta, 1.0 / 3.0, abs <= 0.00001);
    assert_float_eq!(hit.barycentric.gamma, 1.0 / 3.0, abs <= 0.00001);

    let c = shade(&t, 240, 400, &RasterConfig::default()).unwrap();
    let average = (YELLOW + CYAN + MAGENTA) / 3.0;
    assert_float_eq!(c.x, average.x, abs <= 0.00001);
    assert_float_eq!(c.y, average.y, abs <= 0.00001);
    assert_float_eq!(c.z, average.z, abs <= 0.00001);
}

#[test]
fn pixels_on_edges_are_inside() {
    let t = REFERENCE_SCENE.triangle;
    let config = RasterConfig::default();

    // (85, 83) lies on A-C, so the weight of B is zero.
    let hit = intersect(&Ray::through_pixel(85, 83), &t);
    assert_eq!(0.0, hit.barycentric.beta);
    assert!(hit.is_hit(&config));

    // (81, 89) lies on A-B, so the weight of C is zero.
    let hit = intersect(&Ray::through_pixel(81, 89), &t);
    assert_eq!(0.0, hit.barycentric.gamma);
    assert!(hit.is_hit(&config));

    // One step off either edge is outside.
    assert!(shade(&t, 86, 82, &config).is_none());
    assert!(shade(&t, 80, 89, &config).is_none());
}

#[test]
fn degenerate_triangles_leave_frame_untouched() {
    let config = RasterConfig::default();
    let point = Vector3::new(300.0, 300.0, 100.0);
    let degenerate = [
        Triangle::default(),
        Triangle::new([point; 3], [YELLOW, CYAN, MAGENTA]),
        // Collinear.
        Triangle::new(
            [
                Vector3::new(0.0, 0.0, 100.0),
                Vector3::new(10.0, 10.0, 100.0),
                Vector3::new(20.0, 20.0, 100.0),
            ],
            [YELLOW, CYAN, MAGENTA],
        ),
    ];
    for t in &degenerate {
        let mut frame = REFERENCE_SCENE.frame();
        let stats = rasterize(t, &mut frame, &config);
        assert_eq!(0, stats.covered);
        assert_eq!(REFERENCE_SCENE.frame(), frame);
    }
}

#[test]
fn reversed_winding_leaves_frame_untouched() {
    let mut t = REFERENCE_SCENE.triangle;
    t.vertices.swap(1, 2);
    t.colors.swap(1, 2);
    let mut frame = REFERENCE_SCENE.frame();
    let stats = rasterize(&t, &mut frame, &RasterConfig::default());
    assert_eq!(0, stats.covered);
    assert_eq!(REFERENCE_SCENE.frame(), frame);
}

#[test]
fn repeated_passes_are_identical() {
    let t = REFERENCE_SCENE.triangle;
    let config = RasterConfig::default();

    let mut frame = REFERENCE_SCENE.frame();
    let first_stats = rasterize(&t, &mut frame, &config);
    let first = frame.clone();

    frame.fill(REFERENCE_SCENE.background);
    let second_stats = rasterize(&t, &mut frame, &config);
    assert_eq!(first_stats, second_stats);
    assert_eq!(first, frame);

    let mut parallel = REFERENCE_SCENE.frame();
    let parallel_stats = rasterize_parallel(&t, &mut parallel, &config);
    assert_eq!(first_stats, parallel_stats);
    assert_eq!(first, parallel);
}

#[test]
fn coverage_matches_triangle_area() {
    // Twice the area is 268800, and Pick's theorem gives 134561 lattice
    // points on or inside the triangle. Pixels on B-C can land a hair
    // outside after rounding.
    let mut frame = REFERENCE_SCENE.frame();
    let stats = rasterize(&REFERENCE_SCENE.triangle, &mut frame, &RasterConfig::default());
    assert_eq!(1024 * 1024, stats.pixels);
    assert!(stats.covered <= 134_561);
    assert!(stats.covered >= 134_561 - 161);

    let covered = frame
        .pixels()
        .iter()
        .filter(|&&c| c != REFERENCE_SCENE.background)
        .count();
    assert_eq!(stats.covered, covered);
}

#[test]
fn interpolated_colors_stay_in_range() {
    let mut frame = REFERENCE_SCENE.frame();
    rasterize(&REFERENCE_SCENE.triangle, &mut frame, &RasterConfig::default());
    for c in frame.pixels() {
        for channel in [c.x, c.y, c.z] {
            assert!((-1e-6..=0.84 + 1e-6).contains(&channel));
        }
    }
}
