//! End-to-end tests for chart rendering and export.

use heatmap::png::encode_image;
use heatmap::scale::DEFAULT_STOPS;
use heatmap::{cities, value_range, ColorScale, HeatmapChart, LayoutConfig};

fn default_chart(cities: &[heatmap::City]) -> HeatmapChart<'_> {
    let (min, max) = value_range(cities);
    let scale = ColorScale::new(min, max, DEFAULT_STOPS.to_vec()).unwrap();
    HeatmapChart::new(cities, scale, LayoutConfig::default())
}

// ============================================================================
// Rendering tests
// ============================================================================

#[test]
fn test_render_produces_expected_canvas_size() {
    let cities = cities();
    let img = default_chart(&cities).render().unwrap();
    assert_eq!(img.dimensions(), (1110, 610));
}

#[test]
fn test_render_fills_background() {
    let cities = cities();
    let img = default_chart(&cities).render().unwrap();
    // Corners sit outside every drawn element.
    assert_eq!(img.get_pixel(0, 0).0, [0xfa, 0xfa, 0xf7, 255]);
    assert_eq!(img.get_pixel(1109, 609).0, [0xfa, 0xfa, 0xf7, 255]);
}

#[test]
fn test_cell_interior_uses_scale_fill() {
    let cities = cities();
    let (min, max) = value_range(&cities);
    let scale = ColorScale::new(min, max, DEFAULT_STOPS.to_vec()).unwrap();
    let chart = HeatmapChart::new(&cities, scale.clone(), LayoutConfig::default());
    let img = chart.render().unwrap();

    // Seattle / January cell starts at the grid origin; a pixel a few
    // steps inside the 1px inset fill avoids both the border stroke and
    // the centered value text.
    let expected = scale.color_for(cities[0].monthly[0]);
    let pixel = img.get_pixel(160 + 5, 160 + 5).0;
    assert_eq!(pixel, [expected.r, expected.g, expected.b, 255]);
}

#[test]
fn test_annual_cell_uses_flat_neutral_fill() {
    let cities = cities();
    let img = default_chart(&cities).render().unwrap();
    // Annual column starts at x=1000; its fill is inset by 4px.
    assert_eq!(img.get_pixel(1000 + 6, 160 + 5).0, [0xf0, 0xed, 0xe6, 255]);
}

#[test]
fn test_render_is_deterministic() {
    let cities = cities();
    let chart = default_chart(&cities);
    let first = chart.render().unwrap();
    let second = chart.render().unwrap();
    assert_eq!(first.as_raw(), second.as_raw());

    let png_a = encode_image(&first).unwrap();
    let png_b = encode_image(&second).unwrap();
    assert_eq!(png_a, png_b);
}

#[test]
fn test_render_handles_single_row() {
    let cities = cities();
    let one = &cities[..1];
    let img = default_chart(one).render().unwrap();
    assert_eq!(img.dimensions(), (1110, 335));
}

// ============================================================================
// Export tests
// ============================================================================

#[test]
fn test_exported_png_decodes_back_to_canvas() {
    let cities = cities();
    let img = default_chart(&cities).render().unwrap();
    let png = encode_image(&img).unwrap();

    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), img.dimensions());
    assert_eq!(decoded.as_raw(), img.as_raw());
}

#[test]
fn test_exported_png_written_to_disk_round_trips() {
    let cities = cities();
    let img = default_chart(&cities).render().unwrap();
    let png = encode_image(&img).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("visualization.png");
    std::fs::write(&path, &png).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes, png);
}
