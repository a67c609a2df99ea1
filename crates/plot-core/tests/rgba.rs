// File: crates/plot-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape, a few pixels of the sine plot,
// and that the PNG path carries those pixels unchanged.

use plot_core::geometry::RectI32;
use plot_core::scale::LinearScale;
use plot_core::{PlotSpec, RenderOptions};

fn render(spec: &PlotSpec) -> (Vec<u8>, u32, u32, usize) {
    let opts = RenderOptions { draw_labels: false, ..spec.render_options() };
    spec.build_chart().render_to_rgba8(&opts).expect("rgba render")
}

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_rgba8_buffer() {
    let (px, w, h, stride) = render(&PlotSpec::default());
    assert_eq!((w, h), (1000, 600));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // White, opaque figure background in the top-left corner
    assert_eq!(pixel(&px, stride, 0, 0), [255, 255, 255, 255]);
}

#[test]
fn sine_line_is_drawn_in_theme_blue() {
    let (px, _, _, stride) = render(&PlotSpec::default());
    // Blue blended over white keeps blue well above red; grey and white do not.
    let bluish = px
        .chunks_exact(4)
        .filter(|p| p[2] as i32 - p[0] as i32 > 40)
        .count();
    assert!(bluish > 500, "expected a visible blue curve, found {bluish} pixels");
    // Nothing blue in the figure margin above the plot area
    for x in 0..1000 {
        let p = pixel(&px, stride, x, 10);
        assert!(p[2] as i32 - p[0] as i32 <= 40, "blue pixel in margin at x={x}");
    }
}

#[test]
fn grid_lines_follow_the_grid_flag() {
    let spec = PlotSpec::default();
    let chart = spec.build_chart();
    let opts = spec.render_options();
    let area = RectI32::plot_area(opts.width, opts.height, &opts.insets);
    let sx = LinearScale::new(chart.x_axis.min, chart.x_axis.max, area.left as f32, area.right as f32);
    let gx = sx.to_px(2.0).floor() as usize;
    // Row 400 sits between horizontal grid lines and away from the curve near x = 2.
    let darkest = |px: &[u8], stride: usize| {
        (gx - 1..=gx + 1)
            .map(|x| pixel(px, stride, x, 400))
            .min_by_key(|p| p[0])
            .expect("non-empty column range")
    };

    let (px, _, _, stride) = render(&spec);
    let p = darkest(&px, stride);
    assert!(p[0] < 250, "grid line expected near x={gx}, got {p:?}");
    assert_eq!(p[0], p[1]);
    assert_eq!(p[1], p[2]);

    let (px, _, _, stride) = render(&PlotSpec { grid: false, ..PlotSpec::default() });
    assert_eq!(darkest(&px, stride), [255, 255, 255, 255]);
}

#[test]
fn png_bytes_decode_to_the_rendered_pixels() {
    let spec = PlotSpec::default();
    let opts = RenderOptions { draw_labels: false, ..spec.render_options() };
    let (px, w, h, _) = spec.build_chart().render_to_rgba8(&opts).expect("rgba render");
    let png = spec.render_png_with(&opts).expect("png render");

    let decoded = image::load_from_memory(&png).expect("decode png").to_rgba8();
    assert_eq!((decoded.width(), decoded.height()), (w, h));
    assert_eq!(decoded.as_raw(), &px, "PNG encoding must be lossless");
}
