// File: crates/plot-core/tests/determinism.rs
// Purpose: Repeated generation is byte-identical and leaves nothing behind between calls.

use plot_core::{generate_plot, PlotSpec};

#[test]
fn repeated_invocations_are_byte_identical() {
    let first = generate_plot().expect("first render");
    for _ in 0..3 {
        assert_eq!(generate_plot().expect("repeat render"), first);
    }
}

#[test]
fn png_bytes_match_across_independent_specs() {
    let a = PlotSpec::default().render_png().expect("render a");
    let b = PlotSpec::default().render_png().expect("render b");
    assert_eq!(a, b);
}

#[test]
fn spec_changes_change_the_image() {
    let base = PlotSpec::default().render_png().expect("render base");
    let no_grid = PlotSpec { grid: false, ..PlotSpec::default() }.render_png().expect("render no grid");
    assert_ne!(base, no_grid);
}
