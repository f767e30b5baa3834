use ui_hierarchy::tree::{
    bounds::{format_bounds, parse_bounds, try_parse_bounds},
    tree_model::{Bounds, ScreenRect},
};

// =========================================================================
// Parsing
// =========================================================================

#[test]
fn parses_canonical_form() {
    assert_eq!(parse_bounds("[100,200][300,260]"), Bounds::new(100, 200, 300, 260));
}

#[test]
fn tolerates_whitespace_and_negative_coordinates() {
    assert_eq!(
        try_parse_bounds(" [ -5, 10][20 , 30 ] "),
        Ok(Bounds::new(-5, 10, 20, 30))
    );
}

#[test]
fn malformed_input_becomes_zero_rectangle() {
    for bad in [
        "",
        "0,0,10,10",
        "[0,0][10]",
        "[a,0][10,10]",
        "[0,0][10,10][2,2]",
        "[0,0]10,10]",
        "[0,0][10,10",
        "[1.5,0][10,10]",
    ] {
        assert!(try_parse_bounds(bad).is_err(), "expected strict error for {:?}", bad);
        assert_eq!(parse_bounds(bad), Bounds::ZERO, "lenient parse of {:?}", bad);
    }
}

#[test]
fn parse_error_names_the_input() {
    let err = try_parse_bounds("[x,0][1,1]").unwrap_err();
    assert_eq!(err.input, "[x,0][1,1]");
    assert!(err.to_string().contains("non-numeric"));
}

#[test]
fn format_matches_dump_encoding() {
    assert_eq!(format_bounds(&Bounds::new(0, 63, 1080, 1920)), "[0,63][1080,1920]");
}

// =========================================================================
// Geometry
// =========================================================================

#[test]
fn degenerate_rectangles() {
    assert!(Bounds::ZERO.is_degenerate());
    assert!(Bounds::new(10, 10, 10, 50).is_degenerate(), "zero width");
    assert!(Bounds::new(10, 50, 20, 40).is_degenerate(), "negative height");
    assert!(!Bounds::new(0, 0, 1, 1).is_degenerate());
}

#[test]
fn center_and_size() {
    let b = Bounds::new(100, 200, 300, 260);
    assert_eq!(b.center(), (200, 230));
    assert_eq!(b.width(), 200);
    assert_eq!(b.height(), 60);

    // Floors toward negative infinity like the overlay renderer does
    assert_eq!(Bounds::new(-3, -3, 0, 0).center(), (-2, -2));
}

#[test]
fn outside_screen_edges() {
    let screen = ScreenRect::new(1080, 1920);
    assert!(Bounds::new(1080, 0, 1200, 10).is_outside(screen), "starts at right edge");
    assert!(Bounds::new(0, 1920, 10, 2000).is_outside(screen), "starts at bottom edge");
    assert!(Bounds::new(-100, 0, 0, 10).is_outside(screen), "ends at left edge");
    assert!(Bounds::new(0, -100, 10, 0).is_outside(screen), "ends at top edge");
    assert!(!Bounds::new(-100, -100, 1, 1).is_outside(screen), "partial overlap counts");
    assert!(!Bounds::new(1079, 1919, 2000, 3000).is_outside(screen));
}

#[test]
fn bounds_serialize_as_array() {
    let json = serde_json::to_string(&Bounds::new(1, 2, 3, 4)).unwrap();
    assert_eq!(json, "[1,2,3,4]");
    let back: Bounds = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Bounds::new(1, 2, 3, 4));
}
