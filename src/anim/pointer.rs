//! Pointer-to-element geometry shared by the tilt and glow controllers.

/// Pointer offset from an element's center, normalized so ±1 lands on the
/// element's edge. Inputs are the element's live bounding box; callers
/// re-query it per sample because concurrent scroll animation shifts layout.
pub fn normalized_offset(
    client_x: f64,
    client_y: f64,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> (f64, f64) {
    let half_w = width / 2.0;
    let half_h = height / 2.0;
    if half_w <= 0.0 || half_h <= 0.0 {
        return (0.0, 0.0);
    }
    (
        (client_x - (left + half_w)) / half_w,
        (client_y - (top + half_h)) / half_h,
    )
}

#[cfg(test)]
mod tests {
    use super::normalized_offset;

    #[test]
    fn center_of_card_is_zero() {
        // 200x100 card at (40, 60): center is (140, 110).
        assert_eq!(normalized_offset(140.0, 110.0, 40.0, 60.0, 200.0, 100.0), (0.0, 0.0));
    }

    #[test]
    fn right_edge_center_is_unit_x() {
        assert_eq!(normalized_offset(240.0, 110.0, 40.0, 60.0, 200.0, 100.0), (1.0, 0.0));
    }

    #[test]
    fn corners_map_to_unit_box() {
        let (x, y) = normalized_offset(40.0, 60.0, 40.0, 60.0, 200.0, 100.0);
        assert_eq!((x, y), (-1.0, -1.0));
        let (x, y) = normalized_offset(240.0, 160.0, 40.0, 60.0, 200.0, 100.0);
        assert_eq!((x, y), (1.0, 1.0));
    }

    #[test]
    fn degenerate_box_reports_center() {
        assert_eq!(normalized_offset(50.0, 50.0, 0.0, 0.0, 0.0, 0.0), (0.0, 0.0));
    }
}
