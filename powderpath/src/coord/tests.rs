//! Tests for bounding boxes and lattice iteration

use super::*;

#[test]
fn test_bbox_valid() {
    let bbox = BoundingBox::new(6.568, 45.296, 6.585, 45.305).unwrap();
    assert_eq!(bbox.min_lon, 6.568);
    assert_eq!(bbox.max_lat, 45.305);
    assert!((bbox.width() - 0.017).abs() < 1e-9);
    assert!((bbox.height() - 0.009).abs() < 1e-9);
}

#[test]
fn test_bbox_degenerate_is_valid() {
    // A single point is a valid (zero-area) box
    let bbox = BoundingBox::new(1.0, 2.0, 1.0, 2.0).unwrap();
    assert_eq!(bbox.width(), 0.0);
    assert_eq!(bbox.height(), 0.0);
}

#[test]
fn test_bbox_inverted_longitude() {
    let result = BoundingBox::new(6.585, 45.296, 6.568, 45.305);
    assert!(matches!(
        result,
        Err(CoordError::InvertedAxis {
            axis: "longitude",
            ..
        })
    ));
}

#[test]
fn test_bbox_inverted_latitude() {
    let result = BoundingBox::new(6.568, 45.305, 6.585, 45.296);
    assert!(matches!(
        result,
        Err(CoordError::InvertedAxis {
            axis: "latitude",
            ..
        })
    ));
}

#[test]
fn test_bbox_out_of_range() {
    assert!(matches!(
        BoundingBox::new(-181.0, 0.0, 0.0, 1.0),
        Err(CoordError::InvalidLongitude(_))
    ));
    assert!(matches!(
        BoundingBox::new(0.0, -91.0, 1.0, 1.0),
        Err(CoordError::InvalidLatitude(_))
    ));
    assert!(matches!(
        BoundingBox::new(0.0, 0.0, f64::NAN, 1.0),
        Err(CoordError::InvalidLongitude(_))
    ));
}

#[test]
fn test_bbox_parse() {
    let bbox: BoundingBox = "6.568, 45.296, 6.585, 45.305".parse().unwrap();
    assert_eq!(bbox, BoundingBox::new(6.568, 45.296, 6.585, 45.305).unwrap());
}

#[test]
fn test_bbox_parse_display_round_trip() {
    let bbox = BoundingBox::new(6.568, 45.296, 6.585, 45.305).unwrap();
    let text = bbox.to_string();
    assert_eq!(text, "6.568,45.296,6.585,45.305");
    assert_eq!(text.parse::<BoundingBox>().unwrap(), bbox);
}

#[test]
fn test_bbox_parse_rejects_garbage() {
    assert!(matches!(
        "1,2,3".parse::<BoundingBox>(),
        Err(CoordError::InvalidBoundingBox(_))
    ));
    assert!(matches!(
        "a,b,c,d".parse::<BoundingBox>(),
        Err(CoordError::InvalidBoundingBox(_))
    ));
    assert!(matches!(
        "3,2,1,4".parse::<BoundingBox>(),
        Err(CoordError::InvertedAxis { .. })
    ));
}

#[test]
fn test_bbox_contains_edges() {
    let bbox = BoundingBox::new(0.0, 0.0, 1.0, 1.0).unwrap();
    assert!(bbox.contains(&SamplePoint::new(0.0, 0.0)));
    assert!(bbox.contains(&SamplePoint::new(1.0, 1.0)));
    assert!(!bbox.contains(&SamplePoint::new(1.0001, 0.5)));
}

#[test]
fn test_bbox_center() {
    let bbox = BoundingBox::new(0.0, 10.0, 2.0, 20.0).unwrap();
    assert_eq!(bbox.center(), SamplePoint::new(1.0, 15.0));
}

#[test]
fn test_sample_point_display() {
    assert_eq!(SamplePoint::new(6.568, 45.296).to_string(), "(6.568, 45.296)");
}

#[test]
fn test_lattice_three_by_three() {
    let bbox = BoundingBox::new(0.0, 0.0, 0.001, 0.001).unwrap();
    let points: Vec<SamplePoint> = Lattice::new(bbox, 0.0005).unwrap().collect();

    assert_eq!(points.len(), 9, "Boundary-inclusive on both axes");
    assert_eq!(points[0], SamplePoint::new(0.0, 0.0));
    assert_eq!(points[8], SamplePoint::new(0.001, 0.001));
}

#[test]
fn test_lattice_row_major_order() {
    let bbox = BoundingBox::new(0.0, 0.0, 1.0, 1.0).unwrap();
    let points: Vec<SamplePoint> = Lattice::new(bbox, 0.5).unwrap().collect();

    // Latitude is the outer loop, longitude the inner loop
    let expected = [
        (0.0, 0.0),
        (0.5, 0.0),
        (1.0, 0.0),
        (0.0, 0.5),
        (0.5, 0.5),
        (1.0, 0.5),
        (0.0, 1.0),
        (0.5, 1.0),
        (1.0, 1.0),
    ];
    assert_eq!(points.len(), expected.len());
    for (point, (lon, lat)) in points.iter().zip(expected) {
        assert_eq!(*point, SamplePoint::new(lon, lat));
    }
}

#[test]
fn test_lattice_accumulated_step_drops_upper_edge() {
    // 0.1 + 0.1 + 0.1 = 0.30000000000000004 > 0.3, so the edge is omitted
    let bbox = BoundingBox::new(0.0, 0.0, 0.3, 0.0).unwrap();
    let lattice = Lattice::new(bbox, 0.1).unwrap();
    assert_eq!(lattice.count(), 3);
}

#[test]
fn test_lattice_accumulated_step_keeps_upper_edge() {
    // Ten additions of 0.1 give 0.9999999999999999 <= 1.0, then 1.0999999999999999
    let bbox = BoundingBox::new(0.0, 0.0, 1.0, 0.0).unwrap();
    let lattice = Lattice::new(bbox, 0.1).unwrap();
    assert_eq!(lattice.count(), 11);
}

#[test]
fn test_lattice_val_thorens_size() {
    let bbox = BoundingBox::new(6.568, 45.296, 6.585, 45.305).unwrap();
    let lattice = Lattice::new(bbox, 0.0005).unwrap();

    // 35 longitudes per row; accumulation drops the 45.305 row, leaving 18 rows
    assert_eq!(lattice.len(), 35 * 18);
}

#[test]
fn test_lattice_single_point_box() {
    let bbox = BoundingBox::new(6.5, 45.3, 6.5, 45.3).unwrap();
    let points: Vec<SamplePoint> = Lattice::new(bbox, 0.0005).unwrap().collect();
    assert_eq!(points, vec![SamplePoint::new(6.5, 45.3)]);
}

#[test]
fn test_lattice_step_larger_than_box() {
    let bbox = BoundingBox::new(0.0, 0.0, 0.001, 0.001).unwrap();
    let lattice = Lattice::new(bbox, 1.0).unwrap();
    assert_eq!(lattice.len(), 1);
}

#[test]
fn test_lattice_len_ignores_progress() {
    let bbox = BoundingBox::new(0.0, 0.0, 0.001, 0.001).unwrap();
    let mut lattice = Lattice::new(bbox, 0.0005).unwrap();
    lattice.next();
    lattice.next();

    assert_eq!(lattice.len(), 9);
    assert_eq!(lattice.count(), 7);
}

#[test]
fn test_lattice_is_fused() {
    let bbox = BoundingBox::new(0.0, 0.0, 0.0, 0.0).unwrap();
    let mut lattice = Lattice::new(bbox, 1.0).unwrap();
    assert!(lattice.next().is_some());
    assert!(lattice.next().is_none());
    assert!(lattice.next().is_none());
}

#[test]
fn test_lattice_invalid_step() {
    let bbox = BoundingBox::new(0.0, 0.0, 1.0, 1.0).unwrap();
    assert!(matches!(
        Lattice::new(bbox, 0.0),
        Err(CoordError::InvalidStep(_))
    ));
    assert!(matches!(
        Lattice::new(bbox, -0.5),
        Err(CoordError::InvalidStep(_))
    ));
    assert!(matches!(
        Lattice::new(bbox, f64::INFINITY),
        Err(CoordError::InvalidStep(_))
    ));
    // Too small to ever advance at this magnitude
    let far = BoundingBox::new(179.0, 89.0, 180.0, 90.0).unwrap();
    assert!(matches!(
        Lattice::new(far, 1e-20),
        Err(CoordError::InvalidStep(_))
    ));
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: every lattice point starts from the minimum corner and
        /// never exceeds the box maximum.
        #[test]
        fn prop_points_within_box(
            min_lon in -10.0f64..10.0,
            min_lat in -10.0f64..10.0,
            width in 0.0f64..0.05,
            height in 0.0f64..0.05,
            step in 0.001f64..0.01,
        ) {
            let bbox = BoundingBox::new(min_lon, min_lat, min_lon + width, min_lat + height).unwrap();
            let lattice = Lattice::new(bbox, step).unwrap();
            let mut first = true;
            for point in lattice {
                if first {
                    prop_assert_eq!(point, SamplePoint::new(min_lon, min_lat));
                    first = false;
                }
                prop_assert!(bbox.contains(&point));
            }
            prop_assert!(!first, "lattice always visits the minimum corner");
        }

        /// Property: the point count is the product of the per-axis counts of
        /// the accumulated inclusive walk.
        #[test]
        fn prop_count_is_product_of_axes(
            min_lon in -10.0f64..10.0,
            min_lat in -10.0f64..10.0,
            width in 0.0f64..0.05,
            height in 0.0f64..0.05,
            step in 0.001f64..0.01,
        ) {
            let axis = |min: f64, max: f64| {
                let mut n = 0usize;
                let mut v = min;
                while v <= max {
                    n += 1;
                    v += step;
                }
                n
            };
            let bbox = BoundingBox::new(min_lon, min_lat, min_lon + width, min_lat + height).unwrap();
            let lattice = Lattice::new(bbox, step).unwrap();
            prop_assert_eq!(
                lattice.len(),
                axis(bbox.min_lon, bbox.max_lon) * axis(bbox.min_lat, bbox.max_lat)
            );
        }
    }
}
