use geometry_bounds::{
    bounds_of_points, par_bounds_of_points, read_bounds_from_reader, BoundsAccumulator, DVec3,
};
use proptest::prelude::*;

fn point() -> impl Strategy<Value = DVec3> {
    (-1.0e6..1.0e6_f64, -1.0e6..1.0e6_f64, -1.0e6..1.0e6_f64)
        .prop_map(|(x, y, z)| DVec3::new(x, y, z))
}

proptest! {
    #[test]
    fn box_contains_every_vertex(points in prop::collection::vec(point(), 1..200)) {
        let bounds = bounds_of_points(&points).unwrap();
        prop_assert!(bounds.is_valid());
        for p in &points {
            prop_assert!(bounds.contains(*p));
        }
    }

    #[test]
    fn chunk_merge_order_does_not_matter(
        points in prop::collection::vec(point(), 1..300),
        chunk in 1usize..40,
    ) {
        let single_pass = bounds_of_points(&points);
        let partials: Vec<BoundsAccumulator> = points
            .chunks(chunk)
            .map(|c| c.iter().copied().collect())
            .collect();

        let forward = partials
            .iter()
            .copied()
            .fold(BoundsAccumulator::new(), BoundsAccumulator::merge);
        let backward = partials
            .iter()
            .rev()
            .copied()
            .fold(BoundsAccumulator::new(), BoundsAccumulator::merge);
        let tree = partials
            .chunks(2)
            .map(|pair| pair.iter().copied().fold(BoundsAccumulator::new(), BoundsAccumulator::merge))
            .fold(BoundsAccumulator::new(), |acc, p| p.merge(acc));

        prop_assert_eq!(forward.finish(), single_pass);
        prop_assert_eq!(backward.finish(), single_pass);
        prop_assert_eq!(tree.finish(), single_pass);
        prop_assert_eq!(par_bounds_of_points(&points), single_pass);
    }

    #[test]
    fn ascii_round_trip_bounds(points in prop::collection::vec(point(), 1..60)) {
        let mut text = String::from("solid prop\n");
        for p in &points {
            text.push_str(&format!("vertex {} {} {}\n", p.x, p.y, p.z));
        }
        text.push_str("endsolid prop\n");
        let bounds = read_bounds_from_reader(text.as_bytes(), "prop.stl").unwrap();
        prop_assert_eq!(Some(bounds), bounds_of_points(&points));
    }
}
