#[cfg(test)]
mod integration_tests {
    use crate::prelude::*;

    #[test]
    fn test_public_api_end_to_end() {
        let bounds = Rect::new(0.0, 0.0, 5.0, 5.0);
        let mut tree = Quadtree::create(bounds, 2, 2).unwrap();

        // Six payloads at one position saturate the depth cap without error
        for i in 0..6 {
            tree.insert(format!("item-{i}"), Point::new(1.0, 1.0)).unwrap();
        }
        assert_eq!(tree.size(), 6);

        let mut names: Vec<&str> = tree.query(&bounds).into_iter().map(String::as_str).collect();
        names.sort_unstable();
        assert_eq!(names, ["item-0", "item-1", "item-2", "item-3", "item-4", "item-5"]);

        // Rejected insert leaves the tree alone
        let err = tree.insert("outside".to_string(), Point::new(5.0, 5.0)).unwrap_err();
        assert!(matches!(err, QuadtreeError::OutOfBounds { .. }), "Expected OutOfBounds, got {err:?}");
        assert_eq!(tree.size(), 6);
        assert_eq!(err.to_string(), "Position (5, 5) is outside the bounds of the tree");

        // Visitor sees exact positions and can stop early
        let mut seen = Vec::new();
        tree.query_visit(&bounds, |name, pos| {
            seen.push((name.clone(), pos));
            seen.len() < 3
        });
        assert_eq!(seen.len(), 3);
        assert!(seen.iter().all(|(_, pos)| *pos == Point::new(1.0, 1.0)), "Positions round trip");
    }

    #[test]
    fn test_configuration_errors_display() {
        let err = Quadtree::<()>::create(Rect::new(0.0, 0.0, 1.0, 1.0), 0, 1).unwrap_err();
        assert_eq!(err.to_string(), "Invalid configuration: max_depth must be at least 1");
        let err = Quadtree::<()>::create(Rect::new(0.0, 0.0, 1.0, 1.0), 1, 0).unwrap_err();
        assert_eq!(err.to_string(), "Invalid configuration: max_entries_per_leaf must be at least 1");
    }

    #[test]
    fn test_clone_is_independent() {
        let mut tree = Quadtree::create(Rect::new(0.0, 0.0, 4.0, 4.0), 3, 1).unwrap();
        tree.insert(1_u32, Point::new(1.0, 1.0)).unwrap();
        let snapshot = tree.clone();
        tree.insert(2, Point::new(3.0, 3.0)).unwrap();
        assert_eq!(snapshot.size(), 1, "Snapshot keeps its own state");
        assert_eq!(tree.size(), 2);
        assert_eq!(snapshot.query(&snapshot.bounds()), vec![&1]);
    }
}
