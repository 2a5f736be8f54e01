//! Built-in demo catalog used when a workspace is initialized

use super::VideoCatalog;
use crate::domain::VideoItem;

const DEMO_VIDEOS: [(u64, u64); 10] = [
    (45_000_000, 180),
    (52_000_000, 220),
    (48_000_000, 195),
    (55_000_000, 240),
    (41_000_000, 165),
    (49_000_000, 205),
    (46_000_000, 188),
    (53_000_000, 230),
    (44_000_000, 175),
    (50_000_000, 210),
];

/// Ten sample clips, ids "1" through "10", none selected
pub fn demo_catalog() -> VideoCatalog {
    let items = DEMO_VIDEOS
        .iter()
        .enumerate()
        .map(|(i, &(size, duration))| {
            let n = i + 1;
            VideoItem::new(n.to_string(), format!("clip_{n:02}.mp4"), size, duration)
        })
        .collect();
    VideoCatalog::new(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_shape() {
        let catalog = demo_catalog();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.selected_count(), 0);

        let first = catalog.get("1").unwrap();
        assert_eq!(first.name, "clip_01.mp4");
        assert_eq!(first.size, 45_000_000);
        assert_eq!(first.duration, 180);

        let last = catalog.get("10").unwrap();
        assert_eq!(last.name, "clip_10.mp4");
        assert_eq!(last.size, 50_000_000);
    }

    #[test]
    fn test_whole_demo_catalog_fits_one_bundle() {
        let catalog = demo_catalog();
        let total: u64 = catalog.items().iter().map(|v| v.size).sum();
        assert_eq!(total, 483_000_000);
        assert!(total <= crate::selection::DEFAULT_MAX_TOTAL_BYTES);
    }
}
