//! Role assignment for tap-driven navigation.
//!
//! Every page gets exactly one role relative to the target; the role alone decides the
//! page's orientation and depth. All functions here are pure.

use crate::shared::animation::Props;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRole {
    /// Already read: flipped away and pushed behind.
    Before,
    /// The page being shown, always on top.
    Current,
    /// Still ahead: unflipped, stacked by descending index.
    After,
}

/// Orientation and depth of a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageTransform {
    pub rotate_y: f64,
    pub z: f64,
}

impl PageTransform {
    pub fn props(&self) -> Props {
        Props::new().rotate_y(self.rotate_y).z(self.z)
    }
}

pub fn role_of(page_index: usize, target: usize) -> PageRole {
    use std::cmp::Ordering::*;
    match page_index.cmp(&target) {
        Less => PageRole::Before,
        Equal => PageRole::Current,
        Greater => PageRole::After,
    }
}

/// Target transform of `page_index` when navigating to `target` in a book of `total` pages.
pub fn role_transform(page_index: usize, target: usize, total: usize) -> PageTransform {
    let index = page_index as f64;
    match role_of(page_index, target) {
        PageRole::Before => PageTransform {
            rotate_y: -180.0,
            z: -index - 1.0,
        },
        PageRole::Current => PageTransform {
            // the cover stays closed; any other current page lies open on top
            rotate_y: if target == 0 { 0.0 } else { -180.0 },
            z: total as f64 + 100.0,
        },
        PageRole::After => PageTransform {
            rotate_y: 0.0,
            z: total as f64 - index,
        },
    }
}

/// Layout of a freshly built book: cover frontmost, the rest progressively behind.
pub fn initial_transform(page_index: usize, total: usize) -> PageTransform {
    PageTransform {
        rotate_y: 0.0,
        z: if page_index == 0 {
            total as f64
        } else {
            -(page_index as f64)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_gets_exactly_one_role_for_every_target() {
        let total = 11;
        for target in 0..total {
            let roles: Vec<PageRole> = (0..total).map(|i| role_of(i, target)).collect();
            assert_eq!(roles.len(), total);
            assert_eq!(
                roles.iter().filter(|r| **r == PageRole::Current).count(),
                1,
                "target {target}"
            );
            assert!(roles[..target].iter().all(|r| *r == PageRole::Before));
            assert!(roles[target + 1..].iter().all(|r| *r == PageRole::After));
        }
    }

    #[test]
    fn test_role_transform_is_pure() {
        for target in 0..5 {
            for page in 0..5 {
                assert_eq!(
                    role_transform(page, target, 5),
                    role_transform(page, target, 5)
                );
            }
        }
    }

    #[test]
    fn test_boundaries() {
        // first page as target: cover on top and closed, the rest stacked ahead
        assert_eq!(
            role_transform(0, 0, 4),
            PageTransform { rotate_y: 0.0, z: 104.0 }
        );
        assert_eq!(
            role_transform(3, 0, 4),
            PageTransform { rotate_y: 0.0, z: 1.0 }
        );

        // last page as target: everything else flipped away
        assert_eq!(
            role_transform(3, 3, 4),
            PageTransform { rotate_y: -180.0, z: 104.0 }
        );
        assert_eq!(
            role_transform(0, 3, 4),
            PageTransform { rotate_y: -180.0, z: -1.0 }
        );
        assert_eq!(
            role_transform(2, 3, 4),
            PageTransform { rotate_y: -180.0, z: -3.0 }
        );
    }

    #[test]
    fn test_after_pages_stack_by_descending_index() {
        let z: Vec<f64> = (2..6).map(|i| role_transform(i, 1, 6).z).collect();
        assert!(z.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_initial_transform() {
        assert_eq!(initial_transform(0, 5).z, 5.0);
        assert_eq!(initial_transform(1, 5).z, -1.0);
        assert_eq!(initial_transform(4, 5).z, -4.0);
        assert!((0..5).all(|i| initial_transform(i, 5).rotate_y == 0.0));
    }
}
