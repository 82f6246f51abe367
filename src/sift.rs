//! Sift repairs shared by construction and mutation
//!
//! The heap is an implicit binary tree over the slice: node `i` has children
//! `2i + 1` and `2i + 2`, and parent `(i - 1) / 2`.

use crate::traits::Compare;

/// Move the element at `index` up until its parent no longer ranks below it
pub(crate) fn sift_up<T, C: Compare<T>>(data: &mut [T], mut index: usize, comp: &C) {
    while index > 0 {
        let parent = (index - 1) / 2;
        if comp.lower(&data[parent], &data[index]) {
            data.swap(index, parent);
            index = parent;
        } else {
            break;
        }
    }
}

/// Move the element at `index` down until no child outranks it
///
/// At each level the element is compared against the higher ranked of its
/// two children, so the child that moves up is the one that may become the
/// parent of its sibling.
pub(crate) fn sift_down<T, C: Compare<T>>(data: &mut [T], mut index: usize, comp: &C) {
    let len = data.len();
    loop {
        let left = 2 * index + 1;
        if left >= len {
            break;
        }
        let right = left + 1;

        let mut best = left;
        if right < len && comp.lower(&data[left], &data[right]) {
            best = right;
        }

        if comp.lower(&data[index], &data[best]) {
            data.swap(index, best);
            index = best;
        } else {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{MaxOrder, MinOrder};

    #[test]
    fn test_sift_up_to_root() {
        let mut data = vec![5, 3, 4, 1, 2, 9];
        let last = data.len() - 1;
        sift_up(&mut data, last, &MaxOrder);
        assert_eq!(data, vec![9, 3, 5, 1, 2, 4]);
    }

    #[test]
    fn test_sift_up_stops_at_parent() {
        let mut data = vec![5, 3, 4, 1];
        sift_up(&mut data, 3, &MaxOrder);
        assert_eq!(data, vec![5, 3, 4, 1]);
    }

    #[test]
    fn test_sift_down_picks_better_child() {
        let mut data = vec![0, 7, 8, 1, 2, 3, 4];
        sift_down(&mut data, 0, &MaxOrder);
        assert_eq!(data, vec![8, 7, 4, 1, 2, 3, 0]);
    }

    #[test]
    fn test_sift_down_min_order() {
        let mut data = vec![9, 1, 2];
        sift_down(&mut data, 0, &MinOrder);
        assert_eq!(data, vec![1, 9, 2]);
    }

    #[test]
    fn test_sift_on_tiny_slices() {
        let mut empty: Vec<i32> = Vec::new();
        sift_down(&mut empty, 0, &MaxOrder);
        assert!(empty.is_empty());

        let mut one = vec![1];
        sift_down(&mut one, 0, &MaxOrder);
        sift_up(&mut one, 0, &MaxOrder);
        assert_eq!(one, vec![1]);
    }

    #[test]
    fn test_sift_down_equal_children_keeps_left() {
        let mut data = vec![(0, 'r'), (5, 'a'), (5, 'b')];
        sift_down(&mut data, 0, &|a: &(i32, char), b: &(i32, char)| a.0 < b.0);
        assert_eq!(data[0], (5, 'a'));
    }
}
