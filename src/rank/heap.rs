//! Min-heap primitives over a plain slice.
//!
//! The layout is the usual 0-indexed binary heap: children of `i` live at
//! `2i + 1` and `2i + 2`, and every parent is <= its children.

/// Replace the root (the minimum) of a min-heap with `target` and sift it
/// down until the heap property holds again. O(log n).
///
/// The root is a live element, not an empty sentinel slot: its previous
/// value is dropped. An empty heap is left untouched and `target` dropped.
pub fn replace_min<T: Ord>(heap: &mut [T], target: T) {
    let Some(root) = heap.first_mut() else {
        return;
    };
    *root = target;
    sift_down(heap, 0);
}

/// Arrange `items` into a min-heap in place. O(n).
pub fn make_min_heap<T: Ord>(items: &mut [T]) {
    for index in (0..items.len() / 2).rev() {
        sift_down(items, index);
    }
}

/// Returns true if every parent is <= both of its children.
pub fn is_min_heap<T: Ord>(items: &[T]) -> bool {
    (1..items.len()).all(|child| items[(child - 1) / 2] <= items[child])
}

fn sift_down<T: Ord>(heap: &mut [T], mut index: usize) {
    let len = heap.len();
    loop {
        let left = 2 * index + 1;
        let right = left + 1;
        let mut smallest = index;

        if left < len && heap[left] < heap[smallest] {
            smallest = left;
        }
        if right < len && heap[right] < heap[smallest] {
            smallest = right;
        }
        if smallest == index {
            break;
        }

        heap.swap(index, smallest);
        index = smallest;
    }
}
