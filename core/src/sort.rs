//! In-place, unstable sort of the edge buffer by origin.
//!
//! Quicksort with a Lomuto partition around the last element of each range,
//! driven by an explicit work stack instead of recursion. The larger half of
//! every partition is deferred on the stack and the smaller half is processed
//! next, so the stack holds at most O(log n) ranges. Ranges that exhaust their
//! partition-depth budget (sorted or all-equal input) are finished with the
//! standard library's unstable sort, and short ranges with insertion sort.
//! Order among edges sharing an origin is unspecified.

use crate::graph::Edge;

/// Ranges at or below this length are finished with insertion sort.
const INSERTION_CUTOFF: usize = 16;

/// Sort `edges` ascending by origin.
pub fn sort_by_origin(edges: &mut [Edge]) {
    let n = edges.len();
    if n < 2 {
        return;
    }

    let depth_budget = 2 * (usize::BITS - n.leading_zeros()) as usize;
    let mut stack: Vec<(usize, usize, usize)> = Vec::with_capacity(depth_budget);
    let mut next = Some((0, n, 0));

    while let Some((lo, hi, depth)) = next.take().or_else(|| stack.pop()) {
        let len = hi - lo;
        if len <= INSERTION_CUTOFF {
            insertion_sort(&mut edges[lo..hi]);
            continue;
        }
        if depth >= depth_budget {
            edges[lo..hi].sort_unstable_by_key(|e| e.origin);
            continue;
        }

        let p = lo + partition(&mut edges[lo..hi]);
        let left = (lo, p, depth + 1);
        let right = (p + 1, hi, depth + 1);
        let (smaller, larger) = if p - lo <= hi - (p + 1) {
            (left, right)
        } else {
            (right, left)
        };
        if larger.1 - larger.0 > 1 {
            stack.push(larger);
        }
        if smaller.1 - smaller.0 > 1 {
            next = Some(smaller);
        }
    }
}

/// Lomuto partition around the last element. Returns the pivot's final index.
///
/// Everything left of the returned index has `origin <= pivot.origin`,
/// everything right of it has `origin > pivot.origin`.
fn partition(edges: &mut [Edge]) -> usize {
    let last = edges.len() - 1;
    let pivot = edges[last].origin;
    let mut boundary = 0;
    for j in 0..last {
        if edges[j].origin <= pivot {
            edges.swap(boundary, j);
            boundary += 1;
        }
    }
    edges.swap(boundary, last);
    boundary
}

fn insertion_sort(edges: &mut [Edge]) {
    for i in 1..edges.len() {
        let mut j = i;
        while j > 0 && edges[j - 1].origin > edges[j].origin {
            edges.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Index of the first edge whose origin is smaller than its predecessor's.
pub fn first_unsorted(edges: &[Edge]) -> Option<usize> {
    edges
        .windows(2)
        .position(|w| w[0].origin > w[1].origin)
        .map(|i| i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeId;

    fn edges_from(pairs: &[(NodeId, NodeId)]) -> Vec<Edge> {
        pairs
            .iter()
            .map(|&(origin, destination)| Edge { origin, destination })
            .collect()
    }

    fn sorted_multiset(edges: &[Edge]) -> Vec<(NodeId, NodeId)> {
        let mut v: Vec<_> = edges.iter().map(|e| (e.origin, e.destination)).collect();
        v.sort();
        v
    }

    /// Deterministic scramble (LCG) so tests need no RNG crate.
    fn scrambled(n: usize, modulo: u64) -> Vec<Edge> {
        let mut state = 0x2545_f491_4f6c_dd1du64;
        (0..n)
            .map(|i| {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
                Edge {
                    origin: ((state >> 33) % modulo) as NodeId,
                    destination: i as NodeId,
                }
            })
            .collect()
    }

    #[test]
    fn test_sort_empty_and_single() {
        let mut empty: Vec<Edge> = Vec::new();
        sort_by_origin(&mut empty);
        assert!(empty.is_empty());

        let mut one = edges_from(&[(3, 1)]);
        sort_by_origin(&mut one);
        assert_eq!(one, edges_from(&[(3, 1)]));
    }

    #[test]
    fn test_sort_small() {
        let mut edges = edges_from(&[(3, 0), (0, 1), (1, 2), (0, 2)]);
        sort_by_origin(&mut edges);
        let origins: Vec<_> = edges.iter().map(|e| e.origin).collect();
        assert_eq!(origins, vec![0, 0, 1, 3]);
        assert_eq!(first_unsorted(&edges), None);
    }

    #[test]
    fn test_partition_places_pivot() {
        let mut edges = edges_from(&[(5, 0), (1, 0), (9, 0), (3, 0), (4, 0)]);
        let p = partition(&mut edges);
        assert_eq!(edges[p].origin, 4);
        assert!(edges[..p].iter().all(|e| e.origin <= 4));
        assert!(edges[p + 1..].iter().all(|e| e.origin > 4));
    }

    #[test]
    fn test_sort_scrambled_preserves_edges() {
        let original = scrambled(5_000, 300);
        let mut edges = original.clone();
        sort_by_origin(&mut edges);
        assert_eq!(first_unsorted(&edges), None);
        assert_eq!(sorted_multiset(&edges), sorted_multiset(&original));
    }

    #[test]
    fn test_sort_already_sorted_large() {
        // Worst case for an end pivot; must not blow the stack.
        let mut edges: Vec<Edge> = (0..200_000)
            .map(|i| Edge { origin: i, destination: 0 })
            .collect();
        sort_by_origin(&mut edges);
        assert_eq!(first_unsorted(&edges), None);
        assert_eq!(edges.len(), 200_000);
    }

    #[test]
    fn test_sort_reverse_sorted_large() {
        let mut edges: Vec<Edge> = (0..200_000)
            .rev()
            .map(|i| Edge { origin: i, destination: i })
            .collect();
        sort_by_origin(&mut edges);
        assert_eq!(first_unsorted(&edges), None);
        assert_eq!(edges[0].origin, 0);
        assert_eq!(edges[199_999].origin, 199_999);
    }

    #[test]
    fn test_sort_all_equal_origins() {
        let mut edges: Vec<Edge> = (0..100_000)
            .map(|i| Edge { origin: 7, destination: i })
            .collect();
        sort_by_origin(&mut edges);
        assert!(edges.iter().all(|e| e.origin == 7));
        let mut dests: Vec<_> = edges.iter().map(|e| e.destination).collect();
        dests.sort_unstable();
        assert_eq!(dests, (0..100_000).collect::<Vec<_>>());
    }

    #[test]
    fn test_first_unsorted_reports_index() {
        let edges = edges_from(&[(0, 0), (2, 0), (1, 0)]);
        assert_eq!(first_unsorted(&edges), Some(2));
    }
}
