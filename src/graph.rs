//! Bounded breadth-first shortest-path search over small static graphs.
//!
//! Both emotional compatibility graphs (the seven Western modes and the nine
//! rasas) share this one search routine. The graphs are directed and tiny, so
//! the only thing that matters here is reproducible tie-breaking: neighbors
//! are explored in adjacency declaration order, and a node is marked visited
//! the moment it is enqueued, so the first path dequeued at the goal is a
//! minimum-edge path and the declaration order decides among ties.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

/// Find a shortest path from `start` to `end` using at most `max_steps` edges.
///
/// Returns the ordered node list including both endpoints, `vec![start]` when
/// `start == end`, or `None` when no path of `max_steps` or fewer edges
/// exists.
///
/// # Example
/// ```
/// use tonewheel::graph::shortest_path;
///
/// // 0 -> 1 -> 2, plus a dead end 0 -> 3
/// let adj: [&[u8]; 4] = [&[1, 3], &[2], &[], &[]];
/// let path = shortest_path(0u8, 2, 3, |n| adj[n as usize].iter().copied());
/// assert_eq!(path, Some(vec![0, 1, 2]));
///
/// // An edge bound of 1 only finds direct neighbors.
/// assert_eq!(shortest_path(0u8, 2, 1, |n| adj[n as usize].iter().copied()), None);
/// ```
pub fn shortest_path<N, I, F>(start: N, end: N, max_steps: usize, neighbors: F) -> Option<Vec<N>>
where
    N: Copy + Eq + Hash,
    F: Fn(N) -> I,
    I: IntoIterator<Item = N>,
{
    if start == end {
        return Some(vec![start]);
    }

    let mut visited = HashSet::new();
    visited.insert(start);

    let mut queue: VecDeque<Vec<N>> = VecDeque::new();
    queue.push_back(vec![start]);

    while let Some(path) = queue.pop_front() {
        let current = *path.last().expect("queued paths are non-empty");

        if current == end {
            return Some(path);
        }

        // path.len() - 1 edges used so far; stop extending at the bound.
        if path.len() - 1 >= max_steps {
            continue;
        }

        for next in neighbors(current) {
            if visited.insert(next) {
                let mut extended = path.clone();
                extended.push(next);
                queue.push_back(extended);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    // Directed triangle with a shortcut: 0->1, 1->2, 0->2.
    fn tri(n: u8) -> Vec<u8> {
        match n {
            0 => vec![1, 2],
            1 => vec![2],
            _ => vec![],
        }
    }

    #[test]
    fn trivial_path_is_start() {
        assert_eq!(shortest_path(7u8, 7, 0, |_| Vec::new()), Some(vec![7]));
    }

    #[test]
    fn prefers_fewer_edges() {
        assert_eq!(shortest_path(0, 2, 3, tri), Some(vec![0, 2]));
    }

    #[test]
    fn respects_edge_bound() {
        // 0 -> 1 -> 2 in a line graph needs two edges.
        let line = |n: u8| if n < 2 { vec![n + 1] } else { vec![] };
        assert_eq!(shortest_path(0, 2, 2, line), Some(vec![0, 1, 2]));
        assert_eq!(shortest_path(0, 2, 1, line), None);
    }

    #[test]
    fn direction_matters() {
        // Edges only point forward; no path backwards.
        assert_eq!(shortest_path(2, 0, 5, tri), None);
    }

    #[test]
    fn tie_break_follows_declaration_order() {
        // Two equal-length paths to 3; the first-declared neighbor wins.
        let adj = |n: u8| -> Vec<u8> {
            match n {
                0 => vec![1, 2],
                1 | 2 => vec![3],
                _ => vec![],
            }
        };
        assert_eq!(shortest_path(0, 3, 3, adj), Some(vec![0, 1, 3]));
    }
}
