use std::collections::VecDeque;

use maze_core::{Point, Range};

use crate::traits::Pather;

/// Breadth-first distance map from a single source.
///
/// Each step has cost 1. Cells the search never reached have no distance.
#[derive(Debug, Clone)]
pub struct BfsMap {
    bounds: Range,
    dist: Vec<Option<u32>>,
}

impl BfsMap {
    /// Run a breadth-first search over `bounds` starting at `source`.
    ///
    /// Nothing is reached when `source` is outside `bounds` or not passable.
    pub fn compute<P: Pather>(pather: &P, bounds: Range, source: Point) -> Self {
        let mut map = Self {
            bounds,
            dist: vec![None; bounds.len()],
        };
        let Some(si) = map.idx(source) else {
            return map;
        };
        if !pather.passable(source) {
            return map;
        }

        map.dist[si] = Some(0);
        let mut queue: VecDeque<Point> = VecDeque::new();
        queue.push_back(source);
        let mut nbuf = Vec::with_capacity(4);

        while let Some(cp) = queue.pop_front() {
            let current = map.distance(cp).unwrap_or_default();

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = map.idx(np) else {
                    continue;
                };
                if map.dist[ni].is_some() {
                    continue;
                }
                map.dist[ni] = Some(current + 1);
                queue.push_back(np);
            }
        }
        map
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        let rel = p - self.bounds.min;
        Some(rel.y as usize * self.bounds.width() as usize + rel.x as usize)
    }

    /// Distance from the source to `p`, or `None` if `p` was not reached.
    pub fn distance(&self, p: Point) -> Option<u32> {
        self.idx(p).and_then(|i| self.dist[i])
    }

    /// Number of reached cells, the source included.
    pub fn reached(&self) -> usize {
        self.dist.iter().filter(|d| d.is_some()).count()
    }
}
