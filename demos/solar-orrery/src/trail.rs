//! Trail recorder — bounded position history per body, drawn as a fading
//! path by the render collaborator.

use glam::Vec3;
use std::collections::VecDeque;

/// Bounded history of one body's position samples, oldest first.
pub struct Trail {
    samples: VecDeque<Vec3>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity.min(4096)),
            capacity,
        }
    }

    /// Append one sample, discarding from the oldest end past capacity.
    pub fn record(&mut self, pos: Vec3) {
        self.samples.push_back(pos);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    /// Samples in chronological order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.samples.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn oldest(&self) -> Option<Vec3> {
        self.samples.front().copied()
    }

    pub fn newest(&self) -> Option<Vec3> {
        self.samples.back().copied()
    }
}

/// One trail per tracked body, indexed like the body table.
pub struct TrailSet {
    trails: Vec<Trail>,
}

impl TrailSet {
    pub fn new(count: usize, capacity: usize) -> Self {
        Self {
            trails: (0..count).map(|_| Trail::new(capacity)).collect(),
        }
    }

    /// Record one frame: the i-th position goes to the i-th trail.
    /// Body and trail indices must line up.
    pub fn record_frame(&mut self, positions: &[Vec3]) {
        debug_assert_eq!(positions.len(), self.trails.len());
        for (trail, &pos) in self.trails.iter_mut().zip(positions) {
            trail.record(pos);
        }
    }

    pub fn get(&self, index: usize) -> Option<&Trail> {
        self.trails.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trail> {
        self.trails.iter()
    }

    pub fn len(&self) -> usize {
        self.trails.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_until_capacity_then_holds() {
        let mut trail = Trail::new(5000);
        for i in 0..5000 {
            trail.record(Vec3::splat(i as f32));
            assert_eq!(trail.len(), i + 1);
        }
        for i in 5000..5100 {
            trail.record(Vec3::splat(i as f32));
            assert_eq!(trail.len(), 5000);
        }
    }

    #[test]
    fn oldest_retained_is_the_overflowed_index() {
        let n = 5123;
        let mut trail = Trail::new(5000);
        for i in 0..n {
            trail.record(Vec3::new(i as f32, 0.0, 0.0));
        }
        // After N inserts, the oldest retained sample is the (N−5000)th
        assert_eq!(trail.oldest().unwrap().x, (n - 5000) as f32);
        assert_eq!(trail.newest().unwrap().x, (n - 1) as f32);
    }

    #[test]
    fn samples_stay_chronological() {
        let mut trail = Trail::new(10);
        for i in 0..25 {
            trail.record(Vec3::new(i as f32, 0.0, 0.0));
        }
        let xs: Vec<f32> = trail.iter().map(|p| p.x).collect();
        assert_eq!(xs.len(), 10);
        for pair in xs.windows(2) {
            assert!(pair[0] < pair[1], "out of order: {pair:?}");
        }
    }

    #[test]
    fn trail_set_routes_by_index() {
        let mut set = TrailSet::new(3, 100);
        set.record_frame(&[Vec3::X, Vec3::Y, Vec3::Z]);
        set.record_frame(&[Vec3::X, Vec3::Y, Vec3::Z]);
        assert_eq!(set.get(0).unwrap().len(), 2);
        assert_eq!(set.get(1).unwrap().newest(), Some(Vec3::Y));
        assert_eq!(set.get(2).unwrap().newest(), Some(Vec3::Z));
    }
}
