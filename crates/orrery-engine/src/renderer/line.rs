use glam::Vec3;

/// Handle to a polyline allocated in a LineSet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineId(pub usize);

/// A polyline whose geometry is replaced each frame from an ordered list
/// of 3D points. The host renders it as a connected line strip.
pub struct Polyline {
    points: Vec<[f32; 3]>,
    pub color: [f32; 4],
    pub width: f32,
}

impl Polyline {
    pub fn new(color: [f32; 4], width: f32) -> Self {
        Self {
            points: Vec::new(),
            color,
            width,
        }
    }

    /// Pre-reserve point storage (e.g. for a known trail capacity).
    pub fn reserve(&mut self, points: usize) {
        self.points.reserve(points);
    }

    /// Replace the whole geometry with a new ordered point list.
    pub fn set_points(&mut self, points: impl IntoIterator<Item = Vec3>) {
        self.points.clear();
        self.points.extend(points.into_iter().map(|p| p.to_array()));
    }

    pub fn points(&self) -> &[[f32; 3]] {
        &self.points
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Raw float view for the host's buffer upload.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.points)
    }
}

/// The set of polylines owned by the engine context.
/// Lines are allocated once at init and mutated in place each frame.
pub struct LineSet {
    lines: Vec<Polyline>,
}

impl LineSet {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Allocate a new polyline and return its handle.
    pub fn add(&mut self, line: Polyline) -> LineId {
        self.lines.push(line);
        LineId(self.lines.len() - 1)
    }

    pub fn get(&self, id: LineId) -> Option<&Polyline> {
        self.lines.get(id.0)
    }

    pub fn get_mut(&mut self, id: LineId) -> Option<&mut Polyline> {
        self.lines.get_mut(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Polyline> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total points across all lines (for host-side buffer sizing).
    pub fn total_points(&self) -> usize {
        self.lines.iter().map(|l| l.point_count()).sum()
    }
}

impl Default for LineSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_points_replaces_geometry() {
        let mut line = Polyline::new([1.0, 1.0, 1.0, 1.0], 1.0);
        line.set_points([Vec3::ZERO, Vec3::X, Vec3::Y]);
        assert_eq!(line.point_count(), 3);
        line.set_points([Vec3::Z]);
        assert_eq!(line.point_count(), 1);
        assert_eq!(line.points()[0], [0.0, 0.0, 1.0]);
    }

    #[test]
    fn line_set_handles_resolve() {
        let mut set = LineSet::new();
        let a = set.add(Polyline::new([1.0; 4], 1.0));
        let b = set.add(Polyline::new([0.5; 4], 2.0));
        assert_ne!(a, b);
        set.get_mut(b).unwrap().set_points([Vec3::X, Vec3::Y]);
        assert_eq!(set.get(b).unwrap().point_count(), 2);
        assert_eq!(set.total_points(), 2);
    }
}
