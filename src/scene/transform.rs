//! Arena of transform records, the boundary between animation and rendering.
//!
//! Each section controller owns a set of [`TransformId`]s and updates the
//! records behind them every frame. Unmounting a visual group removes its
//! records; a controller whose lookup misses simply skips that frame's write
//! and retries on the next one. No record is shared between controllers, so
//! update order has no observable effect.

use glam::Vec3;
use rustc_hash::FxHashMap;

/// Opaque handle to a transform record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransformId(u32);

/// Pose and material scalars for one rendered node.
///
/// Rotation is Euler XYZ in radians; the host applies it however its scene
/// graph expects. Emissive intensity and opacity cover the material
/// parameters the sections animate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformRecord {
    /// World-space (or parent-relative) translation.
    pub position: Vec3,
    /// Euler XYZ rotation in radians.
    pub rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
    /// Emissive material intensity.
    pub emissive_intensity: f32,
    /// Material opacity.
    pub opacity: f32,
}

impl Default for TransformRecord {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            emissive_intensity: 0.0,
            opacity: 1.0,
        }
    }
}

impl TransformRecord {
    /// A record at the given position, otherwise default.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }
}

/// Owner of all animated transform records, keyed by [`TransformId`].
#[derive(Debug, Default)]
pub struct TransformArena {
    records: FxHashMap<TransformId, TransformRecord>,
    next_id: u32,
}

impl TransformArena {
    /// Empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning its handle. Ids are never reused within an
    /// arena's lifetime, so a stale handle can only miss, not alias.
    pub fn insert(&mut self, record: TransformRecord) -> TransformId {
        let id = TransformId(self.next_id);
        self.next_id += 1;
        let _prev = self.records.insert(id, record);
        id
    }

    /// Insert a default record.
    pub fn allocate(&mut self) -> TransformId {
        self.insert(TransformRecord::default())
    }

    /// Remove a record (unmount). Subsequent updates through the handle are
    /// silently skipped.
    pub fn remove(&mut self, id: TransformId) -> Option<TransformRecord> {
        self.records.remove(&id)
    }

    /// Read a record.
    #[must_use]
    pub fn get(&self, id: TransformId) -> Option<&TransformRecord> {
        self.records.get(&id)
    }

    /// Mutable access for the owning controller.
    pub fn get_mut(&mut self, id: TransformId) -> Option<&mut TransformRecord> {
        self.records.get_mut(&id)
    }

    /// Whether a record is currently mounted.
    #[must_use]
    pub fn contains(&self, id: TransformId) -> bool {
        self.records.contains_key(&id)
    }

    /// Number of mounted records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the arena is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate all mounted records (host-side read).
    pub fn iter(&self) -> impl Iterator<Item = (TransformId, &TransformRecord)> {
        self.records.iter().map(|(id, rec)| (*id, rec))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_remove_lifecycle() {
        let mut arena = TransformArena::new();
        let id = arena.insert(TransformRecord::at(Vec3::new(1.0, 2.0, 3.0)));

        assert!(arena.contains(id));
        assert_eq!(arena.get(id).unwrap().position, Vec3::new(1.0, 2.0, 3.0));

        let removed = arena.remove(id).unwrap();
        assert_eq!(removed.position.x, 1.0);
        assert!(!arena.contains(id));
        assert!(arena.get_mut(id).is_none());
    }

    #[test]
    fn ids_are_never_reused() {
        let mut arena = TransformArena::new();
        let a = arena.allocate();
        let _removed = arena.remove(a);
        let b = arena.allocate();
        assert_ne!(a, b);
        assert!(!arena.contains(a));
        assert!(arena.contains(b));
    }

    #[test]
    fn default_record_is_identity_pose() {
        let rec = TransformRecord::default();
        assert_eq!(rec.position, Vec3::ZERO);
        assert_eq!(rec.rotation, Vec3::ZERO);
        assert_eq!(rec.scale, Vec3::ONE);
        assert_eq!(rec.emissive_intensity, 0.0);
        assert_eq!(rec.opacity, 1.0);
    }

    #[test]
    fn iter_visits_all_mounted_records() {
        let mut arena = TransformArena::new();
        let ids: Vec<_> = (0..5).map(|_| arena.allocate()).collect();
        let _removed = arena.remove(ids[2]);

        assert_eq!(arena.len(), 4);
        let seen: Vec<_> = arena.iter().map(|(id, _)| id).collect();
        assert_eq!(seen.len(), 4);
        assert!(!seen.contains(&ids[2]));
    }
}
