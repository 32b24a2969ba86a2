/// A neighbour candidate: point id and its true distance to the query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Candidate {
    pub(crate) id: usize,
    pub(crate) dist: f64,
}

/// Bounded candidate window of the accelerated k-neighbourhood search.
///
/// Kept sorted by distance, so the radius (largest distance) is the tail and all
/// members tied at the radius form a contiguous suffix.
///
/// Invariant once seeded: the members are exactly the visited points whose distance
/// is `<= radius`, where `radius` is the k-th smallest distance among visited points.
#[derive(Debug, Clone)]
pub(crate) struct CandidateSet {
    k: usize,
    members: Vec<Candidate>,
}

impl CandidateSet {
    pub(crate) fn new(k: usize) -> Self {
        Self {
            k,
            members: Vec::with_capacity(k + 1),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.members.len()
    }

    /// Largest member distance.
    pub(crate) fn radius(&self) -> Option<f64> {
        self.members.last().map(|c| c.dist)
    }

    /// Unconditional insert, used while seeding.
    pub(crate) fn insert(&mut self, candidate: Candidate) {
        let at = self
            .members
            .partition_point(|c| c.dist.total_cmp(&candidate.dist).is_le());
        self.members.insert(at, candidate);
    }

    /// Offer a point found during verification.
    ///
    /// - farther than the radius: rejected
    /// - tied with the radius: kept, ties are never broken
    /// - closer than the radius: kept; if at least `k` members are then strictly
    ///   inside the old radius, every member at the old radius is evicted and the
    ///   radius shrinks to the new k-th distance
    ///
    /// Returns whether the point was kept.
    pub(crate) fn admit(&mut self, candidate: Candidate) -> bool {
        let Some(eps) = self.radius() else {
            self.insert(candidate);
            return true;
        };
        if candidate.dist > eps {
            return false;
        }
        self.insert(candidate);
        if candidate.dist < eps {
            let inside = self.members.partition_point(|c| c.dist < eps);
            if inside >= self.k {
                self.members.truncate(inside);
            }
        }
        true
    }

    pub(crate) fn into_ids(self) -> Vec<usize> {
        self.members.into_iter().map(|c| c.id).collect()
    }
}
