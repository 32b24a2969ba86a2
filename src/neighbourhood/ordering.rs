use super::{euclidean, validate_points};
use crate::error::{Error, Result};

/// A point annotated with its distance to the reference point and its place in the
/// ascending order of those distances.
///
/// `prev`/`next` are positions in the owning [`ReferenceOrdering`], not point ids.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderedPoint {
    /// Point id in the input set.
    pub id: usize,
    /// Distance to the reference point.
    pub ref_dist: f64,
    /// Position of the next-closer point, if any.
    pub prev: Option<usize>,
    /// Position of the next-farther point, if any.
    pub next: Option<usize>,
}

/// All points sorted by distance to a fixed reference point, threaded into a
/// doubly-linked sequence over an index arena.
#[derive(Debug, Clone)]
pub struct ReferenceOrdering {
    nodes: Vec<OrderedPoint>,
    /// `position[id]` is the index of point `id` in `nodes`.
    position: Vec<usize>,
}

impl ReferenceOrdering {
    /// Order `data` by distance to `reference`.
    ///
    /// Points at equal distance keep their input order.
    ///
    /// # Errors
    ///
    /// Invalid points, or a reference point that is non-finite or of the wrong
    /// dimensionality.
    pub fn build(data: &[Vec<f32>], reference: &[f32]) -> Result<Self> {
        let dim = validate_points(data)?;
        if reference.len() != dim {
            return Err(Error::DimensionMismatch {
                expected: dim,
                found: reference.len(),
            });
        }
        if reference.iter().any(|x| !x.is_finite()) {
            return Err(Error::InvalidParameter {
                name: "reference_point",
                message: "coordinates must be finite",
            });
        }

        let ref_dists: Vec<f64> = data.iter().map(|p| euclidean(p, reference)).collect();
        let mut order: Vec<usize> = (0..data.len()).collect();
        order.sort_by(|&a, &b| ref_dists[a].total_cmp(&ref_dists[b]));

        let last = order.len() - 1;
        let mut position = vec![0; data.len()];
        let nodes = order
            .iter()
            .enumerate()
            .map(|(pos, &id)| {
                position[id] = pos;
                OrderedPoint {
                    id,
                    ref_dist: ref_dists[id],
                    prev: pos.checked_sub(1),
                    next: (pos < last).then_some(pos + 1),
                }
            })
            .collect();

        Ok(Self { nodes, position })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the ordering is empty (never true for a built ordering).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node at `pos`.
    #[inline]
    pub fn node(&self, pos: usize) -> &OrderedPoint {
        &self.nodes[pos]
    }

    /// Position of point `id`.
    #[inline]
    pub fn position_of(&self, id: usize) -> usize {
        self.position[id]
    }

    /// Nodes from closest to farthest.
    pub fn iter(&self) -> impl Iterator<Item = &OrderedPoint> + '_ {
        self.nodes.iter()
    }
}

/// Per-dimension minimum of `data`, the default reference point.
pub fn minimum_reference(data: &[Vec<f32>]) -> Result<Vec<f32>> {
    let dim = validate_points(data)?;
    let mut min = vec![f32::INFINITY; dim];
    for point in data {
        for (m, &x) in min.iter_mut().zip(point.iter()) {
            *m = m.min(x);
        }
    }
    Ok(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_follow_reference_distance() {
        let data = vec![vec![3.0, 0.0], vec![1.0, 0.0], vec![2.0, 0.0], vec![0.5, 0.0]];
        let ordering = ReferenceOrdering::build(&data, &[0.0, 0.0]).unwrap();

        let ids: Vec<usize> = ordering.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2, 0]);

        let head = ordering.node(0);
        assert_eq!(head.prev, None);
        assert_eq!(head.next, Some(1));
        let tail = ordering.node(3);
        assert_eq!(tail.prev, Some(2));
        assert_eq!(tail.next, None);

        for pos in 0..ordering.len() {
            assert_eq!(ordering.position_of(ordering.node(pos).id), pos);
        }
        assert!(ordering
            .iter()
            .zip(ordering.iter().skip(1))
            .all(|(a, b)| a.ref_dist <= b.ref_dist));
    }

    #[test]
    fn test_single_point() {
        let ordering = ReferenceOrdering::build(&[vec![1.0]], &[0.0]).unwrap();
        assert_eq!(ordering.len(), 1);
        assert_eq!(ordering.node(0).prev, None);
        assert_eq!(ordering.node(0).next, None);
    }

    #[test]
    fn test_reference_dimension_mismatch() {
        let data = vec![vec![0.0, 0.0], vec![1.0, 1.0]];
        assert!(matches!(
            ReferenceOrdering::build(&data, &[0.0]),
            Err(Error::DimensionMismatch {
                expected: 2,
                found: 1
            })
        ));
        assert!(ReferenceOrdering::build(&data, &[0.0, f32::INFINITY]).is_err());
    }

    #[test]
    fn test_minimum_reference() {
        let data = vec![vec![3.0, -1.0], vec![-2.0, 4.0], vec![0.0, 0.0]];
        assert_eq!(minimum_reference(&data).unwrap(), vec![-2.0, -1.0]);
    }
}
