use super::{euclidean, validate_k, validate_points, Neighbourhood};
use crate::error::Result;
use log::debug;

/// Exact k-neighbourhoods by full pairwise distance evaluation.
///
/// For each point, every other point is ranked by distance, the distance of the
/// k-th closest becomes the radius `eps`, and *all* points with distance `<= eps`
/// become neighbours. Ties at the boundary therefore grow the set beyond `k`.
///
/// # Errors
///
/// - [`Error::EmptyInput`](crate::Error::EmptyInput) / ragged or non-finite points.
/// - `k == 0` or `k >= data.len()`.
///
/// # Complexity
///
/// O(N² D) distance work plus an O(N log N) sort per point.
pub fn k_nearest_neighbours(data: &[Vec<f32>], k: usize) -> Result<Neighbourhood> {
    let dim = validate_points(data)?;
    let n = data.len();
    validate_k(k, n)?;

    let mut nb = Neighbourhood::new(n, k);
    let mut row: Vec<(usize, f64)> = Vec::with_capacity(n - 1);

    for (i, p) in data.iter().enumerate() {
        row.clear();
        row.extend(
            data.iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(j, q)| (j, euclidean(p, q))),
        );
        row.sort_by(|a, b| a.1.total_cmp(&b.1));

        let eps = row[k - 1].1;
        let neighbours = row
            .iter()
            .take_while(|(_, d)| *d <= eps)
            .map(|&(j, _)| j)
            .collect();
        nb.fill(i, neighbours);
    }
    nb.record_evaluations(n * (n - 1));

    debug!(
        "brute-force k-neighbourhood: n={}, d={}, k={}, evaluations={}",
        n,
        dim,
        k,
        nb.distance_evaluations()
    );
    Ok(nb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_each_with_each() {
        let data = vec![
            vec![0.0, 0.0, 0.0, 0.0],
            vec![1.0, 1.0, 1.0, 1.0],
            vec![2.0, 2.0, 1.0, 1.0],
        ];

        let nb = k_nearest_neighbours(&data, 2).unwrap();

        assert_eq!(nb.forward(), &[vec![1, 2], vec![0, 2], vec![0, 1]]);
        assert_eq!(nb.reverse(), &[vec![1, 2], vec![0, 2], vec![0, 1]]);
        assert_eq!(nb.distance_evaluations(), 6);
    }

    #[test]
    fn test_multiple_points_on_border() {
        let data = vec![
            vec![0.0, 0.0],
            vec![1.0, 1.0],
            vec![2.0, 2.0],
            vec![3.0, 3.0],
            vec![2.0, 3.0],
        ];

        let nb = k_nearest_neighbours(&data, 2).unwrap();

        assert_eq!(nb.neighbours(2), &[1, 3, 4]);
        for idx in [1, 3, 4] {
            assert!(nb.reverse_neighbours(idx).contains(&2));
        }
    }

    #[test]
    fn test_duplicates_are_neighbours() {
        let data = vec![vec![1.0, 1.0], vec![1.0, 1.0], vec![5.0, 5.0]];

        let nb = k_nearest_neighbours(&data, 1).unwrap();

        assert_eq!(nb.neighbours(0), &[1]);
        assert_eq!(nb.neighbours(1), &[0]);
        // Equidistant from both duplicates.
        assert_eq!(nb.neighbours(2), &[0, 1]);
        assert!(nb.reverse_neighbours(2).is_empty());
    }

    #[test]
    fn test_invalid_k() {
        let data = vec![vec![0.0], vec![1.0], vec![2.0]];
        assert!(matches!(
            k_nearest_neighbours(&data, 0),
            Err(Error::InvalidParameter { name: "k", .. })
        ));
        assert!(matches!(
            k_nearest_neighbours(&data, 3),
            Err(Error::InvalidNeighbourCount { .. })
        ));
        assert!(matches!(
            k_nearest_neighbours(&[], 1),
            Err(Error::EmptyInput)
        ));
    }
}
