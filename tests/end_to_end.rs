use std::sync::Once;

use nbclust::cluster::{Clustering, Nbc, NOISE};
use nbclust::{cluster, dataset, k_nearest_neighbours, k_nearest_neighbours_accelerated, Error};

static INIT: Once = Once::new();

fn init() {
    INIT.call_once(|| {
        let env = env_logger::Env::default().default_filter_or("debug");
        let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
    });
}

fn two_triplets() -> Vec<Vec<f32>> {
    let cluster_0 = vec![vec![0.0, 0.0], vec![1.0, 1.0], vec![2.0, 2.0]];
    // Cluster 1 moved "far" from cluster 0.
    let cluster_1: Vec<Vec<f32>> = cluster_0
        .iter()
        .map(|p| p.iter().map(|x| x + 10.0).collect())
        .collect();
    cluster_0.into_iter().chain(cluster_1).collect()
}

#[test]
fn test_two_triplets_brute_force() {
    init();
    let assignment = cluster(&two_triplets(), 2, None).unwrap();

    assert_eq!(assignment.n_clusters(), 2);
    assert_eq!(assignment.clusters(), vec![vec![0, 1, 2], vec![3, 4, 5]]);
    assert!(assignment.noise().is_empty());
}

#[test]
fn test_two_triplets_accelerated() {
    init();
    let assignment = cluster(&two_triplets(), 2, Some(&[-1.0, -1.0])).unwrap();

    assert_eq!(assignment.n_clusters(), 2);
    assert_eq!(assignment.clusters(), vec![vec![0, 1, 2], vec![3, 4, 5]]);
    assert!(assignment.noise().is_empty());
}

#[test]
fn test_isolated_point_is_noise() {
    init();
    let mut data = two_triplets();
    data.push(vec![-40.0, 75.0]);

    for nbc in [
        Nbc::new(2),
        Nbc::new(2).with_reference_point(vec![-1.0, -1.0]),
        Nbc::new(2).with_minimum_reference(),
    ] {
        let labels = nbc.fit_predict(&data).unwrap();
        assert_eq!(labels, vec![0, 0, 0, 1, 1, 1, NOISE], "{:?}", nbc);
    }
}

#[test]
fn test_new_cluster_claims_anchor_neighbours() {
    init();
    // Point 1 is reached by the cluster opened at point 0, then taken over by the
    // cluster opened at point 2, whose only neighbour it is.
    let data = vec![vec![0.0], vec![1.0], vec![2.2], vec![3.5]];

    for reference in [None, Some(&[-1.0f32][..])] {
        let assignment = cluster(&data, 1, reference).unwrap();
        assert_eq!(assignment.clusters(), vec![vec![0], vec![1, 2]]);
        assert_eq!(assignment.noise(), vec![3]);
    }
}

#[test]
fn test_clusters_of_different_density() {
    init();
    // A tight blob and a loose blob: a single global radius would either merge
    // or fragment them, a relative density factor does not.
    let mut data = Vec::new();
    for i in 0..4 {
        for j in 0..4 {
            data.push(vec![i as f32, j as f32]);
        }
    }
    for i in 0..4 {
        for j in 0..4 {
            data.push(vec![100.0 + i as f32 * 8.0, j as f32 * 8.0]);
        }
    }

    let brute = Nbc::new(4).fit(&data).unwrap();
    let fast = Nbc::new(4).with_minimum_reference().fit(&data).unwrap();
    assert_eq!(brute, fast);

    let clusters = brute.clusters();
    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[0], (0..16).collect::<Vec<_>>());
    assert_eq!(clusters[1], (16..32).collect::<Vec<_>>());
}

#[test]
fn test_accelerated_search_saves_work() {
    init();
    let data: Vec<Vec<f32>> = (0..400)
        .map(|i| {
            let t = i as f32 * 0.05;
            vec![t, (t * 3.0).sin()]
        })
        .collect();

    let brute = k_nearest_neighbours(&data, 5).unwrap();
    let fast = k_nearest_neighbours_accelerated(&data, 5, &[-1.0, 0.0]).unwrap();

    assert_eq!(fast.forward(), brute.forward());
    assert!(fast.distance_evaluations() * 4 < brute.distance_evaluations());
}

#[test]
fn test_csv_round_trip() {
    init();
    let csv = "0,0\n1,1\n2,2\n10,10\n11,11\n12,12\n-40,75\n";
    let data = dataset::read_points(csv.as_bytes()).unwrap();

    let assignment = Nbc::new(2).with_minimum_reference().fit(&data).unwrap();
    let mut out = Vec::new();
    dataset::write_assignment(&mut out, &assignment).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "0\n0\n0\n1\n1\n1\n-1\n");
}

#[test]
fn test_errors_surface_to_caller() {
    init();
    let data = two_triplets();
    assert!(matches!(cluster(&data, 0, None), Err(Error::InvalidParameter { .. })));
    assert!(matches!(
        cluster(&data, 6, None),
        Err(Error::InvalidNeighbourCount {
            requested: 6,
            n_items: 6
        })
    ));
    assert!(matches!(
        cluster(&data, 2, Some(&[0.0, 0.0, 0.0])),
        Err(Error::DimensionMismatch {
            expected: 2,
            found: 3
        })
    ));
    assert!(matches!(cluster(&[], 1, None), Err(Error::EmptyInput)));
}
