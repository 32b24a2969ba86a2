//! NBC on a simple 2D dataset, with brute-force and triangle-inequality neighbourhoods.

use nbclust::neighbourhood::{k_nearest_neighbours, k_nearest_neighbours_accelerated};
use nbclust::{Clustering, Nbc, NOISE};

fn main() {
    // Three well-separated clusters in 2D plus one outlier.
    let data: Vec<Vec<f32>> = vec![
        // Cluster A (near origin)
        vec![0.0, 0.0],
        vec![0.1, 0.2],
        vec![0.2, 0.1],
        vec![-0.1, 0.1],
        // Cluster B (near (5, 5))
        vec![5.0, 5.0],
        vec![5.1, 4.9],
        vec![4.9, 5.1],
        vec![5.2, 5.2],
        // Cluster C (near (10, 0))
        vec![10.0, 0.0],
        vec![10.1, 0.1],
        vec![9.9, -0.1],
        vec![10.2, 0.2],
        // Outlier
        vec![30.0, 30.0],
    ];
    let k = 3;

    // --- k-neighbourhoods ---
    let brute = k_nearest_neighbours(&data, k).unwrap();
    let fast = k_nearest_neighbours_accelerated(&data, k, &[-1.0, -1.0]).unwrap();
    assert_eq!(brute.forward(), fast.forward());
    println!("=== k-neighbourhood (k={}) ===", k);
    println!(
        "  distance evaluations: brute force {}, triangle inequality {}",
        brute.distance_evaluations(),
        fast.distance_evaluations()
    );
    let ndf = brute.density_factors().unwrap();
    for (i, nbs) in brute.forward().iter().enumerate() {
        println!("  point {:2} => neighbours {:?}, ndf {:.2}", i, nbs, ndf[i]);
    }

    // --- NBC ---
    let labels = Nbc::new(k).with_minimum_reference().fit_predict(&data).unwrap();
    println!("\n=== NBC (k={}) ===", k);
    for (i, label) in labels.iter().enumerate() {
        let tag = if *label == NOISE {
            "NOISE".to_string()
        } else {
            format!("cluster {}", label)
        };
        println!("  point {:2} ({:5.1}, {:5.1}) => {}", i, data[i][0], data[i][1], tag);
    }
}
