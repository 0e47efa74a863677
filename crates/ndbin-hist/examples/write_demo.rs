//! Demonstrates filling a two-dimensional histogram and persisting it

use ndbin_hist::{Axis, FillPolicy, Histogram};
use ndbin_store::MemoryStore;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

fn main() {
    let mut hist = Histogram::from_axes(
        vec![
            Axis::new("pt", 20, 0.0, 100.0, "GeV"),
            Axis::new("eta", 10, -2.5, 2.5, ""),
        ],
        FillPolicy::ABSORB_INVALID,
    )
    .unwrap();

    // Fill with correlated pseudo-physics data
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let pt_dist = Normal::new(40.0, 25.0).unwrap();
    let eta_dist = Normal::new(0.0, 1.2).unwrap();

    for _ in 0..100_000 {
        let pt: f64 = pt_dist.sample(&mut rng);
        let eta: f64 = eta_dist.sample(&mut rng);
        hist.fill([pt, eta]).unwrap();
    }

    println!("=== Filled histogram ===");
    println!("{hist}");
    for axis in hist.axes() {
        println!("  {axis}");
    }

    // Everything outside the ranges landed in the sentinel slots
    let shape = hist.shape();
    let mut underflow_pt = 0.0;
    for j in 0..shape[1] {
        underflow_pt += hist.value_at(&[0, j]).unwrap();
    }
    println!("pt underflow weight: {underflow_pt}");

    // Persist and snapshot
    let mut store = MemoryStore::new();
    hist.write_to(&mut store, "pt_eta", 7).unwrap();

    let stored = store.get("pt_eta").unwrap();
    println!("\n=== Persisted dataset ===");
    println!("shape: {:?}", stored.spec.shape);
    println!("chunks: {:?}", stored.spec.chunks);
    for (key, value) in &stored.attrs {
        println!("  {key} = {value}");
    }

    let json = serde_json::to_string(&stored.spec).unwrap();
    println!("\nspec as JSON: {json}");
}
