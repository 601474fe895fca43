//! Graph generators for MST property tests.
//!
//! Weights are whole numbers stored as `f32`, so totals accumulate exactly in
//! `f64` and the oracle comparison needs no tolerance.

use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::types::{MstFixture, WeightDistribution};

const MIN_VERTICES: usize = 2;
const MAX_VERTICES: usize = 48;
/// Dense graphs stay smaller to keep the edge count manageable.
const DENSE_MAX_VERTICES: usize = 24;

/// Samples a distribution and a seed, then generates the fixture.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for an explicitly chosen distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let (vertex_count, edges) = match distribution {
        WeightDistribution::Unique => unique_weights(rng),
        WeightDistribution::ManyIdentical => identical_weights(rng),
        WeightDistribution::Sparse => sparse(rng),
        WeightDistribution::Dense => dense(rng),
        WeightDistribution::Disconnected => disconnected(rng),
    };
    MstFixture {
        vertex_count,
        edges,
        distribution,
    }
}

type Edges = Vec<(usize, usize, f32)>;

/// Connects every vertex to a random earlier one, giving a random spanning
/// tree over `offset..offset + count` with weights from `weight`.
fn spanning_backbone(
    rng: &mut SmallRng,
    offset: usize,
    count: usize,
    edges: &mut Edges,
    mut weight: impl FnMut(&mut SmallRng) -> f32,
) {
    for vertex in 1..count {
        let parent = rng.gen_range(0..vertex);
        let w = weight(rng);
        edges.push((offset + parent, offset + vertex, w));
    }
}

fn random_pairs(
    rng: &mut SmallRng,
    vertex_count: usize,
    probability: f64,
    edges: &mut Edges,
    mut weight: impl FnMut(&mut SmallRng) -> f32,
) {
    for left in 0..vertex_count {
        for right in (left + 1)..vertex_count {
            if rng.gen_bool(probability) {
                let w = weight(rng);
                edges.push((left, right, w));
            }
        }
    }
}

/// Assigns the distinct weights `1..=edges.len()` in random order.
fn assign_unique_weights(rng: &mut SmallRng, edges: &mut Edges) {
    let mut weights: Vec<u16> = (1..=edges.len())
        .map(|w| u16::try_from(w).expect("generated graphs stay below u16::MAX edges"))
        .collect();
    shuffle(&mut weights, rng);
    for (edge, weight) in edges.iter_mut().zip(weights) {
        edge.2 = f32::from(weight);
    }
}

fn unique_weights(rng: &mut SmallRng) -> (usize, Edges) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut edges = Vec::new();
    spanning_backbone(rng, 0, vertex_count, &mut edges, |_| 0.0);
    let probability = rng.gen_range(0.05..0.4);
    random_pairs(rng, vertex_count, probability, &mut edges, |_| 0.0);
    assign_unique_weights(rng, &mut edges);
    (vertex_count, edges)
}

fn identical_weights(rng: &mut SmallRng) -> (usize, Edges) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let pool: Vec<f32> = (0..rng.gen_range(1..=3))
        .map(|_| f32::from(rng.gen_range(1_u8..=10)))
        .collect();
    let mut pick = |r: &mut SmallRng| pool[r.gen_range(0..pool.len())];

    let mut edges = Vec::new();
    spanning_backbone(rng, 0, vertex_count, &mut edges, &mut pick);
    let probability = rng.gen_range(0.2..0.6);
    random_pairs(rng, vertex_count, probability, &mut edges, &mut pick);
    (vertex_count, edges)
}

fn sparse(rng: &mut SmallRng) -> (usize, Edges) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut edges = Vec::new();
    let weight = |r: &mut SmallRng| f32::from(r.gen_range(1_u16..=500));
    spanning_backbone(rng, 0, vertex_count, &mut edges, weight);

    for _ in 0..rng.gen_range(0..=vertex_count / 2) {
        let left = rng.gen_range(0..vertex_count);
        let right = rng.gen_range(0..vertex_count);
        if left != right {
            edges.push((left, right, weight(rng)));
        }
    }
    (vertex_count, edges)
}

fn dense(rng: &mut SmallRng) -> (usize, Edges) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
    let mut edges = Vec::new();
    let weight = |r: &mut SmallRng| f32::from(r.gen_range(1_u16..=1_000));
    spanning_backbone(rng, 0, vertex_count, &mut edges, weight);
    let probability = rng.gen_range(0.7..0.95);
    random_pairs(rng, vertex_count, probability, &mut edges, weight);
    (vertex_count, edges)
}

/// Splits the vertices into two to four components, each internally
/// connected, with no edges between them.
fn disconnected(rng: &mut SmallRng) -> (usize, Edges) {
    let component_count = rng.gen_range(2..=4_usize);
    let weight = |r: &mut SmallRng| f32::from(r.gen_range(1_u16..=200));
    let mut edges = Vec::new();
    let mut offset = 0;
    for _ in 0..component_count {
        let size = rng.gen_range(1..=MAX_VERTICES / 4);
        spanning_backbone(rng, offset, size, &mut edges, weight);
        for _ in 0..rng.gen_range(0..=size) {
            let left = offset + rng.gen_range(0..size);
            let right = offset + rng.gen_range(0..size);
            if left != right {
                edges.push((left, right, weight(rng)));
            }
        }
        offset += size;
    }
    (offset, edges)
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
