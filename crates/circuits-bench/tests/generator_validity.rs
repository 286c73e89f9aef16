//! Tests that generated graphs have the promised shape across tiers and seeds.
#![allow(clippy::expect_used)]

use circuits_bench::correctness::complete_digraph_cycle_count;
use circuits_bench::{GeneratorConfig, SizeTier, complete_digraph, generate_graph};
use circuits_core::RestrictedSccFinder;

#[test]
fn tiers_have_requested_vertex_counts() {
    for (tier, expected) in [
        (SizeTier::Small, 60),
        (SizeTier::Medium, 600),
        (SizeTier::Large, 3_000),
        (SizeTier::XLarge, 10_000),
    ] {
        let generated = generate_graph(&tier.config(42)).expect("generated graph");
        assert_eq!(generated.graph.len(), expected, "{tier:?}");
        assert_eq!(generated.cluster.len(), expected, "{tier:?}");
    }
}

#[test]
fn every_tier_carries_its_cluster_rings() {
    for tier in [SizeTier::Small, SizeTier::Medium] {
        let config = tier.config(42);
        let generated = generate_graph(&config).expect("generated graph");
        // One ring edge per vertex at minimum; an empty graph would mean edges were lost.
        assert!(
            generated.graph.edge_count() >= config.vertices,
            "{tier:?}: only {} edges",
            generated.graph.edge_count()
        );
    }
}

#[test]
fn same_seed_same_graph() {
    for seed in [42, 123, 999] {
        let a = generate_graph(&SizeTier::Medium.config(seed)).expect("generated graph");
        let b = generate_graph(&SizeTier::Medium.config(seed)).expect("generated graph");
        assert_eq!(a.graph, b.graph, "seed={seed}");
        assert_eq!(a.cluster, b.cluster, "seed={seed}");
    }
}

#[test]
fn different_seeds_differ() {
    let a = generate_graph(&SizeTier::Small.config(1)).expect("generated graph");
    let b = generate_graph(&SizeTier::Small.config(2)).expect("generated graph");
    assert_ne!(a.graph, b.graph);
}

#[test]
fn clusters_have_configured_size() {
    let config = SizeTier::Medium.config(42);
    let generated = generate_graph(&config).expect("generated graph");
    let mut sizes = vec![0usize; config.vertices.div_ceil(config.cluster_size)];
    for &c in &generated.cluster {
        sizes[c] += 1;
    }
    assert!(sizes.iter().all(|&s| s == config.cluster_size), "{sizes:?}");
}

#[test]
fn every_component_lies_in_one_cluster() {
    for seed in [42, 7, 2024] {
        let generated = generate_graph(&SizeTier::Small.config(seed)).expect("generated graph");
        let mut finder = RestrictedSccFinder::new(&generated.graph);
        let mut cursor = 0;
        let mut components = 0;
        while let Some(result) = finder.find(cursor) {
            let members = result.members();
            let cluster = generated.cluster[result.anchor()];
            assert!(
                members.iter().all(|&m| generated.cluster[m] == cluster),
                "seed={seed}: component {members:?} spans clusters"
            );
            components += 1;
            cursor = result.anchor() + 1;
        }
        assert!(components >= 15, "seed={seed}: only {components} components");
    }
}

#[test]
fn bridges_never_point_backwards() {
    let generated = generate_graph(&SizeTier::Medium.config(42)).expect("generated graph");
    for (v, successors) in generated.graph.iter() {
        for &w in successors {
            assert!(
                generated.cluster[w] >= generated.cluster[v],
                "edge {v} -> {w} runs from cluster {} back to {}",
                generated.cluster[v],
                generated.cluster[w]
            );
        }
    }
}

#[test]
fn unshuffled_clusters_are_contiguous() {
    let config = GeneratorConfig {
        shuffle: false,
        ..SizeTier::Small.config(42)
    };
    let generated = generate_graph(&config).expect("generated graph");
    for (v, &c) in generated.cluster.iter().enumerate() {
        assert_eq!(c, v / config.cluster_size);
    }
}

#[test]
fn self_loop_probability_one_loops_every_vertex() {
    let config = GeneratorConfig {
        self_loop_probability: 1.0,
        ..SizeTier::Small.config(42)
    };
    let generated = generate_graph(&config).expect("generated graph");
    for v in 0..generated.graph.len() {
        assert!(generated.graph.has_edge(v, v), "vertex {v} has no self-loop");
    }
}

#[test]
fn complete_digraph_shape() {
    let k4 = complete_digraph(4).expect("complete digraph");
    assert_eq!(k4.len(), 4);
    assert_eq!(k4.edge_count(), 12);
    assert!(!k4.has_edge(2, 2));
    assert_eq!(complete_digraph_cycle_count(4), 20);
}

mod seeded {
    use circuits_bench::correctness::{check_cycle_invariants, check_cycles_within_clusters};
    use circuits_bench::{GeneratorConfig, generate_graph};
    use circuits_core::enumerate_cycle_indices;
    use proptest::prelude::*;

    fn small_config() -> impl Strategy<Value = GeneratorConfig> {
        (any::<u64>(), 0usize..40, 1usize..5, 0.0f64..=1.0, any::<bool>()).prop_map(
            |(seed, vertices, cluster_size, cluster_density, shuffle)| GeneratorConfig {
                seed,
                vertices,
                cluster_size,
                cluster_density,
                bridges: vertices,
                self_loop_probability: 0.1,
                shuffle,
            },
        )
    }

    proptest! {
        #[test]
        fn any_config_yields_clustered_cycles(config in small_config()) {
            let generated = generate_graph(&config).expect("generated graph");
            prop_assert_eq!(generated.graph.len(), config.vertices);
            let cycles = enumerate_cycle_indices(&generated.graph).expect("enumeration");
            prop_assert!(check_cycle_invariants(&generated.graph, &cycles).is_ok());
            prop_assert!(check_cycles_within_clusters(&generated.cluster, &cycles).is_ok());
        }
    }
}
