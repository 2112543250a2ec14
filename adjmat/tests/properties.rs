//! Algebraic properties checked over randomly generated graphs.

use adjmat::{AdjacencyMatrix, Graph, GraphError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const CASES: usize = 200;

fn random_graph(rng: &mut StdRng, rows: usize, cols: usize) -> Graph {
    Graph::from_rows(
        (0..rows)
            .map(|_| (0..cols).map(|_| rng.gen_range(-1000..=1000)).collect())
            .collect(),
    )
}

fn random_pair(rng: &mut StdRng) -> (Graph, Graph) {
    let rows = rng.gen_range(1..=8);
    let cols = rng.gen_range(1..=8);
    (
        random_graph(rng, rows, cols),
        random_graph(rng, rows, cols),
    )
}

#[test]
fn add_then_subtract_restores() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..CASES {
        let (a, b) = random_pair(&mut rng);
        let sum = (&a + &b).unwrap();
        assert_eq!((&sum - &b).unwrap(), a);

        let dims = a.dimensions();
        for i in 0..dims.rows {
            for j in 0..dims.cols {
                assert_eq!(
                    sum.get_element(i, j),
                    Some(a.get_element(i, j).unwrap() + b.get_element(i, j).unwrap())
                );
            }
        }
    }
}

#[test]
fn negation_properties() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..CASES {
        let (a, _) = random_pair(&mut rng);
        assert_eq!(-(-&a), a);

        let zero = (&a + &(-&a)).unwrap();
        assert_eq!(zero.dimensions(), a.dimensions());
        assert_eq!(zero.edge_count(), 0);
    }
}

#[test]
fn scale_then_divide_restores() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..CASES {
        let (a, _) = random_pair(&mut rng);
        let k = loop {
            let k = rng.gen_range(-50..=50);
            if k != 0 {
                break k;
            }
        };
        assert_eq!((&a * k / k).unwrap(), a);
        assert_eq!(k * &a, &a * k);
    }
}

#[test]
fn increment_then_decrement_restores() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..CASES {
        let (a, _) = random_pair(&mut rng);
        let mut g = a.clone();

        let before = g.post_increment();
        assert_eq!(before, a);
        let cells = a.dimensions().rows * a.dimensions().cols;
        assert_eq!(g.weight_sum(), a.weight_sum() + cells as i64);

        g.decrement();
        assert_eq!(g, a);
    }
}

#[test]
fn mismatched_shapes_always_fail() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..CASES {
        let rows = rng.gen_range(1..=6);
        let cols = rng.gen_range(1..=6);
        let a = random_graph(&mut rng, rows, cols);
        let b = random_graph(&mut rng, rows, cols + 1);

        assert!(matches!(&a + &b, Err(GraphError::DimensionMismatch { .. })));
        assert!(matches!(&a - &b, Err(GraphError::DimensionMismatch { .. })));
        assert!(matches!(&a * &b, Err(GraphError::DimensionMismatch { .. })));
    }
}

#[test]
fn ordering_is_consistent() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..CASES {
        let (a, b) = random_pair(&mut rng);

        assert!(!(a > b && b > a));
        assert_eq!(a < b, b > a);
        assert_eq!(a >= b, !(a < b));
        assert_eq!(a <= b, !(a > b));
        if a.weight_sum() != b.weight_sum() {
            assert_eq!(a > b, a.weight_sum() > b.weight_sum());
        }
    }
}

#[test]
fn render_parses_back() {
    let mut rng = StdRng::seed_from_u64(29);
    for _ in 0..CASES {
        let (a, _) = random_pair(&mut rng);
        assert_eq!(a.render().parse::<Graph>(), Ok(a));
    }
}
