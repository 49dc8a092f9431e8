//! Lattice Composition Laws
//!
//! Composition treats each lattice as a function on colors. These tests
//! check that the usual function-composition laws survive sampling and
//! interpolation, exactly where interpolation is exact and within a small
//! bound where it is not.

use colorcube_core::{
    ColorFunc, FnColorFunc, Identity, Lattice, Lut3dTransform, Rgb, compose_all, compose_lattices,
};
use colorcube_tests::patterns::sizes;
use colorcube_tests::{
    ColorPattern, ErrorStats, affine_lattice, compare_colors, generate_colors, graded_lattice,
    random_lattice,
};

fn apply(lattice: &Lattice, colors: &[Rgb]) -> Vec<Rgb> {
    Lut3dTransform::new(lattice.clone()).map_colors(colors)
}

fn compare_lattices(a: &Lattice, b: &Lattice) -> ErrorStats {
    assert_eq!(a.size(), b.size());
    compare_colors(a.samples(), b.samples())
}

#[test]
fn test_identity_is_left_and_right_unit() {
    let identity = Lattice::identity(sizes::DEFAULT).unwrap();

    for seed in 0..4 {
        let a = random_lattice(seed, sizes::DEFAULT);

        let left = compose_lattices(&identity, &a);
        let right = compose_lattices(&a, &identity);

        assert_eq!(left, a, "identity after a must be a (seed {seed})");
        assert!(
            compare_lattices(&right, &a).is_exact(),
            "a after identity must be a (seed {seed})"
        );
    }
}

#[test]
fn test_sampling_at_lattice_points_reproduces_samples() {
    // resample without the identity short-circuit
    for size in [sizes::MINIMAL, sizes::SMALL, sizes::DEFAULT] {
        let a = random_lattice(11, size);
        let lut = Lut3dTransform::new(a.clone());
        let resampled = FnColorFunc(|c: Rgb| lut.transform(c)).to_lattice(size).unwrap();

        let stats = compare_lattices(&resampled, &a);
        assert!(stats.is_exact(), "size {size}: max error {}", stats.max);
    }
}

#[test]
fn test_affine_composition_is_associative() {
    for seed in 0..8 {
        let a = affine_lattice(seed, sizes::DEFAULT);
        let b = affine_lattice(seed + 100, sizes::DEFAULT);
        let c = affine_lattice(seed + 200, sizes::DEFAULT);

        let left = compose_lattices(&compose_lattices(&a, &b), &c);
        let right = compose_lattices(&a, &compose_lattices(&b, &c));

        let stats = compare_lattices(&left, &right);
        assert!(stats.is_exact(), "seed {seed}: max error {}", stats.max);
    }
}

#[test]
fn test_graded_composition_is_nearly_associative() {
    let a = graded_lattice(1, sizes::DEFAULT);
    let b = graded_lattice(2, sizes::DEFAULT);
    let c = graded_lattice(3, sizes::DEFAULT);

    let left = compose_lattices(&compose_lattices(&a, &b), &c);
    let right = compose_lattices(&a, &compose_lattices(&b, &c));

    let stats = compare_lattices(&left, &right);
    eprintln!(
        "graded associativity: mean {:.2e} p95 {:.2e} max {:.2e}",
        stats.mean, stats.p95, stats.max
    );
    assert!(stats.max < 0.05);
    assert!(stats.mean < colorcube_tests::accuracy::ONE_CODE_VALUE);
}

#[test]
fn test_combined_lattice_matches_chain() {
    // a photo pipeline: three looks applied one after another
    let looks: Vec<Lattice> = (0..3)
        .map(|i| affine_lattice(40 + i, sizes::DEFAULT))
        .collect();
    let colors = generate_colors(ColorPattern::Random(5), 5000);

    let mut chained = colors.clone();
    for look in &looks {
        chained = apply(look, &chained);
    }

    // compose_all applies the last element first
    let combined = compose_all(looks.iter().rev(), sizes::DEFAULT).unwrap();
    let once = apply(&combined, &colors);

    let stats = compare_colors(&chained, &once);
    assert!(stats.is_exact(), "max error {}", stats.max);
}

#[test]
fn test_repeated_inversion_does_not_drift() {
    let invert = Identity
        .to_lattice(sizes::DEFAULT)
        .unwrap()
        .map(|c| Rgb::WHITE - c);

    let chain = vec![&invert; 20];
    let result = compose_all(chain, sizes::DEFAULT).unwrap();

    let identity = Lattice::identity(sizes::DEFAULT).unwrap();
    let stats = compare_lattices(&result, &identity);
    assert!(stats.is_excellent(), "max error {}", stats.max);
}

#[test]
fn test_empty_chain_and_size_mismatch() {
    let empty = compose_all(Vec::<&Lattice>::new(), sizes::SMALL).unwrap();
    assert!(empty.is_identity());

    let small = random_lattice(0, sizes::SMALL);
    let large = random_lattice(0, sizes::LARGE);
    assert!(compose_all([&small, &large], sizes::SMALL).is_err());
}

#[test]
fn test_identity_after_out_of_range_look_clamps() {
    // a look that overshoots the cube, followed by a plain identity
    let overshoot = Lattice::identity(sizes::SMALL).unwrap().map(|c| c * 1.5);
    let identity = Lattice::identity(sizes::SMALL).unwrap();

    let combined = compose_lattices(&identity, &overshoot);
    assert!(combined.samples().iter().all(Rgb::is_in_gamut));

    let chained = apply(&identity, &apply(&overshoot, &[Rgb::WHITE]));
    assert_eq!(apply(&combined, &[Rgb::WHITE]), chained);
    assert_eq!(chained, vec![Rgb::WHITE]);
}
