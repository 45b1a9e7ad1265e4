use minspan::min_window;
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn large_random_input_scans_in_one_pass() {
    let mut rng = StdRng::seed_from_u64(7);
    let source: Vec<u8> = (0..100_000).map(|_| rng.gen_range(b'a'..=b'f')).collect();
    let target = b"abcdef".to_vec();

    let span = min_window(&source, &target).expect("all six letters occur");
    let window = &source[span.range()];
    for needle in target {
        assert!(window.contains(&needle));
    }
    // a qualifying window over six distinct letters can't be shorter
    assert!(span.len() >= 6);
}

#[test]
fn repeated_searches_are_stable_on_random_data() {
    let mut rng = StdRng::seed_from_u64(42);
    let source: Vec<u8> = (0..10_000).map(|_| rng.gen_range(0u8..8)).collect();
    let target: Vec<u8> = (0..5).map(|_| rng.gen_range(0u8..8)).collect();

    let first = min_window(&source, &target);
    let second = min_window(&source, &target);
    assert_eq!(first, second);
}
