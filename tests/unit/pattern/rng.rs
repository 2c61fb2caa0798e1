//! Tests for the seeded pattern generator

#[cfg(test)]
mod tests {
    use pfpgen::color::Rgb;
    use pfpgen::pattern::rng::PatternRng;
    use pfpgen::seed::{Seed, derive_seed};

    // Tests the PCG64 stream for a known seed
    // Verified by swapping PCG64 for StdRng
    #[test]
    fn test_known_stream() {
        let mut rng = PatternRng::new(&derive_seed(Some("github")));
        let cells: Vec<bool> = (0..15).map(|_| rng.draw_cell()).collect();
        let expected = [
            true, true, true, false, false, false, false, false, true, true, false, true, false,
            false, true,
        ];
        assert_eq!(cells, expected);
    }

    // Tests colors come from the top three bytes of one word
    // Verified by taking the low bytes instead
    #[test]
    fn test_draw_rgb_uses_high_bytes() {
        let mut rng = PatternRng::new(&derive_seed(Some("github")));
        assert_eq!(rng.draw_rgb(), Rgb::new(204, 160, 33));
    }

    // Tests two generators with the same seed agree
    // Verified by reseeding from system entropy
    #[test]
    fn test_same_seed_same_stream() {
        let seed = Seed::from_bytes([7; 32]);
        let mut a = PatternRng::new(&seed);
        let mut b = PatternRng::new(&seed);
        for _ in 0..100 {
            assert_eq!(a.draw_cell(), b.draw_cell());
            assert_eq!(a.draw_rgb(), b.draw_rgb());
        }
    }

    // Tests different seeds diverge quickly
    // Verified by ignoring the seed bytes
    #[test]
    fn test_different_seeds_differ() {
        let mut a = PatternRng::new(&Seed::from_bytes([1; 32]));
        let mut b = PatternRng::new(&Seed::from_bytes([2; 32]));
        let any_different = (0..10).any(|_| a.draw_rgb() != b.draw_rgb());
        assert!(any_different);
    }
}
