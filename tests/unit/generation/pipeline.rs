//! Tests for generation configuration and the batch pipeline

#[cfg(test)]
mod tests {
    use pfpgen::PfpError;
    use pfpgen::color::Rgb;
    use pfpgen::generation::pipeline::{GenerationConfig, generate, generate_batch};
    use pfpgen::io::configuration::{DEFAULT_PIXEL_BLOCK, DEFAULT_SIZE};
    use pfpgen::pattern::ColorWeight;

    // Tests the default configuration values
    // Verified by changing the default size
    #[test]
    fn test_default_config() {
        let config = GenerationConfig::default();
        assert_eq!(config.size, DEFAULT_SIZE);
        assert_eq!(config.pixel_block, DEFAULT_PIXEL_BLOCK);
        assert_eq!(config.batches, 1);
        assert_eq!(config.background, None);
        assert_eq!(config.foreground, None);
        assert_eq!(config.color_weight, ColorWeight::new(0.5));
        assert!(config.validate().is_ok());
    }

    // Tests each zero dimension is reported by name
    // Verified by skipping batch validation
    #[test]
    fn test_validate_rejects_zero_dimensions() {
        let cases = [
            (
                GenerationConfig {
                    size: 0,
                    ..GenerationConfig::default()
                },
                "size",
            ),
            (
                GenerationConfig {
                    pixel_block: 0,
                    ..GenerationConfig::default()
                },
                "pixel_block",
            ),
            (
                GenerationConfig {
                    batches: 0,
                    ..GenerationConfig::default()
                },
                "batches",
            ),
        ];

        for (config, expected) in cases {
            match config.validate() {
                Err(PfpError::InvalidSize { parameter, .. }) => assert_eq!(parameter, expected),
                other => unreachable!("Expected InvalidSize for {expected}, got {other:?}"),
            }
            assert!(generate(Some("github"), &config).is_err());
            assert!(generate_batch(Some("github"), &config).is_err());
        }
    }

    // Tests overrides are taken from the configured colors
    // Verified by swapping background and foreground
    #[test]
    fn test_overrides_from_config() {
        let config = GenerationConfig {
            background: Some(Rgb::BLACK),
            foreground: Some(Rgb::WHITE),
            ..GenerationConfig::default()
        };
        let overrides = config.overrides();
        assert_eq!(overrides.background, Some(Rgb::BLACK));
        assert_eq!(overrides.foreground, Some(Rgb::WHITE));
    }

    // Tests a single generation carries seed, grid, colors and image
    // Verified by rendering with the default pixel block
    #[test]
    fn test_generate_outputs() {
        let config = GenerationConfig {
            size: 7,
            pixel_block: 3,
            ..GenerationConfig::default()
        };
        let generated = generate(Some("outputs"), &config).unwrap();

        assert_eq!(generated.grid.size(), 7);
        assert_eq!(generated.image.dimensions(), (21, 21));
        assert_eq!(generated.seed, pfpgen::seed::derive_seed(Some("outputs")));
    }

    // Tests batch output order and count with text
    // Verified by generating one fewer element
    #[test]
    fn test_generate_batch_with_text() {
        let config = GenerationConfig {
            batches: 4,
            ..GenerationConfig::default()
        };
        let batch = generate_batch(Some("same"), &config).unwrap();

        assert_eq!(batch.len(), 4);
        let first = batch.first().unwrap();
        for item in &batch {
            assert_eq!(item.image, first.image);
            assert_eq!(item.seed, first.seed);
        }
    }

    // Tests batch elements without text each get their own seed
    // Verified by resolving the random seed once per batch
    #[test]
    fn test_generate_batch_random() {
        let config = GenerationConfig {
            batches: 6,
            ..GenerationConfig::default()
        };
        let batch = generate_batch(None, &config).unwrap();

        assert_eq!(batch.len(), 6);
        for (i, a) in batch.iter().enumerate() {
            for b in batch.iter().skip(i + 1) {
                assert_ne!(a.seed, b.seed);
            }
        }
    }
}
