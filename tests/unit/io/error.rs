//! Tests for error formatting and source chaining

#[cfg(test)]
mod tests {
    use pfpgen::PfpError;
    use pfpgen::io::error::{invalid_color, invalid_size, require_positive};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests messages name the offending parameter and value
    // Verified by omitting the value from the message
    #[test]
    fn test_display_messages() {
        let size = invalid_size("size", &0);
        assert_eq!(
            size.to_string(),
            "Invalid size 'size' = '0': must be a positive integer"
        );

        let color = invalid_color("nope", &"unknown color name");
        assert_eq!(color.to_string(), "Invalid color 'nope': unknown color name");

        let limit = PfpError::CacheLimit {
            path: PathBuf::from("/tmp/cache"),
            limit_mb: 5.0,
        };
        assert!(limit.to_string().contains("5 MB"));
        assert!(limit.to_string().contains("/tmp/cache"));
    }

    // Tests I/O failures expose their cause
    // Verified by returning None for every variant
    #[test]
    fn test_source_chaining() {
        let io = PfpError::FileSystem {
            path: PathBuf::from("missing"),
            operation: "read directory",
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(io.source().map(ToString::to_string), Some("gone".to_string()));
        assert!(io.to_string().contains("read directory"));

        assert!(invalid_size("batches", &0).source().is_none());
        assert!(PfpError::MissingHomeDirectory.source().is_none());
    }

    // Tests zero is the only rejected dimension
    // Verified by rejecting one as well
    #[test]
    fn test_require_positive_boundary() {
        assert_eq!(require_positive("columns", 1).ok(), Some(1));
        assert!(matches!(
            require_positive("columns", 0),
            Err(PfpError::InvalidSize {
                parameter: "columns",
                ..
            })
        ));
    }
}
