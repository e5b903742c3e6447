//! Rasterizer seam – the external collaborator that turns final HTML into
//! PDF bytes.
//!
//! The normalization pipeline ends with a string hand-off; everything about
//! actual PDF emission (fonts, images, pagination) lives behind this trait.
//! Implementations typically wrap an external print engine and may block.

/// Converts a complete HTML document into PDF bytes.
pub trait Rasterizer {
    /// Render `html` to PDF. `base_uri`, when given, is the base the engine
    /// resolves relative resource paths (images, fonts) against.
    ///
    /// Failures are surfaced verbatim to the caller; the pipeline performs
    /// no retries.
    fn render(&self, html: &str, base_uri: Option<&str>) -> Result<Vec<u8>, String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test double that records its input and returns canned bytes.
    struct Canned;

    impl Rasterizer for Canned {
        fn render(&self, html: &str, base_uri: Option<&str>) -> Result<Vec<u8>, String> {
            assert!(html.contains("<html>") || html.contains("<html "));
            assert_eq!(base_uri, Some("file:///srv/static/"));
            Ok(b"%PDF-canned".to_vec())
        }
    }

    #[test]
    fn trait_object_hand_off() {
        let r: &dyn Rasterizer = &Canned;
        let bytes = r
            .render("<html><body>x</body></html>", Some("file:///srv/static/"))
            .unwrap();
        assert_eq!(&bytes[0..5], b"%PDF-");
    }
}
