//! Pipeline – ties placeholder resolution, layout normalization, and style
//! wrapping into a single function call, and hands the result to the
//! rasterizer collaborator.

use serde_json::{Map, Value};

use crate::compose::Composer;
use crate::flex::normalize_flex_layout;
use crate::placeholder::resolve;
use crate::rasterizer::Rasterizer;
use crate::stylesheet::BaselineStyles;

/// Configuration for the normalization pipeline.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    /// Stylesheet injected when wrapping the normalized body.
    pub styles: BaselineStyles,
}

/// Full normalization: editor HTML + data map → rasterizer-ready document.
///
/// Every stage is a pure string transformation; the output is exactly the
/// input contract of [`Rasterizer::render`]. Malformed regions of the input
/// pass through untouched rather than failing the pipeline.
pub fn prepare_html(html: &str, data: &Map<String, Value>, config: &PipelineConfig) -> String {
    // 1. Resolve placeholders
    let resolved = resolve(html, data);

    // 2. Rewrite simple flex rows into table markup
    let normalized = normalize_flex_layout(&resolved);

    // 3. Wrap with the baseline stylesheet
    config.styles.wrap(&normalized)
}

/// Convenience: normalize with the default configuration.
pub fn prepare_html_default(html: &str, data: &Map<String, Value>) -> String {
    prepare_html(html, data, &PipelineConfig::default())
}

/// Normalize and rasterize in one call.
pub fn render_pdf(
    html: &str,
    data: &Map<String, Value>,
    config: &PipelineConfig,
    rasterizer: &dyn Rasterizer,
) -> Result<Vec<u8>, String> {
    let document = prepare_html(html, data, config);
    rasterizer.render(&document, None)
}

/// Compose the fixed header/logo document and rasterize it. `base_uri` is
/// passed through for the rasterizer to resolve relative image paths such as
/// the shell's logo.
pub fn render_composed_pdf(
    html: &str,
    composer: &Composer,
    base_uri: Option<&str>,
    rasterizer: &dyn Rasterizer,
) -> Result<Vec<u8>, String> {
    let document = composer.compose(html);
    rasterizer.render(&document, base_uri)
}
