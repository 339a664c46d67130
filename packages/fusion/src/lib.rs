//! Converts AFX markup into Neos fusion.
//!
//! Plain tags such as `<h1>` become `Neos.Fusion:Tag` objects whose attributes
//! land under `attributes.`, qualified names such as `<Vendor.Site:Card>`
//! become direct invocations of that prototype. Multiple children collapse
//! into a `Neos.Fusion:Array`.
//!
//! Parsing is left to a [`Parse`] implementation:
//!
//! ```rust
//! use afx_ast::{AstNode, Element};
//! use afx_fusion::convert;
//!
//! let parser = |_: &str| -> Result<Vec<AstNode>, std::fmt::Error> {
//!     Ok(vec![Element::new("h1").into()])
//! };
//!
//! let fusion = convert(&parser, "<h1></h1>").unwrap();
//! assert_eq!(fusion, "Neos.Fusion:Tag {\n    tagName = 'h1'\n}");
//! ```

use afx_ast::Parse;
use tracing::debug;

pub mod error;
pub mod escape;
pub mod options;
pub mod render;

pub use error::{ConvertError, RenderError};
pub use escape::normalize_whitespace;
pub use options::RenderOptions;
pub use render::{Renderer, INDENTATION};

/// Converts AFX source into fusion, starting without indentation.
pub fn convert<P: Parse>(parser: &P, source: &str) -> Result<String, ConvertError<P::Error>> {
    convert_with_options(parser, source, RenderOptions::default())
}

/// Converts AFX source into fusion with custom options.
///
/// Surrounding whitespace of `source` is ignored. Parse errors are returned
/// as the parser reported them.
pub fn convert_with_options<P: Parse>(
    parser: &P,
    source: &str,
    options: RenderOptions,
) -> Result<String, ConvertError<P::Error>> {
    let source = source.trim();
    let ast = parser.parse(source).map_err(ConvertError::Parse)?;
    let fusion = Renderer::new(options).render(&ast)?;

    debug!(
        source_len = source.len(),
        nodes = ast.len(),
        fusion_len = fusion.len(),
        "converted afx to fusion"
    );

    Ok(fusion)
}
