use crate::node::AstNode;

/// A markup parser producing the node list consumed by the converter.
///
/// The root of a parsed document is always a list of sibling nodes. Failures
/// are reported through the parser's own error type and are passed on to the
/// caller untouched.
pub trait Parse {
    type Error: std::error::Error + Send + Sync + 'static;

    fn parse(&self, source: &str) -> Result<Vec<AstNode>, Self::Error>;
}

impl<F, E> Parse for F
where
    F: Fn(&str) -> Result<Vec<AstNode>, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn parse(&self, source: &str) -> Result<Vec<AstNode>, E> {
        self(source)
    }
}
