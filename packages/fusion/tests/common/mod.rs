use afx_ast::{AstNode, Parse};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("no fixture tree for `{text}`")]
pub struct UnexpectedSource {
    pub text: String,
}

/// Stands in for the markup parser: yields a prepared tree for exactly one
/// source text and rejects everything else.
pub struct Fixture {
    source: &'static str,
    nodes: Vec<AstNode>,
}

impl Fixture {
    pub fn new(source: &'static str, nodes: Vec<AstNode>) -> Self {
        init_tracing();
        Self { source, nodes }
    }
}

impl Parse for Fixture {
    type Error = UnexpectedSource;

    fn parse(&self, source: &str) -> Result<Vec<AstNode>, UnexpectedSource> {
        if source == self.source {
            Ok(self.nodes.clone())
        } else {
            Err(UnexpectedSource {
                text: source.to_string(),
            })
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
