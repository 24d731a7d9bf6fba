use std::future::Future;
use std::pin::Pin;

use retemplate_dom::{ChildContent, Component, LoadError, RenderNode};
use thiserror::Error;

use crate::attrs::Encoder;
use crate::directives::{DirectiveNames, reconstruct};
use crate::layout::format_element;
use crate::names::resolve_tag_name;
use crate::serialize::{ExpressionSerializer, JsSerializer};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodegenError {
    #[error("failed to resolve async component: {0}")]
    ComponentLoad(#[from] LoadError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CodegenOptions {
    /// Spaces per nesting level.
    pub indent: usize,
    /// Qualifier the runtime puts in front of setup bindings, removed from
    /// every serialized expression.
    pub scope_prefix: String,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            scope_prefix: "$setup.".to_string(),
        }
    }
}

/// Roots to print: a single node or a sequence of siblings.
#[derive(Debug, Clone, Copy)]
pub struct Tree<'a>(&'a [RenderNode]);

impl<'a> From<&'a RenderNode> for Tree<'a> {
    fn from(node: &'a RenderNode) -> Self {
        Tree(std::slice::from_ref(node))
    }
}
impl<'a> From<&'a [RenderNode]> for Tree<'a> {
    fn from(nodes: &'a [RenderNode]) -> Self {
        Tree(nodes)
    }
}
impl<'a> From<&'a Vec<RenderNode>> for Tree<'a> {
    fn from(nodes: &'a Vec<RenderNode>) -> Self {
        Tree(nodes)
    }
}
impl<'a, const N: usize> From<&'a [RenderNode; N]> for Tree<'a> {
    fn from(nodes: &'a [RenderNode; N]) -> Self {
        Tree(nodes)
    }
}

/// Regenerates template source from render trees.
pub struct Generator {
    options: CodegenOptions,
    serializer: Box<dyn ExpressionSerializer>,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    pub fn new() -> Self {
        Self::with_options(CodegenOptions::default())
    }

    pub fn with_options(options: CodegenOptions) -> Self {
        Self {
            options,
            serializer: Box::new(JsSerializer),
        }
    }

    pub fn with_serializer(mut self, serializer: impl ExpressionSerializer + 'static) -> Self {
        self.serializer = Box::new(serializer);
        self
    }

    /// Template source for `tree`, lines joined with `\n`.
    pub async fn generate<'a>(&self, tree: impl Into<Tree<'a>>) -> Result<String, CodegenError> {
        Ok(self.render(tree).await?.join("\n"))
    }

    /// Output lines for `tree`; sibling roots are concatenated.
    pub async fn render<'a>(&self, tree: impl Into<Tree<'a>>) -> Result<Vec<String>, CodegenError> {
        let pass = Pass {
            encoder: Encoder {
                serializer: self.serializer.as_ref(),
                scope_prefix: &self.options.scope_prefix,
            },
            indent: self.options.indent,
            directive_names: DirectiveNames::default(),
        };
        let tree: Tree<'a> = tree.into();
        let mut lines = Vec::new();
        for node in tree.0 {
            lines.extend(pass.print_node(node).await?);
        }
        Ok(lines)
    }
}

type NodeFuture<'p> = Pin<Box<dyn Future<Output = Result<Vec<String>, CodegenError>> + 'p>>;

/// State of one `render` call.
struct Pass<'g> {
    encoder: Encoder<'g>,
    indent: usize,
    directive_names: DirectiveNames,
}

impl Pass<'_> {
    fn print_node<'p>(&'p self, node: &'p RenderNode) -> NodeFuture<'p> {
        Box::pin(async move {
            let (component, data) = match node {
                RenderNode::Text(t) => return Ok(vec![t.trim().to_string()]),
                RenderNode::Element { data, .. } => (None, data),
                RenderNode::Component { component, data } => (Some(component), data),
            };

            if let Some(Component::Async(lazy)) = component {
                if !lazy.is_resolved() {
                    log::trace!("waiting for async component");
                    lazy.resolve().await?;
                }
            }

            let recovered = reconstruct(data, &self.encoder, &self.directive_names);
            let mut attrs = recovered.attrs;
            attrs.extend(self.encoder.encode_props(&data.props, &recovered.consumed));

            let tag = resolve_tag_name(node);

            let mut children = Vec::new();
            match data.children.content() {
                ChildContent::Text(t) => children.extend(raw_text_lines(t)),
                ChildContent::Nodes(nodes) => {
                    for child in nodes.iter() {
                        children.extend(self.print_node(child).await?);
                    }
                }
            }

            log::trace!("<{tag}>: {} attrs, {} child lines", attrs.len(), children.len());
            Ok(format_element(&tag, &attrs, &children, self.indent))
        })
    }
}

fn raw_text_lines(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n')
        .map(|l| l.trim_end_matches('\r').to_string())
        .collect()
}

/// Regenerate template source with default options.
pub async fn generate_source<'a>(tree: impl Into<Tree<'a>>) -> Result<String, CodegenError> {
    Generator::new().generate(tree).await
}
