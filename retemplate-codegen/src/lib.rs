//! Regenerates readable template source from an evaluated render tree.
//!
//! ```ignore
//! use retemplate_dom::{Props, h, text};
//!
//! let node = h("button", Props::new().set("type", "submit"), vec![text("Save")]);
//! let src = pollster::block_on(retemplate_codegen::generate_source(&node))?;
//! assert_eq!(src, "<button type=\"submit\">\n  Save\n</button>");
//! ```

pub mod attrs;
pub mod casing;
pub mod directives;
pub mod generator;
pub mod layout;
pub mod listener;
pub mod names;
pub mod serialize;

pub use attrs::AttributeLine;
pub use generator::{CodegenError, CodegenOptions, Generator, Tree, generate_source};
pub use names::resolve_tag_name;
pub use serialize::{ExpressionSerializer, JsSerializer};
