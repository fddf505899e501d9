//! XML emission for validated SOL25 programs
//!
//! The serializer turns a [`Program`] into an [`XmlNode`] tree with a fixed element/attribute vocabulary, and
//! [`XmlWriter`] renders that tree as indented text.
//!
//! ## Document shape
//!
//! ```text
//! program[language, description?]
//! └─ class[name, parent?]
//!    └─ method[selector]
//!       └─ block[arity]
//!          ├─ parameter[order, name]*
//!          └─ assign[order]*
//!             ├─ var[name]
//!             └─ expr
//!                └─ literal[class, value] | var[name] | block[arity] | send[selector]
//!                                                                     ├─ expr
//!                                                                     └─ arg[order]* → expr
//! ```
//!
//! ## Examples
//!
//! ```
//! use sol25::emit::{EmitConfig, to_xml};
//! use sol25::frontend::parser;
//!
//! let program = parser::parse("class Main : Object { run [ ] }").unwrap();
//! let xml = to_xml(&program, &EmitConfig::default());
//! assert!(xml.contains(r#"<class name="Main" parent="Object">"#));
//! assert!(xml.contains(r#"<block arity="0"/>"#));
//! ```

mod config;
mod node;
mod writer;

pub use config::EmitConfig;
pub use node::{AttrValue, Segment, XmlNode};
pub use writer::{XmlWriter, escape_attr};

use crate::frontend::ast::{Assign, Block, ClassDef, Expr, LiteralClass, MethodDef, Program};

/// Render `program` as an XML document.
#[tracing::instrument(skip_all, fields(classes = program.classes.len()))]
pub fn to_xml(program: &Program, config: &EmitConfig) -> String {
    let root = program_node(program, config);
    let mut writer = XmlWriter::new(config.clone());
    writer.document(&root);
    let xml = writer.finish();
    tracing::debug!(bytes = xml.len(), "rendered XML");
    xml
}

/// Build the element tree for `program` without rendering it.
pub fn program_node(program: &Program, config: &EmitConfig) -> XmlNode {
    let mut root = XmlNode::new("program").attr("language", config.language.as_str());
    if let Some(description) = program.description.as_deref().filter(|d| !d.is_empty()) {
        root = root.attr("description", AttrValue::description(description));
    }
    root.children(program.classes.iter().map(class_node))
}

fn class_node(class: &ClassDef) -> XmlNode {
    let mut node = XmlNode::new("class").attr("name", class.name.as_str());
    if let Some(parent) = &class.parent {
        node = node.attr("parent", parent.as_str());
    }
    node.children(class.methods.iter().map(method_node))
}

fn method_node(method: &MethodDef) -> XmlNode {
    XmlNode::new("method")
        .attr("selector", method.selector.as_str())
        .child(block_node(&method.block))
}

fn block_node(block: &Block) -> XmlNode {
    let parameters = block.parameters.iter().enumerate().map(|(i, name)| {
        XmlNode::new("parameter")
            .attr("order", i + 1)
            .attr("name", name.as_str())
    });
    XmlNode::new("block")
        .attr("arity", block.arity())
        .children(parameters)
        .children(block.instructions.iter().map(assign_node))
}

fn assign_node(assign: &Assign) -> XmlNode {
    XmlNode::new("assign")
        .attr("order", assign.order)
        .child(XmlNode::new("var").attr("name", assign.var.as_str()))
        .child(expr_node(&assign.expr))
}

/// `<expr>` wrapper around one expression.
fn expr_node(expr: &Expr) -> XmlNode {
    XmlNode::new("expr").child(expr_body(expr))
}

fn expr_body(expr: &Expr) -> XmlNode {
    match expr {
        Expr::Literal(literal) => {
            let value = match literal.class {
                LiteralClass::String => AttrValue::string_literal(&literal.value),
                _ => AttrValue::text(literal.value.as_str()),
            };
            XmlNode::new("literal")
                .attr("class", literal.class.as_str())
                .attr("value", value)
        }
        Expr::Var(name) => XmlNode::new("var").attr("name", name.as_str()),
        Expr::Block(block) => block_node(block),
        Expr::Send(send) => {
            let args = send
                .args
                .iter()
                .enumerate()
                .map(|(i, arg)| XmlNode::new("arg").attr("order", i + 1).child(expr_node(arg)));
            XmlNode::new("send")
                .attr("selector", send.selector.as_str())
                .child(expr_node(&send.receiver))
                .children(args)
        }
    }
}
