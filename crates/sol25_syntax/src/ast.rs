//! Abstract Syntax Tree definitions for SOL25
//!
//! The tree is built once by the parser and is read-only afterwards: the analyzer only inspects it and the
//! emitter consumes it. Nodes own their children; class inheritance is recorded by name only.

use std::fmt;

/// Identifier (variable, parameter or class name)
pub type Ident = String;

/// A whole program: classes in source order plus the optional program description.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub classes: Vec<ClassDef>,
    /// Raw text of the comment attached to `Main>>run`, if any.
    pub description: Option<String>,
}

impl Program {
    pub fn class(&self, name: &str) -> Option<&ClassDef> {
        self.classes.iter().find(|c| c.name == name)
    }
}

// ============================================================================
// Declarations
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDef {
    pub name: Ident,
    /// Explicit parent class; `None` means the implicit `Object`.
    pub parent: Option<Ident>,
    pub methods: Vec<MethodDef>,
    /// 1-based source line of the class header.
    pub line: usize,
}

impl ClassDef {
    pub fn method(&self, selector: &str) -> Option<&MethodDef> {
        self.methods.iter().find(|m| m.selector == selector)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDef {
    /// Unary (`run`) or keyword (`at:put:`) selector.
    pub selector: String,
    /// Quoted description following the selector in the method header.
    pub description: Option<String>,
    pub block: Block,
    /// 1-based source line of the method header.
    pub line: usize,
}

/// A block: the body of every method, and a first-class value inside expressions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    pub parameters: Vec<Ident>,
    pub instructions: Vec<Assign>,
    /// 1-based source line where the block opens.
    pub line: usize,
}

impl Block {
    /// Number of declared parameters.
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

// ============================================================================
// Statements
// ============================================================================

/// `var := expr.`, the only kind of statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assign {
    /// 1-based position within the enclosing block.
    pub order: usize,
    pub var: Ident,
    pub expr: Expr,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Literal(Literal),
    /// Reference to a parameter, a local, `self` or `super`.
    Var(Ident),
    Send(Send),
    Block(Block),
}

impl Expr {
    pub fn literal(class: LiteralClass, value: impl Into<String>) -> Self {
        Expr::Literal(Literal {
            class,
            value: value.into(),
        })
    }

    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    /// Class name if this expression is a class reference (`Integer`, `Main`, ...).
    pub fn as_class_reference(&self) -> Option<&str> {
        match self {
            Expr::Literal(Literal {
                class: LiteralClass::Class,
                value,
            }) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub class: LiteralClass,
    /// Textual form: digits (with sign) for integers, the raw text between the quotes for strings, the class name
    /// for class references.
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralClass {
    Integer,
    String,
    Nil,
    True,
    False,
    /// A bare class name used as a value.
    Class,
}

impl LiteralClass {
    /// Spelling used for the `class` attribute of emitted literals.
    pub fn as_str(self) -> &'static str {
        match self {
            LiteralClass::Integer => "Integer",
            LiteralClass::String => "String",
            LiteralClass::Nil => "Nil",
            LiteralClass::True => "True",
            LiteralClass::False => "False",
            LiteralClass::Class => "class",
        }
    }

    /// Parse the class of a `nil`/`true`/`false` literal (`"Nil"` → `Nil`).
    pub fn from_keyword_class(class: &str) -> Option<Self> {
        match class {
            "Nil" => Some(LiteralClass::Nil),
            "True" => Some(LiteralClass::True),
            "False" => Some(LiteralClass::False),
            _ => None,
        }
    }
}

impl fmt::Display for LiteralClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message send: `receiver selector` or `receiver key: arg key: arg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Send {
    pub selector: String,
    pub receiver: Box<Expr>,
    /// One argument per `:` in the selector, in order.
    pub args: Vec<Expr>,
}

// ============================================================================
// Traversal helpers
// ============================================================================

/// Visit every block literal nested anywhere inside `expr` (outermost first).
pub fn for_each_nested_block<'a>(expr: &'a Expr, f: &mut dyn FnMut(&'a Block)) {
    match expr {
        Expr::Literal(_) | Expr::Var(_) => {}
        Expr::Send(send) => {
            for_each_nested_block(&send.receiver, f);
            for arg in &send.args {
                for_each_nested_block(arg, f);
            }
        }
        Expr::Block(block) => {
            f(block);
            for assign in &block.instructions {
                for_each_nested_block(&assign.expr, f);
            }
        }
    }
}

/// Visit `block` itself and then every block literal nested inside its instructions.
pub fn for_each_block<'a>(block: &'a Block, f: &mut dyn FnMut(&'a Block)) {
    f(block);
    for assign in &block.instructions {
        for_each_nested_block(&assign.expr, f);
    }
}
