use std::rc::Rc;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Shared handle to an AST node.
///
/// Nodes are immutable once constructed, so the deep copies the language
/// semantics call for are expressed as cheap reference-count bumps. Values
/// stored in the variable map, array elements, and evaluation results all
/// share the same representation.
pub type Node = Rc<Ast>;

/// An abstract syntax tree node.
///
/// The same six variants serve both as syntax and as runtime values: `Int`,
/// `Str` and `Array` are the value kinds, while `Var`, `Call` and `Program`
/// are reduced away during evaluation. Every variant carries the source line
/// of its first token for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Ast {
    /// An integer literal or integer value.
    Int {
        /// The integer value.
        value: i64,
        /// Line number in the source code.
        line: usize,
    },
    /// A string literal or string value. Strings are byte sequences.
    Str {
        /// The string contents.
        text: String,
        /// Line number in the source code.
        line: usize,
    },
    /// An array constructor or array value.
    Array {
        /// The elements, in insertion order.
        children: Vec<Node>,
        /// Line number in the source code.
        line: usize,
    },
    /// A reference to a variable by name.
    Var {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A function invocation. An empty `name` is a parenthesised grouping
    /// that evaluates its arguments in order and yields the last.
    Call {
        /// Name of the function, or `""` for a grouping.
        name: String,
        /// The unevaluated argument nodes.
        args: Vec<Node>,
        /// Line number in the source code.
        line: usize,
    },
    /// The top-level sequence of expressions of a program.
    Program {
        /// The expressions, in source order.
        stmts: Vec<Node>,
        /// Line number in the source code.
        line: usize,
    },
}

impl Ast {
    /// Builds an integer node.
    #[must_use]
    pub fn int(value: i64, line: usize) -> Node {
        Rc::new(Self::Int { value, line })
    }

    /// Builds a string node.
    #[must_use]
    pub fn str(text: String, line: usize) -> Node {
        Rc::new(Self::Str { text, line })
    }

    /// Builds an array node from already-evaluated elements.
    #[must_use]
    pub fn array(children: Vec<Node>, line: usize) -> Node {
        Rc::new(Self::Array { children, line })
    }

    /// Gets the line number recorded on `self`.
    ///
    /// ## Example
    /// ```
    /// use ega::ast::Ast;
    ///
    /// let node = Ast::int(42, 7);
    /// assert_eq!(node.line_number(), 7);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Int { line, .. }
            | Self::Str { line, .. }
            | Self::Array { line, .. }
            | Self::Var { line, .. }
            | Self::Call { line, .. }
            | Self::Program { line, .. } => *line,
        }
    }

    /// Returns the integer tag of this node's kind, as exposed by the
    /// `typeid` builtin. Value kinds order as `Int < Str < Array`; the
    /// `compare` builtin relies on that ordering.
    #[must_use]
    pub const fn type_id(&self) -> i64 {
        match self {
            Self::Int { .. } => 0,
            Self::Str { .. } => 1,
            Self::Array { .. } => 2,
            Self::Var { .. } => 3,
            Self::Call { .. } => 4,
            Self::Program { .. } => 5,
        }
    }

    /// Extracts the integer value, or reports a type mismatch at this
    /// node's line.
    pub fn as_int(&self) -> EvalResult<i64> {
        match self {
            Self::Int { value, .. } => Ok(*value),
            _ => Err(RuntimeError::TypeMismatch { line: self.line_number() }),
        }
    }

    /// Extracts the string contents, or reports a type mismatch at this
    /// node's line.
    pub fn as_str(&self) -> EvalResult<&str> {
        match self {
            Self::Str { text, .. } => Ok(text),
            _ => Err(RuntimeError::TypeMismatch { line: self.line_number() }),
        }
    }

    /// Extracts the array elements, or reports a type mismatch at this
    /// node's line.
    pub fn as_array(&self) -> EvalResult<&[Node]> {
        match self {
            Self::Array { children, .. } => Ok(children),
            _ => Err(RuntimeError::TypeMismatch { line: self.line_number() }),
        }
    }

    /// Extracts the variable name, or reports a type mismatch at this
    /// node's line. `set`, `define`, `for`, `foreach` and the three-argument
    /// `at` require their binding argument to be a plain variable reference.
    pub fn as_var_name(&self) -> EvalResult<&str> {
        match self {
            Self::Var { name, .. } => Ok(name),
            _ => Err(RuntimeError::TypeMismatch { line: self.line_number() }),
        }
    }

    /// Renders this node as source-like text.
    ///
    /// With `quoted` set, strings are wrapped in `"…"` with internal quotes
    /// doubled; without it they render as their raw bytes. Containers render
    /// as `{ e1, e2, … }` with the flag applied recursively. This is the
    /// format printed by `dump`/`dumpln` (quoted) and `print`/`str`
    /// (unquoted).
    ///
    /// ## Example
    /// ```
    /// use ega::ast::Ast;
    ///
    /// let value = Ast::array(vec![Ast::int(1, 1), Ast::str("a\"b".to_string(), 1)], 1);
    /// assert_eq!(value.dump(true), r#"{ 1, "a""b" }"#);
    /// assert_eq!(value.dump(false), r#"{ 1, a"b }"#);
    /// ```
    #[must_use]
    pub fn dump(&self, quoted: bool) -> String {
        match self {
            Self::Int { value, .. } => value.to_string(),
            Self::Str { text, .. } => {
                if quoted {
                    quote(text)
                } else {
                    text.clone()
                }
            },
            Self::Array { children, .. } => dump_children(children, quoted),
            Self::Var { name, .. } => name.clone(),
            Self::Call { args, .. } => dump_children(args, quoted),
            Self::Program { stmts, .. } => dump_children(stmts, quoted),
        }
    }
}

impl std::fmt::Display for Ast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dump(false))
    }
}

/// Renders a container's children as `{ e1, e2, … }`.
fn dump_children(children: &[Node], quoted: bool) -> String {
    let mut ret = String::from("{ ");
    for (index, child) in children.iter().enumerate() {
        if index > 0 {
            ret.push_str(", ");
        }
        ret.push_str(&child.dump(quoted));
    }
    ret.push_str(" }");
    ret
}

/// Wraps a string in double quotes, doubling internal quotes.
fn quote(text: &str) -> String {
    let mut ret = String::with_capacity(text.len() + 2);
    ret.push('"');
    for ch in text.chars() {
        if ch == '"' {
            ret.push('"');
        }
        ret.push(ch);
    }
    ret.push('"');
    ret
}
