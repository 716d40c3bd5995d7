use std::{
    collections::HashMap,
    io::{self, BufRead, Write},
    rc::Rc,
};

use crate::{
    ast::{Ast, Node},
    error::{EgaError, RuntimeError},
    interpreter::{
        evaluator::function::core::{all_fn_names, find_fn},
        lexer::tokenize,
        parser::core::parse_program,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure (or carrying a `break`/`exit`
/// signal).
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Output hook: receives every piece of text the interpreter prints.
pub type PrintFn = Box<dyn FnMut(&str)>;
/// Input hook: returns one line of input, or `None` at end of input.
pub type InputFn = Box<dyn FnMut() -> Option<String>>;

/// Stores the interpreter state.
///
/// An `Interp` holds the global variable bindings, the print/input hooks
/// through which all interpreter I/O flows, and the mode flags. The builtin
/// function registry is a static table and needs no per-instance state,
/// which also guarantees the lifecycle rule that the registry is complete
/// before any parse.
///
/// ## Usage
///
/// Create one `Interp` per session and feed it source text through
/// [`Interp::eval_text`] or [`Interp::eval_text_ex`]. Embedders install
/// their own hooks with [`Interp::set_print_fn`] / [`Interp::set_input_fn`]
/// before evaluating anything.
pub struct Interp {
    /// Global variable bindings. A name maps to the stored node: a reduced
    /// value after `set`, an unevaluated expression after `define`.
    pub(crate) variables: HashMap<String, Node>,
    pub(crate) print_fn: PrintFn,
    pub(crate) input_fn: InputFn,
    /// Interactive sessions omit the `at Line <n>` suffix in error reports.
    pub(crate) interactive: bool,
    /// When set, lines read by the `input` builtin are echoed back.
    pub(crate) echo_input: bool,
}

#[allow(clippy::new_without_default)]
impl Interp {
    /// Creates a new interpreter with no bindings and the default hooks
    /// (standard output, standard input).
    #[must_use]
    pub fn new() -> Self {
        Self {
            variables: HashMap::new(),
            print_fn: Box::new(default_print),
            input_fn: Box::new(default_input),
            interactive: false,
            echo_input: false,
        }
    }

    /// Replaces the print hook. All interpreter output, including error
    /// reports and the `print` family of builtins, goes through it.
    pub fn set_print_fn(&mut self, print_fn: PrintFn) {
        self.print_fn = print_fn;
    }

    /// Replaces the input hook used by the `input` builtin.
    pub fn set_input_fn(&mut self, input_fn: InputFn) {
        self.input_fn = input_fn;
    }

    /// Switches interactive-mode error formatting on or off.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Switches echoing of lines read by `input` on or off.
    pub fn set_echo_input(&mut self, echo_input: bool) {
        self.echo_input = echo_input;
    }

    /// Prints text through the print hook.
    pub fn print(&mut self, text: &str) {
        (self.print_fn)(text);
    }

    /// Reads one line through the input hook. Returns `None` at end of
    /// input.
    pub fn read_line(&mut self) -> Option<String> {
        (self.input_fn)()
    }

    /// Evaluates an AST node.
    ///
    /// Dispatches on the node kind:
    /// - `Int`, `Str` return a fresh handle to themselves.
    /// - `Array` eagerly evaluates its elements into a new array.
    /// - `Var` resolves the name and evaluates the stored node, so a
    ///   `define`d expression is re-evaluated at every read.
    /// - `Call` with a name checks arity and invokes the builtin with the
    ///   unevaluated argument nodes; each builtin decides which arguments
    ///   to evaluate and when.
    /// - `Call` with an empty name and `Program` evaluate their children
    ///   left-to-right and yield the last result.
    ///
    /// # Parameters
    /// - `node`: Node to evaluate.
    ///
    /// # Returns
    /// `Some(value)` for expressions that produce a value, `None` for those
    /// that do not (e.g. `print`, `set` with one argument, a fallen-through
    /// loop).
    pub fn eval(&mut self, node: &Node) -> EvalResult<Option<Node>> {
        match node.as_ref() {
            Ast::Int { .. } | Ast::Str { .. } => Ok(Some(Rc::clone(node))),
            Ast::Array { children, line } => {
                let mut elements = Vec::with_capacity(children.len());
                for child in children {
                    elements.push(self.eval_value(child)?);
                }
                Ok(Some(Ast::array(elements, *line)))
            },
            Ast::Var { name, line } => self.eval_var(name, *line),
            Ast::Call { name, args, line } => {
                if name.is_empty() {
                    self.eval_sequence(args)
                } else {
                    self.eval_call(name, args, *line)
                }
            },
            Ast::Program { stmts, .. } => self.eval_sequence(stmts),
        }
    }

    /// Evaluates an argument node on behalf of a builtin.
    ///
    /// With `require_value` set, an absent result is an `illegal operation`
    /// at the argument's line. This is the conventional way a builtin
    /// evaluates one of its parameters.
    pub fn eval_arg(&mut self, node: &Node, require_value: bool) -> EvalResult<Option<Node>> {
        let ret = self.eval(node)?;
        if require_value && ret.is_none() {
            return Err(RuntimeError::IllegalOperation { line: node.line_number() });
        }
        Ok(ret)
    }

    /// Evaluates an argument node and unwraps the value it must produce.
    ///
    /// Shorthand for `eval_arg(node, true)` followed by the unwrap; most
    /// strict builtins use this.
    pub fn eval_value(&mut self, node: &Node) -> EvalResult<Node> {
        self.eval(node)?
            .ok_or(RuntimeError::IllegalOperation { line: node.line_number() })
    }

    /// Resolves a variable reference.
    ///
    /// The stored node is evaluated at every read; for `set` bindings that
    /// re-evaluation is a no-op clone of the reduced value, for `define`
    /// bindings it recomputes the expression.
    fn eval_var(&mut self, name: &str, line: usize) -> EvalResult<Option<Node>> {
        let stored = self
            .variables
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(), line })?;

        self.eval(&stored)
    }

    /// Evaluates a sequence of expressions, returning the last result.
    ///
    /// Used for programs and empty-named groupings. `break` is not absorbed
    /// here; only loops and `do` catch it.
    fn eval_sequence(&mut self, stmts: &[Node]) -> EvalResult<Option<Node>> {
        let mut last = None;
        for stmt in stmts {
            last = self.eval(stmt)?;
        }
        Ok(last)
    }

    /// Evaluates a named call: registry lookup, arity gate, dispatch.
    ///
    /// The argument nodes are handed to the builtin unevaluated. A name
    /// absent from the registry yields no value; the parser never produces
    /// such a call, so this only matters for hand-built trees.
    fn eval_call(&mut self, name: &str, args: &[Node], line: usize) -> EvalResult<Option<Node>> {
        match find_fn(name) {
            Some(def) => {
                if args.len() < def.min_args || args.len() > def.max_args {
                    return Err(RuntimeError::ArgumentNumber { line });
                }
                (def.func)(self, args)
            },
            None => Ok(None),
        }
    }

    /// Binds or unbinds a variable. `None` removes the binding.
    pub fn set_var(&mut self, name: &str, value: Option<Node>) {
        match value {
            Some(node) => {
                self.variables.insert(name.to_string(), node);
            },
            None => {
                self.variables.remove(name);
            },
        }
    }

    /// Looks up a variable's stored node without evaluating it.
    #[must_use]
    pub fn get_var(&self, name: &str) -> Option<&Node> {
        self.variables.get(name)
    }

    /// Runs a source text through the whole pipeline.
    ///
    /// Tokenizes, parses and evaluates `source`; when the program produces
    /// a final value, its quoted dump is printed through the print hook,
    /// followed by a newline.
    ///
    /// # Errors
    /// Returns the first lexer, parser or evaluator error. `break`/`exit`
    /// signals arrive here as errors; use [`Interp::eval_text_ex`] for the
    /// catching entry point.
    ///
    /// # Examples
    /// ```
    /// use ega::interpreter::evaluator::core::Interp;
    ///
    /// let mut interp = Interp::new();
    /// let result = interp.eval_text("set(a, plus(2, 3))").unwrap();
    /// assert_eq!(result.unwrap().as_int().unwrap(), 5);
    ///
    /// // 'x' is unbound, so evaluation fails.
    /// assert!(interp.eval_text("plus(x, 1)").is_err());
    /// ```
    pub fn eval_text(&mut self, source: &str) -> Result<Option<Node>, EgaError> {
        let tokens = tokenize(source)?;
        let mut iter = tokens.iter().peekable();
        let program = parse_program(&mut iter)?;

        let result = self.eval(&program)?;
        if let Some(value) = &result {
            let text = value.dump(true);
            self.print(&format!("{text}\n"));
        }
        Ok(result)
    }

    /// Runs a source text, catching every language-level error.
    ///
    /// This is the text-evaluation boundary: `exit` is absorbed here (its
    /// argument, if any, is evaluated and printed) and makes the function
    /// return `false`; every other error is reported through the print hook
    /// as `ERROR: <message>`, with ` at Line <n>` appended when a line is
    /// attached and the session is not interactive.
    ///
    /// # Returns
    /// `false` when the program requested `exit`, `true` otherwise.
    pub fn eval_text_ex(&mut self, source: &str) -> bool {
        match self.eval_text(source) {
            Ok(_) => true,
            Err(EgaError::Eval(RuntimeError::Exit { arg })) => {
                if let Some(arg) = arg {
                    if let Ok(Some(value)) = self.eval(&arg) {
                        let text = value.dump(true);
                        self.print(&format!("{text}\n"));
                    }
                }
                false
            },
            Err(e) => {
                let line = e.line_number();
                if self.interactive || line == 0 {
                    self.print(&format!("ERROR: {e}\n"));
                } else {
                    self.print(&format!("ERROR: {e} at Line {line}\n"));
                }
                true
            },
        }
    }

    /// Prints the sorted list of all registered function names.
    pub fn show_help(&mut self) {
        self.print("EGA has the following functions:\n");
        let mut names = all_fn_names();
        names.sort_unstable();
        for name in names {
            self.print(&format!("  {name}\n"));
        }
    }

    /// Prints the arity range and usage line of one registered function.
    pub fn show_help_for(&mut self, name: &str) {
        let Some(def) = find_fn(name) else {
            self.print(&format!("ERROR: No such function: '{name}'\n"));
            return;
        };

        self.print(&format!("EGA function '{name}':\n"));
        if def.min_args == def.max_args {
            self.print(&format!("  argument number: {}\n", def.min_args));
        } else {
            self.print(&format!("  argument number: {}..{}\n", def.min_args, def.max_args));
        }
        self.print(&format!("  usage: {}\n", def.help));
    }
}

/// Default print hook: standard output, flushed so prompts appear.
fn default_print(text: &str) {
    print!("{text}");
    let _ = io::stdout().flush();
}

/// Default input hook: one line from standard input, `None` at EOF.
fn default_input() -> Option<String> {
    let mut buf = String::new();
    match io::stdin().lock().read_line(&mut buf) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(buf),
    }
}
