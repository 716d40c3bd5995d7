use std::{cell::RefCell, fs, rc::Rc};

use ega::{
    interpreter::{evaluator::core::Interp, lexer::tokenize, parser::core::parse_program},
    run_script,
};
use walkdir::WalkDir;

/// Runs a source text through a fresh interpreter with a capture hook.
///
/// Returns the value of `eval_text_ex` (false means the program requested
/// `exit`) and everything that was printed, error reports included.
fn run_capture(source: &str) -> (bool, String) {
    let output = Rc::new(RefCell::new(String::new()));
    let sink = Rc::clone(&output);

    let mut interp = Interp::new();
    interp.set_print_fn(Box::new(move |text| sink.borrow_mut().push_str(text)));

    let ok = interp.eval_text_ex(source);
    let text = output.borrow().clone();
    (ok, text)
}

fn assert_output(source: &str, expected: &str) {
    let (ok, output) = run_capture(source);
    assert!(ok, "script requested exit: {source}");
    assert_eq!(output, expected, "wrong output for: {source}");
}

fn assert_error(source: &str) {
    if run_script(source).is_ok() {
        panic!("script succeeded but was expected to fail: {source}")
    }
}

#[test]
fn end_to_end_scenarios() {
    assert_output("?(plus(2, 3))", "5\n");
    assert_output("set(a, {1,2,3}); ?(cat(a, {4,5}))", "{ 1, 2, 3, 4, 5 }\n");
    assert_output(r#"set(s, "he""llo"); ?(len(s))"#, "6\n");
    assert_output("set(i, 0); for(k, 1, 5, set(i, plus(i, k))); ?(i)", "15\n");
    assert_output("define(sq, mul(x, x)); set(x, 7); ?(sq)", "49\n");
    assert_output("?(compare({1,2}, {1,2,0}))", "-1\n");
    assert_output(r#"?(find("banana", "na"))"#, "2\n");
    assert_output(r#"set(a, "abcdef"); at(a, 2, 90); ?(a)"#, "\"abZdef\"\n");
}

#[test]
fn final_value_is_printed_quoted() {
    assert_output("plus(2, 3)", "5\n");
    assert_output(r#""he""llo""#, "\"he\"\"llo\"\n");
    assert_output("{1, {2, 3}}", "{ 1, { 2, 3 } }\n");
    // Statements producing no value print nothing.
    assert_output("println(7); set(a, 1); set(a)", "7\n");
}

#[test]
fn quoted_dump_round_trips() {
    for source in ["42", r#""he""llo""#, r#"{1, "a""b", {2, 3}, {}}"#] {
        let v1 = run_script(source).unwrap().expect("no value");
        let v2 = run_script(&v1.dump(true)).unwrap().expect("no value");
        assert_eq!(v1.dump(true), v2.dump(true), "round trip failed for: {source}");
    }
}

#[test]
fn parsing_is_deterministic() {
    let tokens = tokenize(r#"set(a, {1, "x"}); ?(plus(a, 1))"#).unwrap();
    let first = parse_program(&mut tokens.iter().peekable()).unwrap();
    let second = parse_program(&mut tokens.iter().peekable()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn identifier_dispatch_follows_registration() {
    // A registered name is a call; an unregistered one is a variable.
    assert_output("set(plus1, 3); ?(plus(plus1, 1))", "4\n");
    // Calling an unregistered identifier is a syntax error.
    assert_error("frobnicate(1)");
    // A registered name without its argument list is a syntax error.
    assert_error("plus");
}

#[test]
fn set_is_eager_define_is_lazy() {
    assert_output("set(x, 2); set(y, plus(x, 1)); set(x, 10); ?(y)", "3\n");
    assert_output("set(x, 2); define(y, plus(x, 1)); set(x, 10); ?(y)", "11\n");
    // Each read of a define binding re-evaluates the expression.
    assert_output(
        "set(n, 0); define(next, set(n, plus(n, 1))); (next, next); ?(n)",
        "2\n",
    );
}

#[test]
fn unbinding_variables() {
    assert_error("set(a, 1); set(a); ?(a)");
    assert_error("define(a, 1); define(a); ?(a)");
    assert_error("?(q)");
}

#[test]
fn compare_is_a_total_order() {
    // Across kinds: Int < Str < Array.
    assert_output(r#"?(compare(99, "a"))"#, "-1\n");
    assert_output(r#"?(compare("zzz", {0}))"#, "-1\n");
    assert_output(r#"?(compare({0}, 99))"#, "1\n");
    // Within kinds.
    assert_output("?(compare(2, 2))", "0\n");
    assert_output("?(compare(3, 2))", "1\n");
    assert_output(r#"?(compare("abc", "abd"))"#, "-1\n");
    assert_output("?(compare({1,2,3}, {1,2}))", "1\n");
    // Antisymmetry spot check.
    assert_output(r#"?(plus(compare(1, "a"), compare("a", 1)))"#, "0\n");
}

#[test]
fn comparison_predicates() {
    assert_output("?(equal({1,2}, {1,2}))", "1\n");
    assert_output("?(not_equal(1, 2))", "1\n");
    assert_output("?(less(1, 2))", "1\n");
    assert_output("?(less_equal(2, 2))", "1\n");
    assert_output("?(greater(1, 2))", "0\n");
    assert_output("?(greater_equal(1, 2))", "0\n");
    // Operator aliases are ordinary identifiers.
    assert_output("?(<=(1, 2))", "1\n");
    assert_output(r#"?(==("a", "a"))"#, "1\n");
    assert_output("?(!=({1}, {2}))", "1\n");
}

#[test]
fn arity_gate() {
    assert_error("plus(1)");
    assert_error("plus(1, 2, 3)");
    assert_error("break(1)");
    assert_error("for(i, 1, 2)");
    assert_error("len()");
}

#[test]
fn break_stops_the_innermost_construct() {
    assert_output("set(x, 0); do(set(x, 1), break(), set(x, 2)); ?(x)", "1\n");
    assert_output("set(i, 0); while(1, break()); ?(i)", "0\n");
    // `do` absorbs the signal itself; the rest of its sequence is skipped
    // but the enclosing loop keeps running.
    assert_output("set(x, 0); for(i, 1, 3, do(break(), set(x, plus(x, 1)))); ?(x)", "0\n");
    assert_output(
        "set(s, 0); for(i, 1, 100, (set(s, plus(s, i)), if(equal(i, 3), break()))); ?(s)",
        "6\n",
    );
    assert_output("set(c, 0); foreach(v, {1,2,3}, (set(c, v), break())); ?(c)", "1\n");
    // Outside any loop the signal surfaces as an ordinary error.
    let (ok, output) = run_capture("break()");
    assert!(ok);
    assert_eq!(output, "ERROR: break exception\n");
}

#[test]
fn exit_unwinds_to_the_boundary() {
    let (ok, output) = run_capture("exit(123)");
    assert!(!ok);
    assert_eq!(output, "123\n");

    let (ok, output) = run_capture("exit()");
    assert!(!ok);
    assert_eq!(output, "");

    // Expressions after exit are never evaluated.
    let (ok, output) = run_capture(r#"do(println("a"), exit(5), println("b"))"#);
    assert!(!ok);
    assert_eq!(output, "a\n5\n");
}

#[test]
fn conditionals() {
    assert_output("?(if(1, 10, 20))", "10\n");
    assert_output("?(if(0, 10, 20))", "20\n");
    assert_output("if(0, 10)", "");
    // The unselected branch is never evaluated.
    assert_output("set(x, 0); if(1, set(x, 1), set(x, 2)); ?(x)", "1\n");
    assert_output("?(?:(0, 1, 2))", "2\n");
    assert_error(r#"if("x", 1, 2)"#);
}

#[test]
fn loops() {
    assert_output("set(i, 0); while(less(i, 3), set(i, plus(i, 1))); ?(i)", "3\n");
    assert_output("set(sum, 0); foreach(v, {1,2,3}, set(sum, plus(sum, v))); ?(sum)", "6\n");
    // Inclusive bounds, evaluated once.
    assert_output("set(sum, 0); for(i, 1, 3, set(sum, plus(sum, i))); ?(sum)", "6\n");
    // max < min runs zero times.
    assert_output("set(x, 42); for(i, 5, 1, set(x, 0)); ?(x)", "42\n");
    // The loop variable is left bound to its last value.
    assert_output("for(i, 1, 3, i); ?(i)", "3\n");
    assert_error("foreach(v, 5, v)");
}

#[test]
fn arithmetic() {
    assert_output("?(plus(2, 3))", "5\n");
    assert_output("?(minus(2, 5))", "-3\n");
    assert_output("?(minus(5))", "-5\n");
    assert_output("?(mul(7, 9))", "63\n");
    assert_output("?(div(7, 2))", "3\n");
    assert_output("?(mod(7, 3))", "1\n");
    assert_output("?(+(2, 3))", "5\n");
    assert_output("?(-(2))", "-2\n");
    assert_output("?(*(4, 4))", "16\n");
    assert_output("?(%(9, 4))", "1\n");
    assert_error("div(1, 0)");
    assert_error("mod(1, 0)");
    assert_error(r#"plus(1, "x")"#);
}

#[test]
fn logical_and_bitwise() {
    assert_output("?(not(0))", "1\n");
    assert_output("?(not(7))", "0\n");
    assert_output("?(and(2, 0))", "0\n");
    assert_output("?(or(0, 3))", "1\n");
    assert_output("?(xor(6, 3))", "5\n");
    assert_output("?(compl(0))", "-1\n");
    assert_output("?(bitand(6, 3))", "2\n");
    assert_output("?(bitor(4, 1))", "5\n");
    assert_output("?(&&(1, 1))", "1\n");
    assert_output("?(||(0, 0))", "0\n");
    assert_output("?(~(minus(1)))", "0\n");
    assert_output("?(^(5, 5))", "0\n");
    // Both operands are always evaluated.
    assert_output("set(x, 0); or(1, set(x, 9)); ?(x)", "9\n");
}

#[test]
fn string_family() {
    assert_output(r#"?(len("hello"))"#, "5\n");
    assert_output(r#"?(cat("foo", "bar", "baz"))"#, "\"foobarbaz\"\n");
    assert_output(r#"?(equal(cat("abc"), "abc"))"#, "1\n");
    assert_output(r#"?(at("abc", 1))"#, "98\n");
    assert_output(r#"?(left("abcdef", 3))"#, "\"abc\"\n");
    assert_output(r#"?(right("abcdef", 2))"#, "\"ef\"\n");
    assert_output(r#"?(mid("abcdef", 1, 3))"#, "\"bcd\"\n");
    assert_output(r#"?(mid("abcdef", 1, 3, "XY"))"#, "\"aXYef\"\n");
    assert_output(r#"?(find("banana", "ana"))"#, "1\n");
    assert_output(r#"?(find("banana", "xyz"))"#, "-1\n");
    assert_output(r#"?(replace("banana", "na", "NA"))"#, "\"baNANA\"\n");
    assert_output(r#"?(remove("banana", "an"))"#, "\"ba\"\n");
    assert_error(r#"at("abc", 5)"#);
    assert_error(r#"at("abc", minus(1))"#);
    assert_error(r#"left("abc", 4)"#);
    assert_error(r#"mid("abc", 2, 2)"#);
    assert_error(r#"cat("abc", 5)"#);
    assert_error("len(5)");
}

#[test]
fn array_family() {
    assert_output("?(len({10, 20, 30}))", "3\n");
    assert_output("?(equal(cat({1,2}), {1,2}))", "1\n");
    assert_output("?(at({1,2,3}, 0))", "1\n");
    assert_output("set(a, {1,2,3}); at(a, 1, 99); ?(a)", "{ 1, 99, 3 }\n");
    assert_output("?(left({1,2,3}, 2))", "{ 1, 2 }\n");
    assert_output("?(right({1,2,3}, 0))", "{  }\n");
    assert_output("?(mid({1,2,3,4}, 1, 2))", "{ 2, 3 }\n");
    assert_output("?(mid({1,2,3,4}, 1, 2, {9}))", "{ 1, { 9 }, 4 }\n");
    assert_output("?(find({10,20,30}, 20))", "1\n");
    assert_output("?(find({10}, 20))", "-1\n");
    assert_output("?(replace({1,2,1}, 1, 7))", "{ 7, 2, 7 }\n");
    assert_output("?(remove({1,2,1}, 1))", "{ 2 }\n");
    // Array literals evaluate their elements eagerly.
    assert_output("set(x, 1); set(a, {x, plus(x, 1)}); set(x, 9); ?(a)", "{ 1, 2 }\n");
    assert_error("at({1,2}, 2)");
    assert_error("at({1,2}, 0, 9)");
}

#[test]
fn conversions() {
    assert_output("?(typeid(1))", "0\n");
    assert_output(r#"?(typeid("x"))"#, "1\n");
    assert_output("?(typeid({}))", "2\n");
    assert_output("?(typeid(print()))", "-1\n");
    assert_output("?(int(5))", "5\n");
    assert_output(r#"?(int("42abc"))"#, "42\n");
    assert_output(r#"?(int("  -7"))"#, "-7\n");
    assert_output(r#"?(int("abc"))"#, "0\n");
    assert_output("?(int({1,2}))", "2\n");
    assert_output("?(str(123))", "\"123\"\n");
    assert_output(r#"?(str("x"))"#, "\"x\"\n");
    assert_output("?(str({1, \"a\"}))", "\"{ 1, a }\"\n");
    assert_output(r#"?(array(1, plus(1, 1), "x"))"#, "{ 1, 2, \"x\" }\n");
    assert_output("?(array())", "{  }\n");
}

#[test]
fn print_family() {
    let (ok, output) = run_capture(r#"print("a", 1, {2})"#);
    assert!(ok);
    assert_eq!(output, "a1{ 2 }");

    assert_output(r#"println("a", "b")"#, "ab\n");
    assert_output(r#"dump("a")"#, "\"a\"");
    assert_output(r#"dumpln({1, "x"})"#, "{ 1, \"x\" }\n");
}

#[test]
fn input_reads_through_the_hook() {
    let output = Rc::new(RefCell::new(String::new()));
    let sink = Rc::clone(&output);

    let mut interp = Interp::new();
    interp.set_print_fn(Box::new(move |text| sink.borrow_mut().push_str(text)));
    interp.set_input_fn(Box::new(|| Some("  42 ;\n".to_string())));

    assert!(interp.eval_text_ex(r#"set(x, input("Number")); ?(x)"#));
    assert_eq!(*output.borrow(), "Number? \"42\"\n");

    // End of input produces no value.
    interp.set_input_fn(Box::new(|| None));
    output.borrow_mut().clear();
    assert!(interp.eval_text_ex("?(typeid(input()))"));
    assert_eq!(*output.borrow(), "? -1\n");
}

#[test]
fn comments_and_whitespace() {
    assert_output("plus(1, 2) @ this is a comment", "3\n");
    assert_output("@ whole line comment\n?(1)", "1\n");
    assert_output("  \t ?( 1 , 2 ) ", "12\n");
}

#[test]
fn lexer_errors_and_line_numbers() {
    let (ok, output) = run_capture("#");
    assert!(ok);
    assert_eq!(output, "ERROR: syntax error: invalid character '#' at Line 1\n");

    let (_, output) = run_capture("set(a, 1)\nplus(a, x)");
    assert_eq!(output, "ERROR: undefined variable: 'x' at Line 2\n");

    // Newlines inside string literals still advance the line counter.
    let (_, output) = run_capture("set(s, \"a\nb\");\nx");
    assert_eq!(output, "ERROR: undefined variable: 'x' at Line 3\n");

    assert_error("\"unterminated");
}

#[test]
fn sub_character_ends_the_input() {
    assert_output("?(plus(1, 2))\u{7f} this is $ not % lexed", "3\n");
}

#[test]
fn parser_errors() {
    assert_error("plus(1,");
    assert_error("{1, 2");
    assert_error("set(a 1)");
    assert_error("a(1)");
    assert_error("1;;2");
    assert_error(")");
    assert_error(",");
}

#[test]
fn groupings_sequence_left_to_right() {
    assert_output("?((1, 2, 3))", "3\n");
    assert_output("(set(a, 1), set(a, plus(a, 1)), ?(a))", "2\n");
    assert_output("()", "");
}

#[test]
fn interactive_mode_omits_line_suffix() {
    let output = Rc::new(RefCell::new(String::new()));
    let sink = Rc::clone(&output);

    let mut interp = Interp::new();
    interp.set_print_fn(Box::new(move |text| sink.borrow_mut().push_str(text)));
    interp.set_interactive(true);

    assert!(interp.eval_text_ex("plus(1, x)"));
    assert_eq!(*output.borrow(), "ERROR: undefined variable: 'x'\n");
}

#[test]
fn help_listing_and_usage() {
    let output = Rc::new(RefCell::new(String::new()));
    let sink = Rc::clone(&output);

    let mut interp = Interp::new();
    interp.set_print_fn(Box::new(move |text| sink.borrow_mut().push_str(text)));

    interp.show_help();
    {
        let text = output.borrow();
        assert!(text.starts_with("EGA has the following functions:\n"));
        assert!(text.contains("  plus\n"));
        assert!(text.contains("  ?:\n"));
        // The listing is sorted.
        let names: Vec<&str> = text.lines().skip(1).map(str::trim).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    output.borrow_mut().clear();
    interp.show_help_for("minus");
    {
        let text = output.borrow();
        assert!(text.contains("EGA function 'minus':"));
        assert!(text.contains("argument number: 1..2"));
        assert!(text.contains("usage: minus(int1[, int2])"));
    }

    output.borrow_mut().clear();
    interp.show_help_for("nope");
    assert!(output.borrow().contains("No such function: 'nope'"));
}

#[test]
fn variables_persist_across_eval_text_calls() {
    let mut interp = Interp::new();
    interp.set_print_fn(Box::new(|_| {}));

    assert!(interp.eval_text("set(a, 40)").is_ok());
    let value = interp.eval_text("plus(a, 2)").unwrap().expect("no value");
    assert_eq!(value.as_int().unwrap(), 42);
}

#[test]
fn demo_scripts_run_clean() {
    let mut count = 0;

    for entry in WalkDir::new("scripts")
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "ega"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("failed to read {path:?}: {e}"));

        count += 1;
        let (ok, output) = run_capture(&source);
        assert!(ok, "{path:?} requested exit");
        assert!(!output.contains("ERROR:"), "{path:?} failed:\n{output}");
    }

    assert!(count > 0, "no demo scripts found in scripts/");
}
