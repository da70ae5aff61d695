use numera::{
    error::{EvalError, ParseError, RuntimeError},
    evaluate,
    interpreter::{
        symbol::{EmptyResolver, MapResolver, SymbolLookup, SymbolResolver},
        value::core::Value,
    },
};

fn eval(expression: &str) -> Result<Value, EvalError> {
    evaluate(expression, &EmptyResolver)
}

fn assert_scalar(expression: &str, expected: f64) {
    match eval(expression) {
        Ok(value) => assert_eq!(value, Value::Scalar(expected), "for `{expression}`"),
        Err(e) => panic!("`{expression}` failed: {e}"),
    }
}

fn assert_parse_error(expression: &str, expected: ParseError) {
    match eval(expression) {
        Ok(value) => panic!("`{expression}` succeeded with {value} but was expected to fail"),
        Err(e) => assert_eq!(e, EvalError::Parse(expected), "for `{expression}`"),
    }
}

/// Resolver with a known-but-unavailable data channel, for exercising the
/// UndefinedVariable diagnostic.
struct ChannelResolver;

impl SymbolResolver for ChannelResolver {
    fn resolve(&self, name: &str) -> SymbolLookup {
        if name == "ch1" {
            SymbolLookup::UndefinedVariable
        } else {
            SymbolLookup::UndefinedSymbol
        }
    }
}

fn data_resolver() -> MapResolver {
    let mut resolver = MapResolver::new();
    resolver.insert("x", Value::from(vec![1.0, 2.0, 3.0]));
    resolver.insert("y", Value::from(vec![10.0, 20.0, 30.0]));
    resolver.insert("short", Value::from(vec![1.0, 2.0]));
    resolver.insert("n", Value::Scalar(2.0));
    resolver
}

#[test]
fn literal_arithmetic_respects_precedence() {
    assert_scalar("2+3*4", 14.0);
    assert_scalar("(2+3)*4", 20.0);
    assert_scalar("10-4-3", 3.0);
    assert_scalar("12/4/3", 1.0);
    assert_scalar("1+2*3^2", 19.0);
    assert_scalar(" 2 + 3 ", 5.0);
}

#[test]
fn bracket_synonyms_act_as_parentheses() {
    assert_scalar("{2+3}*4", 20.0);
    assert_scalar("[2+3]*[1+1]", 10.0);
    assert_scalar("{[2+3]*4}", 20.0);
}

#[test]
fn unary_minus_binds_tighter_than_any_binary_operator() {
    assert_scalar("-2^2", 4.0);
    assert_scalar("2^-1", 0.5);
    assert_scalar("-2*-3", 6.0);
    assert_scalar("2*-3", -6.0);
    assert_scalar("-(2+3)", -5.0);
}

#[test]
fn power_is_left_folded() {
    // The uniform precedence rule folds `^` left: (2^3)^2, not 2^(3^2).
    assert_scalar("2^3^2", 64.0);
}

#[test]
fn unary_plus_is_absorbed() {
    assert_scalar("+5", 5.0);
    assert_scalar("2*+3", 6.0);
    assert_scalar("2++3", 5.0);
}

#[test]
fn division_by_zero_follows_ieee_semantics() {
    let value = eval("1/0").unwrap();
    assert_eq!(value, Value::Scalar(f64::INFINITY));
}

#[test]
fn grammar_errors_carry_exact_columns() {
    assert_parse_error("2+", ParseError::OperandExpected { column: 2 });
    assert_parse_error("2 3", ParseError::OperatorExpected { column: 2 });
    assert_parse_error(")2(", ParseError::UnmatchedClosingParenthesis { column: 0 });
    assert_parse_error("1.2.3", ParseError::MultipleDecimalPoints { column: 3 });
    assert_parse_error("(2+3", ParseError::ClosingParenthesisExpected { column: 4 });
    assert_parse_error("2(3)", ParseError::OperatorExpected { column: 1 });
    assert_parse_error("--2", ParseError::OperandExpected { column: 1 });
    assert_parse_error("2+++3", ParseError::OperandExpected { column: 3 });
    assert_parse_error(".", ParseError::InvalidOperand { column: 0 });
    assert_parse_error("2+$",
                       ParseError::UnexpectedCharacter { character: '$',
                                                         column:    2, });
    assert_parse_error("2 $ 3", ParseError::OperatorExpected { column: 2 });
    assert_parse_error("(2+)", ParseError::OperandExpected { column: 3 });
}

#[test]
fn scalars_broadcast_across_vectors() {
    let resolver = data_resolver();

    assert_eq!(evaluate("2*x", &resolver).unwrap(), Value::from(vec![2.0, 4.0, 6.0]));
    assert_eq!(evaluate("x+1", &resolver).unwrap(), Value::from(vec![2.0, 3.0, 4.0]));
    assert_eq!(evaluate("1-x", &resolver).unwrap(), Value::from(vec![0.0, -1.0, -2.0]));
    assert_eq!(evaluate("y/n", &resolver).unwrap(), Value::from(vec![5.0, 10.0, 15.0]));
}

#[test]
fn equal_length_vectors_combine_elementwise() {
    let resolver = data_resolver();

    assert_eq!(evaluate("x+y", &resolver).unwrap(), Value::from(vec![11.0, 22.0, 33.0]));
    assert_eq!(evaluate("x*y", &resolver).unwrap(), Value::from(vec![10.0, 40.0, 90.0]));
    assert_eq!(evaluate("-x", &resolver).unwrap(), Value::from(vec![-1.0, -2.0, -3.0]));
    assert_eq!(evaluate("x^n", &resolver).unwrap(), Value::from(vec![1.0, 4.0, 9.0]));
}

#[test]
fn mismatched_vector_lengths_fail() {
    let resolver = data_resolver();

    assert_eq!(evaluate("x+short", &resolver).unwrap_err(),
               EvalError::Runtime(RuntimeError::LengthMismatch { left: 3, right: 2 }));
}

#[test]
fn functions_dispatch_by_case_insensitive_name() {
    assert_scalar("sqrt(4)", 2.0);
    assert_scalar("SQRT(4)", 2.0);
    assert_scalar("pow(2,3)", 8.0);
    assert_scalar("abs(-3)", 3.0);
    assert_scalar("log(8, 2)", 3.0);
    assert_scalar("log10(1000)", 3.0);
    assert_scalar("round(3.14159, 2)", 3.14);
    assert_scalar("truncate(-2.7)", -2.0);
    assert_scalar("toDeg(toRad(90))", 90.0);
    assert_scalar("sin(0) + cos(0)", 1.0);
}

#[test]
fn whitespace_may_separate_a_function_name_from_its_arguments() {
    assert_scalar("sqrt (4)", 2.0);
}

#[test]
fn function_arguments_are_full_expressions() {
    assert_scalar("pow(1+1, 6/2)", 8.0);
    assert_scalar("pow(pow(2,2), 3)", 64.0);
    assert_scalar("sqrt((2+2))", 2.0);
}

#[test]
fn functions_apply_elementwise_to_vectors() {
    let mut resolver = MapResolver::new();
    resolver.insert("v", Value::from(vec![4.0, 9.0, 16.0]));

    assert_eq!(evaluate("sqrt(v)", &resolver).unwrap(), Value::from(vec![2.0, 3.0, 4.0]));
    assert_eq!(evaluate("pow(v, 2)", &resolver).unwrap(),
               Value::from(vec![16.0, 81.0, 256.0]));
}

#[test]
fn mean_skips_nan_elements() {
    let mut resolver = MapResolver::new();
    resolver.insert("x", Value::from(vec![1.0, f64::NAN, 3.0]));

    assert_eq!(evaluate("mean(x)", &resolver).unwrap(), Value::Scalar(2.0));
}

#[test]
fn catalog_failures_point_at_the_call_site() {
    assert_parse_error("nope(1)",
                       ParseError::UndefinedFunction { name:   "nope".to_string(),
                                                       column: 0, });
    assert_parse_error("sqrt(1,2)",
                       ParseError::WrongParameterCount { name:   "sqrt".to_string(),
                                                         column: 0, });
    assert_parse_error("mean(2)",
                       ParseError::WrongArgumentType { name:   "mean".to_string(),
                                                       column: 0, });
    assert_parse_error("1 + sqrt(1,2)",
                       ParseError::WrongParameterCount { name:   "sqrt".to_string(),
                                                         column: 4, });
}

#[test]
fn undefined_identifiers_point_at_their_first_character() {
    assert_parse_error("foo+1",
                       ParseError::UndefinedSymbol { name:   "foo".to_string(),
                                                     column: 0, });
    assert_parse_error("1+foo",
                       ParseError::UndefinedSymbol { name:   "foo".to_string(),
                                                     column: 2, });
}

#[test]
fn unavailable_data_variables_are_a_distinct_failure() {
    assert_eq!(evaluate("ch1+1", &ChannelResolver).unwrap_err(),
               EvalError::Parse(ParseError::UndefinedVariable { name:   "ch1".to_string(),
                                                                column: 0, }));
}

#[test]
fn argument_errors_report_top_level_columns() {
    assert_parse_error("sqrt(foo)",
                       ParseError::UndefinedSymbol { name:   "foo".to_string(),
                                                     column: 5, });
    assert_parse_error("pow(1, bar)",
                       ParseError::UndefinedSymbol { name:   "bar".to_string(),
                                                     column: 7, });
    // Two levels of nesting compound the offsets.
    assert_parse_error("pow(1, pow(2, baz))",
                       ParseError::UndefinedSymbol { name:   "baz".to_string(),
                                                     column: 14, });
    assert_parse_error("pow(1, 2+)", ParseError::OperandExpected { column: 9 });
}

#[test]
fn evaluation_is_deterministic() {
    let resolver = data_resolver();

    let first = evaluate("mean(x) + 2*sqrt(n)", &resolver).unwrap();
    let second = evaluate("mean(x) + 2*sqrt(n)", &resolver).unwrap();

    assert_eq!(first, second);
}

#[test]
fn vector_results_survive_function_nesting() {
    let mut resolver = MapResolver::new();
    resolver.insert("x", Value::from(vec![1.0, f64::NAN, 3.0]));

    assert_eq!(evaluate("pow(mean(x), 3)", &resolver).unwrap(), Value::Scalar(8.0));
}
