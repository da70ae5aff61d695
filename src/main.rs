use clap::Parser;
use numera::{
    evaluate,
    interpreter::{symbol::MapResolver, value::core::Value},
};

/// numera evaluates arithmetic expressions whose operands are scalar numbers
/// or fixed-length numeric vectors.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Defines a symbol, e.g. `-d x=2.5` or `-d y=1,2,3` for a vector.
    #[arg(short, long = "define", value_name = "NAME=VALUE")]
    defines: Vec<String>,

    expression: String,
}

fn main() {
    let args = Args::parse();

    let mut resolver = MapResolver::new();
    for define in &args.defines {
        let (name, value) = parse_define(define).unwrap_or_else(|| {
                                eprintln!("Invalid definition '{define}'. Expected NAME=VALUE, \
                                           with VALUE a number or a comma-separated list.");
                                std::process::exit(1);
                            });
        resolver.insert(name, value);
    }

    match evaluate(&args.expression, &resolver) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// Splits a `NAME=VALUE` definition into a symbol binding.
///
/// A single number becomes a scalar; a comma-separated list becomes a
/// vector.
fn parse_define(define: &str) -> Option<(&str, Value)> {
    let (name, value) = define.split_once('=')?;
    if name.is_empty() {
        return None;
    }

    let numbers = value.split(',')
                       .map(|part| part.trim().parse::<f64>().ok())
                       .collect::<Option<Vec<f64>>>()?;

    let value = match numbers.as_slice() {
        [single] => Value::Scalar(*single),
        _ => Value::from(numbers),
    };

    Some((name, value))
}
