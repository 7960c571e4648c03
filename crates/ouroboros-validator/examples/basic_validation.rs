//! Basic Validation Example
//!
//! This example builds a few validators, validates good and bad input and
//! shows how configuration errors surface.
//!
//! Run with:
//! ```bash
//! RUST_LOG=debug cargo run -p ouroboros-validator --example basic_validation
//! ```

use ouroboros_validator::{
    array, boolean, datetime, number, object, or, string, ExtraFields, ValidationResult,
    Validator, ValidatorExt, Value,
};

// ============================================================================
// Primitive Validation
// ============================================================================

fn validate_primitives() {
    println!("1. Primitive Validation");
    println!("-----------------------");

    let percent = number().min(0.0).max(100.0);
    println!("  number 42: {}", result_str(&percent.validate_value(&Value::Int(42))));
    println!("  number 120: {}", result_str(&percent.validate_value(&Value::Int(120))));

    let code = string().length(4).in_charset("0123456789");
    println!("  code \"2024\": {}", result_str(&code.validate_value(&Value::from("2024"))));
    println!("  code \"20x4\": {}", result_str(&code.validate_value(&Value::from("20x4"))));

    let flag = boolean().default(false);
    println!("  flag (absent): {}", result_str(&flag.validate(None)));

    let when = datetime();
    println!(
        "  datetime \"2024-01-19\": {}",
        result_str(&when.validate_value(&Value::from("2024-01-19")))
    );
    println!();
}

// ============================================================================
// Composite Validation
// ============================================================================

fn validate_composites() {
    println!("2. Composite Validation");
    println!("-----------------------");

    let user = object([
        ("name", string().min_length(1).boxed()),
        ("age", number().min(0.0).is_whole().optional().boxed()),
        ("roles", array(string()).default(Vec::<Value>::new()).boxed()),
        ("contact", or([number().boxed(), string().min_length(3).boxed()]).boxed()),
    ])
    .extra(ExtraFields::Ignore);

    let input = Value::Object(vec![
        ("name".into(), Value::from("Ada")),
        ("contact".into(), Value::from("ada@example.com")),
        ("internal".into(), Value::Bool(true)),
    ]);
    println!("  user: {}", result_str(&user.validate_value(&input)));

    let bad = Value::Object(vec![
        ("name".into(), Value::from("Ada")),
        ("contact".into(), Value::from("x")),
    ]);
    println!("  user with short contact: {}", result_str(&user.validate_value(&bad)));
    println!();
}

// ============================================================================
// Configuration Errors
// ============================================================================

fn show_config_errors() {
    println!("3. Configuration Errors");
    println!("-----------------------");

    let broken = string().min_length(5).max_length(2).default("abc");
    for error in broken.errors().iter() {
        println!("  {error}");
    }
    println!("  validate \"abcd\": {}", result_str(&broken.validate_value(&Value::from("abcd"))));
    println!();
}

// ============================================================================
// Helpers
// ============================================================================

fn result_str(result: &ValidationResult<Option<Value>>) -> String {
    match result {
        Ok(Some(value)) => format!("OK {value:?}"),
        Ok(None) => "OK (absent)".to_string(),
        Err(errors) => format!("FAILED {:?}", errors.messages()),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Ouroboros Validator: Basic Validation ===\n");

    validate_primitives();
    validate_composites();
    show_config_errors();
}
