mod common;

use std::fs;

use abacus_core::{
    format_number, BinaryOperator, CalculatorBuilder, CalculatorState, ConfigLoader, Token,
};
use common::{create_test_calculator, press};
use tempfile::TempDir;

/// Expected display after typing `keys` from a fresh calculator
fn expected_entry(keys: &str) -> String {
    let trimmed = keys.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else if trimmed.starts_with('.') {
        format!("0{trimmed}")
    } else {
        trimmed.to_string()
    }
}

#[test]
fn test_digit_sequences_concatenate() {
    let samples = [
        "7", "10", "007", "3.14159", ".5", "0.0", "120.", "9876543210", "000.25", "1.000",
    ];

    for keys in samples {
        let mut calculator = create_test_calculator();
        for symbol in keys.chars() {
            let token: Token = symbol.to_string().parse().expect("Failed to parse digit");
            calculator.dispatch(token);
        }
        assert_eq!(calculator.display_text(), expected_entry(keys), "{keys}");
    }
}

#[test]
fn test_full_session() {
    let mut calculator = create_test_calculator();

    press(&mut calculator, "1 2 . 5 × 4");
    assert_eq!(calculator.display_text(), "4");
    assert_eq!(
        calculator.state().pending_operator(),
        Some(BinaryOperator::Multiply)
    );
    assert_eq!(calculator.armed_operator(), None);

    press(&mut calculator, "-");
    assert_eq!(calculator.display_text(), "50");
    assert!(calculator.is_operator_armed(BinaryOperator::Subtract));

    press(&mut calculator, "8 =");
    assert_eq!(calculator.display_text(), "42");

    press(&mut calculator, "√");
    assert_eq!(calculator.display_text(), format_number(42f64.sqrt()));

    press(&mut calculator, "AC");
    assert_eq!(calculator.display_text(), "0");
    assert_eq!(calculator.state(), &CalculatorState::default());
}

#[test]
fn test_error_then_recovery() {
    let mut calculator = create_test_calculator();

    press(&mut calculator, "5 ÷ 0 =");
    assert!(calculator.is_error());
    assert_eq!(calculator.state(), &CalculatorState::default());

    press(&mut calculator, "2 + 2 =");
    assert_eq!(calculator.display_text(), "4");
}

#[test]
fn test_bounded_width_results() {
    let mut calculator = create_test_calculator();
    press(&mut calculator, ". 1 + . 2 =");
    assert_eq!(calculator.display_text(), "0.300000");
    assert!(calculator.display_text().len() <= 12);
}

#[test]
fn test_calculator_from_config_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{ "error_token": "Erro", "rich_output": false }"#)
        .expect("Failed to write config");

    let config = ConfigLoader::new()
        .with_path(Some(&path))
        .load()
        .expect("Failed to load config");
    assert!(!config.rich_output);

    let mut calculator = CalculatorBuilder::new()
        .with_config(config)
        .build()
        .expect("Failed to create calculator");
    press(&mut calculator, "4 +/- √");
    assert_eq!(calculator.display_text(), "Erro");
}

#[test]
fn test_invalid_config_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{ "error_token": "" }"#).expect("Failed to write config");

    let result = ConfigLoader::new().with_path(Some(&path)).load();
    assert!(result.is_err());
}
