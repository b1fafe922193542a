use abacus_core::{Calculator, CalculatorBuilder, Token};

/// Helper function to create a calculator with default settings
pub fn create_test_calculator() -> Calculator {
    CalculatorBuilder::new()
        .build()
        .expect("Failed to create calculator")
}

/// Helper function to press whitespace separated keypad labels
pub fn press(calculator: &mut Calculator, keys: &str) {
    for key in keys.split_whitespace() {
        let token: Token = key.parse().expect("Failed to parse token");
        calculator.dispatch(token);
    }
}
