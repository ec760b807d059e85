//! End-to-end calculator sessions driven key by key

use termcalc::calculator::{parse_keys, Calculator, Operator};

fn session(keys: &str) -> Calculator {
    let mut calculator = Calculator::new();
    for key in parse_keys(keys).unwrap() {
        calculator.press(key);
    }
    calculator
}

#[test]
fn receipt_total() {
    // 19.99 + 5.01 + 0.5, then take 10% off
    let calc = session("19.99+5.01+.5=");
    assert_eq!(calc.display(), "25.5");
    let calc = session("19.99+5.01+.5=x90%=");
    assert_eq!(calc.display(), "22.95");
}

#[test]
fn running_total_shows_intermediate_results() {
    let mut calc = Calculator::new();
    let steps = [
        ("100", "100", None),
        ("-", "100", Some("100 -")),
        ("25", "25", Some("100 -")),
        ("/", "75", Some("75 ÷")),
        ("3", "3", Some("75 ÷")),
        ("=", "25", None),
    ];
    for (keys, display, hint) in steps {
        for key in parse_keys(keys).unwrap() {
            calc.press(key);
        }
        assert_eq!(calc.display(), display, "after {keys}");
        assert_eq!(calc.pending_hint().as_deref(), hint, "after {keys}");
    }
}

#[test]
fn correcting_a_typo_with_backspace() {
    assert_eq!(session("123<4+1=").display(), "125");
}

#[test]
fn changing_mind_about_operator() {
    let calc = session("9x+/");
    assert_eq!(calc.operator(), Some(Operator::Divide));
    assert_eq!(calc.stored(), Some(9.0));
    assert_eq!(session("9x+/3=").display(), "3");
}

#[test]
fn negative_operands() {
    assert_eq!(session("5n-3=").display(), "-8");
    assert_eq!(session("4x2n=").display(), "-8");
    assert_eq!(session("2-5=").display(), "-3");
}

#[test]
fn decimal_arithmetic_stays_clean() {
    assert_eq!(session("1.1x3=").display(), "3.3");
    assert_eq!(session(".3-.1=").display(), "0.2");
    assert_eq!(session("2/3=").display(), "0.666666666667");
}

#[test]
fn result_feeds_next_calculation() {
    assert_eq!(session("6x7=+8=").display(), "50");
}

#[test]
fn clear_mid_expression_starts_over() {
    let calc = session("12+34c5=");
    assert_eq!(calc.display(), "5");
    assert_eq!(calc.stored(), None);
}

#[test]
fn division_by_zero_recovers_after_clear() {
    let calc = session("7/0=");
    assert_eq!(calc.display(), "NaN");
    assert_eq!(calc.formatted_display(','), "NaN");
    assert_eq!(session("7/0=c2+2=").display(), "4");
}

#[test]
fn typing_after_nan_replaces_it() {
    assert_eq!(session("1/0=5").display(), "5");
}

#[test]
fn large_result_switches_to_exponent() {
    let calc = session("100000000000x10000000000=");
    assert_eq!(calc.display(), "1e+21");
    assert_eq!(
        calc.formatted_display(','),
        "1,000,000,000,000,000,000,000"
    );
}

#[test]
fn grouped_display_while_typing() {
    let calc = session("9876543.210");
    assert_eq!(calc.display(), "9876543.210");
    assert_eq!(calc.formatted_display(','), "9,876,543.210");
    assert_eq!(calc.formatted_display('\''), "9'876'543.210");
}
