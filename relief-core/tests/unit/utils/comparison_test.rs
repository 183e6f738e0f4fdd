use super::*;

#[test]
fn can_compare_floats() {
    assert_eq!(compare_floats(1., 2.), Ordering::Less);
    assert_eq!(compare_floats(2., 1.), Ordering::Greater);
    assert_eq!(compare_floats(1., 1.), Ordering::Equal);
    assert_eq!(compare_floats(f64::NAN, 1.), Ordering::Greater);
    assert_eq!(compare_floats(1., f64::NAN), Ordering::Less);
    assert_eq!(compare_floats(f64::NAN, f64::NAN), Ordering::Equal);
}

parameterized_test! {can_round_to_decimals, (value, decimals, expected), {
    assert_eq!(round_to(value, decimals), expected);
}}

can_round_to_decimals! {
    case01: (0.25, 3, 0.25),
    case02: (0.12345, 3, 0.123),
    case03: (268.4443079165027, 2, 268.44),
    case04: (-1., 2, -1.),
    case05: (536.8886158330052, 2, 536.89),
}
