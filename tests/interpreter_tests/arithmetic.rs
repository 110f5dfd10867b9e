use super::*;

mod arithmetic {
  use super::*;

  #[test]
  fn addition() {
    assert_eq!(eval("1 + 2").unwrap(), "3");
    assert_eq!(eval("1 + 2 + 3").unwrap(), "6");
    assert_eq!(eval("(1 + 2) + 3").unwrap(), "6");
  }

  #[test]
  fn subtraction() {
    assert_eq!(eval("3 - 1").unwrap(), "2");
    assert_eq!(eval("7 - 3 - 1").unwrap(), "3");
  }

  #[test]
  fn multiplication_binds_tighter_than_addition() {
    assert_eq!(eval("2 + 3 * 4").unwrap(), "14");
    assert_eq!(eval("(2 + 3) * 4").unwrap(), "20");
  }

  #[test]
  fn division() {
    assert_eq!(eval("10 / 2").unwrap(), "5");
    assert_eq!(eval("10 / 4").unwrap(), "2.5");
  }

  #[test]
  fn power() {
    assert_eq!(eval("2 ^ 10").unwrap(), "1024");
    // Right-associative: 2^(3^2), not (2^3)^2
    assert_eq!(eval("2 ^ 3 ^ 2").unwrap(), "512");
  }

  #[test]
  fn unary_minus() {
    assert_eq!(eval("-3 + 5").unwrap(), "2");
    assert_eq!(eval("2 - -3").unwrap(), "5");
    assert_eq!(eval("-(2 + 3)").unwrap(), "-5");
  }

  #[test]
  fn division_by_zero_is_infinite() {
    assert_eq!(eval("1 / 0").unwrap(), "inf");
    assert_eq!(eval("-1 / 0").unwrap(), "-inf");
  }

  #[test]
  fn float_arithmetic() {
    assert_eq!(eval("1.5 + 2.25").unwrap(), "3.75");
    // IEEE 754 representation is preserved, not rounded
    assert_eq!(eval("0.1 + 0.2").unwrap(), "0.30000000000000004");
  }
}
