use super::*;

mod functions {
  use super::*;

  #[test]
  fn trigonometry() {
    assert_eq!(eval("sin(0)").unwrap(), "0");
    assert_eq!(eval("cos(0)").unwrap(), "1");
    assert_eq!(eval("tan(0)").unwrap(), "0");
  }

  #[test]
  fn reciprocal_trigonometry() {
    assert_eq!(eval("sec(0)").unwrap(), "1");
    // csc(0) = 1/sin(0) follows float semantics instead of erroring
    assert_eq!(eval("csc(0)").unwrap(), "inf");
  }

  #[test]
  fn inverse_trigonometry() {
    assert_eq!(eval("asin(0)").unwrap(), "0");
    assert_eq!(eval("acos(1)").unwrap(), "0");
    assert_eq!(eval("atan(0)").unwrap(), "0");
  }

  #[test]
  fn roots() {
    assert_eq!(eval("sqrt(9)").unwrap(), "3");
    assert_eq!(eval("sqrt(2)").unwrap(), "1.4142135623730951");
    assert_eq!(eval("cbrt(8)").unwrap(), "2");
  }

  #[test]
  fn logarithms_and_exp() {
    assert_eq!(eval("log(1)").unwrap(), "0");
    assert_eq!(eval("log10(100)").unwrap(), "2");
    assert_eq!(eval("exp(0)").unwrap(), "1");
    assert_eq!(eval("exp(1)").unwrap(), "2.718281828459045");
  }

  #[test]
  fn log_of_zero_is_negative_infinity() {
    assert_eq!(eval("log(0)").unwrap(), "-inf");
  }

  #[test]
  fn angle_conversions() {
    assert_eq!(eval("toRadians(0)").unwrap(), "0");
    assert_eq!(eval("toRadians(90)").unwrap(), "1.5707963267948966");
    assert_eq!(eval("toDegrees(0)").unwrap(), "0");
  }

  #[test]
  fn absolute_value() {
    assert_eq!(eval("abs(-4)").unwrap(), "4");
    assert_eq!(eval("abs(4)").unwrap(), "4");
    assert_eq!(eval("abs(0)").unwrap(), "0");
  }

  #[test]
  fn to_double_passes_through() {
    assert_eq!(eval("toDouble(2 + 3)").unwrap(), "5");
    assert_eq!(eval("toDouble(toDouble(7))").unwrap(), "7");
  }

  #[test]
  fn unary_functions_ignore_extra_arguments() {
    // One-argument operators never read a second operand
    assert_eq!(eval("sin(0, 99)").unwrap(), "0");
  }

  #[test]
  fn unknown_function_fails() {
    assert!(matches!(
      eval("frobnicate(1)"),
      Err(EvaluationError::UnknownOperation(name)) if name == "frobnicate"
    ));
  }
}
