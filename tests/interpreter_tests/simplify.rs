use super::*;

mod simplify {
  use super::*;

  #[test]
  fn folds_constant_arithmetic() {
    assert_eq!(eval("simplify(2 + 3)").unwrap(), "5");
    assert_eq!(eval("simplify(2 * 3 + 4)").unwrap(), "10");
    assert_eq!(eval("simplify(2 ^ 3)").unwrap(), "8");
  }

  #[test]
  fn folds_negation() {
    assert_eq!(eval("simplify(negate(5))").unwrap(), "-5");
    assert_eq!(eval("simplify(-5)").unwrap(), "-5");
  }

  #[test]
  fn folds_numeric_abs() {
    assert_eq!(eval("simplify(abs(-4))").unwrap(), "4");
  }

  #[test]
  fn keeps_abs_of_variable_symbolic() {
    assert_eq!(eval("simplify(abs(x))").unwrap(), "abs(x)");
  }

  #[test]
  fn division_is_not_folded() {
    // Only + - * ^ and negate fold; division stays symbolic
    assert_eq!(eval("simplify(10 / 2)").unwrap(), "10 / 2");
  }

  #[test]
  fn functions_are_not_folded() {
    assert_eq!(eval("simplify(sin(0))").unwrap(), "sin(0)");
    assert_eq!(eval("simplify(sqrt(4))").unwrap(), "sqrt(4)");
    assert_eq!(eval("simplify(toDouble(5))").unwrap(), "toDouble(5)");
  }

  #[test]
  fn unbound_variables_stay_symbolic() {
    assert_eq!(eval("simplify(x)").unwrap(), "x");
    assert_eq!(eval("simplify(x + 2 * 3)").unwrap(), "x + 6");
    assert_eq!(eval("simplify(2 * x)").unwrap(), "2 * x");
  }

  #[test]
  fn substitutes_bound_variables() {
    let (result, _) = session(&["x := 4", "simplify(x + y)"]);
    assert_eq!(result.unwrap(), "4 + y");
  }

  #[test]
  fn nested_simplify_collapses() {
    assert_eq!(eval("simplify(simplify(2 + 3))").unwrap(), "5");
  }

  #[test]
  fn parenthesised_subtrees_render_with_parens() {
    assert_eq!(eval("simplify((x + 1) * 2)").unwrap(), "(x + 1) * 2");
  }
}
