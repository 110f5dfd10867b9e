use std::collections::HashMap;

use super::eval::evaluate_with;
use super::simplify::simplify_with;
use crate::syntax::Node;
use crate::{Environment, EvaluationError};

/// Sample a one-free-variable expression over a numeric range and hand
/// the (x, y) sequences to the environment's drawer.
///
/// Expects `Operation("plot", [expr, var, min, max, step])`. The
/// preconditions are checked in a fixed order, so the first violated
/// one decides which error the user sees:
///
/// 1. every other variable in `expr` must be defined (probed by a
///    dry-run evaluation with only the plot variable bound),
/// 2. `min`, `max` and `step` must simplify all the way to numbers,
/// 3. `min` must not exceed `max`,
/// 4. the plot variable must still be free (a bound name simplifies to
///    its value and is rejected),
/// 5. `step` must be positive.
///
/// Returns a sentinel `Number` node: the dispatcher only understands
/// node-valued results, and a plot has no meaningful value.
pub fn plot(env: &mut Environment, node: &Node) -> Result<Node, EvaluationError> {
  let children = match node {
    Node::Operation { name, children }
      if name == "plot" && children.len() == 5 =>
    {
      children
    }
    _ => {
      return Err(EvaluationError::UnknownOperation(
        node.name().unwrap_or_default().to_string(),
      ))
    }
  };

  let step = simplify_with(env.variables(), &children[4]);
  let var_max = simplify_with(env.variables(), &children[3]);
  let var_min = simplify_with(env.variables(), &children[2]);
  let var = simplify_with(env.variables(), &children[1]);
  let expr = simplify_with(env.variables(), &children[0]);

  // Dry run: bind the plot variable to an arbitrary value and evaluate
  // once. Any other free variable surfaces here as UndefinedVariable.
  // The probe result itself is discarded.
  let mut probe = HashMap::new();
  probe.insert(
    var.name().unwrap_or_default().to_string(),
    Node::Number(1.0),
  );
  evaluate_with(&probe, &expr)?;

  let (min_value, max_value, step_value) = match (&var_min, &var_max, &step) {
    (Node::Number(min), Node::Number(max), Node::Number(step)) => {
      (*min, *max, *step)
    }
    _ => return Err(EvaluationError::NonNumericBound),
  };
  if min_value > max_value {
    return Err(EvaluationError::InvalidRange);
  }
  let var_name = match &var {
    Node::Variable(name) => name.clone(),
    // Either the name is bound to a value (it simplified away) or the
    // second argument was never a bare variable to begin with.
    _ => return Err(EvaluationError::VariableAlreadyBound),
  };
  if step_value <= 0.0 {
    return Err(EvaluationError::NonPositiveStep);
  }

  // The loop runs while x < max + step, not x <= max: with float
  // accumulation the last sample can land slightly past max, and that
  // is the sampling policy, not a bug to clean up.
  let mut xs = Vec::new();
  let mut x = min_value;
  while x < max_value + step_value {
    xs.push(x);
    x += step_value;
  }

  let mut ys = Vec::with_capacity(xs.len());
  for &x in &xs {
    let mut bindings = HashMap::new();
    bindings.insert(var_name.clone(), Node::Number(x));
    ys.push(evaluate_with(&bindings, &expr)?);
  }

  env
    .drawer_mut()
    .draw_scatter_plot("Scatter Plot", &var_name, "y", &xs, &ys)?;

  Ok(Node::Number(1.0))
}
