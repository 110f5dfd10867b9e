use std::collections::HashMap;

use crate::syntax::{Node, Op};
use crate::{Environment, EvaluationError};

/// Reduce a tree to a single double using the environment's bindings.
///
/// Fails with `UndefinedVariable` when a variable has no binding and
/// with `UnknownOperation` for an operator name outside the dispatch
/// table. Everything else follows plain IEEE float semantics: dividing
/// by zero or taking the log of a non-positive number yields an
/// infinity or NaN instead of an error.
pub fn evaluate(env: &Environment, node: &Node) -> Result<f64, EvaluationError> {
  evaluate_with(env.variables(), node)
}

/// The recursive worker, parameterised over a raw binding map so the
/// plot sampler can run it against throwaway single-entry bindings.
pub(crate) fn evaluate_with(
  bindings: &HashMap<String, Node>,
  node: &Node,
) -> Result<f64, EvaluationError> {
  match node {
    Node::Number(value) => Ok(*value),
    Node::Variable(name) => match bindings.get(name) {
      // A binding is itself a tree and may reference further
      // variables; chains resolve transitively. Cyclic bindings are
      // not detected and recurse until the stack overflows.
      Some(bound) => evaluate_with(bindings, bound),
      None => Err(EvaluationError::UndefinedVariable(name.clone())),
    },
    Node::Operation { name, children } => {
      // Unary operators never look at a second operand; binary
      // operators always have one.
      let first = evaluate_with(bindings, &children[0])?;
      let second = if children.len() == 2 {
        evaluate_with(bindings, &children[1])?
      } else {
        0.0
      };

      let op = Op::from_name(name)
        .ok_or_else(|| EvaluationError::UnknownOperation(name.clone()))?;
      Ok(match op {
        Op::ToDouble => first,
        Op::Add => first + second,
        Op::Sub => first - second,
        Op::Mul => first * second,
        Op::Div => first / second,
        Op::Pow => first.powf(second),
        Op::Negate => -first,
        Op::Sin => first.sin(),
        Op::Cos => first.cos(),
        Op::Tan => first.tan(),
        Op::Csc => 1.0 / first.sin(),
        Op::Sec => 1.0 / first.cos(),
        Op::Cot => 1.0 / first.tan(),
        Op::Asin => first.asin(),
        Op::Acos => first.acos(),
        Op::Atan => first.atan(),
        Op::Sqrt => first.sqrt(),
        Op::Cbrt => first.cbrt(),
        Op::ToRadians => first.to_radians(),
        Op::ToDegrees => first.to_degrees(),
        Op::Log => first.ln(),
        Op::Log10 => first.log10(),
        Op::Exp => first.exp(),
        Op::Abs => {
          if first < 0.0 {
            -first
          } else {
            first
          }
        }
        // simplify/plot are statement-level operations, not numeric
        // ones; reaching them mid-expression is the same failure as an
        // unrecognised name.
        Op::Simplify | Op::Plot => {
          return Err(EvaluationError::UnknownOperation(name.clone()))
        }
      })
    }
  }
}
