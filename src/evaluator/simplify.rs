use std::collections::HashMap;

use crate::syntax::{Node, Op};
use crate::Environment;

/// Rewrite a tree into an equivalent, partially constant-folded tree.
///
/// Unlike evaluation this is best-effort and total: an unbound
/// variable simply stays symbolic, and so does any operator outside
/// the folding subset `{+, -, *, ^, negate, abs}` — `sin(0)` comes
/// back as `sin(0)`, not `0`. Folding uses the same float arithmetic
/// as the evaluator, so simplify-then-evaluate and plain evaluate
/// agree. The result is always a freshly built tree; the input and
/// anything reachable through bindings are left untouched.
pub fn simplify(env: &Environment, node: &Node) -> Node {
  simplify_with(env.variables(), node)
}

pub(crate) fn simplify_with(
  bindings: &HashMap<String, Node>,
  node: &Node,
) -> Node {
  match node {
    Node::Number(_) => node.clone(),
    Node::Variable(name) => match bindings.get(name) {
      Some(bound) => simplify_with(bindings, bound),
      None => node.clone(),
    },
    Node::Operation { name, children } => {
      let first = simplify_with(bindings, &children[0]);
      let second = if children.len() == 2 {
        Some(simplify_with(bindings, &children[1]))
      } else {
        None
      };

      let folded = match Op::from_name(name) {
        // The meta-operator collapses to its simplified child.
        Some(Op::Simplify) => return first,
        Some(Op::Add) => fold_binary(&first, &second, |a, b| a + b),
        Some(Op::Sub) => fold_binary(&first, &second, |a, b| a - b),
        Some(Op::Mul) => fold_binary(&first, &second, |a, b| a * b),
        Some(Op::Pow) => fold_binary(&first, &second, f64::powf),
        Some(Op::Negate) => fold_unary(&first, |a| -a),
        Some(Op::Abs) => fold_unary(&first, |a| if a < 0.0 { -a } else { a }),
        _ => None,
      };
      if let Some(node) = folded {
        return node;
      }

      // Not foldable: rebuild the node around the simplified children.
      // Children past the binary positions (plot's bound arguments)
      // are carried over as they are.
      let mut rebuilt = Vec::with_capacity(children.len());
      rebuilt.push(first);
      if let Some(second) = second {
        rebuilt.push(second);
      }
      rebuilt.extend(children.iter().skip(2).cloned());
      Node::Operation {
        name: name.clone(),
        children: rebuilt,
      }
    }
  }
}

fn fold_binary(
  first: &Node,
  second: &Option<Node>,
  op: impl Fn(f64, f64) -> f64,
) -> Option<Node> {
  match (first, second) {
    (Node::Number(lhs), Some(Node::Number(rhs))) => {
      Some(Node::Number(op(*lhs, *rhs)))
    }
    _ => None,
  }
}

fn fold_unary(first: &Node, op: impl Fn(f64) -> f64) -> Option<Node> {
  match first {
    Node::Number(value) => Some(Node::Number(op(*value))),
    _ => None,
  }
}
