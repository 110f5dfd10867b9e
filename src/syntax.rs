use pest::iterators::Pair;

use crate::Rule;

/// One node of an expression tree. Trees are immutable once built:
/// the simplifier constructs new nodes instead of rewriting children
/// in place, so subtrees can be shared freely between a user's
/// expression and the environment's variable bindings.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
  Number(f64),
  Variable(String),
  /// An interior node. Always carries at least one child; the grammar
  /// rejects zero-argument calls and every operator has a fixed arity.
  Operation { name: String, children: Vec<Node> },
}

impl Node {
  pub fn operation(name: impl Into<String>, children: Vec<Node>) -> Node {
    Node::Operation {
      name: name.into(),
      children,
    }
  }

  pub fn variable(name: impl Into<String>) -> Node {
    Node::Variable(name.into())
  }

  /// The identifier this node carries, if any.
  pub fn name(&self) -> Option<&str> {
    match self {
      Node::Number(_) => None,
      Node::Variable(name) => Some(name),
      Node::Operation { name, .. } => Some(name),
    }
  }
}

/// The closed set of operators the calculator understands. Dispatching
/// through this enum (instead of chained string comparisons) makes the
/// operator table exhaustive: adding a variant without handling it
/// somewhere is a compile error, and "unknown operation" is decided in
/// exactly one place, `Op::from_name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
  /// Meta-operator: evaluate the wrapped expression. Mirrors the
  /// `toDouble` entry point as an in-tree, arity-1 operator.
  ToDouble,
  /// Meta-operator: simplify the wrapped expression. Same self-reference.
  Simplify,
  Plot,
  Add,
  Sub,
  Mul,
  Div,
  Pow,
  Negate,
  Abs,
  Sin,
  Cos,
  Tan,
  Csc,
  Sec,
  Cot,
  Asin,
  Acos,
  Atan,
  Sqrt,
  Cbrt,
  ToRadians,
  ToDegrees,
  Log,
  Log10,
  Exp,
}

impl Op {
  pub fn from_name(name: &str) -> Option<Op> {
    Some(match name {
      "toDouble" => Op::ToDouble,
      "simplify" => Op::Simplify,
      "plot" => Op::Plot,
      "+" => Op::Add,
      "-" => Op::Sub,
      "*" => Op::Mul,
      "/" => Op::Div,
      "^" => Op::Pow,
      "negate" => Op::Negate,
      "abs" => Op::Abs,
      "sin" => Op::Sin,
      "cos" => Op::Cos,
      "tan" => Op::Tan,
      "csc" => Op::Csc,
      "sec" => Op::Sec,
      "cot" => Op::Cot,
      "asin" => Op::Asin,
      "acos" => Op::Acos,
      "atan" => Op::Atan,
      "sqrt" => Op::Sqrt,
      "cbrt" => Op::Cbrt,
      "toRadians" => Op::ToRadians,
      "toDegrees" => Op::ToDegrees,
      "log" => Op::Log,
      "log10" => Op::Log10,
      "exp" => Op::Exp,
      _ => return None,
    })
  }

  pub fn arity(self) -> usize {
    match self {
      Op::Plot => 5,
      Op::Add | Op::Sub | Op::Mul | Op::Div | Op::Pow => 2,
      _ => 1,
    }
  }
}

/// Lower a pest pair into a `Node` tree. The grammar has already
/// enforced shape, so the conversions here cannot fail.
pub fn pair_to_node(pair: Pair<Rule>) -> Node {
  match pair.as_rule() {
    // Left-associative binary chains: Term (op Term)*
    Rule::Expression | Rule::Term => {
      let mut inner = pair.into_inner();
      let mut node = pair_to_node(inner.next().unwrap());
      while let Some(op) = inner.next() {
        let rhs = pair_to_node(inner.next().unwrap());
        node = Node::operation(op.as_str(), vec![node, rhs]);
      }
      node
    }
    Rule::Power => {
      let mut inner = pair.into_inner();
      let base = pair_to_node(inner.next().unwrap());
      match inner.next() {
        Some(_caret) => {
          let exponent = pair_to_node(inner.next().unwrap());
          Node::operation("^", vec![base, exponent])
        }
        None => base,
      }
    }
    Rule::Unary => {
      let mut inner = pair.into_inner();
      let first = inner.next().unwrap();
      if first.as_rule() == Rule::NegOp {
        Node::operation("negate", vec![pair_to_node(inner.next().unwrap())])
      } else {
        pair_to_node(first)
      }
    }
    Rule::FunctionCall => {
      let mut inner = pair.into_inner();
      let name = inner.next().unwrap().as_str().to_string();
      let children = inner.next().unwrap().into_inner().map(pair_to_node).collect();
      Node::Operation { name, children }
    }
    Rule::Number => Node::Number(pair.as_str().parse().unwrap()),
    Rule::Identifier => Node::Variable(pair.as_str().to_string()),
    rule => unreachable!("unexpected rule in expression position: {rule:?}"),
  }
}

/// Render a tree back to infix text with minimal parentheses.
pub fn node_to_string(node: &Node) -> String {
  render(node, 0)
}

fn infix_precedence(name: &str) -> Option<u8> {
  match name {
    "+" | "-" => Some(1),
    "*" | "/" => Some(2),
    "^" => Some(3),
    _ => None,
  }
}

fn render(node: &Node, min_prec: u8) -> String {
  match node {
    Node::Number(value) => crate::format_result(*value),
    Node::Variable(name) => name.clone(),
    Node::Operation { name, children } => match infix_precedence(name) {
      Some(prec) if children.len() == 2 => {
        // ^ associates right, the other operators lean left
        let (lhs_min, rhs_min) = if name == "^" {
          (prec + 1, prec)
        } else {
          (prec, prec + 1)
        };
        let rendered = format!(
          "{} {} {}",
          render(&children[0], lhs_min),
          name,
          render(&children[1], rhs_min)
        );
        if prec < min_prec {
          format!("({rendered})")
        } else {
          rendered
        }
      }
      _ if name == "negate" && children.len() == 1 => {
        let rendered = format!("-{}", render(&children[0], 4));
        if min_prec > 1 {
          format!("({rendered})")
        } else {
          rendered
        }
      }
      _ => {
        let args: Vec<String> = children.iter().map(node_to_string).collect();
        format!("{}({})", name, args.join(", "))
      }
    },
  }
}
