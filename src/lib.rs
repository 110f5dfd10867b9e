use std::collections::HashMap;

use pest::Parser;
use pest_derive::Parser;
use thiserror::Error;

pub mod evaluator;
pub mod render;
pub mod syntax;

use render::ImageDrawer;
use syntax::Node;

#[derive(Parser)]
#[grammar = "calc.pest"]
pub struct CalcParser;

/// Everything that can go wrong between reading a line and printing a
/// result. All variants are terminal for the statement that raised
/// them; the REPL reports the message and moves on to the next line.
#[derive(Error, Debug)]
pub enum EvaluationError {
  #[error("Parse error: {0}")]
  ParseError(#[from] Box<pest::error::Error<Rule>>),
  #[error("Empty input")]
  EmptyInput,
  #[error("Undefined variable: {0}")]
  UndefinedVariable(String),
  #[error("Unknown operation: {0}")]
  UnknownOperation(String),
  #[error("plot bounds and step must simplify to numbers")]
  NonNumericBound,
  #[error("plot range is empty: min is greater than max")]
  InvalidRange,
  #[error("plot variable is already defined")]
  VariableAlreadyBound,
  #[error("plot step must be positive")]
  NonPositiveStep,
  #[error("Render error: {0}")]
  RenderError(String),
}

/// One interpreter session: the variable bindings accumulated through
/// `name := expr` statements, plus the sink that `plot` draws into.
///
/// Bindings map a name to a `Node`, not to a number — a variable may
/// be defined in terms of other variables and is only forced to a
/// value when evaluated. Nothing guards against a binding that reaches
/// itself; evaluating one recurses until the stack gives out.
pub struct Environment {
  variables: HashMap<String, Node>,
  drawer: Box<dyn ImageDrawer>,
}

impl Environment {
  pub fn new(drawer: Box<dyn ImageDrawer>) -> Self {
    Environment {
      variables: HashMap::new(),
      drawer,
    }
  }

  pub fn variables(&self) -> &HashMap<String, Node> {
    &self.variables
  }

  pub fn lookup(&self, name: &str) -> Option<&Node> {
    self.variables.get(name)
  }

  pub fn is_defined(&self, name: &str) -> bool {
    self.variables.contains_key(name)
  }

  /// Bind `name`, replacing any previous binding.
  pub fn define(&mut self, name: impl Into<String>, value: Node) {
    self.variables.insert(name.into(), value);
  }

  pub fn drawer_mut(&mut self) -> &mut dyn ImageDrawer {
    self.drawer.as_mut()
  }
}

/// Parse and run one statement, returning the text the REPL should
/// print. Assignments echo the stored (simplified) right-hand side;
/// `simplify(…)` prints the rewritten tree; `plot(…)` draws and prints
/// a placeholder; everything else evaluates to a number.
pub fn interpret(
  env: &mut Environment,
  input: &str,
) -> Result<String, EvaluationError> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(EvaluationError::EmptyInput);
  }

  let mut pairs = CalcParser::parse(Rule::Program, trimmed).map_err(Box::new)?;
  let program = pairs.next().ok_or(EvaluationError::EmptyInput)?;

  let mut last_result = None;
  for item in program.into_inner() {
    match item.as_rule() {
      Rule::Assignment => {
        let mut inner = item.into_inner();
        let name = inner.next().unwrap().as_str().to_string();
        let tree = syntax::pair_to_node(inner.next().unwrap());
        let value = evaluator::simplify(env, &tree);
        let shown = syntax::node_to_string(&value);
        env.define(name, value);
        last_result = Some(shown);
      }
      Rule::Expression => {
        let tree = syntax::pair_to_node(item);
        last_result = Some(dispatch(env, &tree)?);
      }
      _ => {} // EOI
    }
  }

  last_result.ok_or(EvaluationError::EmptyInput)
}

/// Route a statement to the evaluator, the simplifier, or the plot
/// sampler, depending on the top-level operator.
fn dispatch(env: &mut Environment, tree: &Node) -> Result<String, EvaluationError> {
  match tree {
    Node::Operation { name, children }
      if name == "simplify" && children.len() == 1 =>
    {
      // The simplifier collapses the meta-operator itself.
      Ok(syntax::node_to_string(&evaluator::simplify(env, tree)))
    }
    Node::Operation { name, children }
      if name == "plot" && children.len() == 5 =>
    {
      evaluator::plot(env, tree)?;
      Ok("-Plot-".to_string())
    }
    _ => Ok(format_result(evaluator::evaluate(env, tree)?)),
  }
}

/// Format an evaluation result, dropping the fractional part of whole
/// numbers so `2 + 3` prints as `5` rather than `5.0`.
pub fn format_result(result: f64) -> String {
  if result.fract() == 0.0 && result.abs() < 1e15 {
    format!("{}", result as i64)
  } else {
    format!("{}", result)
  }
}
