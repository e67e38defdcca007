
//! The binary operators understood by the evaluator, together with
//! their precedence and associativity.

mod precedence;
mod associativity;

pub use precedence::Precedence;
pub use associativity::Associativity;

use crate::error::EvaluationError;

use std::fmt::{self, Display, Formatter};

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
  Add,
  Sub,
  Mul,
  Div,
  Rem,
  Pow,
}

impl Operator {
  pub const ALL: [Operator; 6] = [
    Operator::Add,
    Operator::Sub,
    Operator::Mul,
    Operator::Div,
    Operator::Rem,
    Operator::Pow,
  ];

  /// Looks up the operator written as `symbol`. Fails with
  /// [`EvaluationError::InvalidOperator`] if no operator uses that
  /// character.
  pub fn from_symbol(symbol: char) -> Result<Operator, EvaluationError> {
    match symbol {
      '+' => Ok(Operator::Add),
      '-' => Ok(Operator::Sub),
      '*' => Ok(Operator::Mul),
      '/' => Ok(Operator::Div),
      '%' => Ok(Operator::Rem),
      '^' => Ok(Operator::Pow),
      _ => Err(EvaluationError::InvalidOperator(symbol)),
    }
  }

  /// The character used to write the operator.
  pub const fn symbol(self) -> char {
    match self {
      Operator::Add => '+',
      Operator::Sub => '-',
      Operator::Mul => '*',
      Operator::Div => '/',
      Operator::Rem => '%',
      Operator::Pow => '^',
    }
  }

  pub const fn precedence(self) -> Precedence {
    match self {
      Operator::Add | Operator::Sub => Precedence::SUM,
      Operator::Mul | Operator::Div | Operator::Rem => Precedence::PRODUCT,
      Operator::Pow => Precedence::POWER,
    }
  }

  /// Exponentiation is the only right-associative operator.
  pub const fn associativity(self) -> Associativity {
    match self {
      Operator::Pow => Associativity::RIGHT,
      _ => Associativity::LEFT,
    }
  }
}

impl Display for Operator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}
