
mod precedence;
mod associativity;
mod table;

pub use precedence::Precedence;
pub use associativity::Associativity;
pub use table::OperatorTable;

use std::fmt::{self, Display, Formatter};

/// A binary infix operator. Every operator has exactly one
/// precedence and one associativity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operator {
  symbol: char,
  assoc: Associativity,
  prec: Precedence,
}

impl Operator {
  pub const fn new(symbol: char, assoc: Associativity, prec: Precedence) -> Self {
    Operator { symbol, assoc, prec }
  }

  /// The character which spells this operator in an expression.
  pub fn symbol(&self) -> char {
    self.symbol
  }

  pub fn associativity(&self) -> Associativity {
    self.assoc
  }

  pub fn precedence(&self) -> Precedence {
    self.prec
  }

  /// Whether `self`, sitting on the operator stack, must be output
  /// before `incoming` is pushed. Equal precedence only yields when
  /// the incoming operator is left associative.
  pub fn yields_to(&self, incoming: &Operator) -> bool {
    self.precedence() > incoming.precedence() ||
      (self.precedence() == incoming.precedence() && incoming.associativity().is_left_assoc())
  }
}

impl Display for Operator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn op(symbol: char, assoc: Associativity, prec: u64) -> Operator {
    Operator::new(symbol, assoc, Precedence::new(prec))
  }

  #[test]
  fn test_higher_precedence_yields() {
    let times = op('*', Associativity::LEFT, 2);
    let plus = op('+', Associativity::LEFT, 1);
    assert!(times.yields_to(&plus));
    assert!(!plus.yields_to(&times));
  }

  #[test]
  fn test_left_assoc_yields_to_itself() {
    let minus = op('-', Associativity::LEFT, 1);
    assert!(minus.yields_to(&minus));
  }

  #[test]
  fn test_right_assoc_does_not_yield_to_itself() {
    let pow = op('^', Associativity::RIGHT, 3);
    assert!(!pow.yields_to(&pow));
  }

  #[test]
  fn test_display() {
    assert_eq!(op('/', Associativity::LEFT, 2).to_string(), "/");
  }
}
