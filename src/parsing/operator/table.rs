use super::Operator;
use super::precedence::Precedence;
use super::associativity::Associativity;

use phf::phf_map;

static ARITHMETIC_OPERATORS: phf::Map<char, Operator> = phf_map! {
  '+' => Operator::new('+', Associativity::LEFT, Precedence::new(1)),
  '-' => Operator::new('-', Associativity::LEFT, Precedence::new(1)),
  '*' => Operator::new('*', Associativity::LEFT, Precedence::new(2)),
  '/' => Operator::new('/', Associativity::LEFT, Precedence::new(2)),
  '^' => Operator::new('^', Associativity::RIGHT, Precedence::new(3)),
};

/// A fixed table of operators, indexed by their symbol.
#[derive(Debug, Clone, Copy)]
pub struct OperatorTable {
  mapping: &'static phf::Map<char, Operator>,
}

impl OperatorTable {
  /// The five arithmetic operators `+ - * / ^`.
  pub fn arithmetic() -> OperatorTable {
    OperatorTable { mapping: &ARITHMETIC_OPERATORS }
  }

  pub fn get(&self, symbol: char) -> Option<&'static Operator> {
    self.mapping.get(&symbol)
  }
}

impl Default for OperatorTable {
  fn default() -> Self {
    OperatorTable::arithmetic()
  }
}
