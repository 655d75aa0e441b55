use super::diagnostics::MalformedExpressionError;
use super::operator::Operator;
use super::source::Span;
use super::token::{Token, TokenData};
use crate::errorlist::ErrorList;

/// A type implementing this trait receives the output of the shunting
/// yard algorithm, one postfix token at a time, in output order.
pub trait PostfixSink {
  type Output;

  fn push_operand(&mut self, operand: String, span: Span);
  fn push_operator(&mut self, operator: Operator, span: Span);
  /// Called for a `(` that was never closed. It is still flushed to
  /// the output at the end of the input.
  fn push_unmatched_paren(&mut self, span: Span);
  fn finish(self) -> Self::Output;
}

#[derive(Clone, Copy, Debug)]
enum OpStackValue {
  Operator(Operator, Span),
  LeftParen(Span),
}

/// Collects the postfix tokens as display strings.
impl PostfixSink for Vec<String> {
  type Output = Vec<String>;

  fn push_operand(&mut self, operand: String, _span: Span) {
    self.push(operand);
  }

  fn push_operator(&mut self, operator: Operator, _span: Span) {
    self.push(operator.to_string());
  }

  fn push_unmatched_paren(&mut self, _span: Span) {
    self.push(String::from("("));
  }

  fn finish(self) -> Self::Output {
    self
  }
}

/// Reorders `input` into postfix order, feeding the result to `sink`.
///
/// This never fails. Unmatched parentheses are tolerated: a stray `)`
/// flushes the operator stack and is otherwise dropped, and a `(`
/// which is still open at the end of the input is emitted as a
/// literal token. Each such event is recorded in `errors`.
pub fn convert<S, I>(
  mut sink: S,
  input: I,
  errors: &mut ErrorList<MalformedExpressionError>,
) -> S::Output
where S: PostfixSink,
      I: IntoIterator<Item = Token> {
  let mut operator_stack: Vec<OpStackValue> = Vec::new();
  for token in input {
    match token.data {
      TokenData::Operand(operand) => {
        sink.push_operand(operand, token.span);
      }
      TokenData::LeftParen => {
        operator_stack.push(OpStackValue::LeftParen(token.span));
      }
      TokenData::RightParen => {
        let mut matched = false;
        while let Some(stack_value) = operator_stack.pop() {
          match stack_value {
            OpStackValue::Operator(op, span) => sink.push_operator(op, span),
            OpStackValue::LeftParen(_) => {
              matched = true;
              break;
            }
          }
        }
        if !matched {
          errors.push(MalformedExpressionError::UnmatchedCloseParen(token.span));
        }
      }
      TokenData::Operator(op) => {
        // Pop operators until we hit a parenthesis or one which binds
        // more loosely than `op`.
        while let Some(&OpStackValue::Operator(top, span)) = operator_stack.last() {
          if top.yields_to(&op) {
            operator_stack.pop();
            sink.push_operator(top, span);
          } else {
            break;
          }
        }
        operator_stack.push(OpStackValue::Operator(op, token.span));
      }
    }
  }

  // Flush everything left, including unclosed parentheses.
  while let Some(stack_value) = operator_stack.pop() {
    match stack_value {
      OpStackValue::Operator(op, span) => sink.push_operator(op, span),
      OpStackValue::LeftParen(span) => {
        errors.push(MalformedExpressionError::UnmatchedOpenParen(span));
        sink.push_unmatched_paren(span);
      }
    }
  }

  sink.finish()
}
