/// An `ErrorList<E>` can be thought of, roughly, as a `Vec<E>`.
/// Recoverable errors are appended to the list as they are
/// encountered, and in the end the caller can get a list of what went
/// wrong without the operation itself having failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorList<E> {
  errors: Vec<E>,
}

impl<E> ErrorList<E> {
  /// A new, empty error list.
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, error: E) {
    self.errors.push(error)
  }

  pub fn is_empty(&self) -> bool {
    self.errors.is_empty()
  }

  pub fn len(&self) -> usize {
    self.errors.len()
  }

  /// Converts into a `Result`, failing with the earliest recorded
  /// error if there is one.
  pub fn into_first_error<T>(self, value: T) -> Result<T, E> {
    match self.into_vec().into_iter().next() {
      None => Ok(value),
      Some(err) => Err(err),
    }
  }

  pub fn into_vec(self) -> Vec<E> {
    self.errors
  }
}

impl<'a, E> IntoIterator for &'a ErrorList<E> {
  type Item = &'a E;
  type IntoIter = ::std::slice::Iter<'a, E>;

  fn into_iter(self) -> Self::IntoIter {
    self.errors.iter()
  }
}

impl<E> Default for ErrorList<E> {
  fn default() -> Self {
    Self { errors: Vec::new() }
  }
}
