
use std::collections::HashMap;

/// Characters recognized as operator tokens by the expression
/// algorithms.
pub const OPERATOR_CHARS: &str = "*-+/^";

/// True if the token is a single-character operator. Multi-character
/// tokens are never operators, even when every character is drawn
/// from [`OPERATOR_CHARS`], so negative numbers like `-3` classify as
/// operands.
pub fn is_operator(token: &str) -> bool {
  let mut chars = token.chars();
  match (chars.next(), chars.next()) {
    (Some(ch), None) => OPERATOR_CHARS.contains(ch),
    _ => false,
  }
}

/// The precedence of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Precedence(u64);

impl Precedence {
  /// The rank assigned to every token without a table entry.
  pub const MIN: Precedence = Precedence(0);

  pub const fn new(n: u64) -> Precedence {
    Precedence(n)
  }
}

/// A table of operators, indexed by their character, which ranks them
/// for infix-to-postfix conversion.
#[derive(Debug, Clone, Default)]
pub struct OperatorTable {
  mapping: HashMap<char, Precedence>,
}

impl OperatorTable {
  pub fn new() -> OperatorTable {
    OperatorTable::default()
  }

  pub fn with_capacity(capacity: usize) -> OperatorTable {
    OperatorTable {
      mapping: HashMap::with_capacity(capacity),
    }
  }

  pub fn get(&self, name: char) -> Option<Precedence> {
    self.mapping.get(&name).copied()
  }

  pub fn insert(&mut self, name: char, precedence: Precedence) {
    self.mapping.insert(name, precedence);
  }

  /// The four arithmetic operators. `^` is recognized as an operator
  /// token by [`is_operator`] but deliberately has no entry here, so
  /// it ranks below every listed operator.
  pub fn common_operators() -> OperatorTable {
    vec![
      ('*', Precedence::new(2)),
      ('/', Precedence::new(2)),
      ('+', Precedence::new(1)),
      ('-', Precedence::new(1)),
    ].into_iter().collect()
  }

  /// Looks up the precedence rank of the given token. Tokens without
  /// a table entry, multi-character tokens included, rank
  /// [`Precedence::MIN`].
  pub fn precedence(&self, token: &str) -> Precedence {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
      (Some(ch), None) => self.get(ch).unwrap_or(Precedence::MIN),
      _ => Precedence::MIN,
    }
  }
}

impl FromIterator<(char, Precedence)> for OperatorTable {
  fn from_iter<I>(iter: I) -> Self
  where I : IntoIterator<Item = (char, Precedence)> {
    let iter = iter.into_iter();
    let (len_bound, _) = iter.size_hint();
    let mut table = OperatorTable::with_capacity(len_bound);
    for (name, precedence) in iter {
      table.insert(name, precedence);
    }
    table
  }
}
