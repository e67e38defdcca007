
/// The associativity of a binary operator. Decides how a chain of
/// operators with equal precedence groups, such as `1 - 2 - 3` or
/// `2 ^ 3 ^ 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Associativity {
  right_assoc: bool,
}

impl Associativity {
  /// Indicates an operator which associates to the left, so that
  /// `a # b # c` is `(a # b) # c`.
  pub const LEFT: Associativity = Associativity {
    right_assoc: false,
  };
  /// Indicates an operator which associates to the right, so that
  /// `a # b # c` is `a # (b # c)`.
  pub const RIGHT: Associativity = Associativity {
    right_assoc: true,
  };

  pub const fn is_left_assoc(self) -> bool {
    !self.right_assoc
  }

  pub const fn is_right_assoc(self) -> bool {
    self.right_assoc
  }
}
