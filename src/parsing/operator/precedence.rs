
/// The precedence of an operator. Higher values bind more tightly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precedence(u8);

impl Precedence {
  /// Additive operators.
  pub const SUM: Precedence = Precedence(1);
  /// Multiplicative operators, including remainder.
  pub const PRODUCT: Precedence = Precedence(2);
  /// Exponentiation.
  pub const POWER: Precedence = Precedence(3);

  pub const fn rank(self) -> u8 {
    self.0
  }
}
