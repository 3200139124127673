use crate::*;
pub use random::*;

mod random;

/// Strategy producing the fixed mine layout for a new game.
pub trait MineFieldGenerator {
    fn generate(&self, config: GameConfig) -> Result<MineField>;
}
