pub mod environment;
pub mod observation;
pub mod reward;
pub mod sequence;

pub use environment::{Info, ProteinDesignEnv};
pub use observation::Observation;
pub use reward::{RewardComponents, RewardConfig};
pub use sequence::{Motif, Sequence, SymbolBuffer};
