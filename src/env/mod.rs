mod errors;
mod spaces;
mod traits;
mod types;
mod vec_env;

pub use errors::EnvError;
pub use spaces::{ActionSpace, ObservationSpace};
pub use traits::{Env, ResetOptions, Transition};
pub use types::{Step, Trajectory};
pub use vec_env::VecEnv;
