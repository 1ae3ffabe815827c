mod animation;
mod simulation;

pub use animation::Animation;
pub use simulation::{build_engine, resolve_pattern};
