pub mod target;

pub use target::{BreachRecord, Target, load_targets_from_file, resolve_targets};
