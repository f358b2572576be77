// src/osint/mod.rs
pub mod breach;
pub mod dumps;
pub mod sources;

pub use breach::BreachLookupClient;
pub use dumps::{DumpLocator, extract_first_dump_link, extract_first_dump_link_from_str};
pub use sources::{BreachSource, DumpSource};
