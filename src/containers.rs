mod closed;
mod frontier;

pub use closed::*;
pub use frontier::*;

//We redefine these here so it is easier to update the hash style later if we need too.
pub type AHashBuildHasher = std::hash::BuildHasherDefault<ahash::AHasher>;

pub type IndexMap<K, V> = indexmap::IndexMap<K, V, AHashBuildHasher>;
pub type HashMap<K, V> = std::collections::HashMap<K, V, AHashBuildHasher>;
