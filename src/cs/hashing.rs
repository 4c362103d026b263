pub mod fnv;
pub mod open_addressing;

pub use fnv::{fnv1_hash, fnv1a_hash, FnvBuildHasher, FnvHasher, FnvVariant};
pub use open_addressing::{Entry, Table, TableBuilder};
