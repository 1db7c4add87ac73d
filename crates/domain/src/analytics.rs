pub mod aggregate;

pub use aggregate::{FloatStats, IntegerStats, StringStats, Summary};
