pub use crate::config::*;
pub use crate::cube::*;
pub use crate::harness::*;
pub use crate::heuristic::*;
pub use crate::problem::*;
pub use crate::r#move::*;
pub use crate::search::*;
pub use crate::truck::*;

#[cfg(test)]
pub use crate::test::*;
