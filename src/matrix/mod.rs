//! Dense integer matrices: multiplication loop orders and slicing.

pub mod dense;
pub mod multiply;
pub mod slice;

pub use dense::Matrix;
pub use multiply::{multiply, LoopOrder};
pub use slice::{demo_matrix, slice, SliceDirection};
