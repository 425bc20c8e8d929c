//! Re-imports for convenience
#[doc(no_inline)]
pub use crate::estimate::*;
#[doc(no_inline)]
pub use crate::sample::*;
