mod eval;
mod plot;
mod simplify;

pub use eval::*;
pub use plot::*;
pub use simplify::*;
