pub use board::*;
pub use errors::*;
pub use marks::*;
pub use moves::*;
pub use status::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod errors;
mod marks;
mod moves;
mod status;
mod visualization;
