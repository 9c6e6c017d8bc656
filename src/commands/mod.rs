pub mod palette;
pub mod remove;
pub mod set;
pub mod show;
pub mod tree;

pub use palette::*;
pub use remove::*;
pub use set::*;
pub use show::*;
pub use tree::*;
