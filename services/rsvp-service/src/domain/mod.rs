pub mod guest;
pub mod lookup;
pub mod submission;

pub use guest::*;
pub use lookup::*;
pub use submission::*;
