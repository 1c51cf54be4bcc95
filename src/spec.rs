pub use arg::Arg;
pub use flag::{Flag, FlagSet};

pub mod arg;
pub mod flag;
