mod encoding;
mod pretty;

pub use encoding::*;
pub use pretty::PrettySlice;
