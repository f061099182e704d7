pub mod now;
pub mod parse;
