pub mod similarity;
pub mod tokenize;

pub use similarity::similarity;
pub use tokenize::tokenize;
