pub mod fragrance;
pub mod similarity;
