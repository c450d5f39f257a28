pub mod catalog;
pub mod matching;
pub mod skills;
pub mod vector;
