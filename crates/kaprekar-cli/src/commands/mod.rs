pub mod range;
pub mod run;
