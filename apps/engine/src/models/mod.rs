pub mod evaluation;
pub mod mode;
pub mod question;
