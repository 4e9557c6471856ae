pub mod jwt;
pub mod parse;
pub mod password;
pub mod time;
