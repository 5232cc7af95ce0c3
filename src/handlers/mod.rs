pub mod account;
pub mod helpers;
