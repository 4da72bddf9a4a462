pub mod capture;
pub mod dns;
pub mod output;
