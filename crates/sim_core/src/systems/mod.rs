pub mod charging;
pub mod flight;
