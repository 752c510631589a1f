pub mod measurements;
pub mod stations;
