pub mod errors;
pub mod db;
pub mod company;
pub mod invoice;
