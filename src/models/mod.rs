pub mod booking;
pub mod customer;
pub mod hotel;
