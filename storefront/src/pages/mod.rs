pub mod booking;
pub mod compare;
pub mod home;
pub mod not_found;
pub mod vehicle_detail;
pub mod vehicles;
