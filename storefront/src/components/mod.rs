pub mod field_error;
pub mod notice_banner;
pub mod site_header;
pub mod vehicle_card;
