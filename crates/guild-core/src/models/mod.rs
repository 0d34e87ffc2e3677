pub mod availability;
pub mod category;
pub mod education;
pub mod experience;
pub mod profile_record;
