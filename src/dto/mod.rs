pub mod geocode_dto;
pub mod provider_dto;
pub mod scooter_dto;
