pub mod json_file_resource_repository;
pub mod static_resource_repository;

pub use json_file_resource_repository::JsonFileResourceRepository;
pub use static_resource_repository::StaticResourceRepository;
