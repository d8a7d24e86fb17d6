// Application layer - Ports the screenboard use cases are written against
pub mod screenboard_repository;
