// Domain layer - Screenboard document model
pub mod board;
pub mod layout;
pub mod query;
pub mod widget;
pub(crate) mod wire_enum;
