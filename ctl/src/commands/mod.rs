pub mod deregister;
pub mod list;
pub mod register;
