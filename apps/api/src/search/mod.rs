pub mod handlers;
pub mod suggest;
