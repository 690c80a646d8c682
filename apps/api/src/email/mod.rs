pub mod disposable;
pub mod handlers;
pub mod normalize;
pub mod validate;

pub use disposable::is_disposable;
pub use normalize::{get_duplicate_check_key, normalize};
pub use validate::{validate, EmailError};
