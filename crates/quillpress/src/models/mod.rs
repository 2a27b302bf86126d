mod form;

pub use form::{FormError, MediaUpload, PostForm};
