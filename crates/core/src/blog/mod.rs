mod types;

pub use types::{AdminUser, Category, Comment, Like, NewPost, Post, PostChanges};
