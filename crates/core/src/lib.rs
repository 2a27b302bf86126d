pub mod blog;
pub mod storage;
