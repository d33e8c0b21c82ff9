//! About Us 内容模块
//!
//! 追加式修订日志：写入即插入新修订，读取返回最新修订，
//! 集合为空时合成并持久化默认内容

mod handlers;
mod model;
mod router;
mod store;
mod types;

pub use model::AboutRevision;
pub use router::create_about_router;
pub use store::AboutStore;
