//! 博客文章模块
//!
//! 公开读取、认证写入的完整 CRUD，更新为部分合并

mod handlers;
mod model;
mod router;
mod store;
mod types;

pub use model::BlogPost;
pub use router::create_blog_router;
pub use store::BlogStore;
