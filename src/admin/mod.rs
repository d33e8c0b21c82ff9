//! Admin 模块
//!
//! 管理员登录、凭据轮换、测试邮件端点

mod handlers;
mod router;
pub mod types;

pub use router::{AdminState, create_admin_router};
