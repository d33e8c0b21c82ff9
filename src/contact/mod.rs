//! 联系表单模块
//!
//! 个人/企业两类表单：公开提交、认证查看，提交后不可变

mod handlers;
mod model;
mod router;
mod store;
mod types;

pub use model::{BusinessContact, IndividualContact};
pub use router::create_contact_router;
pub use store::ContactStore;
