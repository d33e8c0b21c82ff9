//! 联系表单数据模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::now_rfc3339;

/// 个人联系表单
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndividualContact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub privacy_agreed: bool,
    pub created_at: String,
}

/// 企业联系表单
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessContact {
    pub id: String,
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub privacy_agreed: bool,
    pub created_at: String,
}

impl IndividualContact {
    pub fn new(
        name: String,
        email: String,
        phone: String,
        message: String,
        privacy_agreed: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            phone,
            message,
            privacy_agreed,
            created_at: now_rfc3339(),
        }
    }
}

impl BusinessContact {
    pub fn new(
        company_name: String,
        contact_person: String,
        email: String,
        phone: String,
        message: String,
        privacy_agreed: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            company_name,
            contact_person,
            email,
            phone,
            message,
            privacy_agreed,
            created_at: now_rfc3339(),
        }
    }
}
