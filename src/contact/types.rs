//! 联系表单请求类型

use serde::Deserialize;

use crate::error::{ApiError, FieldError};

fn default_privacy_agreed() -> bool {
    true
}

/// 个人表单提交请求
#[derive(Debug, Deserialize)]
pub struct IndividualContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    #[serde(default = "default_privacy_agreed")]
    pub privacy_agreed: bool,
}

impl IndividualContactRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut fields = Vec::new();
        require_non_empty(&mut fields, "name", &self.name);
        require_email(&mut fields, "email", &self.email);
        require_non_empty(&mut fields, "phone", &self.phone);
        require_non_empty(&mut fields, "message", &self.message);
        if fields.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(fields))
        }
    }
}

/// 企业表单提交请求
#[derive(Debug, Deserialize)]
pub struct BusinessContactRequest {
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    #[serde(default = "default_privacy_agreed")]
    pub privacy_agreed: bool,
}

impl BusinessContactRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut fields = Vec::new();
        require_non_empty(&mut fields, "company_name", &self.company_name);
        require_non_empty(&mut fields, "contact_person", &self.contact_person);
        require_email(&mut fields, "email", &self.email);
        require_non_empty(&mut fields, "phone", &self.phone);
        require_non_empty(&mut fields, "message", &self.message);
        if fields.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(fields))
        }
    }
}

fn require_non_empty(fields: &mut Vec<FieldError>, name: &str, value: &str) {
    if value.trim().is_empty() {
        fields.push(FieldError::new(name, "不能为空"));
    }
}

fn require_email(fields: &mut Vec<FieldError>, name: &str, value: &str) {
    if value.trim().is_empty() {
        fields.push(FieldError::new(name, "不能为空"));
    } else if !value.contains('@') {
        fields.push(FieldError::new(name, "邮箱格式无效"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_individual_validation() {
        let ok = IndividualContactRequest {
            name: "张三".into(),
            email: "zhangsan@example.com".into(),
            phone: "123456".into(),
            message: "你好".into(),
            privacy_agreed: true,
        };
        assert!(ok.validate().is_ok());

        let bad = IndividualContactRequest {
            name: "".into(),
            email: "not-an-email".into(),
            phone: "123456".into(),
            message: "你好".into(),
            privacy_agreed: true,
        };
        match bad.validate() {
            Err(ApiError::Validation(fields)) => {
                let names: Vec<_> = fields.iter().map(|f| f.field.as_str()).collect();
                assert_eq!(names, vec!["name", "email"]);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_privacy_agreed_defaults_to_true() {
        let request: IndividualContactRequest = serde_json::from_str(
            r#"{"name": "a", "email": "a@b.com", "phone": "1", "message": "m"}"#,
        )
        .unwrap();
        assert!(request.privacy_agreed);
    }

    #[test]
    fn test_business_validation() {
        let bad = BusinessContactRequest {
            company_name: " ".into(),
            contact_person: "李四".into(),
            email: "".into(),
            phone: "".into(),
            message: "合作".into(),
            privacy_agreed: true,
        };
        match bad.validate() {
            Err(ApiError::Validation(fields)) => assert_eq!(fields.len(), 3),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
