//! 联系表单存储

use anyhow::Result;
use rusqlite::params;

use super::model::{BusinessContact, IndividualContact};
use crate::db::Database;

/// 联系表单存储（两张表，只插入和列出）
pub struct ContactStore {
    db: Database,
}

impl ContactStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// 保存个人表单提交
    pub async fn insert_individual(&self, contact: IndividualContact) -> Result<IndividualContact> {
        self.db
            .call(move |conn| {
                conn.execute(
                    "INSERT INTO individual_contacts (id, name, email, phone, message, privacy_agreed, created_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                    params![
                        contact.id,
                        contact.name,
                        contact.email,
                        contact.phone,
                        contact.message,
                        contact.privacy_agreed as i32,
                        contact.created_at,
                    ],
                )?;
                Ok(contact)
            })
            .await
    }

    /// 列出个人表单提交，创建时间倒序
    pub async fn list_individual(&self) -> Result<Vec<IndividualContact>> {
        self.db
            .call(|conn| {
                let mut stmt = conn.prepare(
                    "SELECT id, name, email, phone, message, privacy_agreed, created_at
                     FROM individual_contacts ORDER BY created_at DESC, rowid DESC",
                )?;
                let contacts = stmt
                    .query_map([], |row| {
                        Ok(IndividualContact {
                            id: row.get(0)?,
                            name: row.get(1)?,
                            email: row.get(2)?,
                            phone: row.get(3)?,
                            message: row.get(4)?,
                            privacy_agreed: row.get::<_, i32>(5)? != 0,
                            created_at: row.get(6)?,
                        })
                    })?
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(contacts)
            })
            .await
    }

    /// 保存企业表单提交
    pub async fn insert_business(&self, contact: BusinessContact) -> Result<BusinessContact> {
        self.db
            .call(move |conn| {
                conn.execute(
                    "INSERT INTO business_contacts (id, company_name, contact_person, email, phone, message, privacy_agreed, created_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                    params![
                        contact.id,
                        contact.company_name,
                        contact.contact_person,
                        contact.email,
                        contact.phone,
                        contact.message,
                        contact.privacy_agreed as i32,
                        contact.created_at,
                    ],
                )?;
                Ok(contact)
            })
            .await
    }

    /// 列出企业表单提交，创建时间倒序
    pub async fn list_business(&self) -> Result<Vec<BusinessContact>> {
        self.db
            .call(|conn| {
                let mut stmt = conn.prepare(
                    "SELECT id, company_name, contact_person, email, phone, message, privacy_agreed, created_at
                     FROM business_contacts ORDER BY created_at DESC, rowid DESC",
                )?;
                let contacts = stmt
                    .query_map([], |row| {
                        Ok(BusinessContact {
                            id: row.get(0)?,
                            company_name: row.get(1)?,
                            contact_person: row.get(2)?,
                            email: row.get(3)?,
                            phone: row.get(4)?,
                            message: row.get(5)?,
                            privacy_agreed: row.get::<_, i32>(6)? != 0,
                            created_at: row.get(7)?,
                        })
                    })?
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(contacts)
            })
            .await
    }
}
