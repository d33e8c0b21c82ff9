use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 邮件通知配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailConfig {
    /// SMTP 服务器地址
    pub smtp_host: String,
    /// SMTP 端口
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// SMTP 用户名
    pub smtp_username: String,
    /// SMTP 密码（明文存储在配置文件中，请确保文件权限安全）
    pub smtp_password: String,
    /// 是否使用 STARTTLS
    #[serde(default = "default_smtp_tls")]
    pub smtp_tls: bool,
    /// 发件人地址
    pub from_address: String,
    /// 收件人地址列表
    pub to_addresses: Vec<String>,
}

fn default_smtp_port() -> u16 {
    587
}

fn default_smtp_tls() -> bool {
    true
}

/// 应用配置
///
/// secretKey / adminEmail / adminPassword 为必填项，缺失时启动失败，
/// 不提供内置默认值
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// SQLite 数据库文件路径
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// JWT 签名密钥
    pub secret_key: String,

    /// 管理员登录邮箱
    pub admin_email: String,

    /// 管理员初始密码
    pub admin_password: String,

    /// CORS 允许的来源列表（未配置时允许所有来源）
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cors_origins: Option<Vec<String>>,

    /// 邮件通知配置（可选）
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<EmailConfig>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_database_path() -> String {
    "atrium.db".to_string()
}

impl Config {
    /// 默认配置文件路径
    pub fn default_config_path() -> &'static str {
        "config.json"
    }

    /// 从文件加载配置
    ///
    /// 配置文件不存在或必填项为空时返回错误
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("配置文件不存在: {}", path.display());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("解析配置文件失败: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// 校验必填项
    fn validate(&self) -> anyhow::Result<()> {
        if self.secret_key.trim().is_empty() {
            anyhow::bail!("secretKey 未配置");
        }
        if self.admin_email.trim().is_empty() {
            anyhow::bail!("adminEmail 未配置");
        }
        if self.admin_password.trim().is_empty() {
            anyhow::bail!("adminPassword 未配置");
        }
        Ok(())
    }
}
