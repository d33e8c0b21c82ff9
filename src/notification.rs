//! 邮件通知模块
//!
//! 可选的 SMTP 通知能力。未配置时所有发送请求静默忽略，
//! 表单提交流程不依赖本模块（提交通知未接线，见 DESIGN.md）。

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::model::config::EmailConfig;

/// 邮件通知服务
///
/// 即使未配置邮件也可创建实例
pub struct NotificationService {
    config: Option<EmailConfig>,
}

impl NotificationService {
    pub fn new(config: Option<EmailConfig>) -> Self {
        Self { config }
    }

    /// 是否已配置邮件通知
    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    /// 发送测试邮件（同步等待结果）
    pub async fn send_test_email(&self) -> anyhow::Result<()> {
        let config = self
            .config
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("邮件通知未配置"))?;

        send_email(
            config,
            "[atrium] 测试邮件",
            "这是一封来自 atrium 的测试邮件。\n\n如果您收到此邮件，说明邮件通知功能配置正确。",
        )
        .await
    }
}

/// 发送邮件到所有收件人
async fn send_email(config: &EmailConfig, subject: &str, body: &str) -> anyhow::Result<()> {
    if config.to_addresses.is_empty() {
        anyhow::bail!("收件人列表为空");
    }

    let from: Mailbox = config
        .from_address
        .parse()
        .map_err(|e| anyhow::anyhow!("无效的发件人地址 '{}': {}", config.from_address, e))?;

    let mailer = build_transport(config)?;

    for recipient in &config.to_addresses {
        let to: Mailbox = recipient
            .parse()
            .map_err(|e| anyhow::anyhow!("无效的收件人地址 '{}': {}", recipient, e))?;

        let email = Message::builder()
            .from(from.clone())
            .to(to)
            .subject(subject)
            .body(body.to_string())
            .map_err(|e| anyhow::anyhow!("构建邮件失败: {}", e))?;

        mailer
            .send(email)
            .await
            .map_err(|e| anyhow::anyhow!("发送邮件到 {} 失败: {}", recipient, e))?;
    }

    tracing::info!("邮件已发送: {} -> {:?}", subject, config.to_addresses);
    Ok(())
}

/// 构建 SMTP 传输
fn build_transport(config: &EmailConfig) -> anyhow::Result<AsyncSmtpTransport<Tokio1Executor>> {
    let creds = Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

    let builder = if config.smtp_tls {
        AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| anyhow::anyhow!("创建 STARTTLS SMTP 传输失败: {}", e))?
    } else {
        AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
    };

    Ok(builder.port(config.smtp_port).credentials(creds).build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_service() {
        let service = NotificationService::new(None);
        assert!(!service.is_configured());
    }

    #[tokio::test]
    async fn test_send_test_email_without_config_fails() {
        let service = NotificationService::new(None);
        let result = service.send_test_email().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_build_transport() {
        let config = EmailConfig {
            smtp_host: "smtp.example.com".to_string(),
            smtp_port: 587,
            smtp_username: "u".to_string(),
            smtp_password: "p".to_string(),
            smtp_tls: true,
            from_address: "noreply@example.com".to_string(),
            to_addresses: vec!["admin@example.com".to_string()],
        };
        assert!(build_transport(&config).is_ok());
    }
}
