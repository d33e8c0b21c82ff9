//! JWT Token 管理模块
//!
//! 提供 JWT Token 的生成和验证功能

use anyhow::{Result, anyhow};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// JWT Claims 结构
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject（管理员邮箱）
    pub sub: String,
    /// 签发时间 (Unix timestamp)
    pub iat: usize,
    /// 过期时间 (Unix timestamp)
    pub exp: usize,
}

/// JWT Token 有效期（24 小时）
pub const TOKEN_EXPIRY_SECONDS: u64 = 24 * 60 * 60;

/// 从配置的密钥派生 HMAC 签名密钥
///
/// 使用 SHA256 哈希，保证密钥长度固定为 32 字节
fn derive_secret_key(secret: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.finalize().to_vec()
}

/// 生成 JWT Token
///
/// # Arguments
/// * `email` - 管理员邮箱（写入 sub claim）
/// * `secret` - 配置的签名密钥
///
/// # Returns
/// * `Ok((token, expires_in))` - JWT Token 字符串和过期秒数
pub fn generate_token(email: &str, secret: &str) -> Result<(String, u64)> {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();

    let claims = Claims {
        sub: email.to_string(),
        iat: now as usize,
        exp: (now + TOKEN_EXPIRY_SECONDS) as usize,
    };

    let key = derive_secret_key(secret);
    let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(&key))?;

    Ok((token, TOKEN_EXPIRY_SECONDS))
}

/// 验证 JWT Token
///
/// # Returns
/// * `Ok(Claims)` - 验证成功
/// * `Err(_)` - 验证失败（过期、签名错误、格式错误等）
pub fn verify_token(token: &str, secret: &str) -> Result<Claims> {
    let key = derive_secret_key(secret);
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(&key),
        &Validation::default(),
    )
    .map_err(|e| anyhow!("Invalid token: {}", e))?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_and_verify_token() {
        let secret = "test-secret-key-12345";

        let (token, expires_in) = generate_token("admin@example.com", secret).unwrap();
        assert!(!token.is_empty());
        assert_eq!(expires_in, TOKEN_EXPIRY_SECONDS);

        let claims = verify_token(&token, secret).unwrap();
        assert_eq!(claims.sub, "admin@example.com");
        assert_eq!(claims.exp - claims.iat, TOKEN_EXPIRY_SECONDS as usize);
    }

    #[test]
    fn test_verify_token_with_wrong_secret() {
        let (token, _) = generate_token("admin@example.com", "secret-a").unwrap();
        assert!(verify_token(&token, "secret-b").is_err());
    }

    #[test]
    fn test_verify_invalid_token() {
        assert!(verify_token("invalid.token.here", "secret").is_err());
        assert!(verify_token("", "secret").is_err());
    }

    #[test]
    fn test_verify_expired_token() {
        let secret = "test-secret-key-12345";
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs() as usize;

        // 过期时间早于当前时间且超出默认 60 秒容差
        let claims = Claims {
            sub: "admin@example.com".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let key = derive_secret_key(secret);
        let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(&key)).unwrap();

        assert!(verify_token(&token, secret).is_err());
    }

    #[test]
    fn test_derive_secret_key_consistency() {
        let a = derive_secret_key("key");
        let b = derive_secret_key("key");
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
        assert_ne!(derive_secret_key("key2"), a);
    }
}
