use serde::{Deserialize, Serialize};

pub mod crm;
pub mod distributor;
pub mod inventory;
pub mod money;
pub mod protocol;

pub use crm::*;
pub use distributor::*;
pub use inventory::*;
pub use money::Amount;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const BEARER_PREFIX: &str = "Bearer ";

// =========================================================
// 认证模型 (Auth Models)
// =========================================================

/// 登录成功后后端返回的用户资料
///
/// 仅用于展示（头像首字母、页眉），不参与任何权限判断。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(
        rename = "nombre_completo",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub full_name: Option<String>,
}

impl UserProfile {
    pub fn new(username: impl Into<String>, role: Option<String>) -> Self {
        Self {
            username: username.into(),
            role,
            full_name: None,
        }
    }

    /// 显示名称：优先使用全名，否则使用用户名
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }

    /// 头像首字母（最多两个，大写）
    pub fn initials(&self) -> String {
        let initials: String = self
            .display_name()
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();

        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }
}

/// `POST /auth/login` 的响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: UserProfile,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// 动作类接口的通用响应 (`{ "success": true, "message": "..." }`)
///
/// 部分接口会附带额外字段（如 `lead_phone`、`stock_id`），保存在 `extra` 中。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ActionResult {
    pub fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(|v| v.as_str())
    }

    pub fn extra_i64(&self, key: &str) -> Option<i64> {
        self.extra.get(key).and_then(|v| v.as_i64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_prefer_full_name() {
        let mut profile = UserProfile::new("admin", Some("admin".into()));
        assert_eq!(profile.initials(), "A");

        profile.full_name = Some("maria lopez garcia".into());
        assert_eq!(profile.initials(), "ML");

        profile.full_name = Some("   ".into());
        assert_eq!(profile.display_name(), "admin");
    }

    #[test]
    fn login_response_from_backend_payload() {
        let json = r#"{
            "access_token": "abc.def",
            "token_type": "bearer",
            "user": { "username": "admin", "role": "admin" }
        }"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.access_token, "abc.def");
        assert_eq!(resp.user.username, "admin");
        assert_eq!(resp.user.role.as_deref(), Some("admin"));
        assert!(resp.user.full_name.is_none());
    }

    #[test]
    fn action_result_keeps_extra_fields() {
        let json = r#"{"success": true, "message": "ok", "lead_phone": "+573001112233", "stock_id": 9}"#;
        let result: ActionResult = serde_json::from_str(json).unwrap();
        assert!(result.success);
        assert_eq!(result.extra_str("lead_phone"), Some("+573001112233"));
        assert_eq!(result.extra_i64("stock_id"), Some(9));
    }
}
