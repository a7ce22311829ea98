//! LocalStorage 会话存储
//!
//! 使用 `web_sys::Storage` 实现核心库的 [`SessionStorage`]。

use distro_admin::{ApiError, ApiResult, SessionStorage};

/// 浏览器 LocalStorage 后端
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> ApiResult<()> {
        let storage =
            Self::storage().ok_or_else(|| ApiError::Storage("localStorage unavailable".into()))?;
        storage
            .set_item(key, value)
            .map_err(|e| ApiError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
