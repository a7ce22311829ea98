//! 分销商领域模型

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// 密码最小长度（与后端校验一致）
pub const MIN_PASSWORD_LEN: usize = 6;

/// 分销商等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DistributorLevel {
    #[default]
    #[serde(rename = "Pre-Junior")]
    PreJunior,
    Junior,
    Senior,
    Master,
    /// 后端返回了未知等级
    #[serde(other)]
    Unknown,
}

impl DistributorLevel {
    pub const ALL: [DistributorLevel; 4] = [
        DistributorLevel::PreJunior,
        DistributorLevel::Junior,
        DistributorLevel::Senior,
        DistributorLevel::Master,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DistributorLevel::PreJunior => "Pre-Junior",
            DistributorLevel::Junior => "Junior",
            DistributorLevel::Senior => "Senior",
            DistributorLevel::Master => "Master",
            DistributorLevel::Unknown => "Desconocido",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == value)
    }
}

impl fmt::Display for DistributorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 分销商状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributorStatus {
    #[default]
    #[serde(rename = "activo")]
    Active,
    #[serde(rename = "inactivo")]
    Inactive,
    #[serde(rename = "suspendido")]
    Suspended,
    #[serde(rename = "eliminado")]
    Deleted,
    #[serde(other)]
    Unknown,
}

impl DistributorStatus {
    pub const ALL: [DistributorStatus; 4] = [
        DistributorStatus::Active,
        DistributorStatus::Inactive,
        DistributorStatus::Suspended,
        DistributorStatus::Deleted,
    ];

    /// 后端使用的取值（用于查询参数）
    pub fn as_str(&self) -> &'static str {
        match self {
            DistributorStatus::Active => "activo",
            DistributorStatus::Inactive => "inactivo",
            DistributorStatus::Suspended => "suspendido",
            DistributorStatus::Deleted => "eliminado",
            DistributorStatus::Unknown => "desconocido",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

impl fmt::Display for DistributorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 分销商（列表与详情共用）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distributor {
    pub id: i64,
    #[serde(rename = "nombres")]
    pub first_names: String,
    #[serde(rename = "apellidos")]
    pub last_names: String,
    #[serde(rename = "nombre_completo", default)]
    pub full_name: Option<String>,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "usuario")]
    pub username: String,
    #[serde(rename = "nivel", default)]
    pub level: DistributorLevel,
    #[serde(rename = "estado", default)]
    pub status: DistributorStatus,
    #[serde(rename = "fecha_ingreso")]
    pub joined_on: NaiveDate,
    #[serde(rename = "fecha_cumpleanos", default)]
    pub birthday: Option<NaiveDate>,
    #[serde(default)]
    pub lead_phone: Option<String>,
    #[serde(rename = "notas", default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub has_2fa: Option<bool>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Distributor {
    pub fn display_name(&self) -> String {
        match &self.full_name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => format!("{} {}", self.first_names, self.last_names),
        }
    }
}

/// 创建 / 更新分销商时提交的表单
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DistributorDraft {
    #[serde(rename = "nombres")]
    pub first_names: String,
    #[serde(rename = "apellidos")]
    pub last_names: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "fecha_ingreso")]
    pub joined_on: Option<NaiveDate>,
    #[serde(rename = "fecha_cumpleanos", skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    #[serde(rename = "usuario")]
    pub username: String,
    #[serde(rename = "nivel")]
    pub level: DistributorLevel,
    #[serde(rename = "estado")]
    pub status: DistributorStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_phone: Option<String>,
    #[serde(rename = "notas", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "contrasena", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(
        rename = "contrasena_doble_factor",
        skip_serializing_if = "Option::is_none"
    )]
    pub second_factor_password: Option<String>,
}

/// 表单校验失败原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    PasswordRequired,
    PasswordTooShort,
    SecondFactorTooShort,
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftError::PasswordRequired => write!(f, "La contraseña es obligatoria"),
            DraftError::PasswordTooShort | DraftError::SecondFactorTooShort => {
                write!(f, "Contraseña mínimo {} caracteres", MIN_PASSWORD_LEN)
            }
        }
    }
}

impl std::error::Error for DraftError {}

impl DistributorDraft {
    /// 从已有分销商生成编辑表单（密码留空）
    pub fn from_existing(d: &Distributor) -> Self {
        Self {
            first_names: d.first_names.clone(),
            last_names: d.last_names.clone(),
            phone: d.phone.clone(),
            email: d.email.clone(),
            joined_on: Some(d.joined_on),
            birthday: d.birthday,
            username: d.username.clone(),
            level: d.level,
            status: d.status,
            lead_phone: d.lead_phone.clone(),
            notes: d.notes.clone(),
            password: None,
            second_factor_password: None,
        }
    }

    /// 创建时：密码必填且不少于 6 位
    pub fn validate_for_create(&self) -> Result<(), DraftError> {
        match self.password.as_deref().map(str::trim) {
            None | Some("") => Err(DraftError::PasswordRequired),
            Some(pw) if pw.chars().count() < MIN_PASSWORD_LEN => Err(DraftError::PasswordTooShort),
            Some(_) => self.validate_second_factor(),
        }
    }

    /// 更新时：密码可选，填写了就必须不少于 6 位
    pub fn validate_for_update(&self) -> Result<(), DraftError> {
        if let Some(pw) = self.password.as_deref().filter(|pw| !pw.is_empty()) {
            if pw.chars().count() < MIN_PASSWORD_LEN {
                return Err(DraftError::PasswordTooShort);
            }
        }
        self.validate_second_factor()
    }

    fn validate_second_factor(&self) -> Result<(), DraftError> {
        match self.second_factor_password.as_deref() {
            Some(pw) if !pw.is_empty() && pw.chars().count() < MIN_PASSWORD_LEN => {
                Err(DraftError::SecondFactorTooShort)
            }
            _ => Ok(()),
        }
    }

    /// 去掉空字符串的可选字段，避免后端把 "" 当作非法邮箱等
    pub fn normalized(mut self) -> Self {
        fn blank_to_none(value: &mut Option<String>) {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                *value = None;
            }
        }
        blank_to_none(&mut self.email);
        blank_to_none(&mut self.lead_phone);
        blank_to_none(&mut self.notes);
        blank_to_none(&mut self.password);
        blank_to_none(&mut self.second_factor_password);
        self
    }
}

/// `GET /distributors/stats/summary`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DistributorSummary {
    #[serde(default)]
    pub total: u64,
    #[serde(rename = "por_estado", default)]
    pub by_status: StatusBreakdown,
    /// 各等级的活跃分销商数量
    #[serde(rename = "por_nivel", default)]
    pub by_level: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusBreakdown {
    #[serde(rename = "activos", default)]
    pub active: u64,
    #[serde(rename = "inactivos", default)]
    pub inactive: u64,
    #[serde(rename = "suspendidos", default)]
    pub suspended: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> DistributorDraft {
        DistributorDraft {
            first_names: "Ana".into(),
            last_names: "Ruiz".into(),
            phone: "3001234567".into(),
            username: "aruiz".into(),
            joined_on: NaiveDate::from_ymd_opt(2024, 3, 1),
            ..Default::default()
        }
    }

    #[test]
    fn parses_list_item_and_ignores_unknown_fields() {
        let json = r#"{
            "id": 7,
            "nombres": "Ana",
            "apellidos": "Ruiz",
            "nombre_completo": "Ana Ruiz",
            "telefono": "3001234567",
            "email": null,
            "usuario": "aruiz",
            "nivel": "Pre-Junior",
            "estado": "suspendido",
            "fecha_ingreso": "2024-03-01",
            "fecha_cumpleanos": null,
            "notas": null,
            "contrasena_texto": "secret1",
            "created_at": "2024-03-01T10:15:30.123456"
        }"#;
        let d: Distributor = serde_json::from_str(json).unwrap();
        assert_eq!(d.id, 7);
        assert_eq!(d.level, DistributorLevel::PreJunior);
        assert_eq!(d.status, DistributorStatus::Suspended);
        assert_eq!(d.display_name(), "Ana Ruiz");
        assert!(d.created_at.is_some());
    }

    #[test]
    fn unknown_level_does_not_fail_the_list() {
        let json = r#"{
            "id": 1, "nombres": "A", "apellidos": "B", "telefono": "1",
            "usuario": "ab", "nivel": "Diamante", "estado": "activo",
            "fecha_ingreso": "2024-01-01"
        }"#;
        let d: Distributor = serde_json::from_str(json).unwrap();
        assert_eq!(d.level, DistributorLevel::Unknown);
    }

    #[test]
    fn create_requires_password_of_minimum_length() {
        let mut d = draft();
        assert_eq!(d.validate_for_create(), Err(DraftError::PasswordRequired));

        d.password = Some("12345".into());
        assert_eq!(d.validate_for_create(), Err(DraftError::PasswordTooShort));

        d.password = Some("abc123".into());
        assert_eq!(d.validate_for_create(), Ok(()));
    }

    #[test]
    fn update_accepts_missing_password() {
        let mut d = draft();
        assert_eq!(d.validate_for_update(), Ok(()));

        d.password = Some("abc".into());
        assert_eq!(d.validate_for_update(), Err(DraftError::PasswordTooShort));

        d.password = None;
        d.second_factor_password = Some("12".into());
        assert_eq!(d.validate_for_update(), Err(DraftError::SecondFactorTooShort));
    }

    #[test]
    fn draft_serializes_backend_field_names() {
        let mut d = draft();
        d.email = Some("  ".into());
        d.password = Some("abc123".into());
        let value = serde_json::to_value(d.normalized()).unwrap();

        assert_eq!(value["nombres"], "Ana");
        assert_eq!(value["nivel"], "Pre-Junior");
        assert_eq!(value["estado"], "activo");
        assert_eq!(value["fecha_ingreso"], "2024-03-01");
        assert_eq!(value["contrasena"], "abc123");
        assert!(value.get("email").is_none());
        assert!(value.get("contrasena_doble_factor").is_none());
    }

    #[test]
    fn summary_defaults_missing_sections() {
        let s: DistributorSummary =
            serde_json::from_str(r#"{"total": 4, "por_nivel": {"Junior": 3, "Master": 1}}"#)
                .unwrap();
        assert_eq!(s.total, 4);
        assert_eq!(s.by_status, StatusBreakdown::default());
        assert_eq!(s.by_level.get("Junior"), Some(&3));
    }
}
