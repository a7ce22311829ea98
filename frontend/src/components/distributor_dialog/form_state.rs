//! 分销商表单状态
//!
//! 将零散的 signal 整合为 `FormState`，负责持有、重置、
//! 从已有记录填充，以及转换为 [`DistributorDraft`]。

use chrono::NaiveDate;
use distro_admin::shared::{Distributor, DistributorDraft, DistributorLevel, DistributorStatus};
use leptos::prelude::*;

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_INPUT_FORMAT).ok()
}

/// `RwSignal` 实现了 `Copy`，可以直接作为 Props 传给子表单
#[derive(Clone, Copy)]
pub struct FormState {
    pub first_names: RwSignal<String>,
    pub last_names: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub email: RwSignal<String>,
    pub username: RwSignal<String>,
    pub joined_on: RwSignal<String>,
    pub birthday: RwSignal<String>,
    pub level: RwSignal<DistributorLevel>,
    pub status: RwSignal<DistributorStatus>,
    pub lead_phone: RwSignal<String>,
    pub notes: RwSignal<String>,
    pub password: RwSignal<String>,
    pub second_factor_password: RwSignal<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            first_names: RwSignal::new(String::new()),
            last_names: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            username: RwSignal::new(String::new()),
            joined_on: RwSignal::new(String::new()),
            birthday: RwSignal::new(String::new()),
            level: RwSignal::new(DistributorLevel::default()),
            status: RwSignal::new(DistributorStatus::default()),
            lead_phone: RwSignal::new(String::new()),
            notes: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            second_factor_password: RwSignal::new(String::new()),
        }
    }

    /// 回到空白的新建表单
    pub fn reset(&self) {
        self.fill(&DistributorDraft::default());
    }

    /// 编辑已有分销商（密码字段留空）
    pub fn load(&self, distributor: &Distributor) {
        self.fill(&DistributorDraft::from_existing(distributor));
    }

    fn fill(&self, draft: &DistributorDraft) {
        self.first_names.set(draft.first_names.clone());
        self.last_names.set(draft.last_names.clone());
        self.phone.set(draft.phone.clone());
        self.email.set(draft.email.clone().unwrap_or_default());
        self.username.set(draft.username.clone());
        self.joined_on.set(format_date(draft.joined_on));
        self.birthday.set(format_date(draft.birthday));
        self.level.set(draft.level);
        self.status.set(draft.status);
        self.lead_phone.set(draft.lead_phone.clone().unwrap_or_default());
        self.notes.set(draft.notes.clone().unwrap_or_default());
        self.password.set(String::new());
        self.second_factor_password.set(String::new());
    }

    /// 空白的可选字段在 `normalized` 中被去掉
    pub fn to_draft(&self) -> DistributorDraft {
        DistributorDraft {
            first_names: self.first_names.get_untracked().trim().to_string(),
            last_names: self.last_names.get_untracked().trim().to_string(),
            phone: self.phone.get_untracked().trim().to_string(),
            email: Some(self.email.get_untracked()),
            joined_on: parse_date(&self.joined_on.get_untracked()),
            birthday: parse_date(&self.birthday.get_untracked()),
            username: self.username.get_untracked().trim().to_string(),
            level: self.level.get_untracked(),
            status: self.status.get_untracked(),
            lead_phone: Some(self.lead_phone.get_untracked()),
            notes: Some(self.notes.get_untracked()),
            password: Some(self.password.get_untracked()),
            second_factor_password: Some(self.second_factor_password.get_untracked()),
        }
        .normalized()
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
