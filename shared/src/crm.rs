//! 会话、线索与统计模型

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 兴趣度达到该值即视为高兴趣线索
pub const HIGH_INTEREST_THRESHOLD: i32 = 7;

pub const LEAD_STATUS_NEW: &str = "nuevo";
pub const LEAD_STATUS_CONVERTED: &str = "convertido";

// =========================================================
// 会话 (Conversations)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: i64,
    pub phone_number: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub profile_type: Option<String>,
    #[serde(default)]
    pub last_interaction: Option<NaiveDateTime>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub messages_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub role: String,
    pub content: String,
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
}

/// `GET /admin/conversations/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationDetail {
    pub conversation: Conversation,
    #[serde(default)]
    pub messages: Vec<Message>,
}

// =========================================================
// 线索 (Leads)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: i64,
    pub phone_number: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub profile_type: Option<String>,
    #[serde(default = "default_interest")]
    pub interest_level: i32,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

fn default_interest() -> i32 {
    5
}

impl Lead {
    pub fn is_high_interest(&self) -> bool {
        self.interest_level >= HIGH_INTEREST_THRESHOLD
    }

    fn has_status(&self, status: &str) -> bool {
        self.status.as_deref() == Some(status)
    }
}

/// `GET /admin/leads/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadDetail {
    pub lead: Lead,
    #[serde(default)]
    pub conversation_id: Option<i64>,
}

/// 线索更新（以查询参数提交）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadUpdate {
    pub status: Option<String>,
    pub interest_level: Option<i32>,
    pub notes: Option<String>,
    pub email: Option<String>,
}

/// 线索列表页顶部的汇总卡片
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeadSummary {
    pub total: usize,
    pub new: usize,
    pub high_interest: usize,
    pub converted: usize,
}

impl LeadSummary {
    pub fn from_leads(leads: &[Lead]) -> Self {
        leads.iter().fold(
            LeadSummary {
                total: leads.len(),
                ..Default::default()
            },
            |mut acc, lead| {
                if lead.has_status(LEAD_STATUS_NEW) {
                    acc.new += 1;
                }
                if lead.is_high_interest() {
                    acc.high_interest += 1;
                }
                if lead.has_status(LEAD_STATUS_CONVERTED) {
                    acc.converted += 1;
                }
                acc
            },
        )
    }
}

// =========================================================
// 统计 (Stats)
// =========================================================

/// `GET /stats`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralStats {
    pub total_conversations: u64,
    pub total_distributors: u64,
    pub total_leads: u64,
    pub active_distributors: u64,
    pub high_interest_leads: u64,
}

/// `GET /admin/stats/detailed`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailedStats {
    pub general: DetailedGeneral,
    pub leads_by_status: BTreeMap<String, u64>,
    pub profiles: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailedGeneral {
    pub total_conversations: u64,
    pub total_leads: u64,
    pub high_interest_leads: u64,
    pub recent_conversations: u64,
}

/// 活动流中的一个月份数据点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityPoint {
    pub month: String,
    pub value: u64,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub month_number: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(id: i64, status: &str, interest: i32) -> Lead {
        Lead {
            id,
            phone_number: format!("+57300{id}"),
            user_name: None,
            email: None,
            profile_type: None,
            interest_level: interest,
            status: Some(status.to_string()),
            notes: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn lead_summary_counts_each_card() {
        let leads = vec![
            lead(1, "nuevo", 3),
            lead(2, "nuevo", 9),
            lead(3, "convertido", 7),
            lead(4, "seguimiento", 6),
        ];
        let summary = LeadSummary::from_leads(&leads);
        assert_eq!(
            summary,
            LeadSummary {
                total: 4,
                new: 2,
                high_interest: 2,
                converted: 1
            }
        );
    }

    #[test]
    fn conversation_detail_parses_backend_shape() {
        let json = r#"{
            "conversation": {
                "id": 3, "phone_number": "573001112233", "user_name": "Luis",
                "status": "activo", "profile_type": "lead",
                "last_interaction": "2024-06-01T08:00:00", "created_at": "2024-05-30T09:10:11.5"
            },
            "messages": [
                {"id": 1, "role": "user", "content": "Hola", "timestamp": "2024-06-01T07:59:00"}
            ]
        }"#;
        let detail: ConversationDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.conversation.id, 3);
        assert_eq!(detail.messages.len(), 1);
        assert_eq!(detail.messages[0].role, "user");
    }

    #[test]
    fn stats_tolerate_missing_counters() {
        let stats: GeneralStats = serde_json::from_str(r#"{"total_leads": 12}"#).unwrap();
        assert_eq!(stats.total_leads, 12);
        assert_eq!(stats.total_conversations, 0);
    }
}
