//! 接口目录 (Endpoint Catalog)
//!
//! 每个后端操作对应一个请求结构体，实现 [`Endpoint`] 描述方法、路径、
//! 查询参数、请求体以及响应类型。路径均相对于 API 基础地址（例如
//! `http://localhost:8000/api`）。

use crate::{
    ActionResult, ActivityPoint, Adjustment, AdjustmentDraft, AdjustmentKind, Assignment,
    Conversation, ConversationDetail, DetailedStats, Distributor, DistributorDraft,
    DistributorLevel, DistributorStatus, DistributorSummary, GeneralStats, InventoryStats, Lead,
    LeadDetail, LeadUpdate, LoginResponse, Message, Product, ProductDraft, Sale, SaleDraft,
    SaleUpdate, Seller, SellerDraft, StockAssignment, StockEntry, StockUpdate,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// 查询参数列表（保持插入顺序）
pub type QueryParams = Vec<(&'static str, String)>;

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait Endpoint {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// 匿名接口（登录）：401 表示凭据错误，而不是会话失效
    const ANONYMOUS: bool = false;

    /// 同一请求结构体对应多个方法时重写
    fn method(&self) -> HttpMethod {
        Self::METHOD
    }

    /// 相对路径，以 `/` 开头
    fn path(&self) -> String;

    fn query(&self) -> QueryParams {
        Vec::new()
    }

    /// JSON 请求体
    fn body(&self) -> serde_json::Result<Option<String>> {
        Ok(None)
    }
}

fn json_body<T: Serialize>(value: &T) -> serde_json::Result<Option<String>> {
    serde_json::to_string(value).map(Some)
}

/// 仅在值存在时追加查询参数
fn push_opt<T: ToString>(query: &mut QueryParams, key: &'static str, value: Option<T>) {
    if let Some(v) = value {
        query.push((key, v.to_string()));
    }
}

/// 空白字符串不作为查询参数发送
fn push_text(query: &mut QueryParams, key: &'static str, value: Option<&str>) {
    push_opt(query, key, value.map(str::trim).filter(|v| !v.is_empty()));
}

/// 通用分页参数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl Paging {
    pub fn limit(limit: u32) -> Self {
        Self {
            skip: None,
            limit: Some(limit),
        }
    }

    fn push(&self, query: &mut QueryParams) {
        push_opt(query, "skip", self.skip);
        push_opt(query, "limit", self.limit);
    }
}

// =========================================================
// 认证 (Auth)
// =========================================================

/// 用户名和密码以查询参数提交（后端处理函数按查询参数读取）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl Endpoint for LoginRequest {
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    const ANONYMOUS: bool = true;

    fn path(&self) -> String {
        "/auth/login".to_string()
    }

    fn query(&self) -> QueryParams {
        vec![
            ("username", self.username.clone()),
            ("password", self.password.clone()),
        ]
    }
}

// =========================================================
// 会话 (Conversations)
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListConversations {
    pub paging: Paging,
    pub search: Option<String>,
    pub status: Option<String>,
}

impl Endpoint for ListConversations {
    type Response = Vec<Conversation>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/admin/conversations".to_string()
    }

    fn query(&self) -> QueryParams {
        let mut q = Vec::new();
        self.paging.push(&mut q);
        push_text(&mut q, "search", self.search.as_deref());
        push_text(&mut q, "status", self.status.as_deref());
        q
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetConversation {
    pub id: i64,
}

impl Endpoint for GetConversation {
    type Response = ConversationDetail;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/admin/conversations/{}", self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMessages {
    pub conversation_id: i64,
}

impl Endpoint for ListMessages {
    type Response = Vec<Message>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/admin/conversations/{}/messages", self.conversation_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateConversationStatus {
    pub id: i64,
    pub status: String,
}

impl Endpoint for UpdateConversationStatus {
    type Response = ActionResult;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/admin/conversations/{}/status", self.id)
    }

    fn query(&self) -> QueryParams {
        vec![("status", self.status.clone())]
    }
}

// =========================================================
// 线索 (Leads)
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListLeads {
    pub paging: Paging,
    pub min_interest: Option<i32>,
    pub status: Option<String>,
}

impl Endpoint for ListLeads {
    type Response = Vec<Lead>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/admin/leads".to_string()
    }

    fn query(&self) -> QueryParams {
        let mut q = Vec::new();
        self.paging.push(&mut q);
        push_opt(&mut q, "min_interest", self.min_interest);
        push_text(&mut q, "status", self.status.as_deref());
        q
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetLead {
    pub id: i64,
}

impl Endpoint for GetLead {
    type Response = LeadDetail;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/admin/leads/{}", self.id)
    }
}

/// 线索更新以查询参数提交，没有请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateLead {
    pub id: i64,
    pub changes: LeadUpdate,
}

impl Endpoint for UpdateLead {
    type Response = ActionResult;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/admin/leads/{}", self.id)
    }

    fn query(&self) -> QueryParams {
        let mut q = Vec::new();
        push_text(&mut q, "status", self.changes.status.as_deref());
        push_opt(&mut q, "interest_level", self.changes.interest_level);
        push_opt(&mut q, "notes", self.changes.notes.as_deref());
        push_text(&mut q, "email", self.changes.email.as_deref());
        q
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertLead {
    pub id: i64,
}

impl Endpoint for ConvertLead {
    type Response = ActionResult;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        format!("/admin/leads/{}/convert", self.id)
    }
}

// =========================================================
// 分销商 (Distributors)
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListDistributors {
    pub paging: Paging,
    pub search: Option<String>,
    pub status: Option<DistributorStatus>,
    pub level: Option<DistributorLevel>,
}

impl Endpoint for ListDistributors {
    type Response = Vec<Distributor>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/distributors".to_string()
    }

    fn query(&self) -> QueryParams {
        let mut q = Vec::new();
        self.paging.push(&mut q);
        push_text(&mut q, "search", self.search.as_deref());
        push_opt(&mut q, "estado", self.status);
        push_opt(&mut q, "nivel", self.level);
        q
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetDistributor {
    pub id: i64,
}

impl Endpoint for GetDistributor {
    type Response = Distributor;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/distributors/{}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDistributor {
    pub draft: DistributorDraft,
}

impl Endpoint for CreateDistributor {
    type Response = ActionResult;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/distributors".to_string()
    }

    fn body(&self) -> serde_json::Result<Option<String>> {
        json_body(&self.draft)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateDistributor {
    pub id: i64,
    pub draft: DistributorDraft,
}

impl Endpoint for UpdateDistributor {
    type Response = ActionResult;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/distributors/{}", self.id)
    }

    fn body(&self) -> serde_json::Result<Option<String>> {
        json_body(&self.draft)
    }
}

/// 分销商的单一动作接口：删除、启用、停用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistributorAction {
    Delete,
    Activate,
    Suspend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributorCommand {
    pub id: i64,
    pub action: DistributorAction,
}

impl Endpoint for DistributorCommand {
    type Response = ActionResult;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn method(&self) -> HttpMethod {
        match self.action {
            DistributorAction::Delete => HttpMethod::Delete,
            DistributorAction::Activate | DistributorAction::Suspend => Self::METHOD,
        }
    }

    fn path(&self) -> String {
        match self.action {
            DistributorAction::Delete => format!("/distributors/{}", self.id),
            DistributorAction::Activate => format!("/distributors/{}/activate", self.id),
            DistributorAction::Suspend => format!("/distributors/{}/suspend", self.id),
        }
    }
}

// =========================================================
// 统计 (Stats)
// =========================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetStats;

impl Endpoint for GetStats {
    type Response = GeneralStats;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/stats".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetDistributorSummary;

impl Endpoint for GetDistributorSummary {
    type Response = DistributorSummary;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/distributors/stats/summary".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetDetailedStats;

impl Endpoint for GetDetailedStats {
    type Response = DetailedStats;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/admin/stats/detailed".to_string()
    }
}

/// 活动流，`months` 取值范围 1..=12
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetActivityFlow {
    pub months: u8,
}

impl GetActivityFlow {
    pub const DEFAULT_MONTHS: u8 = 6;

    pub fn new(months: u8) -> Self {
        Self {
            months: months.clamp(1, 12),
        }
    }
}

impl Default for GetActivityFlow {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MONTHS)
    }
}

impl Endpoint for GetActivityFlow {
    type Response = Vec<ActivityPoint>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/admin/stats/activity-flow".to_string()
    }

    fn query(&self) -> QueryParams {
        vec![("months", self.months.clamp(1, 12).to_string())]
    }
}

// =========================================================
// 库存 (Inventory)
// =========================================================

const INVENTORY: &str = "/v1/inventory";

/// 销售员与产品的列表过滤
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilter {
    pub paging: Paging,
    pub search: Option<String>,
}

impl CatalogFilter {
    fn to_query(&self) -> QueryParams {
        let mut q = Vec::new();
        self.paging.push(&mut q);
        push_text(&mut q, "search", self.search.as_deref());
        q
    }
}

/// 库存、销售、调整、分配列表的过滤
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerFilter {
    pub paging: Paging,
    pub seller_id: Option<i64>,
    pub product_id: Option<i64>,
}

impl LedgerFilter {
    fn to_query(self) -> QueryParams {
        let mut q = Vec::new();
        push_opt(&mut q, "vendedor_id", self.seller_id);
        push_opt(&mut q, "producto_id", self.product_id);
        self.paging.push(&mut q);
        q
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSellers(pub CatalogFilter);

impl Endpoint for ListSellers {
    type Response = Vec<Seller>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{INVENTORY}/vendedores")
    }

    fn query(&self) -> QueryParams {
        self.0.to_query()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetSeller {
    pub id: i64,
}

impl Endpoint for GetSeller {
    type Response = Seller;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{INVENTORY}/vendedores/{}", self.id)
    }
}

/// 创建（`id` 为 `None`）或更新销售员
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveSeller {
    pub id: Option<i64>,
    pub draft: SellerDraft,
}

impl Endpoint for SaveSeller {
    type Response = Seller;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn method(&self) -> HttpMethod {
        if self.id.is_some() {
            HttpMethod::Put
        } else {
            Self::METHOD
        }
    }

    fn path(&self) -> String {
        match self.id {
            Some(id) => format!("{INVENTORY}/vendedores/{id}"),
            None => format!("{INVENTORY}/vendedores"),
        }
    }

    fn body(&self) -> serde_json::Result<Option<String>> {
        json_body(&self.draft)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteSeller {
    pub id: i64,
}

impl Endpoint for DeleteSeller {
    type Response = ActionResult;
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("{INVENTORY}/vendedores/{}", self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListProducts(pub CatalogFilter);

impl Endpoint for ListProducts {
    type Response = Vec<Product>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{INVENTORY}/productos")
    }

    fn query(&self) -> QueryParams {
        self.0.to_query()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetProduct {
    pub id: i64,
}

impl Endpoint for GetProduct {
    type Response = Product;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{INVENTORY}/productos/{}", self.id)
    }
}

/// 创建（`id` 为 `None`）或更新产品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveProduct {
    pub id: Option<i64>,
    pub draft: ProductDraft,
}

impl Endpoint for SaveProduct {
    type Response = Product;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn method(&self) -> HttpMethod {
        if self.id.is_some() {
            HttpMethod::Put
        } else {
            Self::METHOD
        }
    }

    fn path(&self) -> String {
        match self.id {
            Some(id) => format!("{INVENTORY}/productos/{id}"),
            None => format!("{INVENTORY}/productos"),
        }
    }

    fn body(&self) -> serde_json::Result<Option<String>> {
        json_body(&self.draft)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteProduct {
    pub id: i64,
}

impl Endpoint for DeleteProduct {
    type Response = ActionResult;
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("{INVENTORY}/productos/{}", self.id)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListStock(pub LedgerFilter);

impl Endpoint for ListStock {
    type Response = Vec<StockEntry>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{INVENTORY}/stock")
    }

    fn query(&self) -> QueryParams {
        self.0.to_query()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetSellerStock {
    pub seller_id: i64,
}

impl Endpoint for GetSellerStock {
    type Response = Vec<StockEntry>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{INVENTORY}/stock/vendedor/{}", self.seller_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignStock(pub StockAssignment);

impl Endpoint for AssignStock {
    type Response = ActionResult;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        format!("{INVENTORY}/stock/asignar")
    }

    fn body(&self) -> serde_json::Result<Option<String>> {
        json_body(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStock {
    pub id: i64,
    pub update: StockUpdate,
}

impl Endpoint for UpdateStock {
    type Response = StockEntry;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("{INVENTORY}/stock/{}", self.id)
    }

    fn body(&self) -> serde_json::Result<Option<String>> {
        json_body(&self.update)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSales(pub LedgerFilter);

impl Endpoint for ListSales {
    type Response = Vec<Sale>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{INVENTORY}/ventas")
    }

    fn query(&self) -> QueryParams {
        self.0.to_query()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetSale {
    pub id: i64,
}

impl Endpoint for GetSale {
    type Response = Sale;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{INVENTORY}/ventas/{}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSale(pub SaleDraft);

impl Endpoint for CreateSale {
    type Response = Sale;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        format!("{INVENTORY}/ventas")
    }

    fn body(&self) -> serde_json::Result<Option<String>> {
        json_body(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateSale {
    pub id: i64,
    pub update: SaleUpdate,
}

impl Endpoint for UpdateSale {
    type Response = Sale;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("{INVENTORY}/ventas/{}", self.id)
    }

    fn body(&self) -> serde_json::Result<Option<String>> {
        json_body(&self.update)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteSale {
    pub id: i64,
}

impl Endpoint for DeleteSale {
    type Response = ActionResult;
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("{INVENTORY}/ventas/{}", self.id)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAdjustments {
    pub filter: LedgerFilter,
    pub kind: Option<AdjustmentKind>,
}

impl Endpoint for ListAdjustments {
    type Response = Vec<Adjustment>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{INVENTORY}/ajustes")
    }

    fn query(&self) -> QueryParams {
        let mut q = self.filter.to_query();
        push_opt(
            &mut q,
            "tipo_ajuste",
            self.kind.map(|kind| match kind {
                AdjustmentKind::Increase => "aumento",
                AdjustmentKind::Decrease => "disminucion",
            }),
        );
        q
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAdjustment(pub AdjustmentDraft);

impl Endpoint for CreateAdjustment {
    type Response = Adjustment;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        format!("{INVENTORY}/ajustes")
    }

    fn body(&self) -> serde_json::Result<Option<String>> {
        json_body(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAssignments {
    pub paging: Paging,
    pub seller_id: Option<i64>,
}

impl Endpoint for ListAssignments {
    type Response = Vec<Assignment>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{INVENTORY}/asignaciones")
    }

    fn query(&self) -> QueryParams {
        let mut q = Vec::new();
        push_opt(&mut q, "vendedor_id", self.seller_id);
        self.paging.push(&mut q);
        q
    }
}

/// 库存统计：整体、单个销售员、单个产品
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetInventoryStats;

impl Endpoint for GetInventoryStats {
    type Response = InventoryStats;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{INVENTORY}/estadisticas/general")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetSellerStats {
    pub seller_id: i64,
}

impl Endpoint for GetSellerStats {
    type Response = serde_json::Value;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{INVENTORY}/estadisticas/vendedor/{}", self.seller_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetProductStats {
    pub product_id: i64,
}

impl Endpoint for GetProductStats {
    type Response = serde_json::Value;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{INVENTORY}/estadisticas/producto/{}", self.product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_sends_credentials_as_query() {
        let req = LoginRequest {
            username: "admin".into(),
            password: "admin123".into(),
        };
        assert!(LoginRequest::ANONYMOUS);
        assert_eq!(req.path(), "/auth/login");
        assert_eq!(
            req.query(),
            vec![("username", "admin".to_string()), ("password", "admin123".to_string())]
        );
        assert_eq!(req.body().unwrap(), None);
    }

    #[test]
    fn distributor_filters_use_backend_values() {
        let req = ListDistributors {
            paging: Paging::default(),
            search: Some("  ".into()),
            status: Some(DistributorStatus::Suspended),
            level: Some(DistributorLevel::PreJunior),
        };
        assert_eq!(
            req.query(),
            vec![
                ("estado", "suspendido".to_string()),
                ("nivel", "Pre-Junior".to_string())
            ]
        );
    }

    #[test]
    fn distributor_commands_map_to_method_and_path() {
        let delete = DistributorCommand {
            id: 5,
            action: DistributorAction::Delete,
        };
        let suspend = DistributorCommand {
            id: 5,
            action: DistributorAction::Suspend,
        };
        assert_eq!(delete.method(), HttpMethod::Delete);
        assert_eq!(delete.path(), "/distributors/5");
        assert_eq!(suspend.method(), HttpMethod::Post);
        assert_eq!(suspend.path(), "/distributors/5/suspend");
    }

    #[test]
    fn save_seller_switches_between_create_and_update() {
        let create = SaveSeller {
            id: None,
            draft: SellerDraft::default(),
        };
        let update = SaveSeller {
            id: Some(3),
            draft: SellerDraft::default(),
        };
        assert_eq!(create.method(), HttpMethod::Post);
        assert_eq!(create.path(), "/v1/inventory/vendedores");
        assert_eq!(update.method(), HttpMethod::Put);
        assert_eq!(update.path(), "/v1/inventory/vendedores/3");
    }

    #[test]
    fn activity_flow_months_are_clamped() {
        assert_eq!(GetActivityFlow::new(0).months, 1);
        assert_eq!(GetActivityFlow::new(40).months, 12);
        assert_eq!(
            GetActivityFlow::default().query(),
            vec![("months", "6".to_string())]
        );
    }

    #[test]
    fn lead_update_skips_unset_fields() {
        let req = UpdateLead {
            id: 2,
            changes: LeadUpdate {
                status: Some("seguimiento".into()),
                interest_level: Some(8),
                ..Default::default()
            },
        };
        assert_eq!(
            req.query(),
            vec![
                ("status", "seguimiento".to_string()),
                ("interest_level", "8".to_string())
            ]
        );
    }
}
