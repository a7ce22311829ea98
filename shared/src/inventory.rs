//! 库存模型：销售员、产品、库存、销售、调整与分配

use crate::Amount;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 销售员 / 产品的启用状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RecordStatus {
    #[default]
    #[serde(rename = "activo")]
    Active,
    #[serde(rename = "inactivo")]
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "direccion", default)]
    pub address: Option<String>,
    #[serde(rename = "ciudad", default)]
    pub city: Option<String>,
    #[serde(rename = "estado", default)]
    pub status: RecordStatus,
    #[serde(rename = "fecha_creacion", default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(rename = "fecha_actualizacion", default)]
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SellerDraft {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "direccion", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "ciudad", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "estado")]
    pub status: RecordStatus,
}

impl From<&Seller> for SellerDraft {
    fn from(s: &Seller) -> Self {
        Self {
            name: s.name.clone(),
            phone: s.phone.clone(),
            email: s.email.clone(),
            address: s.address.clone(),
            city: s.city.clone(),
            status: s.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "precio_unitario")]
    pub unit_price: Amount,
    #[serde(rename = "categoria", default)]
    pub category: Option<String>,
    #[serde(rename = "estado", default)]
    pub status: RecordStatus,
    #[serde(rename = "fecha_creacion", default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(rename = "fecha_actualizacion", default)]
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "precio_unitario")]
    pub unit_price: Amount,
    #[serde(rename = "categoria", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "estado")]
    pub status: RecordStatus,
}

impl From<&Product> for ProductDraft {
    fn from(p: &Product) -> Self {
        Self {
            name: p.name.clone(),
            description: p.description.clone(),
            code: p.code.clone(),
            unit_price: p.unit_price,
            category: p.category.clone(),
            status: p.status,
        }
    }
}

/// 某销售员持有的某产品库存
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockEntry {
    pub id: i64,
    #[serde(rename = "vendedor_id")]
    pub seller_id: i64,
    #[serde(rename = "producto_id")]
    pub product_id: i64,
    #[serde(rename = "cantidad_inicial", default)]
    pub initial_quantity: i64,
    #[serde(rename = "cantidad_actual", default)]
    pub current_quantity: i64,
    #[serde(rename = "ultima_actualizacion", default)]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(rename = "vendedor", default)]
    pub seller: Option<Seller>,
    #[serde(rename = "producto", default)]
    pub product: Option<Product>,
}

/// `POST /v1/inventory/stock/asignar`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAssignment {
    #[serde(rename = "vendedor_id")]
    pub seller_id: i64,
    #[serde(rename = "producto_id")]
    pub product_id: i64,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
}

/// `PUT /v1/inventory/stock/{id}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockUpdate {
    #[serde(rename = "cantidad_actual")]
    pub current_quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    #[serde(rename = "vendedor_id")]
    pub seller_id: i64,
    #[serde(rename = "producto_id")]
    pub product_id: i64,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
    #[serde(rename = "precio_venta", default)]
    pub price: Option<Amount>,
    #[serde(rename = "notas", default)]
    pub notes: Option<String>,
    #[serde(rename = "fecha_venta", default)]
    pub sold_at: Option<NaiveDateTime>,
    #[serde(rename = "creado_por", default)]
    pub created_by: Option<i64>,
    #[serde(rename = "vendedor", default)]
    pub seller: Option<Seller>,
    #[serde(rename = "producto", default)]
    pub product: Option<Product>,
}

impl Sale {
    /// 销售总额（数量 × 成交价）
    pub fn total(&self) -> Option<Amount> {
        self.price
            .map(|price| Amount::new(price.value() * self.quantity as f64))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaleDraft {
    #[serde(rename = "vendedor_id")]
    pub seller_id: i64,
    #[serde(rename = "producto_id")]
    pub product_id: i64,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
    #[serde(rename = "precio_venta", skip_serializing_if = "Option::is_none")]
    pub price: Option<Amount>,
    #[serde(rename = "notas", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaleUpdate {
    #[serde(rename = "cantidad", skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(rename = "precio_venta", skip_serializing_if = "Option::is_none")]
    pub price: Option<Amount>,
    #[serde(rename = "notas", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdjustmentKind {
    #[serde(rename = "aumento")]
    Increase,
    #[serde(rename = "disminucion")]
    Decrease,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    pub id: i64,
    #[serde(rename = "vendedor_id")]
    pub seller_id: i64,
    #[serde(rename = "producto_id")]
    pub product_id: i64,
    #[serde(rename = "tipo_ajuste")]
    pub kind: AdjustmentKind,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
    #[serde(rename = "razon", default)]
    pub reason: Option<String>,
    #[serde(rename = "cantidad_anterior", default)]
    pub previous_quantity: i64,
    #[serde(rename = "cantidad_nueva", default)]
    pub new_quantity: i64,
    #[serde(rename = "fecha_ajuste", default)]
    pub adjusted_at: Option<NaiveDateTime>,
    #[serde(rename = "ajustado_por", default)]
    pub adjusted_by: Option<i64>,
    #[serde(rename = "vendedor", default)]
    pub seller: Option<Seller>,
    #[serde(rename = "producto", default)]
    pub product: Option<Product>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentDraft {
    #[serde(rename = "vendedor_id")]
    pub seller_id: i64,
    #[serde(rename = "producto_id")]
    pub product_id: i64,
    #[serde(rename = "tipo_ajuste")]
    pub kind: AdjustmentKind,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
    #[serde(rename = "razon", skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// 库存分配记录（只读历史）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    #[serde(rename = "vendedor_id")]
    pub seller_id: i64,
    #[serde(rename = "producto_id")]
    pub product_id: i64,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
    #[serde(rename = "notas", default)]
    pub notes: Option<String>,
    #[serde(rename = "fecha_asignacion", default)]
    pub assigned_at: Option<NaiveDateTime>,
    #[serde(rename = "asignado_por", default)]
    pub assigned_by: Option<i64>,
    #[serde(rename = "vendedor", default)]
    pub seller: Option<Seller>,
    #[serde(rename = "producto", default)]
    pub product: Option<Product>,
}

/// `GET /v1/inventory/estadisticas/general`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryStats {
    #[serde(rename = "total_vendedores")]
    pub active_sellers: u64,
    #[serde(rename = "total_productos")]
    pub active_products: u64,
    #[serde(rename = "stock_total")]
    pub total_stock: i64,
    #[serde(rename = "valor_inventario")]
    pub inventory_value: Amount,
    #[serde(rename = "ventas_mes")]
    pub sales_this_month: u64,
    #[serde(rename = "valor_ventas_mes")]
    pub sales_value_this_month: Amount,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_entry_embeds_seller_and_product() {
        let json = r#"{
            "id": 4, "vendedor_id": 1, "producto_id": 2,
            "cantidad_inicial": 50, "cantidad_actual": 38,
            "ultima_actualizacion": "2024-07-02T12:00:00",
            "vendedor": {"id": 1, "nombre": "Carlos", "telefono": "3001112233", "estado": "activo",
                         "fecha_creacion": "2024-01-01T00:00:00"},
            "producto": {"id": 2, "nombre": "Té verde", "codigo": "TV-01",
                         "precio_unitario": "25000.00", "estado": "activo"}
        }"#;
        let entry: StockEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.current_quantity, 38);
        assert_eq!(entry.seller.unwrap().name, "Carlos");
        assert_eq!(entry.product.unwrap().unit_price.value(), 25000.0);
    }

    #[test]
    fn sale_total_multiplies_price_by_quantity() {
        let sale: Sale = serde_json::from_str(
            r#"{"id": 1, "vendedor_id": 1, "producto_id": 2, "cantidad": 3, "precio_venta": 1500}"#,
        )
        .unwrap();
        assert_eq!(sale.total(), Some(Amount::new(4500.0)));
    }

    #[test]
    fn adjustment_draft_uses_backend_vocabulary() {
        let draft = AdjustmentDraft {
            seller_id: 1,
            product_id: 2,
            kind: AdjustmentKind::Decrease,
            quantity: 4,
            reason: None,
        };
        let value = serde_json::to_value(draft).unwrap();
        assert_eq!(value["tipo_ajuste"], "disminucion");
        assert!(value.get("razon").is_none());
    }
}
