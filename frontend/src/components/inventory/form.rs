//! 库存对话框的表单状态
//!
//! 所有输入都以字符串保存，提交时再解析；解析失败返回可直接展示的提示。

use distro_admin::shared::{
    Amount, Product, ProductDraft, RecordStatus, Sale, SaleDraft, SaleUpdate, Seller,
    SellerDraft, StockAssignment,
};
use leptos::prelude::*;

fn text(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub(crate) fn parse_id(value: &str) -> Option<i64> {
    value.trim().parse().ok().filter(|id| *id > 0)
}

pub(crate) fn parse_quantity(value: &str) -> Result<i64, &'static str> {
    match value.trim().parse::<i64>() {
        Ok(quantity) if quantity > 0 => Ok(quantity),
        _ => Err("La cantidad debe ser un número mayor que cero"),
    }
}

/// 接受 `12000`、`12000.5` 和 `12.000,5` 三种写法
pub(crate) fn parse_amount(value: &str) -> Result<Option<Amount>, &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    let normalized = if value.contains(',') {
        value.replace('.', "").replace(',', ".")
    } else {
        value.to_string()
    };
    match normalized.parse::<f64>() {
        Ok(amount) if amount >= 0.0 => Ok(Some(Amount::new(amount))),
        _ => Err("Precio inválido"),
    }
}

#[derive(Clone, Copy)]
pub struct InventoryForm {
    pub name: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub email: RwSignal<String>,
    pub address: RwSignal<String>,
    pub city: RwSignal<String>,
    pub code: RwSignal<String>,
    pub category: RwSignal<String>,
    pub description: RwSignal<String>,
    pub price: RwSignal<String>,
    pub active: RwSignal<bool>,
    pub seller_id: RwSignal<String>,
    pub product_id: RwSignal<String>,
    pub quantity: RwSignal<String>,
    pub notes: RwSignal<String>,
}

impl InventoryForm {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            address: RwSignal::new(String::new()),
            city: RwSignal::new(String::new()),
            code: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            active: RwSignal::new(true),
            seller_id: RwSignal::new(String::new()),
            product_id: RwSignal::new(String::new()),
            quantity: RwSignal::new(String::new()),
            notes: RwSignal::new(String::new()),
        }
    }

    pub fn reset(&self) {
        for field in [
            self.name,
            self.phone,
            self.email,
            self.address,
            self.city,
            self.code,
            self.category,
            self.description,
            self.price,
            self.seller_id,
            self.product_id,
            self.quantity,
            self.notes,
        ] {
            field.set(String::new());
        }
        self.active.set(true);
    }

    pub fn fill_seller(&self, seller: &Seller) {
        self.reset();
        self.name.set(seller.name.clone());
        self.phone.set(seller.phone.clone());
        self.email.set(text(seller.email.as_ref()));
        self.address.set(text(seller.address.as_ref()));
        self.city.set(text(seller.city.as_ref()));
        self.active.set(seller.status == RecordStatus::Active);
    }

    pub fn fill_product(&self, product: &Product) {
        self.reset();
        self.name.set(product.name.clone());
        self.code.set(product.code.clone());
        self.category.set(text(product.category.as_ref()));
        self.description.set(text(product.description.as_ref()));
        self.price.set(product.unit_price.value().to_string());
        self.active.set(product.status == RecordStatus::Active);
    }

    pub fn fill_sale(&self, sale: &Sale) {
        self.reset();
        self.seller_id.set(sale.seller_id.to_string());
        self.product_id.set(sale.product_id.to_string());
        self.quantity.set(sale.quantity.to_string());
        self.price
            .set(sale.price.map(|p| p.value().to_string()).unwrap_or_default());
        self.notes.set(text(sale.notes.as_ref()));
    }

    fn status(&self) -> RecordStatus {
        if self.active.get_untracked() {
            RecordStatus::Active
        } else {
            RecordStatus::Inactive
        }
    }

    pub fn seller_draft(&self) -> SellerDraft {
        SellerDraft {
            name: self.name.get_untracked().trim().to_string(),
            phone: self.phone.get_untracked().trim().to_string(),
            email: non_blank(self.email.get_untracked()),
            address: non_blank(self.address.get_untracked()),
            city: non_blank(self.city.get_untracked()),
            status: self.status(),
        }
    }

    pub fn product_draft(&self) -> Result<ProductDraft, &'static str> {
        let unit_price = parse_amount(&self.price.get_untracked())?.ok_or("El precio es obligatorio")?;
        Ok(ProductDraft {
            name: self.name.get_untracked().trim().to_string(),
            description: non_blank(self.description.get_untracked()),
            code: self.code.get_untracked().trim().to_string(),
            unit_price,
            category: non_blank(self.category.get_untracked()),
            status: self.status(),
        })
    }

    fn seller_and_product(&self) -> Result<(i64, i64), &'static str> {
        let seller_id = parse_id(&self.seller_id.get_untracked()).ok_or("Selecciona un vendedor")?;
        let product_id =
            parse_id(&self.product_id.get_untracked()).ok_or("Selecciona un producto")?;
        Ok((seller_id, product_id))
    }

    pub fn assignment(&self) -> Result<StockAssignment, &'static str> {
        let (seller_id, product_id) = self.seller_and_product()?;
        Ok(StockAssignment {
            seller_id,
            product_id,
            quantity: parse_quantity(&self.quantity.get_untracked())?,
        })
    }

    pub fn sale_draft(&self) -> Result<SaleDraft, &'static str> {
        let (seller_id, product_id) = self.seller_and_product()?;
        Ok(SaleDraft {
            seller_id,
            product_id,
            quantity: parse_quantity(&self.quantity.get_untracked())?,
            price: parse_amount(&self.price.get_untracked())?,
            notes: non_blank(self.notes.get_untracked()),
        })
    }

    pub fn sale_update(&self) -> Result<SaleUpdate, &'static str> {
        Ok(SaleUpdate {
            quantity: Some(parse_quantity(&self.quantity.get_untracked())?),
            price: parse_amount(&self.price.get_untracked())?,
            notes: non_blank(self.notes.get_untracked()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_accept_local_formats() {
        assert_eq!(parse_amount(""), Ok(None));
        assert_eq!(parse_amount("12000"), Ok(Some(Amount::new(12000.0))));
        assert_eq!(parse_amount("12.000,5"), Ok(Some(Amount::new(12000.5))));
        assert!(parse_amount("-3").is_err());
        assert!(parse_amount("doce").is_err());
    }

    #[test]
    fn quantities_and_ids_must_be_positive() {
        assert_eq!(parse_quantity(" 4 "), Ok(4));
        assert!(parse_quantity("0").is_err());
        assert_eq!(parse_id("7"), Some(7));
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("0"), None);
    }
}
