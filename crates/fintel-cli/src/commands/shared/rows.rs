//! Table columns for the records commands print.

use fintel_assistant::ChatMessage;
use fintel_core::entities::{
    CollectionWithItems, ComparisonWithBrands, FranchiseBrand, InsightArticle,
};
use fintel_core::format::{format_cost_range, format_percentage};
use fintel_db::repos::health::TableStatus;

use crate::output::TableRow;

const DATE: &str = "%Y-%m-%d";

impl TableRow for FranchiseBrand {
    fn headers() -> &'static [&'static str] {
        &["id", "name", "sector", "startup cost", "margin"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.sector.clone(),
            format_cost_range(self.startup_cost_min, self.startup_cost_max),
            format_percentage(self.net_profit_margin),
        ]
    }
}

impl TableRow for CollectionWithItems {
    fn headers() -> &'static [&'static str] {
        &["id", "name", "description", "brands", "created"]
    }

    fn cells(&self) -> Vec<String> {
        let brands = self
            .items
            .iter()
            .map(|item| item.brand.name.as_str())
            .collect::<Vec<_>>();
        vec![
            self.collection.id.clone(),
            self.collection.name.clone(),
            self.collection.description.clone().unwrap_or_default(),
            if brands.is_empty() {
                String::from("-")
            } else {
                brands.join(", ")
            },
            self.collection.created_at.format(DATE).to_string(),
        ]
    }
}

impl TableRow for ComparisonWithBrands {
    fn headers() -> &'static [&'static str] {
        &["id", "franchise a", "franchise b", "notes", "created"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.comparison.id.clone(),
            self.franchise_a.name.clone(),
            self.franchise_b.name.clone(),
            self.comparison.notes.clone(),
            self.comparison.created_at.format(DATE).to_string(),
        ]
    }
}

impl TableRow for InsightArticle {
    fn headers() -> &'static [&'static str] {
        &["id", "title", "category", "published"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.category.clone().unwrap_or_else(|| String::from("-")),
            self.created_at.format(DATE).to_string(),
        ]
    }
}

impl TableRow for TableStatus {
    fn headers() -> &'static [&'static str] {
        &["table", "status", "records", "error"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.table.clone(),
            String::from(if self.ok { "ok" } else { "error" }),
            self.count.map_or_else(|| String::from("-"), |count| count.to_string()),
            self.error.clone().unwrap_or_default(),
        ]
    }
}

impl TableRow for ChatMessage {
    fn headers() -> &'static [&'static str] {
        &["id", "role", "message"]
    }

    fn cells(&self) -> Vec<String> {
        let role = serde_json::to_value(self.role)
            .ok()
            .and_then(|value| value.as_str().map(str::to_string))
            .unwrap_or_default();
        vec![self.id.to_string(), role, self.content.clone()]
    }
}
