//! Best-effort revenue/volume reporting for the admin dashboard.
//!
//! Analytics never blocks or fails a primary flow: a storage problem is
//! logged and yields an empty report.

use std::collections::HashMap;

use plateup_adapters::{DocumentStore, OrderRepository};
use plateup_core::Money;
use plateup_orders::OrderStatus;

/// Aggregated view over all stored orders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RevenueReport {
    /// Sum of order totals, cancelled orders excluded.
    pub total_revenue: Money,
    pub order_count: usize,
    pub count_by_status: HashMap<OrderStatus, usize>,
    /// Item names by number of cart lines they appear on, descending.
    pub top_items: Vec<(String, usize)>,
}

pub struct AnalyticsService<S> {
    orders: OrderRepository<S>,
}

impl<S: DocumentStore> AnalyticsService<S> {
    pub fn new(orders: OrderRepository<S>) -> Self {
        Self { orders }
    }

    pub async fn revenue_report(&self) -> RevenueReport {
        let records = match self.orders.list_all().await {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(error = %err, "analytics load failed, returning empty report");
                return RevenueReport::default();
            }
        };

        let mut report = RevenueReport {
            order_count: records.len(),
            ..RevenueReport::default()
        };
        let mut line_counts: HashMap<String, usize> = HashMap::new();

        for record in &records {
            let order = &record.order;
            *report.count_by_status.entry(order.status()).or_default() += 1;

            if order.status() != OrderStatus::Cancelled {
                report.total_revenue = match report.total_revenue.checked_add(order.total()) {
                    Ok(sum) => sum,
                    Err(err) => {
                        tracing::warn!(error = %err, "revenue sum overflow, returning empty report");
                        return RevenueReport::default();
                    }
                };
            }

            for item in order.items() {
                *line_counts.entry(item.menu_item.name.clone()).or_default() += 1;
            }
        }

        let mut top_items: Vec<(String, usize)> = line_counts.into_iter().collect();
        top_items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        report.top_items = top_items;
        report
    }
}
