// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub active: usize,
    pub inactive: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrderCount {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub cancelled: usize,
}

// Os cards da página inicial
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub clients: StatusCount,
    pub suppliers: StatusCount,
    pub products: StatusCount,
    pub services: StatusCount,
    pub products_out_of_stock: usize,
    pub work_orders: WorkOrderCount,
    pub open_work_orders_value: Decimal,  // Pendentes + Em Andamento
    pub completed_revenue: Decimal,       // Concluídas
}
