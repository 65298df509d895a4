// src/services/dashboard_service.rs

use rust_decimal::Decimal;

use crate::{
    db::Table,
    models::{
        catalog::Service,
        common::{RecordStatus, StatusRecord},
        crm::{Client, Supplier},
        dashboard::{DashboardSummary, StatusCount, WorkOrderCount},
        inventory::Product,
        operations::{WorkOrder, WorkOrderStatus},
    },
};

#[derive(Clone)]
pub struct DashboardService {
    clients: Table<Client>,
    suppliers: Table<Supplier>,
    products: Table<Product>,
    services: Table<Service>,
    orders: Table<WorkOrder>,
}

impl DashboardService {
    pub fn new(
        clients: Table<Client>,
        suppliers: Table<Supplier>,
        products: Table<Product>,
        services: Table<Service>,
        orders: Table<WorkOrder>,
    ) -> Self {
        Self { clients, suppliers, products, services, orders }
    }

    pub async fn get_summary(&self) -> DashboardSummary {
        let products = self.products.all().await;
        let orders = self.orders.all().await;

        let mut work_orders = WorkOrderCount::default();
        let mut open_work_orders_value = Decimal::ZERO;
        let mut completed_revenue = Decimal::ZERO;
        for order in &orders {
            match order.status {
                WorkOrderStatus::Pending => work_orders.pending += 1,
                WorkOrderStatus::InProgress => work_orders.in_progress += 1,
                WorkOrderStatus::Completed => work_orders.completed += 1,
                WorkOrderStatus::Cancelled => work_orders.cancelled += 1,
            }
            if order.status.is_open() {
                open_work_orders_value += order.total;
            } else if order.status == WorkOrderStatus::Completed {
                completed_revenue += order.total;
            }
        }

        DashboardSummary {
            clients: count_status(&self.clients.all().await),
            suppliers: count_status(&self.suppliers.all().await),
            products: count_status(&products),
            services: count_status(&self.services.all().await),
            products_out_of_stock: products.iter().filter(|p| p.stock <= 0).count(),
            work_orders,
            open_work_orders_value,
            completed_revenue,
        }
    }
}

fn count_status<T: StatusRecord>(records: &[T]) -> StatusCount {
    let active = records.iter().filter(|r| r.status() == RecordStatus::Active).count();
    StatusCount { active, inactive: records.len() - active }
}
