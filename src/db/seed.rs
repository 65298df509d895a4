// src/db/seed.rs
//
// Dados de exemplo carregados na inicialização. As O.S. guardam o preço do item no
// momento da venda, por isso podem divergir do preço atual do catálogo.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{
    catalog::Service,
    common::RecordStatus,
    crm::{Client, Contact, Party, Supplier},
    inventory::Product,
    operations::{sum_items, LineItem, LineItemKind, WorkOrder, WorkOrderStatus},
};

fn party(id: u64, name: &str, phone: &str, is_whatsapp: bool, email: &str, cnpj_cpf: &str, status: RecordStatus) -> Party {
    Party {
        id,
        name: name.to_string(),
        contact: Contact {
            phone: phone.to_string(),
            is_whatsapp,
            email: email.to_string(),
        },
        cnpj_cpf: cnpj_cpf.to_string(),
        address: None,
        status,
    }
}

pub fn clients() -> Vec<Client> {
    vec![
        party(1, "Liam Johnson", "(11) 98765-4321", true, "liam@example.com", "111.222.333-44", RecordStatus::Active),
        party(2, "Olivia Smith", "(21) 91234-5678", false, "olivia@example.com", "222.333.444-55", RecordStatus::Active),
        party(3, "Noah Williams", "(31) 98888-7777", false, "noah@example.com", "12.345.678/0001-90", RecordStatus::Inactive),
    ]
}

pub fn suppliers() -> Vec<Supplier> {
    vec![
        party(1, "Fornecedor Exemplo 1", "(21) 99999-8888", true, "contato@fornecedor1.com", "11.222.333/0001-44", RecordStatus::Active),
        party(2, "Fornecedor Exemplo 2", "(31) 97777-6666", false, "vendas@fornecedor2.com.br", "123.456.789-10", RecordStatus::Inactive),
    ]
}

pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Notebook Pro".to_string(),
            description: "Notebook de alta performance para profissionais.".to_string(),
            cost_price: Decimal::new(500000, 2),
            price: Decimal::new(750000, 2),
            stock: 15,
            status: RecordStatus::Active,
        },
        Product {
            id: 2,
            name: "Mouse Sem Fio".to_string(),
            description: "Mouse ergonômico com conexão bluetooth.".to_string(),
            cost_price: Decimal::new(8000, 2),
            price: Decimal::new(15000, 2),
            stock: 120,
            status: RecordStatus::Active,
        },
        Product {
            id: 3,
            name: "Teclado Mecânico".to_string(),
            description: "Teclado com switches blue para gamers e desenvolvedores.".to_string(),
            cost_price: Decimal::new(30000, 2),
            price: Decimal::new(45000, 2),
            stock: 0,
            status: RecordStatus::Inactive,
        },
    ]
}

pub fn services() -> Vec<Service> {
    vec![
        Service {
            id: 1,
            name: "Consultoria de Marketing Digital".to_string(),
            description: "Análise completa e plano estratégico para redes sociais.".to_string(),
            price: Decimal::new(150000, 2),
            status: RecordStatus::Active,
        },
        Service {
            id: 2,
            name: "Desenvolvimento de Website".to_string(),
            description: "Criação de site institucional responsivo com até 5 páginas.".to_string(),
            price: Decimal::new(350000, 2),
            status: RecordStatus::Active,
        },
        Service {
            id: 3,
            name: "Manutenção Mensal de Servidor".to_string(),
            description: "Monitoramento, backup e atualizações de segurança.".to_string(),
            price: Decimal::new(50000, 2),
            status: RecordStatus::Inactive,
        },
    ]
}

fn item(kind: LineItemKind, id: u64, name: &str, quantity: u32, price: Decimal) -> LineItem {
    LineItem {
        kind,
        id,
        name: name.to_string(),
        quantity,
        price,
    }
}

fn work_order(
    id: u64,
    client_id: u64,
    client_name: &str,
    description: &str,
    items: Vec<LineItem>,
    created_at: NaiveDate,
    status: WorkOrderStatus,
) -> WorkOrder {
    WorkOrder {
        id,
        client_id,
        client_name: client_name.to_string(),
        description: description.to_string(),
        total: sum_items(&items).unwrap_or_default(),
        items,
        created_at,
        status,
    }
}

pub fn work_orders() -> Vec<WorkOrder> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();

    vec![
        work_order(
            1,
            1,
            "Liam Johnson",
            "Manutenção de computador e formatação",
            vec![
                item(LineItemKind::Product, 2, "Mouse Sem Fio", 1, Decimal::new(15000, 2)),
                item(LineItemKind::Service, 3, "Manutenção Mensal de Servidor", 1, Decimal::new(20000, 2)),
            ],
            date(2024, 7, 28),
            WorkOrderStatus::Completed,
        ),
        work_order(
            2,
            2,
            "Olivia Smith",
            "Desenvolvimento de novo módulo para o sistema",
            vec![item(LineItemKind::Service, 2, "Desenvolvimento de Website", 1, Decimal::new(250000, 2))],
            date(2024, 7, 25),
            WorkOrderStatus::InProgress,
        ),
        work_order(
            3,
            3,
            "Noah Williams",
            "Troca de tela de notebook",
            vec![
                item(LineItemKind::Product, 3, "Teclado Mecânico", 1, Decimal::new(45000, 2)),
                item(LineItemKind::Service, 3, "Manutenção Mensal de Servidor", 1, Decimal::new(40000, 2)),
            ],
            date(2024, 7, 29),
            WorkOrderStatus::Pending,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_work_order_totals_match_the_listing() {
        let totals: Vec<Decimal> = work_orders().iter().map(|o| o.total).collect();
        assert_eq!(totals, vec![Decimal::new(350, 0), Decimal::new(2500, 0), Decimal::new(850, 0)]);
    }

    #[test]
    fn seed_ids_are_unique_per_table() {
        let ids: Vec<u64> = clients().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        let ids: Vec<u64> = products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
