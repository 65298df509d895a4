// src/services/document_service.rs

use std::path::PathBuf;

use genpdf::{elements, style, Element};

use crate::{
    common::{error::AppError, format::format_brl},
    db::OperationsRepository,
    models::operations::{LineItemKind, WorkOrder},
};

const FONT_FAMILY: &str = "Roboto";

#[derive(Clone)]
pub struct DocumentService {
    repo: OperationsRepository,
    fonts_dir: PathBuf,
}

impl DocumentService {
    pub fn new(repo: OperationsRepository, fonts_dir: PathBuf) -> Self {
        Self { repo, fonts_dir }
    }

    pub async fn generate_order_pdf(&self, order_id: u64) -> Result<Vec<u8>, AppError> {
        // 404 antes de tentar carregar as fontes
        let order = self.repo.get_order(order_id).await?;
        self.render(&order)
    }

    fn render(&self, order: &WorkOrder) -> Result<Vec<u8>, AppError> {
        // Carrega a fonte da pasta configurada
        let font_family = genpdf::fonts::from_files(&self.fonts_dir, FONT_FAMILY, None)
            .map_err(|_| AppError::FontNotFound(self.fonts_dir.display().to_string()))?;

        let mut doc = genpdf::Document::new(font_family);
        doc.set_title(format!("Ordem de Serviço #{}", order.id));
        let mut decorator = genpdf::SimplePageDecorator::new();
        decorator.set_margins(10);
        doc.set_page_decorator(decorator);

        // --- CABEÇALHO ---
        doc.push(elements::Paragraph::new(format!("ORDEM DE SERVIÇO #{}", order.id))
            .styled(style::Style::new().bold().with_font_size(18)));
        doc.push(elements::Paragraph::new(format!("Data: {}", order.created_at.format("%d/%m/%Y"))));
        doc.push(elements::Paragraph::new(format!("Cliente: {}", order.client_name)));
        doc.push(elements::Paragraph::new(format!("Status: {}", order.status.label())));
        if !order.description.is_empty() {
            doc.push(elements::Paragraph::new(format!("Descrição: {}", order.description)));
        }

        doc.push(elements::Break::new(2));

        // --- TABELA DE ITENS ---
        // Pesos: Item (4), Tipo (2), Qtd (1), Unitário (2), Subtotal (2)
        let mut table = elements::TableLayout::new(vec![4, 2, 1, 2, 2]);
        table.set_cell_decorator(elements::FrameCellDecorator::new(true, true, false));

        let style_bold = style::Style::new().bold();
        table
            .row()
            .element(elements::Paragraph::new("Item").styled(style_bold))
            .element(elements::Paragraph::new("Tipo").styled(style_bold))
            .element(elements::Paragraph::new("Qtd").styled(style_bold))
            .element(elements::Paragraph::new("Unitário").styled(style_bold))
            .element(elements::Paragraph::new("Subtotal").styled(style_bold))
            .push()
            .map_err(render_error)?;

        for item in &order.items {
            let kind = match item.kind {
                LineItemKind::Product => "Produto",
                LineItemKind::Service => "Serviço",
            };
            table
                .row()
                .element(elements::Paragraph::new(item.name.clone()))
                .element(elements::Paragraph::new(kind))
                .element(elements::Paragraph::new(item.quantity.to_string()))
                .element(elements::Paragraph::new(format_brl(item.price)))
                .element(elements::Paragraph::new(item.subtotal().map(format_brl).unwrap_or_default()))
                .push()
                .map_err(render_error)?;
        }

        doc.push(table);
        doc.push(elements::Break::new(2));

        // --- TOTAL ---
        let mut total_paragraph = elements::Paragraph::new(format!("TOTAL: {}", format_brl(order.total)));
        total_paragraph.set_alignment(genpdf::Alignment::Right);
        doc.push(total_paragraph.styled(style::Style::new().bold().with_font_size(12)));

        // Renderiza para buffer (memória)
        let mut buffer = Vec::new();
        doc.render(&mut buffer).map_err(render_error)?;

        tracing::info!("🖨️ PDF da ordem de serviço #{} gerado ({} bytes)", order.id, buffer.len());
        Ok(buffer)
    }
}

fn render_error(e: genpdf::error::Error) -> AppError {
    AppError::InternalServerError(anyhow::Error::msg(e.to_string()))
}
