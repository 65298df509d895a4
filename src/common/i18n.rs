// src/common/i18n.rs

use std::collections::HashMap;
use std::sync::LazyLock;

pub const DEFAULT_LANG: &str = "pt";

// Dicionário (idioma -> chave) usado para traduzir erros, toasts e diálogos.
#[derive(Debug, Clone)]
pub struct I18nStore {
    messages: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

static GLOBAL: LazyLock<I18nStore> = LazyLock::new(I18nStore::new);

const PT: &[(&str, &str)] = &[
    // Erros
    ("error.validation_failed", "Um ou mais campos são inválidos."),
    ("error.invalid_input", "Entrada inválida."),
    ("error.invalid_credentials", "Email ou senha inválidos."),
    ("error.invalid_token", "Token de autenticação inválido ou ausente."),
    ("error.not_found", "Registro não encontrado: {resource}."),
    ("error.confirmation_not_found", "Confirmação de inativação não encontrada ou já utilizada."),
    ("error.draft_not_found", "Rascunho de ordem de serviço não encontrado."),
    ("error.line_item_not_found", "O item na posição {index} não existe nesta ordem de serviço."),
    ("error.item_unavailable", "{resource} não está disponível para seleção."),
    ("error.invalid_transition", "Não é possível mudar o status de {from} para {to}."),
    ("error.amount_overflow", "O total desta ordem de serviço excede o valor máximo permitido."),
    ("error.font_not_found", "Fonte não encontrada na pasta de fontes."),
    ("error.internal", "Ocorreu um erro inesperado."),
    // Validação de formulários
    ("validation.name_too_short", "O nome deve ter pelo menos 3 caracteres."),
    ("validation.invalid_email", "Por favor, insira um endereço de e-mail válido."),
    ("validation.cost_price_negative", "O preço de custo não pode ser negativo."),
    ("validation.price_not_positive", "O preço deve ser maior que zero."),
    ("validation.stock_negative", "O estoque não pode ser negativo."),
    ("validation.invalid_status", "Status inválido."),
    ("validation.client_required", "Selecione um cliente."),
    ("validation.quantity_too_small", "A quantidade deve ser pelo menos 1."),
    ("validation.quantity_too_large", "A quantidade não pode passar de 10000."),
    ("validation.amount_too_large", "O valor não pode passar de R$ 1.000.000.000,00."),
    ("validation.field_required", "Campo obrigatório."),
    ("validation.field_invalid", "Valor em formato inválido."),
    ("validation.body_invalid", "O corpo da requisição não é um JSON válido."),
    // Entidades
    ("entity.client", "cliente"),
    ("entity.supplier", "fornecedor"),
    ("entity.product", "produto"),
    ("entity.service", "serviço"),
    ("entity.work_order", "ordem de serviço"),
    // Status das ordens de serviço
    ("work_order_status.pending", "Pendente"),
    ("work_order_status.in_progress", "Em Andamento"),
    ("work_order_status.completed", "Concluída"),
    ("work_order_status.cancelled", "Cancelada"),
    // Toasts
    ("toast.client.created", "Cliente Adicionado!"),
    ("toast.supplier.created", "Fornecedor Adicionado!"),
    ("toast.product.created", "Produto Adicionado!"),
    ("toast.service.created", "Serviço Adicionado!"),
    ("toast.work_order.created", "Ordem de Serviço Criada!"),
    ("toast.created.description", "{name} foi adicionado com sucesso."),
    ("toast.work_order.description", "A O.S. para o cliente {name} foi criada com sucesso."),
    ("toast.updated", "Alterações salvas!"),
    ("toast.updated.description", "{name} foi atualizado com sucesso."),
    ("toast.inactivated", "Registro inativado"),
    ("toast.inactivated.description", "{name} agora está inativo."),
    // Diálogo de confirmação
    ("inactivation.title", "Você tem certeza?"),
    ("inactivation.description", "Esta ação irá inativar o {kind} {name}."),
];

const EN: &[(&str, &str)] = &[
    ("error.validation_failed", "One or more fields are invalid."),
    ("error.invalid_input", "Invalid input."),
    ("error.invalid_credentials", "Invalid email or password."),
    ("error.invalid_token", "Missing or invalid authentication token."),
    ("error.not_found", "Record not found: {resource}."),
    ("error.confirmation_not_found", "Inactivation confirmation not found or already used."),
    ("error.draft_not_found", "Work order draft not found."),
    ("error.line_item_not_found", "There is no item at position {index} in this work order."),
    ("error.item_unavailable", "{resource} is not available for selection."),
    ("error.invalid_transition", "Cannot change status from {from} to {to}."),
    ("error.amount_overflow", "This work order's total exceeds the maximum allowed amount."),
    ("error.font_not_found", "Font not found in the fonts directory."),
    ("error.internal", "An unexpected error occurred."),
    ("validation.name_too_short", "Name must be at least 3 characters long."),
    ("validation.invalid_email", "Please enter a valid email address."),
    ("validation.cost_price_negative", "Cost price cannot be negative."),
    ("validation.price_not_positive", "Price must be greater than zero."),
    ("validation.stock_negative", "Stock cannot be negative."),
    ("validation.invalid_status", "Invalid status."),
    ("validation.client_required", "Select a client."),
    ("validation.quantity_too_small", "Quantity must be at least 1."),
    ("validation.quantity_too_large", "Quantity cannot exceed 10000."),
    ("validation.amount_too_large", "Amount cannot exceed R$ 1,000,000,000.00."),
    ("validation.field_required", "This field is required."),
    ("validation.field_invalid", "Value has an invalid format."),
    ("validation.body_invalid", "The request body is not valid JSON."),
    ("entity.client", "client"),
    ("entity.supplier", "supplier"),
    ("entity.product", "product"),
    ("entity.service", "service"),
    ("entity.work_order", "work order"),
    ("work_order_status.pending", "Pending"),
    ("work_order_status.in_progress", "In Progress"),
    ("work_order_status.completed", "Completed"),
    ("work_order_status.cancelled", "Cancelled"),
    ("toast.client.created", "Client added!"),
    ("toast.supplier.created", "Supplier added!"),
    ("toast.product.created", "Product added!"),
    ("toast.service.created", "Service added!"),
    ("toast.work_order.created", "Work order created!"),
    ("toast.created.description", "{name} was added successfully."),
    ("toast.work_order.description", "The work order for {name} was created successfully."),
    ("toast.updated", "Changes saved!"),
    ("toast.updated.description", "{name} was updated successfully."),
    ("toast.inactivated", "Record inactivated"),
    ("toast.inactivated.description", "{name} is now inactive."),
    ("inactivation.title", "Are you sure?"),
    ("inactivation.description", "This will inactivate the {kind} {name}."),
];

impl I18nStore {
    pub fn new() -> Self {
        let mut messages = HashMap::new();
        messages.insert("pt", PT.iter().copied().collect());
        messages.insert("en", EN.iter().copied().collect());
        Self { messages }
    }

    pub fn global() -> &'static I18nStore {
        &GLOBAL
    }

    /// Traduz a chave para o idioma pedido. Cai para o português e, por último, devolve a própria chave.
    pub fn translate(&self, lang: &str, key: &str) -> String {
        self.lookup(lang, key)
            .or_else(|| self.lookup(DEFAULT_LANG, key))
            .unwrap_or(key)
            .to_string()
    }

    pub fn translate_with(&self, lang: &str, key: &str, args: &[(&str, &str)]) -> String {
        let mut text = self.translate(lang, key);
        for (name, value) in args {
            text = text.replace(&format!("{{{name}}}"), value);
        }
        text
    }

    fn lookup(&self, lang: &str, key: &str) -> Option<&'static str> {
        self.messages.get(lang).and_then(|table| table.get(key)).copied()
    }
}

impl Default for I18nStore {
    fn default() -> Self {
        Self::new()
    }
}
