// src/common/format.rs
//
// Máscaras de entrada (CPF/CNPJ e telefone) e formatação de moeda.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};

static NON_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\D").expect("regex válida"));

static TWO_THEN_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d{2})(\d)").expect("regex válida"));
static THREE_THEN_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d{3})(\d)").expect("regex válida"));
static FOUR_THEN_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d{4})(\d)").expect("regex válida"));
static FIVE_THEN_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d{5})(\d)").expect("regex válida"));
static CPF_TAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d{3})(\d{1,2})$").expect("regex válida"));
static CNPJ_TAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d{4})(\d{1,2})$").expect("regex válida"));

fn digits(value: &str) -> String {
    NON_DIGIT.replace_all(value, "").into_owned()
}

// `Regex::replace` troca só a primeira ocorrência, que é o que a máscara precisa.
fn mask(value: String, re: &Regex, template: &str) -> String {
    re.replace(&value, template).into_owned()
}

/// Até 11 dígitos vira CPF (`123.456.789-01`); acima disso, CNPJ (`11.222.333/0001-44`).
pub fn format_cnpj_cpf(value: &str) -> String {
    let cleaned = digits(value);

    if cleaned.len() <= 11 {
        let v = mask(cleaned, &THREE_THEN_DIGIT, "${1}.${2}");
        let v = mask(v, &THREE_THEN_DIGIT, "${1}.${2}");
        mask(v, &CPF_TAIL, "${1}-${2}")
    } else {
        let cleaned: String = cleaned.chars().take(14).collect();
        let v = mask(cleaned, &TWO_THEN_DIGIT, "${1}.${2}");
        let v = mask(v, &THREE_THEN_DIGIT, "${1}.${2}");
        let v = mask(v, &THREE_THEN_DIGIT, "${1}/${2}");
        mask(v, &CNPJ_TAIL, "${1}-${2}")
    }
}

/// Fixo com até 10 dígitos (`(11) 9876-5432`), celular com 11 (`(11) 98765-4321`).
pub fn format_phone(value: &str) -> String {
    let cleaned = digits(value);

    if cleaned.len() <= 10 {
        let v = mask(cleaned, &TWO_THEN_DIGIT, "(${1}) ${2}");
        mask(v, &FOUR_THEN_DIGIT, "${1}-${2}")
    } else {
        let cleaned: String = cleaned.chars().take(11).collect();
        let v = mask(cleaned, &TWO_THEN_DIGIT, "(${1}) ${2}");
        mask(v, &FIVE_THEN_DIGIT, "${1}-${2}")
    }
}

/// Formata em reais no padrão pt-BR: `R$ 7.500,00`.
pub fn format_brl(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{sign}R$ {grouped},{frac_part}")
}
