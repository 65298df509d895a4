// src/common/validation.rs
//
// Validações customizadas compartilhadas pelos formulários.

use rust_decimal::Decimal;
use validator::ValidationError;

use crate::models::{common::RecordStatus, operations::WorkOrderStatus};

// Teto dos valores monetários e das quantidades aceitos pelos formulários
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);
pub const MAX_QUANTITY: u32 = 10_000;

// O nome é conferido já sem os espaços das pontas, que é como ele será gravado.
pub fn validate_name(val: &str) -> Result<(), ValidationError> {
    if val.trim().chars().count() < 3 {
        let mut err = ValidationError::new("name_too_short");
        err.add_param("min".into(), &3);
        return Err(err);
    }
    Ok(())
}

pub fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() && !val.is_zero() {
        let mut err = ValidationError::new("cost_price_negative");
        err.add_param("min".into(), &0.0);
        return Err(err);
    }
    below_max_amount(val)
}

// Preço mínimo de R$ 0,01.
pub fn validate_positive_price(val: &Decimal) -> Result<(), ValidationError> {
    if *val < Decimal::new(1, 2) {
        let mut err = ValidationError::new("price_not_positive");
        err.add_param("min".into(), &0.01);
        return Err(err);
    }
    below_max_amount(val)
}

fn below_max_amount(val: &Decimal) -> Result<(), ValidationError> {
    if *val > MAX_AMOUNT {
        let mut err = ValidationError::new("amount_too_large");
        err.add_param("max".into(), &MAX_AMOUNT.to_string());
        return Err(err);
    }
    Ok(())
}

pub fn validate_quantity(val: u32) -> Result<(), ValidationError> {
    if val < 1 {
        return Err(ValidationError::new("quantity_too_small"));
    }
    if val > MAX_QUANTITY {
        let mut err = ValidationError::new("quantity_too_large");
        err.add_param("max".into(), &MAX_QUANTITY);
        return Err(err);
    }
    Ok(())
}

pub fn validate_record_status(val: &str) -> Result<(), ValidationError> {
    val.parse::<RecordStatus>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("invalid_status"))
}

pub fn validate_work_order_status(val: &str) -> Result<(), ValidationError> {
    val.parse::<WorkOrderStatus>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("invalid_status"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_below_one_cent_are_rejected() {
        assert!(validate_positive_price(&Decimal::ZERO).is_err());
        assert!(validate_positive_price(&Decimal::new(-10, 0)).is_err());
        assert!(validate_positive_price(&Decimal::new(1, 3)).is_err());
        assert!(validate_positive_price(&Decimal::new(1, 2)).is_ok());
    }

    #[test]
    fn padded_names_are_measured_without_the_padding() {
        assert_eq!(validate_name("   ab  ").unwrap_err().code, "name_too_short");
        assert!(validate_name("      ").is_err());
        assert!(validate_name(" Ana ").is_ok());
        // Conta caracteres, não bytes
        assert!(validate_name("Zé").is_err());
        assert!(validate_name("Zoé").is_ok());
    }

    #[test]
    fn amounts_and_quantities_have_a_ceiling() {
        assert!(validate_positive_price(&MAX_AMOUNT).is_ok());
        let huge = Decimal::from_str_exact("10000000000000000000000000").unwrap();
        assert_eq!(validate_positive_price(&huge).unwrap_err().code, "amount_too_large");
        assert_eq!(validate_not_negative(&huge).unwrap_err().code, "amount_too_large");

        assert!(validate_quantity(MAX_QUANTITY).is_ok());
        assert_eq!(validate_quantity(0).unwrap_err().code, "quantity_too_small");
        assert_eq!(validate_quantity(4_000_000_000).unwrap_err().code, "quantity_too_large");
    }

    #[test]
    fn zero_cost_is_allowed() {
        assert!(validate_not_negative(&Decimal::ZERO).is_ok());
        assert!(validate_not_negative(&Decimal::new(-1, 2)).is_err());
    }

    #[test]
    fn status_membership() {
        assert!(validate_record_status("ACTIVE").is_ok());
        assert!(validate_record_status("Inativo").is_ok());
        assert!(validate_record_status("Archived").is_err());
        assert!(validate_work_order_status("Em Andamento").is_ok());
        assert!(validate_work_order_status("DONE").is_err());
    }
}
