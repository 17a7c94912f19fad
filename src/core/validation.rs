//! Shape checks on caller input. These run before any network activity.
//!
//! Only lengths and character classes are checked here; CNPJ/CPF check digits
//! and the document schema are validated elsewhere.

use super::error::ValidationError;
use super::types::TaxpayerId;

fn digits_of_len(field: &str, value: &str, len: usize) -> Result<(), ValidationError> {
    if value.len() != len || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::new(
            field,
            format!("must have exactly {len} digits, got '{value}'"),
        ));
    }
    Ok(())
}

/// 44-digit access key (`chNFe`).
pub fn validate_document_key(field: &str, key: &str) -> Result<(), ValidationError> {
    digits_of_len(field, key, 44)
}

pub fn validate_cnpj(field: &str, cnpj: &str) -> Result<(), ValidationError> {
    digits_of_len(field, cnpj, 14)
}

pub fn validate_cpf(field: &str, cpf: &str) -> Result<(), ValidationError> {
    digits_of_len(field, cpf, 11)
}

pub fn validate_taxpayer(field: &str, id: &TaxpayerId) -> Result<(), ValidationError> {
    match id {
        TaxpayerId::Cnpj(v) => validate_cnpj(field, v),
        TaxpayerId::Cpf(v) => validate_cpf(field, v),
    }
}

/// State registration (IE): 2 to 14 digits, or the literal `ISENTO`.
pub fn validate_state_registration(field: &str, ie: &str) -> Result<(), ValidationError> {
    if ie == "ISENTO" {
        return Ok(());
    }
    if !(2..=14).contains(&ie.len()) || !ie.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::new(
            field,
            format!("must have 2 to 14 digits, got '{ie}'"),
        ));
    }
    Ok(())
}

/// Free text bounded by the schema's length rules, counted in characters.
pub fn validate_text(field: &str, text: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let len = text.trim().chars().count();
    if len < min || len > max {
        return Err(ValidationError::new(
            field,
            format!("must have {min} to {max} characters, got {len}"),
        ));
    }
    Ok(())
}

/// Batch identifier (`idLote`): 1 to 15 digits.
pub fn validate_batch_id(field: &str, id: &str) -> Result<(), ValidationError> {
    if id.is_empty() || id.len() > 15 || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::new(
            field,
            format!("must have 1 to 15 digits, got '{id}'"),
        ));
    }
    Ok(())
}

/// Authorization protocol number (`nProt`): 15 digits.
pub fn validate_protocol_number(field: &str, protocol: &str) -> Result<(), ValidationError> {
    digits_of_len(field, protocol, 15)
}

/// Distribution sequence number (NSU): up to 15 digits, returned zero-padded.
pub fn normalize_nsu(field: &str, nsu: &str) -> Result<String, ValidationError> {
    if nsu.is_empty() || nsu.len() > 15 || !nsu.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::new(
            field,
            format!("must have 1 to 15 digits, got '{nsu}'"),
        ));
    }
    Ok(format!("{nsu:0>15}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "35240112345678000195550010000000011000000010";

    #[test]
    fn document_key() {
        assert_eq!(KEY.len(), 44);
        assert!(validate_document_key("key", KEY).is_ok());
        assert!(validate_document_key("key", &KEY[..43]).is_err());
        let err = validate_document_key("key", &format!("{}X", &KEY[..43])).unwrap_err();
        assert_eq!(err.field, "key");
    }

    #[test]
    fn taxpayer_lengths() {
        assert!(validate_taxpayer("cnpj", &TaxpayerId::Cnpj("12345678000195".into())).is_ok());
        assert!(validate_taxpayer("cnpj", &TaxpayerId::Cnpj("1234567800019".into())).is_err());
        assert!(validate_taxpayer("cpf", &TaxpayerId::Cpf("12345678909".into())).is_ok());
        assert!(validate_taxpayer("cpf", &TaxpayerId::Cpf("123.456.789-09".into())).is_err());
    }

    #[test]
    fn state_registration() {
        assert!(validate_state_registration("ie", "ISENTO").is_ok());
        assert!(validate_state_registration("ie", "110042490114").is_ok());
        assert!(validate_state_registration("ie", "").is_err());
        assert!(validate_state_registration("ie", "11.004.249").is_err());
    }

    #[test]
    fn text_bounds_count_characters() {
        assert!(validate_text("x", "justificativa válida", 15, 255).is_ok());
        assert!(validate_text("x", "curta", 15, 255).is_err());
        assert!(validate_text("x", "ção ção ção ção", 15, 15).is_ok());
    }

    #[test]
    fn batch_and_protocol_numbers() {
        assert!(validate_batch_id("batch_id", "1").is_ok());
        assert!(validate_batch_id("batch_id", "123456789012345").is_ok());
        assert!(validate_batch_id("batch_id", "1234567890123456").is_err());
        assert!(validate_batch_id("batch_id", "").is_err());
        assert!(validate_protocol_number("protocol", "135240000000001").is_ok());
        assert!(validate_protocol_number("protocol", "13524000000000").is_err());
    }

    #[test]
    fn nsu_is_padded() {
        assert_eq!(normalize_nsu("nsu", "42").unwrap(), "000000000000042");
        assert_eq!(normalize_nsu("nsu", "0").unwrap(), "000000000000000");
        assert!(normalize_nsu("nsu", "").is_err());
        assert!(normalize_nsu("nsu", "1234567890123456").is_err());
        assert!(normalize_nsu("nsu", "12a").is_err());
    }
}
