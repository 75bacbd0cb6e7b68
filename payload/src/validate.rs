//! Structural and semantic validation of parsed payload values.
//!
//! Validation runs in two steps. The structural step decides which variant a
//! value has the shape of; the semantic step checks business rules on that
//! variant. Both report failures as [`ValidationError`] values and never
//! mutate the input.

use serde_json::{Map, Value};

use crate::did::HapaDid;
use crate::error::{IdentifierField, ValidationError, ValidationResult};
use crate::model::{ContractPayload, Payload, PayloadKind, TokenPayload};

type Object = Map<String, Value>;

/// Classifies a parsed value and converts it into a typed [`Payload`].
///
/// # Errors
///
/// Returns [`ValidationError::UnknownPayloadType`] if the value matches
/// neither variant's shape, or the first business rule the matched variant
/// breaks.
pub fn validate(value: &Value) -> ValidationResult<Payload> {
    let object = value
        .as_object()
        .ok_or(ValidationError::UnknownPayloadType)?;
    match classify_object(object) {
        Some(PayloadKind::Token) => validate_token(object).map(Payload::Token),
        Some(PayloadKind::Contract) => validate_contract(object).map(Payload::Contract),
        None => Err(ValidationError::UnknownPayloadType),
    }
}

/// Returns the variant whose shape `value` matches, without checking business rules.
#[must_use]
pub fn classify(value: &Value) -> Option<PayloadKind> {
    value.as_object().and_then(classify_object)
}

impl Payload {
    /// Checks the business rules on an already-typed payload.
    ///
    /// # Errors
    ///
    /// Returns the first rule the payload breaks.
    pub fn check(&self) -> ValidationResult<()> {
        match self {
            Self::Token(token) => {
                if token.amount == 0 {
                    return Err(ValidationError::InvalidAmount);
                }
                check_identifier(IdentifierField::Sender, &token.sender)?;
                check_identifier(IdentifierField::Receiver, &token.receiver)
            }
            Self::Contract(contract) => {
                check_identifier(IdentifierField::Sender, &contract.sender)?;
                if let Some(receiver) = contract.receiver.as_ref().filter(|r| !r.is_empty()) {
                    check_identifier(IdentifierField::Receiver, receiver)?;
                }
                if contract.template.is_empty() {
                    return Err(ValidationError::MissingTemplate);
                }
                Ok(())
            }
        }
    }
}

fn classify_object(object: &Object) -> Option<PayloadKind> {
    let kind = object
        .get("type")
        .and_then(Value::as_str)
        .and_then(PayloadKind::parse)?;
    let shaped = match kind {
        PayloadKind::Token => is_token_shape(object),
        PayloadKind::Contract => is_contract_shape(object),
    };
    shaped.then_some(kind)
}

fn is_token_shape(object: &Object) -> bool {
    has_str(object, "emoji")
        && has_str(object, "sender")
        && has_str(object, "receiver")
        && object.get("amount").is_some_and(Value::is_number)
        && integer_timestamp(object).is_some()
        && object
            .get("message")
            .map_or(true, |message| message.is_null() || message.is_string())
}

fn is_contract_shape(object: &Object) -> bool {
    has_str(object, "emoji")
        && has_str(object, "sender")
        && integer_timestamp(object).is_some()
        && object.contains_key("terms")
}

fn validate_token(object: &Object) -> ValidationResult<TokenPayload> {
    let amount = object
        .get("amount")
        .and_then(Value::as_u64)
        .filter(|amount| *amount > 0)
        .ok_or(ValidationError::InvalidAmount)?;
    let sender = identifier(object, "sender", IdentifierField::Sender)?;
    let receiver = identifier(object, "receiver", IdentifierField::Receiver)?;

    Ok(TokenPayload {
        emoji: str_field(object, "emoji").to_owned(),
        amount,
        sender,
        receiver,
        timestamp: integer_timestamp(object).unwrap_or_default(),
        message: object
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_owned),
    })
}

fn validate_contract(object: &Object) -> ValidationResult<ContractPayload> {
    let sender = identifier(object, "sender", IdentifierField::Sender)?;
    let receiver = match object.get("receiver") {
        None | Some(Value::Null) => None,
        Some(Value::String(raw)) if raw.is_empty() => Some(HapaDid::default()),
        Some(_) => Some(identifier(object, "receiver", IdentifierField::Receiver)?),
    };
    let template = object
        .get("template")
        .and_then(Value::as_str)
        .filter(|template| !template.is_empty())
        .ok_or(ValidationError::MissingTemplate)?;
    let terms = object
        .get("terms")
        .and_then(Value::as_object)
        .ok_or(ValidationError::InvalidTerms)?;

    Ok(ContractPayload {
        emoji: str_field(object, "emoji").to_owned(),
        template: template.to_owned(),
        sender,
        receiver,
        timestamp: integer_timestamp(object).unwrap_or_default(),
        terms: terms.clone(),
    })
}

fn check_identifier(field: IdentifierField, did: &HapaDid) -> ValidationResult<()> {
    if did.is_valid() {
        Ok(())
    } else {
        Err(ValidationError::InvalidIdentifier {
            field,
            value: did.as_str().to_owned(),
        })
    }
}

fn identifier(object: &Object, key: &str, field: IdentifierField) -> ValidationResult<HapaDid> {
    match object.get(key) {
        Some(Value::String(raw)) => {
            let did = HapaDid::new(raw.as_str());
            check_identifier(field, &did)?;
            Ok(did)
        }
        other => Err(ValidationError::InvalidIdentifier {
            field,
            value: other.map(Value::to_string).unwrap_or_default(),
        }),
    }
}

fn has_str(object: &Object, key: &str) -> bool {
    object.get(key).is_some_and(Value::is_string)
}

fn str_field<'a>(object: &'a Object, key: &str) -> &'a str {
    object.get(key).and_then(Value::as_str).unwrap_or_default()
}

fn integer_timestamp(object: &Object) -> Option<i64> {
    object.get("timestamp").and_then(Value::as_i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn token_value() -> Value {
        json!({
            "type": "token",
            "emoji": "🍌",
            "amount": 100,
            "sender": "did:hapa:alex123",
            "receiver": "did:hapa:bob456",
            "timestamp": 1_700_000_000_000_i64,
        })
    }

    fn contract_value() -> Value {
        json!({
            "type": "contract",
            "emoji": "📜",
            "template": "job_contract_v1",
            "sender": "did:hapa:alex123",
            "receiver": "did:hapa:bob456",
            "timestamp": 1_700_000_000_000_i64,
            "terms": {"rate": 25},
        })
    }

    #[test]
    fn valid_token() {
        let payload = validate(&token_value()).unwrap();
        let Payload::Token(token) = payload else {
            panic!("expected token");
        };
        assert_eq!(token.amount, 100);
        assert_eq!(token.message, None);
    }

    #[test]
    fn valid_contract() {
        let payload = validate(&contract_value()).unwrap();
        assert_eq!(payload.kind(), PayloadKind::Contract);
    }

    #[test]
    fn classify_reports_shape_only() {
        let mut value = token_value();
        value["amount"] = json!(0);
        assert_eq!(classify(&value), Some(PayloadKind::Token));
        assert_eq!(classify(&json!({"type": "token"})), None);
        assert_eq!(classify(&json!("token")), None);
    }

    #[test]
    fn non_object_is_unknown() {
        assert_eq!(
            validate(&json!([1, 2])),
            Err(ValidationError::UnknownPayloadType)
        );
        assert_eq!(validate(&Value::Null), Err(ValidationError::UnknownPayloadType));
    }

    #[test]
    fn unknown_discriminant() {
        let mut value = token_value();
        value["type"] = json!("template");
        assert_eq!(validate(&value), Err(ValidationError::UnknownPayloadType));
    }

    #[test]
    fn token_missing_receiver_is_unknown() {
        let mut value = token_value();
        value.as_object_mut().unwrap().remove("receiver");
        assert_eq!(validate(&value), Err(ValidationError::UnknownPayloadType));
    }

    #[test]
    fn token_amount_must_be_number() {
        let mut value = token_value();
        value["amount"] = json!("100");
        assert_eq!(validate(&value), Err(ValidationError::UnknownPayloadType));
    }

    #[test]
    fn token_non_string_message_is_unknown() {
        let mut value = token_value();
        value["message"] = json!(7);
        assert_eq!(validate(&value), Err(ValidationError::UnknownPayloadType));
    }

    #[test]
    fn token_null_message_is_absent() {
        let mut value = token_value();
        value["message"] = Value::Null;
        let Payload::Token(token) = validate(&value).unwrap() else {
            panic!("expected token");
        };
        assert_eq!(token.message, None);
    }

    #[test]
    fn zero_amount_is_invalid() {
        let mut value = token_value();
        value["amount"] = json!(0);
        assert_eq!(validate(&value), Err(ValidationError::InvalidAmount));
    }

    #[test]
    fn negative_and_fractional_amounts_are_invalid() {
        for amount in [json!(-5), json!(1.5), json!(2.0)] {
            let mut value = token_value();
            value["amount"] = amount;
            assert_eq!(validate(&value), Err(ValidationError::InvalidAmount));
        }
    }

    #[test]
    fn fractional_timestamp_is_unknown() {
        let mut value = token_value();
        value["timestamp"] = json!(1.5);
        assert_eq!(validate(&value), Err(ValidationError::UnknownPayloadType));
    }

    #[test]
    fn bad_sender_identifier() {
        let mut value = token_value();
        value["sender"] = json!("not-a-did");
        assert_eq!(
            validate(&value),
            Err(ValidationError::InvalidIdentifier {
                field: IdentifierField::Sender,
                value: "not-a-did".to_string(),
            })
        );
    }

    #[test]
    fn bad_receiver_identifier() {
        let mut value = token_value();
        value["receiver"] = json!("did:hapa:");
        assert!(matches!(
            validate(&value),
            Err(ValidationError::InvalidIdentifier {
                field: IdentifierField::Receiver,
                ..
            })
        ));
    }

    #[test]
    fn amount_checked_before_identifiers() {
        let mut value = token_value();
        value["amount"] = json!(0);
        value["sender"] = json!("nope");
        assert_eq!(validate(&value), Err(ValidationError::InvalidAmount));
    }

    #[test]
    fn contract_receiver_may_be_absent_or_empty() {
        let mut value = contract_value();
        value.as_object_mut().unwrap().remove("receiver");
        let Payload::Contract(contract) = validate(&value).unwrap() else {
            panic!("expected contract");
        };
        assert_eq!(contract.receiver, None);

        value["receiver"] = json!("");
        let Payload::Contract(contract) = validate(&value).unwrap() else {
            panic!("expected contract");
        };
        assert_eq!(contract.receiver, Some(HapaDid::default()));
    }

    #[test]
    fn contract_bad_receiver() {
        let mut value = contract_value();
        value["receiver"] = json!("bob");
        assert!(matches!(
            validate(&value),
            Err(ValidationError::InvalidIdentifier {
                field: IdentifierField::Receiver,
                ..
            })
        ));

        value["receiver"] = json!(12);
        assert_eq!(
            validate(&value),
            Err(ValidationError::InvalidIdentifier {
                field: IdentifierField::Receiver,
                value: "12".to_string(),
            })
        );
    }

    #[test]
    fn contract_empty_template() {
        let mut value = contract_value();
        value["template"] = json!("");
        assert_eq!(validate(&value), Err(ValidationError::MissingTemplate));
    }

    #[test]
    fn contract_missing_template() {
        let mut value = contract_value();
        value.as_object_mut().unwrap().remove("template");
        assert_eq!(validate(&value), Err(ValidationError::MissingTemplate));
    }

    #[test]
    fn contract_terms_not_object() {
        for terms in [json!([1, 2]), json!("x"), Value::Null, json!(3)] {
            let mut value = contract_value();
            value["terms"] = terms;
            assert_eq!(validate(&value), Err(ValidationError::InvalidTerms));
        }
    }

    #[test]
    fn contract_missing_terms_is_unknown() {
        let mut value = contract_value();
        value.as_object_mut().unwrap().remove("terms");
        assert_eq!(validate(&value), Err(ValidationError::UnknownPayloadType));
    }

    #[test]
    fn contract_empty_terms_are_legal() {
        let mut value = contract_value();
        value["terms"] = json!({});
        assert!(validate(&value).is_ok());
    }

    #[test]
    fn validate_does_not_mutate_input() {
        let value = token_value();
        let before = value.clone();
        let _ = validate(&value);
        assert_eq!(value, before);
    }

    #[test]
    fn check_matches_validate_for_typed_payloads() {
        let token = TokenPayload::new("🍌", 0, "did:hapa:alex123", "did:hapa:bob456", 1);
        assert_eq!(
            Payload::from(token).check(),
            Err(ValidationError::InvalidAmount)
        );

        let contract = ContractPayload::new("📜", "", "did:hapa:alex123", 1);
        assert_eq!(
            Payload::from(contract).check(),
            Err(ValidationError::MissingTemplate)
        );

        let unilateral = ContractPayload::new("📜", "will", "did:hapa:alex123", 1).with_receiver("");
        assert_eq!(Payload::from(unilateral).check(), Ok(()));
    }
}
