//! Slash-command form parser.
//!
//! Turns human-typed text such as
//! `/🍌 {from: did:hapa:alex123; to: did:hapa:bob456; amount: 5;} thanks`
//! into a draft payload. Parsing is lenient: unknown keys are kept as
//! extras and malformed pairs are dropped.

use codec::{ContractPayload, Payload, Terms, TokenPayload};
use serde_json::Value;

/// Receiver used when the form names none.
pub const DEFAULT_RECEIVER: &str = "did:hapa:receiver";

/// Template used for contracts whose form has no message.
pub const DEFAULT_TEMPLATE: &str = "generic";

/// Fields recovered from a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedForm {
    pub emoji: String,
    pub from: Option<String>,
    pub to: Option<Vec<String>>,
    pub operation: Option<String>,
    pub amount: Option<i64>,
    pub message: Option<String>,
    /// Other `key: value` pairs, in first-seen order.
    pub extras: Vec<(String, String)>,
}

/// Parses `/emoji {key: value; ...} trailing` or `emoji text`.
///
/// Returns `None` for blank input.
pub fn parse_form_text(text: &str) -> Option<ParsedForm> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let (emoji, remaining) = match text.strip_prefix('/') {
        Some(rest) => rest.split_once(' ').unwrap_or((rest, "")),
        None => {
            let mut chars = text.chars();
            let first = chars.next().map(String::from).unwrap_or_default();
            return Some(parse_body(first, chars.as_str().trim()));
        }
    };
    let remaining = remaining.trim();
    if emoji.is_empty() && remaining.is_empty() {
        return None;
    }
    Some(parse_body(emoji.to_owned(), remaining))
}

fn parse_body(emoji: String, remaining: &str) -> ParsedForm {
    let mut form = ParsedForm {
        emoji,
        ..ParsedForm::default()
    };
    if remaining.is_empty() {
        return form;
    }

    let braces = remaining
        .find('{')
        .zip(remaining.rfind('}'))
        .filter(|(open, close)| open < close);
    let Some((open, close)) = braces else {
        form.message = Some(remaining.to_owned());
        return form;
    };

    for pair in remaining[open + 1..close].split(';') {
        if let Some((key, value)) = pair.split_once(':') {
            form.set(&key.trim().to_lowercase(), value.trim());
        }
    }

    let trailing = remaining[close + 1..].trim();
    if !trailing.is_empty() {
        form.message
            .get_or_insert_with(String::new)
            .push_str(trailing);
    }
    form
}

impl ParsedForm {
    fn set(&mut self, key: &str, value: &str) {
        match key {
            "emoji" => value.clone_into(&mut self.emoji),
            "from" => self.from = Some(value.to_owned()),
            "operation" => self.operation = Some(value.to_owned()),
            "message" => self.message = Some(value.to_owned()),
            "to" => {
                self.to = Some(
                    value
                        .split(',')
                        .map(str::trim)
                        .filter(|recipient| !recipient.is_empty())
                        .map(str::to_owned)
                        .collect(),
                );
            }
            "amount" => {
                if let Some(amount) = leading_integer(value) {
                    self.amount = Some(amount);
                }
            }
            _ => match self.extras.iter_mut().find(|(existing, _)| existing == key) {
                Some((_, slot)) => value.clone_into(slot),
                None => self.extras.push((key.to_owned(), value.to_owned())),
            },
        }
    }

    /// Returns `true` if the form asks for a contract.
    pub fn is_contract(&self) -> bool {
        self.operation
            .as_deref()
            .is_some_and(|operation| operation.eq_ignore_ascii_case("contract"))
    }

    /// Builds a draft payload. The result is not validated.
    ///
    /// A missing or empty `from` falls back to `default_sender`.
    pub fn into_payload(self, default_sender: &str, timestamp: i64) -> Payload {
        let is_contract = self.is_contract();
        let Self {
            emoji,
            from,
            to,
            amount,
            message,
            extras,
            ..
        } = self;
        let sender = from
            .filter(|from| !from.is_empty())
            .unwrap_or_else(|| default_sender.to_owned());
        let recipients = to.unwrap_or_default();
        let receiver = recipients
            .first()
            .cloned()
            .unwrap_or_else(|| DEFAULT_RECEIVER.to_owned());
        let message = message.filter(|message| !message.is_empty());

        if is_contract {
            let mut terms = Terms::new();
            terms.insert("amount".to_owned(), Value::from(amount.unwrap_or(0)));
            terms.insert("recipients".to_owned(), Value::from(recipients));
            terms.insert(
                "message".to_owned(),
                Value::from(message.clone().unwrap_or_default()),
            );
            for (key, value) in extras {
                terms.insert(key, Value::from(value));
            }
            let template = message.unwrap_or_else(|| DEFAULT_TEMPLATE.to_owned());
            return Payload::from(
                ContractPayload::new(emoji, template, sender, timestamp)
                    .with_receiver(receiver)
                    .with_terms(terms),
            );
        }

        let amount = amount
            .and_then(|amount| u64::try_from(amount).ok())
            .unwrap_or(0);
        let mut token = TokenPayload::new(emoji, amount, sender, receiver, timestamp);
        token.message = message;
        Payload::from(token)
    }
}

/// Parses an optionally signed run of leading digits, ignoring the rest.
fn leading_integer(value: &str) -> Option<i64> {
    let digits_start = usize::from(value.starts_with(['-', '+']));
    let digits_len = value[digits_start..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    value[..digits_start + digits_len].parse().ok()
}
