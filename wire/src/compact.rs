//! Abbreviated key schema used when the canonical form overflows.
//!
//! | compact | canonical   | variant  |
//! |---------|-------------|----------|
//! | `t`     | `type`      | both     |
//! | `e`     | `emoji`     | both     |
//! | `s`     | `sender`    | both     |
//! | `r`     | `receiver`  | both     |
//! | `ts`    | `timestamp` | both     |
//! | `a`     | `amount`    | token    |
//! | `m`     | `message`   | token    |
//! | `tp`    | `template`  | contract |
//! | `tr`    | `terms`     | contract |

use payload::{Payload, PayloadKind, Terms};
use serde::Serialize;
use serde_json::{Map, Value};

/// Compact discriminant key.
pub const COMPACT_TYPE_KEY: &str = "t";

/// Token keys in canonical order.
const TOKEN_KEYS: [(&str, &str); 6] = [
    ("e", "emoji"),
    ("a", "amount"),
    ("s", "sender"),
    ("r", "receiver"),
    ("ts", "timestamp"),
    ("m", "message"),
];

/// Contract keys in canonical order, `terms` excluded.
const CONTRACT_KEYS: [(&str, &str); 5] = [
    ("e", "emoji"),
    ("tp", "template"),
    ("s", "sender"),
    ("r", "receiver"),
    ("ts", "timestamp"),
];

/// Compact form of a payload. Field order is the on-wire order.
#[derive(Debug, Serialize)]
pub(crate) struct CompactPayload<'a> {
    t: PayloadKind,
    e: &'a str,
    s: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    r: Option<&'a str>,
    ts: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    a: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    m: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tp: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tr: Option<&'a Terms>,
}

impl<'a> From<&'a Payload> for CompactPayload<'a> {
    fn from(payload: &'a Payload) -> Self {
        match payload {
            Payload::Token(token) => Self {
                t: PayloadKind::Token,
                e: &token.emoji,
                s: token.sender.as_str(),
                r: Some(token.receiver.as_str()),
                ts: token.timestamp,
                a: Some(token.amount),
                m: token.message.as_deref(),
                tp: None,
                tr: None,
            },
            Payload::Contract(contract) => Self {
                t: PayloadKind::Contract,
                e: &contract.emoji,
                s: contract.sender.as_str(),
                r: contract.receiver.as_ref().map(|receiver| receiver.as_str()),
                ts: contract.timestamp,
                a: None,
                m: None,
                tp: Some(&contract.template),
                tr: Some(&contract.terms).filter(|terms| !terms.is_empty()),
            },
        }
    }
}

/// Returns the variant if `object` uses the compact schema.
///
/// The compact schema is recognized only by a `t` key holding exactly
/// `"token"` or `"contract"`.
pub(crate) fn compact_kind(object: &Map<String, Value>) -> Option<PayloadKind> {
    object
        .get(COMPACT_TYPE_KEY)
        .and_then(Value::as_str)
        .and_then(PayloadKind::parse)
}

/// Rebuilds the canonical object from a compact one.
///
/// Keys absent in the compact object stay absent. Keys outside the schema
/// are dropped. Contract terms default to an empty object.
pub(crate) fn expand(object: &Map<String, Value>, kind: PayloadKind) -> Map<String, Value> {
    let mut out = Map::new();
    out.insert("type".to_owned(), Value::from(kind.as_str()));

    let keys: &[(&str, &str)] = match kind {
        PayloadKind::Token => &TOKEN_KEYS,
        PayloadKind::Contract => &CONTRACT_KEYS,
    };
    for (short, long) in keys {
        if let Some(value) = object.get(*short) {
            out.insert((*long).to_owned(), value.clone());
        }
    }
    if kind == PayloadKind::Contract {
        let terms = object
            .get("tr")
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()));
        out.insert("terms".to_owned(), terms);
    }
    out
}
