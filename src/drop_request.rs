//! Drop-request contract: the JSON the client posts and the response it gets
//! back from the board-state endpoint.

use serde::{Deserialize, Serialize};

use crate::error::DropError;
use crate::path::MoveSequence;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DropRequest {
    pub bet: i64,
}

impl DropRequest {
    /// Reads the bet field the way the page's number input holds it.
    pub fn from_input(raw: &str) -> Result<Self, DropError> {
        raw.trim()
            .parse::<i64>()
            .map(|bet| Self { bet })
            .map_err(|_| DropError::InvalidBet(raw.to_string()))
    }

    pub fn to_json(&self) -> Result<String, DropError> {
        serde_json::to_string(self).map_err(|e| DropError::Malformed(e.to_string()))
    }
}

/// A drop the endpoint accepted.
#[derive(Clone, Debug, PartialEq)]
pub struct DropOutcome {
    pub moves: MoveSequence,
    pub slot: usize,
    pub reward: i64,
    pub balance: i64,
}

impl DropOutcome {
    pub fn summary(&self) -> String {
        format!("Ball landed in slot {}, reward: ${}", self.slot, self.reward)
    }
}

pub type DropResult = Result<DropOutcome, DropError>;

// Wire shape: either `{error, balance}` or `{moves, slot, reward, balance}`.
#[derive(Debug, Deserialize)]
struct RawResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    moves: Option<MoveSequence>,
    #[serde(default)]
    slot: Option<usize>,
    #[serde(default)]
    reward: Option<i64>,
    #[serde(default)]
    balance: Option<i64>,
}

/// Parses the endpoint's response body. An `error` field wins over anything
/// else in the body so a rejected drop never reaches the animation.
pub fn parse_response(body: &str) -> DropResult {
    let raw: RawResponse =
        serde_json::from_str(body).map_err(|e| DropError::Malformed(e.to_string()))?;
    if let Some(err) = raw.error {
        return Err(DropError::Rejected(err));
    }
    let missing = |field: &str| DropError::Malformed(format!("missing field `{field}`"));
    Ok(DropOutcome {
        moves: raw.moves.ok_or_else(|| missing("moves"))?,
        slot: raw.slot.ok_or_else(|| missing("slot"))?,
        reward: raw.reward.ok_or_else(|| missing("reward"))?,
        balance: raw.balance.ok_or_else(|| missing("balance"))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_drop() {
        let body = r#"{"moves":[1,0,1],"slot":9,"reward":20,"balance":1010}"#;
        let out = parse_response(body).unwrap();
        assert_eq!(out.moves, MoveSequence::new(vec![1, 0, 1]));
        assert_eq!(out.slot, 9);
        assert_eq!(out.balance, 1010);
        assert_eq!(out.summary(), "Ball landed in slot 9, reward: $20");
    }

    #[test]
    fn null_and_float_moves_still_parse() {
        use crate::{BoardGeometry, build_path};

        let body = r#"{"moves":[1.0,null,0],"slot":8,"reward":0,"balance":990}"#;
        let out = parse_response(body).unwrap();
        let g = BoardGeometry::with_grid(4, 5);
        assert_eq!(
            build_path(&g, &out.moves),
            build_path(&g, &MoveSequence::new(vec![1, 0, 0]))
        );
        assert!(out.moves.check(&g).is_err());
    }

    #[test]
    fn rejected_drop_surfaces_error_text() {
        let body = r#"{"error":"Insufficient balance","balance":5}"#;
        assert_eq!(
            parse_response(body),
            Err(DropError::Rejected("Insufficient balance".into()))
        );
    }

    #[test]
    fn missing_moves_is_malformed() {
        let body = r#"{"slot":3,"reward":1,"balance":2}"#;
        assert!(matches!(parse_response(body), Err(DropError::Malformed(m)) if m.contains("moves")));
    }

    #[test]
    fn garbage_body_is_malformed() {
        assert!(matches!(parse_response("<html>"), Err(DropError::Malformed(_))));
    }

    #[test]
    fn bet_input_parsing() {
        assert_eq!(DropRequest::from_input(" 25 "), Ok(DropRequest { bet: 25 }));
        assert!(matches!(DropRequest::from_input("ten"), Err(DropError::InvalidBet(_))));
        assert_eq!(DropRequest { bet: 10 }.to_json().unwrap(), r#"{"bet":10}"#);
    }
}
