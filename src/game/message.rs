use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Where the AI answers until an inference engine is wired in: the centre
/// point of a 19x19 board, zero-based.
pub const AI_PLACEHOLDER_MOVE: Coordinate = Coordinate { row: 9, col: 9 };

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: i64,
    pub col: i64,
}

/// Board as sent by the client. Only the outer array is required; rows and
/// cells pass through as-is.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct BoardState(pub Vec<Value>);

impl BoardState {
    /// `(rows, widest row)`. Rows that are not arrays count as width 0.
    pub fn dimensions(&self) -> (usize, usize) {
        let width = self
            .0
            .iter()
            .map(|row| row.as_array().map_or(0, Vec::len))
            .max()
            .unwrap_or(0);
        (self.0.len(), width)
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// Body of `POST /api/move`.
///
/// The body must be a JSON object; both keys may be missing or `null`.
/// When present, `move` has to be `{"row": <int>, "col": <int>}` and
/// `board_state` an array. Anything else (a float row, a move written as
/// `"d4"`, an array body) is rejected with 422 on purpose rather than
/// passed through as an absent field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct MoveRequest {
    pub user_move: Option<Coordinate>,
    pub board_state: Option<BoardState>,
}

// Derived struct decoding also takes sequences, so the fields are decoded
// from a map only.
#[derive(Deserialize)]
struct MoveRequestFields {
    #[serde(rename = "move", default)]
    user_move: Option<Coordinate>,
    #[serde(default)]
    board_state: Option<BoardState>,
}

impl TryFrom<Map<String, Value>> for MoveRequest {
    type Error = serde_json::Error;

    fn try_from(object: Map<String, Value>) -> Result<Self, Self::Error> {
        let fields: MoveRequestFields = serde_json::from_value(Value::Object(object))?;
        Ok(MoveRequest {
            user_move: fields.user_move,
            board_state: fields.board_state,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveResponse {
    pub ai_move: Coordinate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_body_decodes_to_absent_fields() {
        let request: MoveRequest = serde_json::from_str("{}").unwrap();
        assert!(request.user_move.is_none());
        assert!(request.board_state.is_none());
    }

    #[test]
    fn decodes_client_payload() {
        let request: MoveRequest = serde_json::from_value(json!({
            "move": { "row": 3, "col": 4 },
            "board_state": [[null, "black"], ["white", null]]
        }))
        .unwrap();

        assert_eq!(request.user_move, Some(Coordinate { row: 3, col: 4 }));
        assert_eq!(request.board_state.unwrap().dimensions(), (2, 2));
    }

    #[test]
    fn explicit_null_fields_are_absent() {
        let request: MoveRequest =
            serde_json::from_value(json!({ "move": null, "board_state": null })).unwrap();
        assert!(request.user_move.is_none());
        assert!(request.board_state.is_none());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let request: MoveRequest =
            serde_json::from_value(json!({ "player": "black", "move": { "row": 0, "col": 18 } }))
                .unwrap();
        assert_eq!(request.user_move, Some(Coordinate { row: 0, col: 18 }));
    }

    #[test]
    fn rejects_move_without_col() {
        let err = serde_json::from_value::<MoveRequest>(json!({ "move": { "row": 3 } }));
        assert!(err.is_err());
    }

    #[test]
    fn rejects_array_bodies() {
        assert!(serde_json::from_value::<MoveRequest>(json!([])).is_err());
        assert!(serde_json::from_value::<MoveRequest>(json!([{ "row": 1, "col": 2 }])).is_err());
    }

    #[test]
    fn rejects_non_integer_moves() {
        assert!(serde_json::from_value::<MoveRequest>(json!({ "move": { "row": 3.5, "col": 4 } }))
            .is_err());
        assert!(serde_json::from_value::<MoveRequest>(json!({ "move": "d4" })).is_err());
    }

    #[test]
    fn rejects_board_state_that_is_not_an_array() {
        let err = serde_json::from_value::<MoveRequest>(json!({ "board_state": "19x19" }));
        assert!(err.is_err());
    }

    #[test]
    fn ragged_board_reports_widest_row() {
        let board: BoardState = serde_json::from_value(json!([[0], [0, 1, 2], 7])).unwrap();
        assert_eq!(board.dimensions(), (3, 3));
        assert_eq!(BoardState::default().dimensions(), (0, 0));
    }

    #[test]
    fn board_displays_as_compact_json() {
        let board: BoardState = serde_json::from_value(json!([[null, "black"], [0, 1]])).unwrap();
        assert_eq!(board.to_string(), r#"[[null,"black"],[0,1]]"#);
    }

    #[test]
    fn response_has_exact_shape() {
        let response = MoveResponse {
            ai_move: AI_PLACEHOLDER_MOVE,
        };
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({ "ai_move": { "row": 9, "col": 9 } })
        );
    }
}
