use minefield_core::*;
use serde::{Deserialize, Serialize};

/// Requests understood by the authority.
///
/// Integers are kept wide on the wire so that nonsense values (negative sizes, huge coordinates)
/// reach the authority and are rejected there with the regular game errors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "request", rename_all = "lowercase")]
pub enum Request {
    Init { userid: String, size: i64, mines: i64 },
    Sweep { token: String, x: i64, y: i64 },
}

impl Request {
    pub fn init(userid: impl Into<String>, config: GameConfig) -> Self {
        Self::Init {
            userid: userid.into(),
            size: config.size().into(),
            mines: config.mines().into(),
        }
    }

    pub fn sweep(token: impl Into<String>, (x, y): Coord2) -> Self {
        Self::Sweep {
            token: token.into(),
            x: x.into(),
            y: y.into(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Init { .. } => "init",
            Self::Sweep { .. } => "sweep",
        }
    }

    /// Query-string form, as used by HTTP `GET` front ends. Values are form-urlencoded.
    pub fn to_query(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::from("?"));
        query.append_pair("request", self.kind());
        match self {
            Self::Init {
                userid,
                size,
                mines,
            } => query
                .append_pair("userid", userid)
                .append_pair("size", &size.to_string())
                .append_pair("mines", &mines.to_string()),
            Self::Sweep { token, x, y } => query
                .append_pair("token", token)
                .append_pair("x", &x.to_string())
                .append_pair("y", &y.to_string()),
        };
        query.finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response {
    Init { token: String },
    Sweep(SweepReply),
    Error { code: ErrorCode, message: String },
}

impl Response {
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Error {
            code,
            message: message.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireCoords {
    pub x: Coord,
    pub y: Coord,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireCell {
    pub x: Coord,
    pub y: Coord,
    pub mines_around: u8,
}

/// Result of a sweep as it travels over the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepReply {
    pub minehit: bool,
    #[serde(rename = "minesAround")]
    pub mines_around: u8,
    #[serde(rename = "emptyCells", default)]
    pub empty_cells: Vec<WireCell>,
    pub userwins: bool,
    #[serde(default)]
    pub mines: Vec<WireCoords>,
}

impl From<RevealResult> for SweepReply {
    fn from(result: RevealResult) -> Self {
        Self {
            minehit: result.mine_hit,
            mines_around: result.mines_around,
            empty_cells: result
                .uncovered_batch
                .into_iter()
                .map(|cell| WireCell {
                    x: cell.x,
                    y: cell.y,
                    mines_around: cell.mines_around,
                })
                .collect(),
            userwins: result.won,
            mines: result
                .mine_locations
                .into_iter()
                .map(|(x, y)| WireCoords { x, y })
                .collect(),
        }
    }
}

impl From<SweepReply> for RevealResult {
    fn from(reply: SweepReply) -> Self {
        Self {
            mine_hit: reply.minehit,
            mines_around: reply.mines_around,
            uncovered_batch: reply
                .empty_cells
                .into_iter()
                .map(|cell| UncoveredCell::new((cell.x, cell.y), cell.mines_around))
                .collect(),
            won: reply.userwins,
            mine_locations: reply.mines.into_iter().map(|m| (m.x, m.y)).collect(),
        }
    }
}

/// Error kinds reported by the authority, the game ones mirror [`GameError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidConfiguration,
    OutOfBounds,
    GameAlreadyOver,
    AlreadyPlaced,
    NoSession,
    UnknownToken,
    MalformedRequest,
}

impl ErrorCode {
    pub const fn as_game_error(self) -> Option<GameError> {
        use ErrorCode::*;
        match self {
            InvalidConfiguration => Some(GameError::InvalidConfiguration),
            OutOfBounds => Some(GameError::OutOfBounds),
            GameAlreadyOver => Some(GameError::GameAlreadyOver),
            AlreadyPlaced => Some(GameError::AlreadyPlaced),
            NoSession => Some(GameError::NoSession),
            UnknownToken => None,
            MalformedRequest => None,
        }
    }
}

impl From<GameError> for ErrorCode {
    fn from(err: GameError) -> Self {
        match err {
            GameError::InvalidConfiguration => Self::InvalidConfiguration,
            GameError::OutOfBounds => Self::OutOfBounds,
            GameError::GameAlreadyOver => Self::GameAlreadyOver,
            GameError::AlreadyPlaced => Self::AlreadyPlaced,
            GameError::NoSession => Self::NoSession,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn requests_are_tagged() {
        let config = GameConfig::new(9, 10).unwrap();
        let value = serde_json::to_value(Request::init("ensuit00", config)).unwrap();

        assert_eq!(
            value,
            json!({"request": "init", "userid": "ensuit00", "size": 9, "mines": 10})
        );
    }

    #[test]
    fn query_strings() {
        let config = GameConfig::new(16, 40).unwrap();

        assert_eq!(
            Request::init("ensuit00", config).to_query(),
            "?request=init&userid=ensuit00&size=16&mines=40"
        );
        assert_eq!(
            Request::sweep("abc", (3, 7)).to_query(),
            "?request=sweep&token=abc&x=3&y=7"
        );
    }

    #[test]
    fn query_values_are_escaped() {
        let config = GameConfig::new(9, 10).unwrap();

        let query = Request::init("eve&size=200&mines=0 #x", config).to_query();

        assert_eq!(query.matches("size=").count(), 1);
        assert_eq!(query.matches("mines=").count(), 1);
        let pairs: Vec<(String, String)> = form_urlencoded::parse(&query.as_bytes()[1..])
            .into_owned()
            .collect();
        assert_eq!(
            pairs,
            [
                ("request".to_string(), "init".to_string()),
                ("userid".to_string(), "eve&size=200&mines=0 #x".to_string()),
                ("size".to_string(), "9".to_string()),
                ("mines".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn sweep_reply_uses_wire_field_names() {
        let result = RevealResult {
            mine_hit: false,
            mines_around: 0,
            uncovered_batch: vec![UncoveredCell::new((1, 2), 0), UncoveredCell::new((2, 2), 1)],
            won: true,
            mine_locations: vec![],
        };

        let value = serde_json::to_value(Response::Sweep(result.into())).unwrap();

        assert_eq!(
            value,
            json!({
                "status": "sweep",
                "minehit": false,
                "minesAround": 0,
                "emptyCells": [
                    {"x": 1, "y": 2, "minesAround": 0},
                    {"x": 2, "y": 2, "minesAround": 1}
                ],
                "userwins": true,
                "mines": []
            })
        );
    }

    #[test]
    fn sweep_reply_tolerates_missing_lists() {
        let response: Response = serde_json::from_value(json!({
            "status": "sweep",
            "minehit": true,
            "minesAround": 0,
            "userwins": false,
            "mines": [{"x": 0, "y": 0}]
        }))
        .unwrap();

        let Response::Sweep(reply) = response else {
            panic!("expected a sweep reply");
        };
        let result = RevealResult::from(reply);
        assert!(result.mine_hit);
        assert!(result.uncovered_batch.is_empty());
        assert_eq!(result.mine_locations, [(0, 0)]);
    }

    #[test]
    fn game_error_codes_round_trip() {
        for err in [
            GameError::InvalidConfiguration,
            GameError::OutOfBounds,
            GameError::GameAlreadyOver,
            GameError::AlreadyPlaced,
            GameError::NoSession,
        ] {
            assert_eq!(ErrorCode::from(err).as_game_error(), Some(err));
        }
        assert_eq!(ErrorCode::UnknownToken.as_game_error(), None);
    }
}
