use minefield_core::{CellCount, Coord, GameConfig, GameError, GameSession};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{ErrorCode, Request, Response};

/// Why a request was turned down, sent back as [`Response::Error`].
#[derive(Clone, Debug, PartialEq, Eq)]
struct Rejection {
    code: ErrorCode,
    message: String,
}

impl Rejection {
    fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<GameError> for Rejection {
    fn from(err: GameError) -> Self {
        Self::new(err.into(), err.to_string())
    }
}

#[derive(Clone, Debug)]
struct HostedSession {
    token: String,
    session: GameSession,
}

/// Answers remote requests by running the engine locally.
///
/// Only one game is hosted at a time, each `init` replaces it and hands out a fresh token so that
/// requests for the old game are refused.
#[derive(Clone, Debug)]
pub struct Authority {
    rng: SmallRng,
    hosted: Option<HostedSession>,
}

impl Authority {
    /// Sessions and tokens are drawn from a generator seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            hosted: None,
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
            hosted: None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.hosted.as_ref().map(|hosted| hosted.token.as_str())
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.hosted.as_ref().map(|hosted| &hosted.session)
    }

    pub fn handle(&mut self, request: &Request) -> Response {
        log::debug!("Handling {} request", request.kind());
        match self.try_handle(request) {
            Ok(response) => response,
            Err(Rejection { code, message }) => {
                log::warn!("Rejected {} request: {:?}", request.kind(), code);
                Response::error(code, message)
            }
        }
    }

    /// Decodes a JSON request, handles it and encodes the response.
    pub fn handle_json(&mut self, body: &str) -> String {
        let response = match serde_json::from_str::<Request>(body) {
            Ok(request) => self.handle(&request),
            Err(err) => {
                log::warn!("Malformed request: {}", err);
                Response::error(ErrorCode::MalformedRequest, err.to_string())
            }
        };

        serde_json::to_string(&response).unwrap_or_else(|err| {
            log::error!("Could not encode response: {}", err);
            r#"{"status":"error","code":"malformed_request","message":"response encoding failed"}"#
                .to_string()
        })
    }

    fn try_handle(&mut self, request: &Request) -> Result<Response, Rejection> {
        match request {
            Request::Init {
                userid,
                size,
                mines,
            } => {
                let size =
                    Coord::try_from(*size).map_err(|_| GameError::InvalidConfiguration)?;
                let mines =
                    CellCount::try_from(*mines).map_err(|_| GameError::InvalidConfiguration)?;
                let config = GameConfig::new(size, mines)?;

                let seed = self.rng.random();
                let token = format!("{:016x}", self.rng.random::<u64>());
                log::debug!(
                    "User {} started a {}x{} game with {} mines",
                    userid,
                    size,
                    size,
                    mines
                );
                self.hosted = Some(HostedSession {
                    token: token.clone(),
                    session: GameSession::new(config, seed),
                });
                Ok(Response::Init { token })
            }
            Request::Sweep { token, x, y } => {
                let hosted = self.hosted.as_mut().ok_or(GameError::NoSession)?;
                if hosted.token != *token {
                    return Err(Rejection::new(
                        ErrorCode::UnknownToken,
                        "Unknown or expired token",
                    ));
                }
                let x = Coord::try_from(*x).map_err(|_| GameError::OutOfBounds)?;
                let y = Coord::try_from(*y).map_err(|_| GameError::OutOfBounds)?;

                let result = hosted.session.reveal((x, y))?;
                Ok(Response::Sweep(result.into()))
            }
        }
    }
}
