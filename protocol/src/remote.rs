use minefield_core::{Coord2, GameConfig, GameError, GameLogic, RevealResult};

use crate::{Authority, ProtocolError, Request, Response, Result};

/// Carries one encoded request to the authority and brings back its encoded response.
///
/// This is the only place where the game may wait on something outside the process.
pub trait Transport {
    fn round_trip(&mut self, body: &str) -> Result<String>;
}

/// Delegates every operation to a remote authority.
///
/// Game errors reported by the authority come back as [`ProtocolError::Game`], so callers see the
/// same failures as with the in-process engine.
#[derive(Clone, Debug)]
pub struct RemoteLogic<T> {
    transport: T,
    userid: String,
    token: Option<String>,
}

impl<T: Transport> RemoteLogic<T> {
    pub fn new(transport: T, userid: impl Into<String>) -> Self {
        Self {
            transport,
            userid: userid.into(),
            token: None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn exchange(&mut self, request: &Request) -> Result<Response> {
        let body = serde_json::to_string(request)?;
        log::debug!("Sending {} request", request.kind());
        let reply = self.transport.round_trip(&body)?;

        match serde_json::from_str::<Response>(&reply)? {
            Response::Error { code, message } => Err(match code.as_game_error() {
                Some(err) => err.into(),
                None => ProtocolError::Remote { code, message },
            }),
            response => Ok(response),
        }
    }
}

impl<T: Transport> GameLogic for RemoteLogic<T> {
    type Error = ProtocolError;

    fn init(&mut self, config: GameConfig) -> Result<()> {
        self.token = None;
        let request = Request::init(self.userid.as_str(), config);
        match self.exchange(&request)? {
            Response::Init { token } => {
                log::debug!("Remote session token: {}", token);
                self.token = Some(token);
                Ok(())
            }
            _ => Err(ProtocolError::UnexpectedResponse("init")),
        }
    }

    fn sweep(&mut self, coords: Coord2) -> Result<RevealResult> {
        let token = self.token.clone().ok_or(GameError::NoSession)?;
        let request = Request::sweep(token, coords);
        match self.exchange(&request)? {
            Response::Sweep(reply) => Ok(reply.into()),
            _ => Err(ProtocolError::UnexpectedResponse("sweep")),
        }
    }
}

/// In-process transport that hands requests straight to an [`Authority`].
#[derive(Clone, Debug)]
pub struct Loopback {
    authority: Authority,
}

impl Loopback {
    pub fn new(authority: Authority) -> Self {
        Self { authority }
    }

    pub fn authority(&self) -> &Authority {
        &self.authority
    }
}

impl Transport for Loopback {
    fn round_trip(&mut self, body: &str) -> Result<String> {
        Ok(self.authority.handle_json(body))
    }
}
