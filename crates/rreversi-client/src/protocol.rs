//! Wire messages exchanged with the game server.
//!
//! The server frames one JSON object per send; a single read therefore
//! yields exactly one request. Replies are a two-element coordinate list
//! terminated by a newline, e.g. `[2, 3]\n`.

use anyhow::{Context, Result};
use serde::Deserialize;

use rreversi_core::Square;

/// One turn request from the server.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MoveRequest {
    /// 8 rows x 8 columns, cells 0 = empty, 1 / 2 = the two players.
    pub board: Vec<Vec<u8>>,
    /// Turn-time budget in milliseconds. Decoded and logged, but the
    /// engine searches at a fixed depth and does not consult it.
    #[serde(rename = "maxTurnTime")]
    pub max_turn_time: u64,
    /// Side to move: 1 or 2.
    pub player: u8,
}

/// Decode a single request out of one received buffer.
pub fn parse_request(data: &[u8]) -> Result<MoveRequest> {
    serde_json::from_slice(data).context("malformed request from server")
}

/// Encode the chosen move as `[row, col]` (with a space), newline-terminated.
pub fn encode_move(mv: Square) -> String {
    format!("[{}, {}]\n", mv.row(), mv.col())
}
