//! Request loop against the game server.
//!
//! The server drives the session: it sends a board snapshot whenever it is
//! our turn and closes the connection when the game is over. We answer each
//! snapshot with exactly one move. Precondition violations (malformed board,
//! unknown player id, a request with no legal move available) abort the
//! session with an error rather than sending a made-up move.

use std::io::{Read, Write};
use std::net::TcpStream;

use anyhow::{Context, Result, bail};
use log::{debug, info};

use rreversi_core::{Board, Color, Searcher};

use crate::protocol::{encode_move, parse_request};

const READ_BUF_SIZE: usize = 4096;

pub fn run(mut stream: TcpStream) -> Result<()> {
    let searcher = Searcher::default();
    let mut buf = [0u8; READ_BUF_SIZE];
    // The server advances the game by two plies (ours and the opponent's)
    // between our requests.
    let mut turn: u32 = 0;

    loop {
        let n = stream.read(&mut buf).context("read from server")?;
        if n == 0 {
            info!("connection closed by server");
            return Ok(());
        }

        let request = parse_request(&buf[..n])?;
        let player = match Color::from_wire(request.player) {
            Some(player) => player,
            None => bail!("invalid player id {} in request", request.player),
        };
        let mut board = Board::from_wire(&request.board).context("invalid board in request")?;

        debug!(
            "turn {turn}: player={} budget={}ms",
            request.player, request.max_turn_time
        );
        let outcome = searcher.choose_move(&mut board, player, turn);
        let Some(mv) = outcome.best_move else {
            bail!("no legal move for player {} at turn {turn}", request.player);
        };
        info!("turn {turn}: playing {mv} (score {}, {} nodes)", outcome.score, outcome.nodes);

        stream
            .write_all(encode_move(mv).as_bytes())
            .and_then(|_| stream.flush())
            .context("send move to server")?;
        turn += 2;
    }
}
