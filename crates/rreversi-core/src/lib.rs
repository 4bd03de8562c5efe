//! リバーシ（オセロ）探索エンジンのコアライブラリ
//!
//! 盤面モデル・合法手生成・局面評価・Alpha-Beta探索を提供する。
//! 通信やメッセージの符号化はこの crate の責務ではない（rreversi-client 側）。

pub mod board;
pub mod eval;
pub mod movegen;
pub mod search;
pub mod types;

pub use board::{Board, BoardError, Cell};
pub use eval::{Weights, evaluate};
pub use movegen::{captures_for, valid_moves};
pub use search::{SearchOutcome, Searcher};
pub use types::{Color, Square};
