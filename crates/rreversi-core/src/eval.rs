//! 局面評価
//!
//! 位置重み（角・角隣接・辺・中央）と石数差による静的評価。
//! 中央ボーナスは序中盤（turn < 20）のみ、石数差は終盤（turn > 20）のみ
//! 有効で、序盤は位置、終盤は物量を優先する段階切替になっている。

use crate::board::Board;
use crate::types::{Color, Square};

/// 評価の段階切替となる手数しきい値
pub const PHASE_TURN: u32 = 20;

/// 位置評価の重みテーブル
///
/// プロセス全体で共有する可変状態にはしない。構築後は不変の設定値として
/// 評価・探索へ値渡し（参照渡し）する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    /// 角。安定石の起点になるため大きなボーナス
    pub corner: i32,
    /// 角に隣接するマス（X打ち・C打ち）。相手に角を献上しやすいため大きなペナルティ
    pub corner_adjacent: i32,
    /// 角・角隣接を除く辺のマス。安定石候補として中程度のボーナス
    pub edge: i32,
    /// 中央 2×2。序中盤の展開力として中程度のボーナス
    pub center: i32,
    /// 石数差1つあたりの重み（終盤のみ）
    pub piece_diff: i32,
}

impl Default for Weights {
    fn default() -> Weights {
        Weights {
            corner: 50_000,
            corner_adjacent: 50_000,
            edge: 50,
            center: 50,
            piece_diff: 30,
        }
    }
}

const fn sq(row: u8, col: u8) -> Square {
    match Square::new(row, col) {
        Some(sq) => sq,
        None => panic!("square table entry out of bounds"),
    }
}

/// 四隅
const CORNERS: [Square; 4] = [sq(0, 0), sq(0, 7), sq(7, 0), sq(7, 7)];

/// 角に隣接する12マス（角自身は含まない）
const CORNER_ADJACENT: [Square; 12] = [
    sq(0, 1), sq(1, 0), sq(1, 1),
    sq(0, 6), sq(1, 6), sq(1, 7),
    sq(6, 0), sq(6, 1), sq(7, 1),
    sq(6, 6), sq(6, 7), sq(7, 6),
];

/// 角・角隣接を除く辺の16マス（明示列挙）
const EDGES: [Square; 16] = [
    sq(0, 2), sq(0, 3), sq(0, 4), sq(0, 5),
    sq(2, 7), sq(3, 7), sq(4, 7), sq(5, 7),
    sq(7, 2), sq(7, 3), sq(7, 4), sq(7, 5),
    sq(2, 0), sq(3, 0), sq(4, 0), sq(5, 0),
];

/// 中央 2×2
const CENTER: [Square; 4] = [sq(3, 3), sq(3, 4), sq(4, 3), sq(4, 4)];

/// `persp` 視点の生スコアを求め、`root` 視点の符号へ正規化して返す
///
/// 返り値は常に「正なら root 有利・負なら相手有利」。root と persp が
/// 異なるノードでは生スコアを符号反転する。この符号規約が minimax の
/// max / min 分岐の正しさを支えている。
pub fn evaluate(board: &Board, weights: &Weights, root: Color, persp: Color, turn: u32) -> i32 {
    let own = persp.cell();
    let mut score = 0;

    for &corner in &CORNERS {
        if board.get(corner) == own {
            score += weights.corner;
        }
    }

    for &adj in &CORNER_ADJACENT {
        if board.get(adj) == own {
            score -= weights.corner_adjacent;
        }
    }

    for &edge in &EDGES {
        if board.get(edge) == own {
            score += weights.edge;
        }
    }

    if turn < PHASE_TURN {
        for &center in &CENTER {
            if board.get(center) == own {
                score += weights.center;
            }
        }
    }

    if turn > PHASE_TURN {
        let own_pieces = board.count(persp) as i32;
        let enemy_pieces = board.count(persp.opponent()) as i32;
        score += (own_pieces - enemy_pieces) * weights.piece_diff;
    }

    if root == persp { score } else { -score }
}
