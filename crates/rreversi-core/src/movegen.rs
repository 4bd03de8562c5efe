//! 合法手生成
//!
//! 着手候補マスから8方向へ走査し、挟んだ相手石（反転対象）を求める。
//! 反転対象が1つでもあれば合法手。列挙は row-major の固定順で行い、
//! 探索側の「最初に見つかった最善手を採る」タイブレークを再現可能にする。

use smallvec::SmallVec;

use crate::board::{Board, Cell};
use crate::types::{Color, Square};

/// 8方向の走査順（固定）
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// 1手あたりの反転石は最大18（6石×3方向が上限に近い）
pub type CaptureList = SmallVec<[Square; 18]>;

/// 着手 `mv` で反転する相手石の集合を返す
///
/// 着手先が空マスでなければ空集合（非合法）。各方向について、相手石が
/// 連続する間進み、自分の石で挟み止められた場合のみ、通過した相手石を
/// すべて反転対象に加える。盤外・空マスで途切れた方向は寄与しない。
pub fn captures_for(board: &Board, us: Color, mv: Square) -> CaptureList {
    let mut captures = CaptureList::new();
    if board.get(mv) != Cell::Empty {
        return captures;
    }

    let own = us.cell();
    let enemy = us.opponent().cell();

    for &(dr, dc) in &DIRECTIONS {
        let mut run: SmallVec<[Square; 6]> = SmallVec::new();
        let mut cursor = mv.offset(dr, dc);
        while let Some(sq) = cursor {
            match board.get(sq) {
                cell if cell == enemy => {
                    run.push(sq);
                    cursor = sq.offset(dr, dc);
                }
                cell if cell == own => {
                    // 挟み込み成立。この方向の相手石をすべて反転対象へ
                    captures.extend_from_slice(&run);
                    break;
                }
                _ => break, // 空マスで途切れた
            }
        }
    }

    captures
}

/// `us` の合法手を row-major 順で列挙する
pub fn valid_moves(board: &Board, us: Color) -> Vec<Square> {
    let mut moves = Vec::new();
    for row in 0..8 {
        for col in 0..8 {
            let sq = Square::new(row, col).expect("row/col in 0..8");
            if !captures_for(board, us, sq).is_empty() {
                moves.push(sq);
            }
        }
    }
    moves
}
