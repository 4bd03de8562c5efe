//! Alpha-Beta探索
//!
//! 深さ固定の minimax + alpha-beta 枝刈り。着手は `Board::with_move` で
//! in-place に適用・復元し、盤面バッファは探索全体で1つだけ使う。
//!
//! タイブレークは「現在の最善より厳密に良い手のみ更新」（`>` / `<`）。
//! 同点の候補同士では生成順で先に現れた手が勝つため、`valid_moves` の
//! row-major 順がそのまま観測可能な契約になる。
//!
//! 合法手がない手番は静的評価の葉として扱い、パスで相手番へ回すことは
//! しない。探索深さは固定で、外部から渡される持ち時間は参照しない。

use log::debug;

use crate::board::Board;
use crate::eval::{Weights, evaluate};
use crate::movegen::{captures_for, valid_moves};
use crate::types::{Color, Square};

/// 評価値の番兵（±∞相当）。通常評価の絶対値より十分大きい
pub const SCORE_INF: i32 = 10_000_000;

/// 既定の探索深さ（プライ）
pub const DEFAULT_DEPTH: u8 = 6;

/// 探索結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// 選択した手。合法手が存在すれば必ず Some
    pub best_move: Option<Square>,
    /// root 視点のスコア（診断用）
    pub score: i32,
    /// 訪問ノード数（診断用）
    pub nodes: u64,
}

/// 探索エンジン
#[derive(Debug, Clone, Copy)]
pub struct Searcher {
    depth: u8,
    weights: Weights,
}

impl Default for Searcher {
    fn default() -> Searcher {
        Searcher { depth: DEFAULT_DEPTH, weights: Weights::default() }
    }
}

impl Searcher {
    pub fn new(depth: u8, weights: Weights) -> Searcher {
        Searcher { depth, weights }
    }

    /// `root` の着手を選ぶ
    ///
    /// 盤面は探索中に変更されるが、復帰時には呼び出し前と完全に同一の
    /// 状態へ戻っている。
    pub fn choose_move(&self, board: &mut Board, root: Color, turn: u32) -> SearchOutcome {
        let mut nodes = 0;
        let (best_move, score) = alpha_beta(
            board,
            &self.weights,
            root,
            root,
            self.depth,
            turn,
            -SCORE_INF,
            SCORE_INF,
            &mut nodes,
        );
        debug!("search done: depth={} turn={turn} score={score} nodes={nodes}", self.depth);
        SearchOutcome { best_move, score, nodes }
    }
}

/// minimax + alpha-beta の本体
///
/// `current == root` のノードで最大化、それ以外で最小化する。葉
/// （depth 0 または合法手なし）では手を返さず静的評価のみ返す。
#[allow(clippy::too_many_arguments)]
fn alpha_beta(
    board: &mut Board,
    weights: &Weights,
    root: Color,
    current: Color,
    depth: u8,
    turn: u32,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
) -> (Option<Square>, i32) {
    *nodes += 1;

    let moves = valid_moves(board, current);
    if moves.is_empty() || depth == 0 {
        return (None, evaluate(board, weights, root, current, turn));
    }

    let maximizing = current == root;
    let mut best_move = None;
    let mut best_score = if maximizing { -SCORE_INF } else { SCORE_INF };

    for mv in moves {
        let captures = captures_for(board, current, mv);
        let (_, score) = board.with_move(mv, &captures, current, |b| {
            alpha_beta(b, weights, root, current.opponent(), depth - 1, turn, alpha, beta, nodes)
        });

        if maximizing {
            if score > best_score {
                best_move = Some(mv);
                best_score = score;
            }
            alpha = alpha.max(score);
        } else {
            if score < best_score {
                best_move = Some(mv);
                best_score = score;
            }
            beta = beta.min(score);
        }

        if beta <= alpha {
            break;
        }
    }

    (best_move, best_score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    /// 枝刈りなしの素朴な minimax（同じ厳密比較タイブレーク）
    fn plain_minimax(
        board: &mut Board,
        weights: &Weights,
        root: Color,
        current: Color,
        depth: u8,
        turn: u32,
    ) -> (Option<Square>, i32) {
        let moves = valid_moves(board, current);
        if moves.is_empty() || depth == 0 {
            return (None, evaluate(board, weights, root, current, turn));
        }

        let maximizing = current == root;
        let mut best_move = None;
        let mut best_score = if maximizing { -SCORE_INF } else { SCORE_INF };

        for mv in moves {
            let captures = captures_for(board, current, mv);
            let (_, score) = board.with_move(mv, &captures, current, |b| {
                plain_minimax(b, weights, root, current.opponent(), depth - 1, turn)
            });
            if (maximizing && score > best_score) || (!maximizing && score < best_score) {
                best_move = Some(mv);
                best_score = score;
            }
        }

        (best_move, best_score)
    }

    #[test]
    fn test_depth_zero_leaf_contract() {
        let weights = Weights::default();
        let mut board = Board::initial();
        let mut nodes = 0;
        let (mv, score) = alpha_beta(
            &mut board,
            &weights,
            Color::Black,
            Color::White,
            0,
            5,
            -SCORE_INF,
            SCORE_INF,
            &mut nodes,
        );
        assert_eq!(mv, None);
        assert_eq!(score, evaluate(&board, &weights, Color::Black, Color::White, 5));
        assert_eq!(nodes, 1);
    }

    #[test]
    fn test_no_legal_moves_is_leaf() {
        let weights = Weights::default();
        // 黒石のみの盤面では白に合法手がない
        let mut board = Board::empty();
        board.set(sq(0, 0), Cell::Black);
        board.set(sq(0, 1), Cell::Black);

        let mut nodes = 0;
        let (mv, score) = alpha_beta(
            &mut board,
            &weights,
            Color::White,
            Color::White,
            4,
            0,
            -SCORE_INF,
            SCORE_INF,
            &mut nodes,
        );
        assert_eq!(mv, None);
        assert_eq!(score, evaluate(&board, &weights, Color::White, Color::White, 0));
    }

    #[test]
    fn test_pruning_equivalence_depth2() {
        assert_pruning_equivalence(2);
    }

    #[test]
    fn test_pruning_equivalence_depth3() {
        assert_pruning_equivalence(3);
    }

    fn assert_pruning_equivalence(depth: u8) {
        let weights = Weights::default();
        for (mut board, turn) in [(Board::initial(), 0), (midgame_board(), 8), (midgame_board(), 30)]
        {
            for root in [Color::Black, Color::White] {
                let mut nodes = 0;
                let pruned = alpha_beta(
                    &mut board,
                    &weights,
                    root,
                    root,
                    depth,
                    turn,
                    -SCORE_INF,
                    SCORE_INF,
                    &mut nodes,
                );
                let plain = plain_minimax(&mut board, &weights, root, root, depth, turn);
                assert_eq!(pruned, plain, "depth={depth} root={root:?} turn={turn}");
            }
        }
    }

    #[test]
    fn test_choose_move_restores_board() {
        let mut board = Board::initial();
        let before = board.clone();
        let outcome = Searcher::default().choose_move(&mut board, Color::Black, 0);
        assert!(outcome.best_move.is_some());
        assert_eq!(board, before);
    }

    #[test]
    fn test_choose_move_is_legal_and_deterministic() {
        let mut board = Board::initial();
        let searcher = Searcher::default();
        let first = searcher.choose_move(&mut board, Color::Black, 0);
        let mv = first.best_move.expect("opening position has legal moves");
        assert!(valid_moves(&board, Color::Black).contains(&mv));

        for _ in 0..3 {
            let again = searcher.choose_move(&mut board, Color::Black, 0);
            assert_eq!(again, first);
        }
    }

    #[test]
    fn test_depth_one_greedy_material() {
        // 石数差のみを評価する終盤設定では、深さ1の探索は反転数が
        // 最大の手を選ぶ。列挙順で先に現れる1枚反転の手より、後に
        // 現れる2枚反転の手が厳密に上回ることを確認する
        let weights =
            Weights { corner: 0, corner_adjacent: 0, edge: 0, center: 0, piece_diff: 30 };
        let mut board = Board::empty();
        // (1,2) 打ち: (1,1) の1枚のみ反転
        board.set(sq(1, 0), Cell::Black);
        board.set(sq(1, 1), Cell::White);
        // (6,3) 打ち: (6,1)(6,2) の2枚反転
        board.set(sq(6, 0), Cell::Black);
        board.set(sq(6, 1), Cell::White);
        board.set(sq(6, 2), Cell::White);

        let searcher = Searcher::new(1, weights);
        let outcome = searcher.choose_move(&mut board, Color::Black, 30);
        assert_eq!(outcome.best_move, Some(sq(6, 3)));
    }

    #[test]
    fn test_first_best_tie_break() {
        // 同点の候補が並ぶ局面では row-major で先に現れる手を採る
        let weights = Weights { corner: 0, corner_adjacent: 0, edge: 0, center: 0, piece_diff: 0 };
        let mut board = Board::initial();
        let searcher = Searcher::new(2, weights);
        let outcome = searcher.choose_move(&mut board, Color::Black, 0);
        // 全手同点（スコア0）なので最初の合法手 (2,3)
        assert_eq!(outcome.best_move, Some(sq(2, 3)));
        assert_eq!(outcome.score, 0);
    }

    fn midgame_board() -> Board {
        let mut board = Board::initial();
        board.set(sq(2, 3), Cell::Black);
        board.set(sq(3, 3), Cell::Black);
        board.set(sq(2, 2), Cell::White);
        board.set(sq(2, 4), Cell::White);
        board.set(sq(5, 5), Cell::Black);
        board.set(sq(5, 2), Cell::White);
        board
    }
}
