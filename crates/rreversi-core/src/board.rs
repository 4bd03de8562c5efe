//! 盤面モデル（Board / Cell）
//!
//! 8×8 のセルグリッド。探索中は唯一の盤面バッファを in-place で
//! 着手・復元する（`with_move`）。コピーは行わない。

use thiserror::Error;

use crate::types::{Color, Square};

/// セルの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Cell {
    Empty = 0,
    Black = 1,
    White = 2,
}

impl Cell {
    /// ワイヤ表現（0 = 空, 1 = 黒, 2 = 白）から変換
    #[inline]
    pub const fn from_wire(v: u8) -> Option<Cell> {
        match v {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Black),
            2 => Some(Cell::White),
            _ => None,
        }
    }
}

impl Color {
    /// この手番の石に対応するセル値
    #[inline]
    pub const fn cell(self) -> Cell {
        match self {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// 盤面スナップショットの前提条件違反
///
/// 境界層（アダプタ）がワイヤ入力を検証するときに返す。コア探索は
/// 整形済みの盤面のみを前提とし、修復は行わない。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board must have 8 rows, got {rows}")]
    Shape { rows: usize },
    #[error("row {row} must have 8 columns, got {len}")]
    RowLength { row: usize, len: usize },
    #[error("cell ({row}, {col}) has invalid value {value} (expected 0, 1 or 2)")]
    Cell { row: usize, col: usize, value: u8 },
}

/// 8×8 盤面
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; 8]; 8],
}

impl Board {
    /// 全マス空の盤面
    pub const fn empty() -> Board {
        Board { cells: [[Cell::Empty; 8]; 8] }
    }

    /// 標準の初期配置
    ///
    /// (3,3)/(4,4) が白、(3,4)/(4,3) が黒。
    pub fn initial() -> Board {
        let mut board = Board::empty();
        board.cells[3][3] = Cell::White;
        board.cells[3][4] = Cell::Black;
        board.cells[4][3] = Cell::Black;
        board.cells[4][4] = Cell::White;
        board
    }

    /// ワイヤ表現（8行×8列の 0/1/2）から変換。形状・値を検証する
    pub fn from_wire(rows: &[Vec<u8>]) -> Result<Board, BoardError> {
        if rows.len() != 8 {
            return Err(BoardError::Shape { rows: rows.len() });
        }
        let mut board = Board::empty();
        for (r, row) in rows.iter().enumerate() {
            if row.len() != 8 {
                return Err(BoardError::RowLength { row: r, len: row.len() });
            }
            for (c, &v) in row.iter().enumerate() {
                board.cells[r][c] = Cell::from_wire(v)
                    .ok_or(BoardError::Cell { row: r, col: c, value: v })?;
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn get(&self, sq: Square) -> Cell {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    #[inline]
    pub fn set(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.row() as usize][sq.col() as usize] = cell;
    }

    /// 指定手番の石数
    pub fn count(&self, us: Color) -> u32 {
        let target = us.cell();
        let mut n = 0;
        for row in &self.cells {
            for &cell in row {
                if cell == target {
                    n += 1;
                }
            }
        }
        n
    }

    /// 着手を適用してクロージャを実行し、復帰時に必ず元の状態へ戻す
    ///
    /// `mv` に `us` の石を置き、`captures` の各マスを `us` に反転してから
    /// `f` を実行する。`f` の完了後、`captures` を相手側へ戻し `mv` を
    /// 空マスへ戻す。兄弟分岐が部分的に変更された盤面を観測しないことを
    /// 構造的に保証するため、探索の再帰はすべてこの経路を通すこと。
    pub fn with_move<T>(
        &mut self,
        mv: Square,
        captures: &[Square],
        us: Color,
        f: impl FnOnce(&mut Board) -> T,
    ) -> T {
        debug_assert_eq!(self.get(mv), Cell::Empty);
        let own = us.cell();
        let enemy = us.opponent().cell();
        self.set(mv, own);
        for &sq in captures {
            debug_assert_eq!(self.get(sq), enemy);
            self.set(sq, own);
        }
        let out = f(self);
        for &sq in captures {
            self.set(sq, enemy);
        }
        self.set(mv, Cell::Empty);
        out
    }
}
