//! マス（Square）
//!
//! 8×8 盤面の座標。row / col とも 0..8 に収まることを型の不変条件とし、
//! 生成は `new` と `offset` の境界チェック経由に限る。

use std::fmt;

/// 盤面サイズ（一辺）
pub const BOARD_SIZE: u8 = 8;

/// 盤上のマス（row, col とも 0..8）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// 盤内座標から生成。盤外なら None
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square { row, col })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// row-major のフラットインデックス（0..64）
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// 方向 (dr, dc) へ1歩進める。盤外に出るなら None
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let r = self.row as i8 + dr;
        let c = self.col as i8 + dc;
        if r >= 0 && r < BOARD_SIZE as i8 && c >= 0 && c < BOARD_SIZE as i8 {
            Some(Square { row: r as u8, col: c as u8 })
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
