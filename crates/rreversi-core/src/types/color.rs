//! 手番（Color）

/// 手番（黒/白）
///
/// ワイヤ表現ではそれぞれ 1 / 2 に対応する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Color {
    /// 手番の数
    pub const NUM: usize = 2;

    /// 相手番を返す
    #[inline]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// インデックスとして使用（配列アクセス用）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// ワイヤ表現（1 = 黒, 2 = 白）から変換
    #[inline]
    pub const fn from_wire(v: u8) -> Option<Color> {
        match v {
            1 => Some(Color::Black),
            2 => Some(Color::White),
            _ => None,
        }
    }

    /// ワイヤ表現へ変換
    #[inline]
    pub const fn to_wire(self) -> u8 {
        match self {
            Color::Black => 1,
            Color::White => 2,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.opponent()
    }
}
