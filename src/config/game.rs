// src/config/game.rs
//! ゲームの挙動に関する定数を定義するよ！
//! 枚数の範囲、遅延時間、タイマー間隔など。

use crate::logic::deck::CARD_SYMBOLS;

pub const MIN_CARD_COUNT: usize = 2; // 最低1ペアは必要
pub const MAX_CARD_COUNT: usize = CARD_SYMBOLS.len() * 2; // カタログ16種類 × 2枚 = 32
pub const DEFAULT_CARD_COUNT: usize = 16; // セレクトが読めなかった時の初期盤面

pub const MISMATCH_REVERT_DELAY_MS: i32 = 900; // ミスマッチ2枚を裏に戻すまでの表示時間
pub const WIN_NOTICE_DELAY_MS: i32 = 250; // 最後のペアの見た目が出てから勝利通知まで
pub const TIMER_INTERVAL_MS: i32 = 1_000; // 経過タイマーは1秒刻み

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_follow_catalog() {
        // 上限はカタログから導出される。手書きの 32 とズレてたら事故！
        assert_eq!(MAX_CARD_COUNT, 32);
        assert!(MIN_CARD_COUNT % 2 == 0);
        assert!(DEFAULT_CARD_COUNT % 2 == 0);
        assert!(DEFAULT_CARD_COUNT >= MIN_CARD_COUNT);
        assert!(DEFAULT_CARD_COUNT <= MAX_CARD_COUNT);
    }
}
