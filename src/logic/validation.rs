// src/logic/validation.rs
//! Game Controller の事前条件チェックだよ。
//! ユーザーに見せるエラーはここの `ConfigError` 1種類だけ！

use crate::config::game::{MAX_CARD_COUNT, MIN_CARD_COUNT};
use std::fmt;

/// 盤面設定が不正だった時のエラー。ブロッキングな通知 (alert) として
/// そのままユーザーに見せる。盤面は作られず、前のセッションは無傷のまま！
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// 奇数が来た。ペアが組めない！
    NotEven(usize),
    /// 小さすぎ or カタログの上限 (16種類 × 2枚 = 32) を超えてる。
    OutOfRange(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotEven(_) => {
                write!(f, "Card count must be an even number (e.g., 8, 12, 16).")
            }
            ConfigError::OutOfRange(count) => {
                write!(
                    f,
                    "Card count {} is out of range (must be between {} and {}).",
                    count, MIN_CARD_COUNT, MAX_CARD_COUNT
                )
            }
        }
    }
}

/// 要求されたカード枚数を検証するよ。
///
/// OK なら検証済みの枚数をそのまま返す。NG なら `ConfigError`。
/// 0 や範囲外は `OutOfRange`、範囲内の奇数は `NotEven`。
pub fn validate_card_count(count: usize) -> Result<usize, ConfigError> {
    if count < MIN_CARD_COUNT || count > MAX_CARD_COUNT {
        return Err(ConfigError::OutOfRange(count));
    }
    if count % 2 != 0 {
        return Err(ConfigError::NotEven(count));
    }
    Ok(count)
}
