// src/logic/deck.rs

use crate::logic::card::BoardCard;
use rand::{seq::SliceRandom, thread_rng};

/// 使える絵柄のカタログだよ！全部で16種類！🍎🍐🍒
///
/// 盤面のカード数の上限はここから決まる (16種類 × 2枚 = 32枚)。
pub const CARD_SYMBOLS: [&str; 16] = [
    "🍎", "🍐", "🍒", "🍉", "🍇", "🍓", "🍌", "🍍",
    "🥝", "🥥", "🍑", "🍈", "🍋", "🍊", "🍏", "🍅",
];

/// `count` 枚ぶんの盤面カードを生成する関数だよ！
///
/// カタログの先頭から `count / 2` 種類を選んで、それぞれ2枚ずつ複製して、
/// シャッフルした Vec を返すよ。生成された時点では全部裏向き！
///
/// # 引数
/// * `count` - 盤面のカード総数。偶数で、カタログ上限 (32) 以内であること。
///   検証は呼び出し側 (`validation::validate_card_count`) の仕事ね。
pub fn build_pairs(count: usize) -> Vec<BoardCard> {
    let pair_count = count / 2;
    let mut cards = Vec::with_capacity(count); // 入る容量を確保しておくと効率的！

    for &symbol in CARD_SYMBOLS.iter().take(pair_count) {
        // 同じ絵柄を2枚ずつ！これがペアの素。
        cards.push(BoardCard::face_down(symbol));
        cards.push(BoardCard::face_down(symbol));
    }

    shuffle_cards(&mut cards);
    cards // 完成した盤面カードを返す！
}

/// 盤面カードをシャッフルする関数だよ。
///
/// `SliceRandom::shuffle` は中身が Fisher–Yates なので、
/// 出てくる並びは一様ランダムな順列になるよ。
///
/// # 引数
/// * `cards` - シャッフルしたいカード列 (`Vec<BoardCard>`) への可変参照。
pub fn shuffle_cards(cards: &mut Vec<BoardCard>) {
    let mut rng = thread_rng(); // 乱数生成器を取得
    cards.shuffle(&mut rng); // シャッフル！
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::card::CardState;
    use std::collections::HashMap;

    #[test]
    fn pairs_creation() {
        let cards = build_pairs(16);

        // 1. カードが16枚あるかチェック！
        assert_eq!(cards.len(), 16);
        println!("生成された盤面の枚数: {}", cards.len());

        // 2. 各絵柄がちょうど2枚ずつかチェック！ (ここが一番大事！)
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for card in &cards {
            *counts.entry(card.symbol).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 8, "絵柄の種類数が count/2 じゃない！");
        for (symbol, n) in &counts {
            assert_eq!(*n, 2, "絵柄 {} が2枚ちょうどじゃない！", symbol);
        }

        // 3. すべてのカードが裏向きかチェック！
        let all_face_down = cards.iter().all(|card| card.state == CardState::FaceDown);
        assert!(all_face_down, "盤面に裏向きじゃないカードが含まれています！");

        println!("build_pairs 関数のテスト、成功！🎉 盤面は正しく生成されました！");
    }

    #[test]
    fn test_pairs_every_valid_count() {
        // 有効な偶数カウント全部で、枚数と「各絵柄ちょうど2枚」を確認！
        for count in (2..=32).step_by(2) {
            let cards = build_pairs(count);
            assert_eq!(cards.len(), count, "count={} で枚数が合わない！", count);

            let mut counts: HashMap<&str, usize> = HashMap::new();
            for card in &cards {
                *counts.entry(card.symbol).or_insert(0) += 1;
            }
            assert_eq!(counts.len(), count / 2);
            assert!(counts.values().all(|&n| n == 2));
        }
    }

    #[test]
    fn test_shuffle_changes_order() {
        let mut sorted: Vec<BoardCard> = Vec::new();
        for &symbol in CARD_SYMBOLS.iter() {
            sorted.push(BoardCard::face_down(symbol));
            sorted.push(BoardCard::face_down(symbol));
        }
        let initial = sorted.clone();
        shuffle_cards(&mut sorted);

        // シャッフルしたら元の順番とは (ほぼ確実に) 変わるはず
        // ただし、ごく稀に同じ順番になる可能性もあるので、完全なテストではない
        assert_ne!(initial, sorted, "シャッフルしても順番が変わってない (稀に起こりうる)");
        // サイズは変わらないはず
        assert_eq!(initial.len(), sorted.len(), "シャッフルでカード数が変わった！");
    }

    #[test]
    fn test_catalog_has_16_unique_symbols() {
        let mut seen = std::collections::HashSet::new();
        for &symbol in CARD_SYMBOLS.iter() {
            assert!(seen.insert(symbol), "カタログに重複絵柄あり！: {}", symbol);
        }
        assert_eq!(seen.len(), 16);
    }
}
