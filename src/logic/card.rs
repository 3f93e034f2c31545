// src/logic/card.rs

/// カード1枚の状態を表す列挙型だよ！🃏
///
/// #[derive(...)] のおまじないも忘れずに！
/// - Debug: デバッグ表示用 (`println!("{:?}", state);`)
/// - Clone, Copy: 簡単にコピーできるように
/// - PartialEq, Eq: 等しいか比較できるように (`==`)
///
/// 状態遷移はこれだけ！
/// - `FaceDown -> FaceUp` (めくった時)
/// - `FaceUp -> FaceDown` (ペアが揃わなかった時)
/// - `FaceUp -> Matched` (ペアが揃った時。ここが終点！もう戻らない！)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    /// 裏向き。絵柄は見えない状態。
    FaceDown,
    /// 表向き。絵柄が見えてるけど、まだペア判定待ち。
    FaceUp,
    /// ペア成立済み！もうクリックしても何も起きないよ。
    Matched,
}

/// 盤面に置かれるカードそのものを表す構造体だよ！
///
/// - `symbol`: カードの絵柄 (カタログの絵文字)。build 時に決まって以後不変！
/// - `state`: 今の状態 (裏向き / 表向き / ペア成立済み)
///
/// Copy は付けてないよ。カードの状態はゲーム中に変わるからね。
#[derive(Debug, Clone, PartialEq)]
pub struct BoardCard {
    pub symbol: &'static str,
    pub state: CardState,
}

impl BoardCard {
    /// 裏向きの新しいカードを作るよ。build 時はみんなここから！
    pub fn face_down(symbol: &'static str) -> Self {
        Self {
            symbol,
            state: CardState::FaceDown,
        }
    }

    /// ペア成立済みかどうか。Matched は終端状態！
    pub fn is_matched(&self) -> bool {
        self.state == CardState::Matched
    }
}
