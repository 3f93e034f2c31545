// src/logic/session.rs
//! 1プレイぶんのゲーム状態 (セッション) と、めくり/ペア判定のステートマシンだよ！
//!
//! ここはブラウザに一切依存しない純ロジック。DOM 更新やタイマーの
//! スケジューリングは `app` 側の仕事で、こっちは「何が起きたか」を
//! `FlipEvent` で返すだけ！だからホスト側で普通に `cargo test` できる！✨

use crate::logic::card::{BoardCard, CardState};

/// `Session::flip` の結果として「何が起きたか」を伝える列挙型だよ！
///
/// `app` 側はこれを見て DOM を更新したり、900ms 後の裏返しを
/// スケジュールしたりする。インデックスは盤面上のカード位置。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// 無効な操作だったので何も起きなかった (ロック中、選択済みカードの再クリック、
    /// Matched 済みカード、ゲーム終了後、範囲外インデックス)。静かに無視！
    Ignored,
    /// 1枚目として表向きになった。2枚目待ち。
    Revealed { index: usize },
    /// 2枚目でペア成立！両方 Matched (終端) になったよ。
    /// `won` が true なら全ペア発見でゲームクリア！🏆
    Matched {
        first: usize,
        second: usize,
        won: bool,
    },
    /// 2枚目だけど絵柄が違った…。両方まだ表向きのままで、盤面はロック中。
    /// 遅延後に `resolve_mismatch` を呼んで裏に戻してね。
    Mismatched { first: usize, second: usize },
}

/// `flip` 1回ぶんのイベント。結果に加えて「経過タイマーを今から
/// 始めるべきか」も伝えるよ。`timer_should_start` はセッションごとに
/// 最初の有効なめくりで一度だけ true になる！
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipEvent {
    pub outcome: FlipOutcome,
    pub timer_should_start: bool,
}

/// 1プレイぶんの全状態を持つ構造体だよ！
///
/// build (リスタート含む) のたびに丸ごと作り直す。前のセッションの
/// 状態がどこかに残ったりしない！グローバル変数は無し！🙅‍♀️
///
/// 不変条件 (invariant) はこんな感じ:
/// - 選択中カードは 0〜2 枚 (`first_pick` / `second_pick`)
/// - `locked` が true なのは「2枚選択済みで解決待ち」の間だけ
/// - `matched_pairs <= total_pairs`
/// - `attempts` は2枚目をめくった瞬間にだけ +1 (1枚目では増えない！)
#[derive(Debug)]
pub struct Session {
    /// セッション識別子。build のたびに増える。古い遅延コールバックが
    /// 新しいセッションを触らないためのガードに使うよ。
    generation: u64,
    cards: Vec<BoardCard>,
    total_pairs: usize,
    matched_pairs: usize,
    attempts: u32,
    seconds_elapsed: u64,
    /// 経過タイマーを起動済みかどうかのワンショットフラグ。
    /// 「elapsed==0 かつ attempts==0 なら最初のめくり」みたいな
    /// 合わせ技の判定はしない。フラグで明示！
    timer_started: bool,
    first_pick: Option<usize>,
    second_pick: Option<usize>,
    locked: bool,
    finished: bool,
}

impl Session {
    /// 新しいセッションを作るよ。カード列は `deck::build_pairs` で
    /// シャッフル済みのものを渡してね。
    pub fn fresh(cards: Vec<BoardCard>, generation: u64) -> Self {
        let total_pairs = cards.len() / 2;
        Self {
            generation,
            cards,
            total_pairs,
            matched_pairs: 0,
            attempts: 0,
            seconds_elapsed: 0,
            timer_started: false,
            first_pick: None,
            second_pick: None,
            locked: false,
            finished: false,
        }
    }

    /// 起動直後の「まだ盤面が無い」状態用の空セッション。
    /// 最初の build で即座に置き換えられるよ。
    pub fn empty() -> Self {
        Self::fresh(Vec::new(), 0)
    }

    /// ユーザー操作の唯一の入り口！カード `index` をめくろうとするよ。
    ///
    /// 無効な操作は全部 `FlipOutcome::Ignored` (エラーじゃなくて無視)。
    /// 正しい build 後なら、ここから到達できる不正な状態は存在しない！
    pub fn flip(&mut self, index: usize) -> FlipEvent {
        // --- 無効な操作は静かに無視するよ ---
        if self.locked || self.finished {
            return FlipEvent {
                outcome: FlipOutcome::Ignored,
                timer_should_start: false,
            };
        }
        if index >= self.cards.len() {
            return FlipEvent {
                outcome: FlipOutcome::Ignored,
                timer_should_start: false,
            };
        }
        if self.first_pick == Some(index) {
            // 同じカードの再クリックは無視！ (attempts も増えない)
            return FlipEvent {
                outcome: FlipOutcome::Ignored,
                timer_should_start: false,
            };
        }
        if self.cards[index].is_matched() {
            return FlipEvent {
                outcome: FlipOutcome::Ignored,
                timer_should_start: false,
            };
        }

        // --- 有効なめくり！ ---
        // セッション最初の有効なめくりでだけタイマー起動を指示する。
        // 2回目以降は timer_started が立ってるので false のまま。
        let timer_should_start = !self.timer_started;
        self.timer_started = true;

        self.cards[index].state = CardState::FaceUp;

        let first = match self.first_pick {
            None => {
                // 1枚目。覚えておいて2枚目を待つ。
                self.first_pick = Some(index);
                return FlipEvent {
                    outcome: FlipOutcome::Revealed { index },
                    timer_should_start,
                };
            }
            Some(first) => first,
        };

        // 2枚目！ここで盤面をロックして、この2枚選択を1アテンプトと数える。
        self.second_pick = Some(index);
        self.locked = true;
        self.attempts += 1;

        if self.cards[first].symbol == self.cards[index].symbol {
            // ペア成立！両方とも終端状態 Matched へ。
            self.cards[first].state = CardState::Matched;
            self.cards[index].state = CardState::Matched;
            self.matched_pairs += 1;
            self.clear_selection();

            let won = self.matched_pairs == self.total_pairs;
            if won {
                self.finished = true;
            }
            FlipEvent {
                outcome: FlipOutcome::Matched {
                    first,
                    second: index,
                    won,
                },
                timer_should_start,
            }
        } else {
            // ミスマッチ。カードは表向きのまま、ロックも維持。
            // 遅延コールバックが resolve_mismatch を呼ぶまでこのまま！
            FlipEvent {
                outcome: FlipOutcome::Mismatched {
                    first,
                    second: index,
                },
                timer_should_start,
            }
        }
    }

    /// ミスマッチの解決。900ms の遅延コールバックから呼ばれるよ。
    /// 選択中の2枚を裏向きに戻して、ロックを解除する。
    pub fn resolve_mismatch(&mut self) {
        if let (Some(first), Some(second)) = (self.first_pick, self.second_pick) {
            self.cards[first].state = CardState::FaceDown;
            self.cards[second].state = CardState::FaceDown;
        }
        self.clear_selection();
    }

    /// 経過タイマーの1秒ティック。新しい合計秒数を返すよ。
    pub fn tick(&mut self) -> u64 {
        self.seconds_elapsed += 1;
        self.seconds_elapsed
    }

    fn clear_selection(&mut self) {
        self.first_pick = None;
        self.second_pick = None;
        self.locked = false;
    }

    // --- 読み取り用アクセサたち ---

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn card(&self, index: usize) -> Option<&BoardCard> {
        self.cards.get(index)
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    pub fn total_pairs(&self) -> usize {
        self.total_pairs
    }

    pub fn seconds_elapsed(&self) -> u64 {
        self.seconds_elapsed
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
