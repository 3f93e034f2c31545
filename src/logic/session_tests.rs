// src/logic/session_tests.rs
//! Session ステートマシンのテストだよ！
//! シャッフルに左右されないように、カード列は手で並べて渡す。

use crate::logic::card::{BoardCard, CardState};
use crate::logic::session::{FlipOutcome, Session};

/// 絵柄のスライスから決め打ちの盤面を作るヘルパー。
fn fixed_board(symbols: &[&'static str]) -> Session {
    let cards = symbols.iter().map(|&s| BoardCard::face_down(s)).collect();
    Session::fresh(cards, 1)
}

#[test]
fn first_flip_reveals_and_waits() {
    let mut session = fixed_board(&["🍎", "🍐", "🍎", "🍐"]);

    let event = session.flip(0);
    assert_eq!(event.outcome, FlipOutcome::Revealed { index: 0 });
    assert_eq!(session.card(0).unwrap().state, CardState::FaceUp);

    // 1枚目だけでは attempts は増えない！
    assert_eq!(session.attempts(), 0);
    assert!(!session.is_locked());

    println!("1枚目めくりテスト、成功！🎉");
}

#[test]
fn matching_pair_becomes_matched() {
    // 盤面: [🍎,🍐,🍎,🍐] で 0 と 2 をめくるとペア成立のはず！
    let mut session = fixed_board(&["🍎", "🍐", "🍎", "🍐"]);

    session.flip(0);
    let event = session.flip(2);

    assert_eq!(
        event.outcome,
        FlipOutcome::Matched {
            first: 0,
            second: 2,
            won: false, // total_pairs == 2 なのでまだ勝ちじゃない
        }
    );
    assert_eq!(session.card(0).unwrap().state, CardState::Matched);
    assert_eq!(session.card(2).unwrap().state, CardState::Matched);
    assert_eq!(session.matched_pairs(), 1);
    assert_eq!(session.attempts(), 1);
    assert!(!session.is_finished());
    // ペア成立ならロックはすぐ解除される
    assert!(!session.is_locked());

    println!("ペア成立テスト、成功！🎉");
}

#[test]
fn mismatch_locks_until_resolved() {
    let mut session = fixed_board(&["🍎", "🍐", "🍒", "🍎", "🍐", "🍒", "🍉", "🍉"]);

    session.flip(0); // 🍎
    let event = session.flip(1); // 🍐 -> ミスマッチ

    assert_eq!(
        event.outcome,
        FlipOutcome::Mismatched { first: 0, second: 1 }
    );
    assert_eq!(session.attempts(), 1);
    // 解決まではロック中で、両方まだ表向き
    assert!(session.is_locked());
    assert_eq!(session.card(0).unwrap().state, CardState::FaceUp);
    assert_eq!(session.card(1).unwrap().state, CardState::FaceUp);

    // ロック中は他のカードをめくっても何も起きない！
    let blocked = session.flip(2);
    assert_eq!(blocked.outcome, FlipOutcome::Ignored);
    assert_eq!(session.card(2).unwrap().state, CardState::FaceDown);
    assert_eq!(session.attempts(), 1, "ロック中に attempts が動いた！");

    // 遅延コールバック相当の resolve_mismatch で両方裏に戻る
    session.resolve_mismatch();
    assert_eq!(session.card(0).unwrap().state, CardState::FaceDown);
    assert_eq!(session.card(1).unwrap().state, CardState::FaceDown);
    assert!(!session.is_locked());
    assert_eq!(session.attempts(), 1);

    println!("ミスマッチ→裏返しテスト、成功！🎉");
}

#[test]
fn reclicking_selected_card_is_ignored() {
    let mut session = fixed_board(&["🍎", "🍐", "🍎", "🍐"]);

    session.flip(0);
    let event = session.flip(0); // 同じカードをもう一回！

    assert_eq!(event.outcome, FlipOutcome::Ignored);
    // 2枚目扱いにならないので attempts は 0 のまま
    assert_eq!(session.attempts(), 0);
    assert!(!session.is_locked());

    println!("同一カード再クリック無視テスト、成功！🎉");
}

#[test]
fn matched_card_is_terminal() {
    let mut session = fixed_board(&["🍎", "🍐", "🍎", "🍐"]);

    session.flip(0);
    session.flip(2); // ペア成立

    // Matched になったカードはもうめくれない
    let event = session.flip(0);
    assert_eq!(event.outcome, FlipOutcome::Ignored);
    assert_eq!(session.card(0).unwrap().state, CardState::Matched);

    // Matched を1枚目にもできない (選択にも入らない)
    assert_eq!(session.attempts(), 1);

    println!("Matched 終端テスト、成功！🎉");
}

#[test]
fn out_of_range_index_is_ignored() {
    let mut session = fixed_board(&["🍎", "🍎"]);
    let event = session.flip(99);
    assert_eq!(event.outcome, FlipOutcome::Ignored);
    assert!(!event.timer_should_start, "無効な操作でタイマーが動いた！");
}

#[test]
fn completing_all_pairs_wins_once() {
    let mut session = fixed_board(&["🍎", "🍐", "🍎", "🍐"]);

    session.flip(0);
    session.flip(2);
    session.flip(1);
    let event = session.flip(3);

    assert_eq!(
        event.outcome,
        FlipOutcome::Matched {
            first: 1,
            second: 3,
            won: true, // 全ペア発見！🏆
        }
    );
    assert!(session.is_finished());
    assert_eq!(session.matched_pairs(), session.total_pairs());
    assert_eq!(session.attempts(), 2);

    // ゲーム終了後の余計なクリックは全部無視。勝利が二重に報告されたりしない！
    let stray = session.flip(0);
    assert_eq!(stray.outcome, FlipOutcome::Ignored);
    let stray2 = session.flip(1);
    assert_eq!(stray2.outcome, FlipOutcome::Ignored);
    assert_eq!(session.attempts(), 2);

    println!("勝利判定テスト、成功！🎉");
}

#[test]
fn timer_starts_exactly_once_per_session() {
    let mut session = fixed_board(&["🍎", "🍐", "🍎", "🍐"]);

    // 最初の有効なめくりでだけ true！
    let first = session.flip(0);
    assert!(first.timer_should_start);

    // 以降のめくりでは絶対に true にならない (再起動・二重起動なし)
    let second = session.flip(2);
    assert!(!second.timer_should_start);
    let third = session.flip(1);
    assert!(!third.timer_should_start);

    println!("タイマーワンショットテスト、成功！🎉");
}

#[test]
fn timer_does_not_start_on_ignored_flip() {
    let mut session = fixed_board(&["🍎", "🍐", "🍒", "🍎", "🍐", "🍒"]);

    // 範囲外クリックではタイマーは動かない
    let bad = session.flip(42);
    assert!(!bad.timer_should_start);

    // その後の最初の有効なめくりでちゃんと true になる
    let good = session.flip(0);
    assert!(good.timer_should_start);
}

#[test]
fn attempts_increment_per_two_card_selection() {
    let mut session = fixed_board(&["🍎", "🍐", "🍒", "🍎", "🍐", "🍒", "🍉", "🍉"]);

    // ミスマッチを3回繰り返す。1枚目では増えず、2枚目で +1 ずつ。
    for round in 1..=3u32 {
        session.flip(0);
        assert_eq!(session.attempts(), round - 1, "1枚目で attempts が増えた！");
        session.flip(1);
        assert_eq!(session.attempts(), round);
        session.resolve_mismatch();
    }

    println!("attempts カウントテスト、成功！🎉");
}

#[test]
fn tick_accumulates_seconds() {
    let mut session = fixed_board(&["🍎", "🍎"]);
    assert_eq!(session.seconds_elapsed(), 0);
    assert_eq!(session.tick(), 1);
    assert_eq!(session.tick(), 2);
    assert_eq!(session.tick(), 3);
    assert_eq!(session.seconds_elapsed(), 3);
}

#[test]
fn fresh_session_replaces_everything() {
    let mut session = fixed_board(&["🍎", "🍐", "🍎", "🍐"]);
    session.flip(0);
    session.flip(1);
    session.tick();

    // build 相当: 丸ごと新しいセッションに置き換え
    let replacement = Session::fresh(
        vec![BoardCard::face_down("🍋"), BoardCard::face_down("🍋")],
        session.generation() + 1,
    );
    let old_generation = session.generation();
    let session = replacement;

    assert_eq!(session.attempts(), 0);
    assert_eq!(session.matched_pairs(), 0);
    assert_eq!(session.seconds_elapsed(), 0);
    assert!(!session.is_locked());
    assert_eq!(session.total_pairs(), 1);
    // generation は必ず増える。古い遅延コールバックはこれで見分ける！
    assert!(session.generation() > old_generation);

    println!("セッション入れ替えテスト、成功！🎉");
}
