// src/app/event_handler.rs
//! カードクリック (めくり) の処理だよ！ユーザー操作の入り口はここだけ。
//!
//! 流れ:
//! 1. セッションをロックして `Session::flip` に判定してもらう
//! 2. ロックを手放してから、結果 (`FlipOutcome`) に応じて DOM を更新する
//! 3. ミスマッチなら 900ms 後の裏返し、勝利なら 250ms 後の通知をスケジュール
//!
//! 遅延コールバックは必ずセッション generation でガードするよ。
//! リスタート後に古いコールバックが発火しても、新しいセッションは触らせない！

use std::sync::Arc;

use web_sys::HtmlElement;

use crate::app::board_context::BoardContext;
use crate::app::renderer;
use crate::app::timer_handler;
use crate::config::game::{MISMATCH_REVERT_DELAY_MS, WIN_NOTICE_DELAY_MS};
use crate::logic::session::FlipOutcome;
use crate::logic::timer::format_elapsed;
use crate::{error, log};

/// カード `index` がクリックされた時の処理。click クロージャから呼ばれるよ。
pub fn handle_card_flip(ctx: &BoardContext, index: usize) {
    // --- ステップ1: セッションに判定してもらう ---
    // ロック中に必要な値だけ全部読み取って、DOM 更新はロック解放後に！
    let (event, generation, attempts, seconds, first_symbol, second_symbol) = {
        let mut session = match ctx.session.lock() {
            Ok(session) => session,
            Err(e) => {
                error(&format!("App::Event: セッションのロックに失敗: {}", e));
                return;
            }
        };
        let event = session.flip(index);
        let (first_symbol, second_symbol) = match event.outcome {
            FlipOutcome::Revealed { index } => {
                (session.card(index).map(|card| card.symbol), None)
            }
            FlipOutcome::Matched { first, second, .. }
            | FlipOutcome::Mismatched { first, second } => (
                session.card(first).map(|card| card.symbol),
                session.card(second).map(|card| card.symbol),
            ),
            FlipOutcome::Ignored => (None, None),
        };
        (
            event,
            session.generation(),
            session.attempts(),
            session.seconds_elapsed(),
            first_symbol,
            second_symbol,
        )
    };

    if event.outcome == FlipOutcome::Ignored {
        return; // 無効な操作。静かに無視！
    }

    // セッション最初の有効なめくりなら、ここで経過タイマーを起動。
    if event.timer_should_start {
        timer_handler::start_elapsed_timer(ctx, generation);
    }

    match event.outcome {
        FlipOutcome::Ignored => {}

        FlipOutcome::Revealed { index } => {
            if let (Some(el), Some(symbol)) = (card_element(ctx, index), first_symbol) {
                if let Err(e) = renderer::reveal_card(&el, symbol) {
                    error(&format!("App::Event: カード表示の更新に失敗: {:?}", e));
                }
            }
        }

        FlipOutcome::Matched { first, second, won } => {
            reveal_pair(ctx, first, second, first_symbol, second_symbol);
            for index in [first, second] {
                if let Some(el) = card_element(ctx, index) {
                    if let Err(e) = renderer::mark_matched(&el) {
                        error(&format!("App::Event: matched 表示の更新に失敗: {:?}", e));
                    }
                }
            }
            renderer::render_attempts(&ctx.attempts_el, attempts);

            if won {
                log("App::Event: 全ペア発見！ゲームクリア！");
                // タイマーはもう進めない。通知は最後のペアの見た目が
                // 描画されてから出したいので、少しだけ遅らせる。
                timer_handler::stop_elapsed_timer(ctx);
                schedule_win_notice(ctx, generation, attempts, seconds);
            }
        }

        FlipOutcome::Mismatched { first, second } => {
            reveal_pair(ctx, first, second, first_symbol, second_symbol);
            renderer::render_attempts(&ctx.attempts_el, attempts);
            schedule_mismatch_revert(ctx, generation, first, second);
        }
    }
}

/// 2枚とも表向きの見た目にするヘルパー。
fn reveal_pair(
    ctx: &BoardContext,
    first: usize,
    second: usize,
    first_symbol: Option<&'static str>,
    second_symbol: Option<&'static str>,
) {
    for (index, symbol) in [(first, first_symbol), (second, second_symbol)] {
        if let (Some(el), Some(symbol)) = (card_element(ctx, index), symbol) {
            if let Err(e) = renderer::reveal_card(&el, symbol) {
                error(&format!("App::Event: カード表示の更新に失敗: {:?}", e));
            }
        }
    }
}

/// ミスマッチ2枚を、表示時間が終わったら裏に戻す遅延処理を登録するよ。
/// 裏返るまでの間は Session 側の locked が入力を全部はじいてる。
fn schedule_mismatch_revert(ctx: &BoardContext, generation: u64, first: usize, second: usize) {
    let session_arc = Arc::clone(&ctx.session);
    let first_el = card_element(ctx, first);
    let second_el = card_element(ctx, second);

    timer_handler::schedule_timeout(ctx, MISMATCH_REVERT_DELAY_MS, move || {
        {
            let mut session = match session_arc.lock() {
                Ok(session) => session,
                Err(e) => {
                    error(&format!("App::Event: 裏返しコールバックでロック失敗: {}", e));
                    return;
                }
            };
            if session.generation() != generation {
                // リスタート後に発火した古いコールバック。新しいセッションには触らない！
                return;
            }
            session.resolve_mismatch();
        }
        for el in [&first_el, &second_el] {
            if let Some(el) = el {
                if let Err(e) = renderer::hide_card(el) {
                    error(&format!("App::Event: カードの裏返しに失敗: {:?}", e));
                }
            }
        }
    });
}

/// 勝利通知を少し遅らせて出すよ。最終アテンプト数と経過時間つき！
fn schedule_win_notice(ctx: &BoardContext, generation: u64, attempts: u32, seconds: u64) {
    let session_arc = Arc::clone(&ctx.session);
    let message = format!(
        "You won! Attempts: {} — Time: {}",
        attempts,
        format_elapsed(seconds)
    );

    timer_handler::schedule_timeout(ctx, WIN_NOTICE_DELAY_MS, move || {
        {
            let session = match session_arc.lock() {
                Ok(session) => session,
                Err(e) => {
                    error(&format!("App::Event: 勝利通知コールバックでロック失敗: {}", e));
                    return;
                }
            };
            if session.generation() != generation {
                return; // 通知前にリスタートされた。もう出さない。
            }
        }
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(&message).is_err() {
                error("App::Event: 勝利通知の表示に失敗");
            }
        }
    });
}

/// 盤面位置 `index` のカード要素のハンドルを取り出すヘルパー。
fn card_element(ctx: &BoardContext, index: usize) -> Option<HtmlElement> {
    match ctx.card_elements.lock() {
        Ok(elements) => elements.get(index).cloned(),
        Err(e) => {
            error(&format!("App::Event: card_elements のロックに失敗: {}", e));
            None
        }
    }
}
