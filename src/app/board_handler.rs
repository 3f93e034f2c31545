// src/app/board_handler.rs
//! 盤面の (再) 構築だよ！セッションの入れ替えと DOM の作り直しをやる。

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::Event;

use crate::app::board_context::BoardContext;
use crate::app::card_view;
use crate::app::event_handler;
use crate::app::renderer;
use crate::app::timer_handler;
use crate::logic::deck;
use crate::logic::session::Session;
use crate::{error, log};

/// 検証済みの枚数 `count` で盤面を作り直すよ。
///
/// 前のセッションの後始末もここでやる:
/// - 経過タイマー (interval) を明示的に停止
/// - 発火待ちの遅延コールバックを clearTimeout して回収
/// - セッションを丸ごと新品に入れ替え (generation は必ず増える)
/// - カード要素とクリックリスナーを作り直し
/// - アテンプト / 経過時間の表示をリセット
pub fn build_board(ctx: &BoardContext, count: usize) -> Result<(), JsValue> {
    log(&format!("App::Board: build_board({}) called.", count));

    // --- ステップ1: 前のセッションの時限処理を全部止める ---
    timer_handler::stop_elapsed_timer(ctx);
    timer_handler::clear_pending_timeouts(ctx);

    // --- ステップ2: セッションを丸ごと入れ替え ---
    let cards = deck::build_pairs(count);
    let symbols: Vec<&'static str> = cards.iter().map(|card| card.symbol).collect();
    {
        let mut session = match ctx.session.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                log(&format!(
                    "App::Board: session mutex was poisoned! Attempting recovery. Error: {:?}",
                    poisoned
                ));
                poisoned.into_inner()
            }
        };
        let generation = session.generation() + 1;
        *session = Session::fresh(cards, generation);
    } // <-- ここでロック解放

    // --- ステップ3: DOM 再構築 ---
    ctx.board_el.set_inner_html("");

    let mut elements = match ctx.card_elements.lock() {
        Ok(guard) => guard,
        Err(e) => {
            error(&format!("App::Board: card_elements のロックに失敗: {}", e));
            return Err(JsValue::from_str("failed to lock card elements"));
        }
    };
    let mut closures = match ctx.card_closures.lock() {
        Ok(guard) => guard,
        Err(e) => {
            error(&format!("App::Board: card_closures のロックに失敗: {}", e));
            return Err(JsValue::from_str("failed to lock card closures"));
        }
    };
    // 古い要素はもう親から外れてるので、クロージャごと捨ててOK。
    elements.clear();
    closures.clear();

    for (index, symbol) in symbols.into_iter().enumerate() {
        let el = card_view::create_card_element(&ctx.document, symbol)?;

        // カード1枚につきリスナー1本。中身は中央の flip ハンドラを呼ぶだけ！
        let ctx_clone = ctx.clone();
        let on_click = Closure::wrap(Box::new(move |_event: Event| {
            event_handler::handle_card_flip(&ctx_clone, index);
        }) as Box<dyn FnMut(Event)>);
        el.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;

        ctx.board_el.append_child(&el)?;
        elements.push(el);
        closures.push(on_click);
    }

    // --- ステップ4: 表示リセット ---
    renderer::render_attempts(&ctx.attempts_el, 0);
    renderer::render_timer(&ctx.timer_el, 0);

    log("App::Board: board rebuilt.");
    Ok(())
}
