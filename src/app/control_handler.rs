// src/app/control_handler.rs
//! コントロール面 (Game Controller) だよ！
//! 枚数の検証、スタート/リスタートボタンの配線、セレクトの読み取り。

use std::sync::{Arc, Mutex};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, Event, HtmlSelectElement};

use crate::app::board_context::BoardContext;
use crate::app::board_handler;
use crate::config::game::DEFAULT_CARD_COUNT;
use crate::logic::validation::validate_card_count;
use crate::{error, log};

/// ゲーム開始の入り口！毎回かならず検証し直すよ。
///
/// - 検証 OK → Board Manager に盤面構築を依頼
/// - 検証 NG → ブロッキング通知 (alert) を出すだけ。盤面は作らないし、
///   前のセッションが残ってればそのまま遊べる！
pub fn start_game(ctx: &BoardContext, requested_count: usize) {
    match validate_card_count(requested_count) {
        Ok(count) => {
            if let Err(e) = board_handler::build_board(ctx, count) {
                error(&format!("App::Control: 盤面構築に失敗: {:?}", e));
            }
        }
        Err(config_error) => {
            log(&format!(
                "App::Control: 不正な枚数 {} が要求された。盤面はそのまま。",
                requested_count
            ));
            show_blocking_notice(&config_error.to_string());
        }
    }
}

/// #card-count-select の現在値を読むよ。
///
/// - セレクト要素そのものが無い → None (呼び出し側がデフォルトを使う)
/// - あるけど数値として読めない → Some(0) (検証で OutOfRange として弾かれる)
pub fn read_selected_count(document: &Document) -> Option<usize> {
    let select: HtmlSelectElement = document
        .get_element_by_id("card-count-select")?
        .dyn_into()
        .ok()?;
    Some(select.value().parse::<usize>().unwrap_or(0))
}

/// スタート/リスタートボタンにリスナーを付けるよ。
/// どちらも中身は同じ: セレクトを読み直して `start_game`！
pub fn attach_control_listeners(
    ctx: &BoardContext,
    closures: &Arc<Mutex<Vec<Closure<dyn FnMut(Event)>>>>,
) -> Result<(), JsValue> {
    for button_id in ["start-btn", "restart-btn"] {
        let button = match ctx.document.get_element_by_id(button_id) {
            Some(button) => button,
            None => {
                // ボタンの無いページでも動く。配線をスキップするだけ。
                log(&format!("App::Control: #{} が見つからないのでスキップ。", button_id));
                continue;
            }
        };

        let ctx_clone = ctx.clone();
        let on_click = Closure::wrap(Box::new(move |_event: Event| {
            let count = read_selected_count(&ctx_clone.document).unwrap_or(DEFAULT_CARD_COUNT);
            start_game(&ctx_clone, count);
        }) as Box<dyn FnMut(Event)>);
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;

        match closures.lock() {
            Ok(mut stored) => stored.push(on_click),
            Err(e) => {
                error(&format!("App::Control: control closures のロックに失敗: {}", e));
                return Err(JsValue::from_str("failed to lock control closures"));
            }
        }
        log(&format!("App::Control: #{} にリスナーを配線。", button_id));
    }
    Ok(())
}

/// ブロッキングな通知。ユーザーが閉じるまで先に進まないやつ。
fn show_blocking_notice(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            error("App::Control: alert の表示に失敗");
        }
    }
}
