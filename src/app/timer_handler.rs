// src/app/timer_handler.rs
//! setInterval / setTimeout まわりの面倒を全部見るモジュールだよ！
//! クロージャの所有権もここで管理する。forget() で漏らしたりしない！
//!
//! キャンセルの方針:
//! - 経過タイマー (interval) は build のたびに明示的に止める。
//! - 発火待ちの timeout も build 時に clearTimeout してから drop する。
//! - それでも取りこぼした古いコールバックが発火した場合に備えて、
//!   コールバック本体は必ずセッション generation でガードする！

use std::sync::Arc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

use log::error;

use crate::app::board_context::BoardContext;
use crate::app::renderer;
use crate::config::game::TIMER_INTERVAL_MS;
use crate::log;

/// 経過タイマー (1秒刻み) を起動するよ。
///
/// すでに動いてたら何もしない。セッションの最初の有効なめくりで
/// 一度だけ呼ばれる想定だけど、二重に呼ばれても二重起動はしない！
///
/// ティック本体は `generation` をチェックして、古いセッション宛ての
/// ティックだったら何も触らずに帰る。
pub fn start_elapsed_timer(ctx: &BoardContext, generation: u64) {
    let mut slot = match ctx.elapsed_interval.lock() {
        Ok(slot) => slot,
        Err(e) => {
            error!("App::Timer: elapsed interval のロックに失敗: {}", e);
            return;
        }
    };
    if slot.is_some() {
        return; // すでに動いてる！
    }

    let session_arc = Arc::clone(&ctx.session);
    let timer_el = ctx.timer_el.clone();
    let tick = Closure::wrap(Box::new(move || {
        let seconds = {
            let mut session = match session_arc.lock() {
                Ok(session) => session,
                Err(e) => {
                    error!("App::Timer: ティック内でセッションのロックに失敗: {}", e);
                    return;
                }
            };
            if session.generation() != generation {
                // 古いセッションのティックが漏れてきた。何も触らない！
                return;
            }
            session.tick()
        };
        renderer::render_timer(&timer_el, seconds);
    }) as Box<dyn FnMut()>);

    let window = match window() {
        Some(window) => window,
        None => {
            error!("App::Timer: window が取れない！");
            return;
        }
    };
    match window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        TIMER_INTERVAL_MS,
    ) {
        Ok(id) => {
            *slot = Some((id, tick));
            log("App::Timer: elapsed timer started.");
        }
        Err(e) => error!("App::Timer: setInterval に失敗: {:?}", e),
    }
}

/// 経過タイマーを止めるよ。動いてなければ何もしない。
/// クロージャはここで drop される (interval は先に clear 済みなので安全)。
pub fn stop_elapsed_timer(ctx: &BoardContext) {
    let mut slot = match ctx.elapsed_interval.lock() {
        Ok(slot) => slot,
        Err(e) => {
            error!("App::Timer: elapsed interval のロックに失敗: {}", e);
            return;
        }
    };
    if let Some((id, _tick)) = slot.take() {
        if let Some(window) = window() {
            window.clear_interval_with_handle(id);
        }
        log("App::Timer: elapsed timer stopped.");
    }
}

/// `delay_ms` 後に一度だけ走る遅延コールバックを登録するよ。
/// id とクロージャは pending_timeouts に預けて、次の build で
/// まとめてキャンセル & 回収する。
pub fn schedule_timeout<F>(ctx: &BoardContext, delay_ms: i32, callback: F)
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);

    let window = match window() {
        Some(window) => window,
        None => {
            error!("App::Timer: window が取れない！");
            return;
        }
    };
    match window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms,
    ) {
        Ok(id) => {
            match ctx.pending_timeouts.lock() {
                Ok(mut pending) => pending.push((id, closure)),
                Err(e) => {
                    // 預け先が無いとクロージャが即 drop されて発火時に
                    // JS 例外になるので、timeout ごとキャンセルしておく。
                    error!("App::Timer: pending_timeouts のロックに失敗: {}", e);
                    window.clear_timeout_with_handle(id);
                }
            }
        }
        Err(e) => error!("App::Timer: setTimeout に失敗: {:?}", e),
    }
}

/// 発火待ちの timeout を全部キャンセルして回収するよ。build 時に呼ぶ。
/// 発火済みのぶんも一緒に掃除される (そっちはもう無害)。
pub fn clear_pending_timeouts(ctx: &BoardContext) {
    let mut pending = match ctx.pending_timeouts.lock() {
        Ok(pending) => pending,
        Err(e) => {
            error!("App::Timer: pending_timeouts のロックに失敗: {}", e);
            return;
        }
    };
    if pending.is_empty() {
        return;
    }
    let window = window();
    for (id, _closure) in pending.drain(..) {
        if let Some(window) = &window {
            window.clear_timeout_with_handle(id);
        }
    }
    log("App::Timer: pending timeouts cleared.");
}
