// src/app/renderer.rs
//! 描画関連ロジック。カード要素の見た目と、アテンプト/経過時間の表示更新。
//! ここは DOM を書き換えるだけで、ゲーム状態には一切触らないよ！

use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use crate::logic::timer::format_elapsed;

/// カードを表向きの見た目にするよ。class `flipped` を付けて絵柄を出す。
pub fn reveal_card(el: &HtmlElement, symbol: &str) -> Result<(), JsValue> {
    el.class_list().add_1("flipped")?;
    el.set_text_content(Some(symbol));
    Ok(())
}

/// カードを裏向きの見た目に戻すよ。絵柄も隠す。
pub fn hide_card(el: &HtmlElement) -> Result<(), JsValue> {
    el.class_list().remove_1("flipped")?;
    el.set_text_content(Some(""));
    Ok(())
}

/// ペア成立したカードの見た目。class `matched` を付ける。
/// クリック無効化は CSS 側 (.matched { pointer-events: none }) と
/// Session 側の無視判定の両方で効いてるよ。
pub fn mark_matched(el: &HtmlElement) -> Result<(), JsValue> {
    el.class_list().add_1("matched")?;
    Ok(())
}

/// アテンプト表示の更新。表示要素が無いページでは何もしない。
pub fn render_attempts(attempts_el: &Option<HtmlElement>, attempts: u32) {
    if let Some(el) = attempts_el {
        el.set_text_content(Some(&format!("Attempts: {}", attempts)));
    }
}

/// 経過時間表示の更新。フォーマットはいつも MM:SS！
pub fn render_timer(timer_el: &Option<HtmlElement>, seconds: u64) {
    if let Some(el) = timer_el {
        el.set_text_content(Some(&format!("Time: {}", format_elapsed(seconds))));
    }
}
