// src/app/init_handler.rs
//! GameApp の初期化に関するロジック。DOM の取得まわり。

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement};

use crate::log;

/// document を取得するよ。ブラウザ外で呼ばれたらエラー。
pub fn document() -> Result<Document, JsValue> {
    let window = web_sys::window().ok_or("Failed to get window")?;
    window.document().ok_or_else(|| {
        JsValue::from(js_sys::Error::new("Failed to get document"))
    })
}

/// 盤面の親要素 (#game-board) を取得するよ。これだけは必須！
pub fn lookup_board_element(document: &Document) -> Result<HtmlElement, JsValue> {
    document
        .get_element_by_id("game-board")
        .ok_or_else(|| JsValue::from(js_sys::Error::new("#game-board not found")))?
        .dyn_into::<HtmlElement>()
        .map_err(JsValue::from)
}

/// あれば使う系の表示要素 (#attempts, #timer) の取得。無ければ None。
pub fn lookup_optional_element(document: &Document, id: &str) -> Option<HtmlElement> {
    let found = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if found.is_none() {
        log(&format!("App::Init: #{} が無いので表示更新はスキップされるよ。", id));
    }
    found
}
