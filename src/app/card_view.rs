// src/app/card_view.rs
//! カード1枚ぶんの DOM 要素を作るモジュールだよ (Card Factory)。
//! めくりのロジックは event_handler 側に集約してあるので、ここは見た目だけ！

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement};

/// 絵柄 `symbol` のカード要素を1枚作るよ。
///
/// - class は `card`
/// - `data-card` 属性に絵柄を持たせる (後のペア判定の答え合わせ用)
/// - テキストは空のまま。これが「裏向き」の見た目！
///
/// 作るだけで副作用なし。盤面へのぶら下げとリスナー登録は呼び出し側の仕事。
pub fn create_card_element(document: &Document, symbol: &str) -> Result<HtmlElement, JsValue> {
    let el: HtmlElement = document
        .create_element("div")?
        .dyn_into()
        .map_err(JsValue::from)?;
    el.class_list().add_1("card")?;
    el.set_attribute("data-card", symbol)?;
    Ok(el)
}
