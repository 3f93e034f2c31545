// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app; // ブラウザと繋がる側 (DOM、イベント、タイマー)
pub mod config; // 定数たち
pub mod logic; // 純粋なゲームロジック (ホストでテストできる！)

// JS 側から使う入り口を再エクスポート！
pub use crate::app::game_app::GameApp;

// JavaScript の console.log / console.error を Rust から呼び出すための準備 (extern ブロック)。
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn error(s: &str);
}

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
    log("Panic hook set!");
}
