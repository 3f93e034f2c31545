// src/app/game_app.rs

// --- 必要なものをインポート ---
use std::sync::{Arc, Mutex};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::Event;

use crate::app::board_context::BoardContext;
use crate::app::control_handler;
use crate::app::init_handler;
use crate::app::timer_handler;
use crate::config::game::DEFAULT_CARD_COUNT;
use crate::logic::timer::format_elapsed;
use crate::log;

// --- ゲーム全体のアプリケーション状態を管理する構造体 ---
#[wasm_bindgen]
pub struct GameApp {
    ctx: BoardContext,
    // スタート/リスタートボタンのクロージャを保持する Vec。
    // drop すると JS 側から呼べなくなるので、GameApp の寿命と一緒に持つ！
    control_closures: Arc<Mutex<Vec<Closure<dyn FnMut(Event)>>>>,
}

// GameApp 構造体のメソッドを実装していくよ！
#[wasm_bindgen]
impl GameApp {
    /// 初期化。DOM を探して、ボタンを配線して、デフォルト盤面で自動スタート！
    ///
    /// #game-board が無いページでは `Err` を返すよ (盤面の置き場が無いので)。
    /// #attempts / #timer / ボタン類は無くても動く。
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<GameApp, JsValue> {
        log("GameApp: Initializing...");

        let document = init_handler::document()?;
        let board_el = init_handler::lookup_board_element(&document)?;
        let attempts_el = init_handler::lookup_optional_element(&document, "attempts");
        let timer_el = init_handler::lookup_optional_element(&document, "timer");
        let ctx = BoardContext::new(document, board_el, attempts_el, timer_el);

        let control_closures = Arc::new(Mutex::new(Vec::new()));
        control_handler::attach_control_listeners(&ctx, &control_closures)?;

        // 初回ロード時はセレクトの値 (無ければデフォルト) で自動スタート！
        // 不正な値なら alert が出るだけで、GameApp 自体は生きたまま。
        let count =
            control_handler::read_selected_count(&ctx.document).unwrap_or(DEFAULT_CARD_COUNT);
        control_handler::start_game(&ctx, count);

        log("GameApp: Initialization complete.");
        Ok(Self {
            ctx,
            control_closures,
        })
    }

    /// JS から明示的に (リ) スタートしたい時用。毎回かならず検証し直すよ。
    #[wasm_bindgen]
    pub fn start_game(&self, card_count: usize) {
        log(&format!("GameApp: start_game({}) called.", card_count));
        control_handler::start_game(&self.ctx, card_count);
    }

    // デバッグ用: 現在のアテンプト数
    #[wasm_bindgen]
    pub fn attempts_debug(&self) -> u32 {
        self.ctx
            .session
            .lock()
            .expect("Failed to lock session for attempts")
            .attempts()
    }

    // デバッグ用: 発見済みペア数
    #[wasm_bindgen]
    pub fn matched_pairs_debug(&self) -> usize {
        self.ctx
            .session
            .lock()
            .expect("Failed to lock session for matched pairs")
            .matched_pairs()
    }

    // デバッグ用: 経過時間の表示文字列 (MM:SS)
    #[wasm_bindgen]
    pub fn elapsed_debug(&self) -> String {
        let seconds = self
            .ctx
            .session
            .lock()
            .expect("Failed to lock session for elapsed time")
            .seconds_elapsed();
        format_elapsed(seconds)
    }

    // デバッグ用: ゲームクリア済みかどうか
    #[wasm_bindgen]
    pub fn is_finished_debug(&self) -> bool {
        self.ctx
            .session
            .lock()
            .expect("Failed to lock session for finished flag")
            .is_finished()
    }
}

// GameApp が不要になった時にタイマー類を止める処理 (Drop トレイト)
impl Drop for GameApp {
    fn drop(&mut self) {
        log("GameApp: GameApp インスタンスを破棄中。タイマーを停止します...");
        timer_handler::stop_elapsed_timer(&self.ctx);
        timer_handler::clear_pending_timeouts(&self.ctx);
        if let Ok(stored) = self.control_closures.lock() {
            log(&format!(
                "GameApp: {} 本のコントロールリスナーを解放。",
                stored.len()
            ));
        }
    }
}
