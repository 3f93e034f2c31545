// src/app/board_context.rs
//! app 層のハンドラたちで共有する、ブラウザ側リソース一式だよ！

use std::sync::{Arc, Mutex};

use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, HtmlElement};

use crate::logic::session::Session;

/// Board Manager がブラウザ側で持ち回る共有状態のたば。
///
/// Clone してもハンドル (Arc と JS 側への参照) がコピーされるだけで
/// 実体はひとつ！クロージャには move でこれのクローンを渡すよ。
/// Arc<Mutex<>> で囲むのは、非同期のコールバックからでも安全に
/// データを共有・変更するため！ (Wasm は基本シングルスレッドだけど作法として)
#[derive(Clone)]
pub struct BoardContext {
    /// ゲームの全状態。ロックしてから触る！🔒
    pub session: Arc<Mutex<Session>>,
    pub document: Document,
    /// カードを並べる親要素 (#game-board)。
    pub board_el: HtmlElement,
    /// アテンプト表示 (#attempts)。無いページでも動くように Option。
    pub attempts_el: Option<HtmlElement>,
    /// 経過時間表示 (#timer)。こちらも Option。
    pub timer_el: Option<HtmlElement>,
    /// 盤面位置 -> カード要素。build のたびに作り直し。
    pub card_elements: Arc<Mutex<Vec<HtmlElement>>>,
    /// カードの click クロージャの持ち場。drop すると JS 側から呼べなくなるので、
    /// 対応する要素が生きてる間はここで保持し続ける！
    pub card_closures: Arc<Mutex<Vec<Closure<dyn FnMut(Event)>>>>,
    /// 発火待ちの setTimeout (id とクロージャのペア)。
    /// 次の build 時に clearTimeout してから drop するよ。
    pub pending_timeouts: Arc<Mutex<Vec<(i32, Closure<dyn FnMut()>)>>>,
    /// 経過タイマーの setInterval (id とクロージャ)。同時に1本だけ。
    pub elapsed_interval: Arc<Mutex<Option<(i32, Closure<dyn FnMut()>)>>>,
}

impl BoardContext {
    /// まだ盤面の無い初期状態のコンテキストを作るよ。
    /// 最初の build でセッションも要素も埋まる。
    pub fn new(
        document: Document,
        board_el: HtmlElement,
        attempts_el: Option<HtmlElement>,
        timer_el: Option<HtmlElement>,
    ) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::empty())),
            document,
            board_el,
            attempts_el,
            timer_el,
            card_elements: Arc::new(Mutex::new(Vec::new())),
            card_closures: Arc::new(Mutex::new(Vec::new())),
            pending_timeouts: Arc::new(Mutex::new(Vec::new())),
            elapsed_interval: Arc::new(Mutex::new(None)),
        }
    }
}
