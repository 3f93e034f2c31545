// src/app/mod.rs
//! ブラウザと繋がる側のロジックを役割ごとに分割して置くモジュールだよ！

pub mod board_context;
pub mod board_handler;
pub mod card_view;
pub mod control_handler;
pub mod event_handler;
pub mod game_app;
pub mod init_handler;
pub mod renderer;
pub mod timer_handler;
