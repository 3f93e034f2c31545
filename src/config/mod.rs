// src/config/mod.rs
//! 設定値 (定数) をまとめるモジュールだよ！

pub mod game;
