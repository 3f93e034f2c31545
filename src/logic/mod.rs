// src/logic/mod.rs
//! ブラウザに依存しない純粋なゲームロジックをまとめるよ！

pub mod card;
pub mod deck;
pub mod session;
pub mod timer;
pub mod validation;

#[cfg(test)]
mod session_tests;
