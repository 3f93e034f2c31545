// src/logic/timer.rs
//! 経過秒数の表示フォーマットだよ。表示はいつも「分2桁:秒2桁」！

/// 合計秒数を `MM:SS` 形式の文字列にするよ。
///
/// 分は59を超えても時間に繰り上げたりしない。60分なら "60:00"、
/// 100分を超えたら桁が増えるだけ ("100:00")。
pub fn format_elapsed(total_seconds: u64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}
