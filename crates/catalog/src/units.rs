//! Raw-unit alias folding.
//!
//! Invoice lines arrive with unit strings in mixed scripts and spellings
//! (キログラム, 個, "pcs", "Kg "). Folding collapses known aliases onto a
//! small set of canonical tokens before the conversion-table lookup, so one
//! table entry per real unit suffices. Unrecognized strings pass through
//! unchanged (trimmed, lowercased) and fail later with the looked-up unit
//! named in the error.

/// Fold a raw unit string onto its canonical token.
pub fn fold_alias(raw: &str) -> String {
    let unit = raw.trim().to_lowercase();
    match unit.as_str() {
        "キログラム" | "kg" => "kg".to_string(),
        "グラム" | "g" => "g".to_string(),
        "個" | "本" | "丁" | "pc" | "pcs" | "piece" | "pieces" => "pc".to_string(),
        "缶" | "can" => "can".to_string(),
        "箱" | "box" | "case" | "cases" => "box".to_string(),
        "パック" | "pack" => "pack".to_string(),
        "瓶" | "bottle" | "btl" => "bottle".to_string(),
        _ => unit,
    }
}
