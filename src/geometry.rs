use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Hand {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Finger {
    Pinky,
    Ring,
    Middle,
    Index,
    Thumb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyPosition {
    pub row: u8, // 0=number row, 1=upper, 2=home, 3=bottom
    pub col: u8, // visual column index within the row
    pub hand: Hand,
    pub finger: Finger,
}

/// Horizontal offset per row on a row-staggered board (units of key width).
const ROW_STAGGER: [f64; 4] = [0.0, 0.25, 0.5, 0.75];

fn staggered_col(pos: &KeyPosition) -> f64 {
    let offset = ROW_STAGGER.get(pos.row as usize).copied().unwrap_or(0.0);
    pos.col as f64 + offset
}

/// Euclidean distance between two keys, accounting for row stagger.
pub fn key_distance(a: &KeyPosition, b: &KeyPosition) -> f64 {
    let row_diff = a.row as f64 - b.row as f64;
    let col_diff = staggered_col(a) - staggered_col(b);
    (row_diff * row_diff + col_diff * col_diff).sqrt()
}
