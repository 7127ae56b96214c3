use crate::geometry::{Finger, Hand, KeyPosition};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use strum_macros::{Display, EnumIter, EnumString};

/// Character -> physical position on a concrete keyboard.
pub type KeyboardLayout = HashMap<char, KeyPosition>;

/// Row index of the home row in every layout map.
pub const HOME_ROW: u8 = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum KnownLayout {
    #[default]
    Qwerty,
    Azerty,
    Qwertz,
    Dvorak,
    Colemak,
}

impl KnownLayout {
    // Rows top-to-bottom: number row, upper row, home row, bottom row.
    // Characters are listed in visual column order.
    fn rows(&self) -> [&'static str; 4] {
        match self {
            Self::Qwerty => ["`1234567890-=", "qwertyuiop[]\\", "asdfghjkl;'", "zxcvbnm,./"],
            Self::Azerty => ["²&é\"'(-è_çà)=", "azertyuiop^$", "qsdfghjklmù*", "wxcvbn,;:!"],
            Self::Qwertz => ["^1234567890ß´", "qwertzuiopü+", "asdfghjklöä#", "yxcvbnm,.-"],
            Self::Dvorak => ["`1234567890[]", "',.pyfgcrl/=\\", "aoeuidhtns-", ";qjkxbmwvz"],
            Self::Colemak => ["`1234567890-=", "qwfpgjluy;[]\\", "arstdhneio'", "zxcvbkm,./"],
        }
    }
}

// Hand and finger assignments follow the physical column, not the character,
// so they are shared across all row-staggered layouts. The number row splits
// one column further right than the letter rows.
fn hand_for(row: u8, col: usize) -> Hand {
    let split = if row == 0 { 6 } else { 5 };
    if col < split {
        Hand::Left
    } else {
        Hand::Right
    }
}

fn finger_for(row: u8, col: usize) -> Finger {
    if row == 0 {
        match col {
            0 | 1 => Finger::Pinky,
            2 => Finger::Ring,
            3 => Finger::Middle,
            4..=7 => Finger::Index,
            8 => Finger::Middle,
            9 => Finger::Ring,
            _ => Finger::Pinky,
        }
    } else {
        match col {
            0 => Finger::Pinky,
            1 => Finger::Ring,
            2 => Finger::Middle,
            3..=6 => Finger::Index,
            7 => Finger::Middle,
            8 => Finger::Ring,
            _ => Finger::Pinky,
        }
    }
}

fn build(layout: KnownLayout) -> KeyboardLayout {
    let mut map = HashMap::new();
    for (row, chars) in layout.rows().iter().enumerate() {
        let row = row as u8;
        for (col, ch) in chars.chars().enumerate() {
            map.insert(
                ch,
                KeyPosition {
                    row,
                    col: col as u8,
                    hand: hand_for(row, col),
                    finger: finger_for(row, col),
                },
            );
        }
    }
    map
}

static QWERTY: Lazy<KeyboardLayout> = Lazy::new(|| build(KnownLayout::Qwerty));
static AZERTY: Lazy<KeyboardLayout> = Lazy::new(|| build(KnownLayout::Azerty));
static QWERTZ: Lazy<KeyboardLayout> = Lazy::new(|| build(KnownLayout::Qwertz));
static DVORAK: Lazy<KeyboardLayout> = Lazy::new(|| build(KnownLayout::Dvorak));
static COLEMAK: Lazy<KeyboardLayout> = Lazy::new(|| build(KnownLayout::Colemak));

pub fn get_layout(layout: KnownLayout) -> &'static KeyboardLayout {
    match layout {
        KnownLayout::Qwerty => &QWERTY,
        KnownLayout::Azerty => &AZERTY,
        KnownLayout::Qwertz => &QWERTZ,
        KnownLayout::Dvorak => &DVORAK,
        KnownLayout::Colemak => &COLEMAK,
    }
}
