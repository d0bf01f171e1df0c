use crate::models::AppState;
use crossterm::event::{KeyCode, KeyEvent};

/// Sample word shown next to a kana on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vocab {
    pub word: &'static str,
    pub reading: &'static str,
    pub meaning: &'static str,
    pub icon: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kana {
    pub symbol: &'static str,
    pub romaji: &'static str,
    pub stroke_count: u8,
    pub vocab: &'static [Vocab],
}

const fn kana(
    symbol: &'static str,
    romaji: &'static str,
    stroke_count: u8,
    vocab: &'static [Vocab],
) -> Kana {
    Kana {
        symbol,
        romaji,
        stroke_count,
        vocab,
    }
}

const fn vocab(
    word: &'static str,
    reading: &'static str,
    meaning: &'static str,
    icon: Option<&'static str>,
) -> Vocab {
    Vocab {
        word,
        reading,
        meaning,
        icon,
    }
}

pub const HIRAGANA: [Kana; 46] = [
    kana(
        "あ",
        "a",
        3,
        &[
            vocab("あした", "ashita", "tomorrow", Some("🌤️")),
            vocab("あめ", "ame", "rain", Some("🌧️")),
        ],
    ),
    kana(
        "い",
        "i",
        2,
        &[
            vocab("いぬ", "inu", "dog", Some("🐶")),
            vocab("いけ", "ike", "pond", None),
        ],
    ),
    kana(
        "う",
        "u",
        2,
        &[
            vocab("うみ", "umi", "sea", Some("🌊")),
            vocab("うた", "uta", "song", None),
        ],
    ),
    kana(
        "え",
        "e",
        2,
        &[
            vocab("えき", "eki", "station", None),
            vocab("えがお", "egao", "smile", None),
        ],
    ),
    kana(
        "お",
        "o",
        3,
        &[
            vocab("おちゃ", "ocha", "tea", Some("🍵")),
            vocab("おかね", "okane", "money", None),
        ],
    ),
    kana(
        "か",
        "ka",
        3,
        &[
            vocab("からて", "karate", "karate", None),
            vocab("かぜ", "kaze", "wind", Some("🍃")),
        ],
    ),
    kana(
        "き",
        "ki",
        4,
        &[
            vocab("き", "ki", "tree", Some("🌳")),
            vocab("きっぷ", "kippu", "ticket", None),
        ],
    ),
    kana(
        "く",
        "ku",
        1,
        &[
            vocab("くも", "kumo", "cloud", Some("☁️")),
            vocab("くつ", "kutsu", "shoes", None),
        ],
    ),
    kana(
        "け",
        "ke",
        3,
        &[
            vocab("けむり", "kemuri", "smoke", None),
            vocab("けしき", "keshiki", "scenery", None),
        ],
    ),
    kana(
        "こ",
        "ko",
        2,
        &[
            vocab("こども", "kodomo", "child", None),
            vocab("ことり", "kotori", "little bird", None),
        ],
    ),
    kana(
        "さ",
        "sa",
        3,
        &[
            vocab("さくら", "sakura", "cherry blossom", Some("🌸")),
            vocab("さかな", "sakana", "fish", None),
        ],
    ),
    kana(
        "し",
        "shi",
        1,
        &[
            vocab("しお", "shio", "salt", None),
            vocab("しま", "shima", "island", None),
        ],
    ),
    kana(
        "す",
        "su",
        2,
        &[
            vocab("すいか", "suika", "watermelon", None),
            vocab("すな", "suna", "sand", None),
        ],
    ),
    kana(
        "せ",
        "se",
        3,
        &[
            vocab("せかい", "sekai", "world", None),
            vocab("せんせい", "sensei", "teacher", None),
        ],
    ),
    kana(
        "そ",
        "so",
        2,
        &[
            vocab("そら", "sora", "sky", None),
            vocab("そば", "soba", "buckwheat noodles", None),
        ],
    ),
    kana(
        "た",
        "ta",
        4,
        &[
            vocab("たいよう", "taiyou", "sun", Some("☀️")),
            vocab("たまご", "tamago", "egg", None),
        ],
    ),
    kana(
        "ち",
        "chi",
        2,
        &[
            vocab("ちず", "chizu", "map", None),
            vocab("ちから", "chikara", "strength", None),
        ],
    ),
    kana(
        "つ",
        "tsu",
        1,
        &[
            vocab("つき", "tsuki", "moon", Some("🌙")),
            vocab("つめたい", "tsumetai", "cold (touch)", None),
        ],
    ),
    kana(
        "て",
        "te",
        1,
        &[
            vocab("て", "te", "hand", None),
            vocab("てがみ", "tegami", "letter", None),
        ],
    ),
    kana(
        "と",
        "to",
        2,
        &[
            vocab("とり", "tori", "bird", Some("🐦")),
            vocab("ともだち", "tomodachi", "friend", None),
        ],
    ),
    kana(
        "な",
        "na",
        4,
        &[
            vocab("なつ", "natsu", "summer", None),
            vocab("なみ", "nami", "wave", None),
        ],
    ),
    kana(
        "に",
        "ni",
        3,
        &[
            vocab("にほん", "nihon", "Japan", None),
            vocab("にく", "niku", "meat", None),
        ],
    ),
    kana(
        "ぬ",
        "nu",
        2,
        &[
            vocab("ぬの", "nuno", "cloth", None),
            vocab("ぬりえ", "nurie", "coloring book", None),
        ],
    ),
    kana(
        "ね",
        "ne",
        2,
        &[
            vocab("ねこ", "neko", "cat", Some("🐱")),
            vocab("ねつ", "netsu", "fever", None),
        ],
    ),
    kana(
        "の",
        "no",
        1,
        &[
            vocab("のり", "nori", "seaweed", None),
            vocab("のはら", "nohara", "field", None),
        ],
    ),
    kana(
        "は",
        "ha",
        3,
        &[
            vocab("はな", "hana", "flower", Some("🌺")),
            vocab("はこ", "hako", "box", None),
        ],
    ),
    kana(
        "ひ",
        "hi",
        1,
        &[
            vocab("ひ", "hi", "fire", Some("🔥")),
            vocab("ひこうき", "hikouki", "airplane", None),
        ],
    ),
    kana(
        "ふ",
        "fu",
        4,
        &[
            vocab("ふね", "fune", "ship", None),
            vocab("ふゆ", "fuyu", "winter", None),
        ],
    ),
    kana(
        "へ",
        "he",
        1,
        &[
            vocab("へや", "heya", "room", None),
            vocab("へん", "hen", "strange", None),
        ],
    ),
    kana(
        "ほ",
        "ho",
        4,
        &[
            vocab("ほし", "hoshi", "star", Some("⭐")),
            vocab("ほね", "hone", "bone", None),
        ],
    ),
    kana(
        "ま",
        "ma",
        3,
        &[
            vocab("まつり", "matsuri", "festival", None),
            vocab("まくら", "makura", "pillow", None),
        ],
    ),
    kana(
        "み",
        "mi",
        2,
        &[
            vocab("みず", "mizu", "water", None),
            vocab("みみ", "mimi", "ear", None),
        ],
    ),
    kana(
        "む",
        "mu",
        3,
        &[
            vocab("むし", "mushi", "insect", None),
            vocab("むね", "mune", "chest", None),
        ],
    ),
    kana(
        "め",
        "me",
        2,
        &[
            vocab("め", "me", "eye", None),
            vocab("めがね", "megane", "glasses", None),
        ],
    ),
    kana(
        "も",
        "mo",
        3,
        &[
            vocab("もり", "mori", "forest", None),
            vocab("もも", "momo", "peach", None),
        ],
    ),
    kana(
        "や",
        "ya",
        3,
        &[
            vocab("やま", "yama", "mountain", Some("⛰️")),
            vocab("やさい", "yasai", "vegetable", None),
        ],
    ),
    kana(
        "ゆ",
        "yu",
        2,
        &[
            vocab("ゆき", "yuki", "snow", Some("❄️")),
            vocab("ゆめ", "yume", "dream", None),
        ],
    ),
    kana(
        "よ",
        "yo",
        2,
        &[
            vocab("よる", "yoru", "night", None),
            vocab("ようふく", "youfuku", "clothes", None),
        ],
    ),
    kana(
        "ら",
        "ra",
        2,
        &[
            vocab("らいねん", "rainen", "next year", None),
            vocab("らっぱ", "rappa", "trumpet", None),
        ],
    ),
    kana(
        "り",
        "ri",
        1,
        &[
            vocab("りす", "risu", "squirrel", None),
            vocab("りんご", "ringo", "apple", Some("🍎")),
        ],
    ),
    kana(
        "る",
        "ru",
        2,
        &[
            vocab("るす", "rusu", "absence", None),
            vocab("るい", "rui", "category", None),
        ],
    ),
    kana(
        "れ",
        "re",
        2,
        &[
            vocab("れいぞうこ", "reizouko", "refrigerator", None),
            vocab("れんあい", "renai", "romance", None),
        ],
    ),
    kana(
        "ろ",
        "ro",
        1,
        &[
            vocab("ろうそく", "rousoku", "candle", None),
            vocab("ろば", "roba", "donkey", None),
        ],
    ),
    kana(
        "わ",
        "wa",
        2,
        &[
            vocab("わし", "washi", "eagle", None),
            vocab("わらい", "warai", "laughter", None),
        ],
    ),
    kana(
        "を",
        "wo",
        2,
        &[
            vocab("をとこ", "otoko", "man", None),
            vocab("をんがく", "ongaku", "music", None),
        ],
    ),
    kana(
        "ん",
        "n",
        1,
        &[
            vocab("んまい", "nmai", "tasty (dialect)", None),
            vocab("んい", "n'i", "sound sample", None),
        ],
    ),
];

pub const CHART_COLUMNS: usize = 5;

/// Gojūon layout of the chart; `None` marks an empty cell.
pub const CHART_ORDER: [[Option<&str>; CHART_COLUMNS]; 11] = [
    [Some("あ"), Some("い"), Some("う"), Some("え"), Some("お")],
    [Some("か"), Some("き"), Some("く"), Some("け"), Some("こ")],
    [Some("さ"), Some("し"), Some("す"), Some("せ"), Some("そ")],
    [Some("た"), Some("ち"), Some("つ"), Some("て"), Some("と")],
    [Some("な"), Some("に"), Some("ぬ"), Some("ね"), Some("の")],
    [Some("は"), Some("ひ"), Some("ふ"), Some("へ"), Some("ほ")],
    [Some("ま"), Some("み"), Some("む"), Some("め"), Some("も")],
    [Some("や"), None, Some("ゆ"), None, Some("よ")],
    [Some("ら"), Some("り"), Some("る"), Some("れ"), Some("ろ")],
    [Some("わ"), None, None, None, Some("を")],
    [Some("ん"), None, None, None, None],
];

pub fn find_kana(symbol: &str) -> Option<&'static Kana> {
    HIRAGANA.iter().find(|kana| kana.symbol == symbol)
}

pub fn chart_cell(row: usize, col: usize) -> Option<&'static Kana> {
    CHART_ORDER
        .get(row)
        .and_then(|cells| cells.get(col))
        .copied()
        .flatten()
        .and_then(find_kana)
}

/// Cursor on the chart. Always rests on a populated cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChartState {
    pub row: usize,
    pub col: usize,
}

impl ChartState {
    pub fn selected(&self) -> Option<&'static Kana> {
        chart_cell(self.row, self.col)
    }

    fn move_horizontal(&mut self, forward: bool) {
        let mut col = self.col;
        loop {
            col = match (forward, col) {
                (true, c) if c + 1 < CHART_COLUMNS => c + 1,
                (false, c) if c > 0 => c - 1,
                _ => return,
            };
            if chart_cell(self.row, col).is_some() {
                self.col = col;
                return;
            }
        }
    }

    fn move_vertical(&mut self, forward: bool) {
        let target = match forward {
            true if self.row + 1 < CHART_ORDER.len() => self.row + 1,
            false if self.row > 0 => self.row - 1,
            _ => return,
        };
        // nearest populated column, preferring the left one on ties
        let nearest = (0..CHART_COLUMNS)
            .filter(|&c| chart_cell(target, c).is_some())
            .min_by_key(|&c| (c.abs_diff(self.col), c));
        if let Some(col) = nearest {
            self.row = target;
            self.col = col;
        }
    }

    pub fn select_symbol(&mut self, symbol: &str) -> bool {
        for (row, cells) in CHART_ORDER.iter().enumerate() {
            if let Some(col) = cells.iter().position(|cell| *cell == Some(symbol)) {
                self.row = row;
                self.col = col;
                return true;
            }
        }
        false
    }
}

pub fn handle_chart_input(chart: &mut ChartState, key: KeyEvent, app_state: &mut AppState) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('m') => *app_state = AppState::Menu,
        KeyCode::Char('q') => *app_state = AppState::Setup,
        KeyCode::Left => chart.move_horizontal(false),
        KeyCode::Right => chart.move_horizontal(true),
        KeyCode::Up => chart.move_vertical(false),
        KeyCode::Down => chart.move_vertical(true),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_every_chart_cell_resolves() {
        let mut populated = 0;
        for (row, cells) in CHART_ORDER.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell.is_some() {
                    assert!(chart_cell(row, col).is_some(), "missing {:?}", cell);
                    populated += 1;
                }
            }
        }
        assert_eq!(populated, HIRAGANA.len());
    }

    #[test]
    fn test_every_kana_has_vocabulary() {
        for kana in HIRAGANA.iter() {
            assert!(!kana.vocab.is_empty(), "{} has no vocab", kana.symbol);
            assert!(kana.stroke_count >= 1);
        }
    }

    #[test]
    fn test_default_selection_is_a() {
        let chart = ChartState::default();
        let kana = chart.selected().unwrap();
        assert_eq!(kana.symbol, "あ");
        assert_eq!(kana.romaji, "a");
        assert_eq!(kana.stroke_count, 3);
    }

    #[test]
    fn test_horizontal_moves_skip_gaps() {
        let mut chart = ChartState::default();
        chart.select_symbol("や");
        chart.move_horizontal(true);
        assert_eq!(chart.selected().unwrap().symbol, "ゆ");
        chart.move_horizontal(true);
        assert_eq!(chart.selected().unwrap().symbol, "よ");
        chart.move_horizontal(true);
        assert_eq!(chart.selected().unwrap().symbol, "よ");
    }

    #[test]
    fn test_vertical_moves_snap_to_nearest_column() {
        let mut chart = ChartState::default();
        chart.select_symbol("み");
        chart.move_vertical(true);
        // や row has no column 1; left neighbour wins the tie
        assert_eq!(chart.selected().unwrap().symbol, "や");

        chart.select_symbol("を");
        chart.move_vertical(true);
        assert_eq!(chart.selected().unwrap().symbol, "ん");
        chart.move_vertical(true);
        assert_eq!(chart.selected().unwrap().symbol, "ん");
    }

    #[test]
    fn test_chart_keys() {
        let mut chart = ChartState::default();
        let mut state = AppState::Chart;
        handle_chart_input(&mut chart, key(KeyCode::Down), &mut state);
        handle_chart_input(&mut chart, key(KeyCode::Right), &mut state);
        assert_eq!(chart.selected().unwrap().symbol, "き");
        handle_chart_input(&mut chart, key(KeyCode::Esc), &mut state);
        assert_eq!(state, AppState::Menu);
    }

    #[test]
    fn test_select_unknown_symbol() {
        let mut chart = ChartState::default();
        assert!(!chart.select_symbol("ア"));
        assert_eq!(chart, ChartState::default());
    }
}
