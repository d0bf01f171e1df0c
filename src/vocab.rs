use crate::models::Word;

type Entry = (&'static str, &'static str);

const ROW_A: &[Entry] = &[
    ("あさ", "asa"),
    ("あめ", "ame"),
    ("あき", "aki"),
    ("あお", "ao"),
    ("あい", "ai"),
];
const ROW_KA: &[Entry] = &[
    ("からて", "karate"),
    ("かぜ", "kaze"),
    ("かさ", "kasa"),
    ("かみ", "kami"),
    ("かわ", "kawa"),
];
const ROW_SA: &[Entry] = &[
    ("さかな", "sakana"),
    ("さくら", "sakura"),
    ("さけ", "sake"),
    ("さとう", "sato"),
    ("ささ", "sasa"),
];
const ROW_TA: &[Entry] = &[
    ("たいよう", "taiyou"),
    ("たまご", "tamago"),
    ("たこ", "tako"),
    ("たに", "tani"),
    ("たけ", "take"),
];
const ROW_NA: &[Entry] = &[
    ("なつ", "natsu"),
    ("なみ", "nami"),
    ("なべ", "nabe"),
    ("なわ", "nawa"),
    ("なお", "nao"),
];
const ROW_HA: &[Entry] = &[
    ("はな", "hana"),
    ("はこ", "hako"),
    ("はし", "hashi"),
    ("はる", "haru"),
    ("はやし", "hayashi"),
];
const ROW_MA: &[Entry] = &[
    ("まつり", "matsuri"),
    ("まくら", "makura"),
    ("まめ", "mame"),
    ("まち", "machi"),
    ("まど", "mado"),
];
const ROW_YA: &[Entry] = &[
    ("やま", "yama"),
    ("やさい", "yasai"),
    ("やすみ", "yasumi"),
    ("やく", "yaku"),
    ("やど", "yado"),
];
const ROW_RA: &[Entry] = &[
    ("らいねん", "rainen"),
    ("らっぱ", "rappa"),
    ("らく", "raku"),
    ("らくだ", "rakuda"),
    ("らん", "ran"),
];
const ROW_WA: &[Entry] = &[
    ("わし", "washi"),
    ("わらい", "warai"),
    ("わさび", "wasabi"),
    ("わに", "wani"),
    ("わた", "wata"),
];
const ROW_N: &[Entry] = &[
    ("ほん", "hon"),
    ("おんがく", "ongaku"),
    ("さんぽ", "sanpo"),
    ("きんこ", "kinko"),
    ("ぺん", "pen"),
];

/// Vocabulary tables in gojūon order. `wa-n` is resolved separately as the
/// union of `wa` and `n`.
const ROW_VOCABULARY: &[(&str, &[Entry])] = &[
    ("a", ROW_A),
    ("ka", ROW_KA),
    ("sa", ROW_SA),
    ("ta", ROW_TA),
    ("na", ROW_NA),
    ("ha", ROW_HA),
    ("ma", ROW_MA),
    ("ya", ROW_YA),
    ("ra", ROW_RA),
    ("wa", ROW_WA),
    ("n", ROW_N),
];

/// A row offered on the quiz setup screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KanaRow {
    pub id: &'static str,
    pub label: &'static str,
    /// Five columns; empty strings mark gaps in the gojūon grid.
    pub romaji: [&'static str; 5],
    pub characters: [&'static str; 5],
}

impl KanaRow {
    pub fn romaji_summary(&self) -> String {
        self.romaji
            .iter()
            .filter(|r| !r.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

pub const KANA_ROWS: [KanaRow; 10] = [
    KanaRow {
        id: "a",
        label: "あ行",
        romaji: ["a", "i", "u", "e", "o"],
        characters: ["あ", "い", "う", "え", "お"],
    },
    KanaRow {
        id: "ka",
        label: "か行",
        romaji: ["ka", "ki", "ku", "ke", "ko"],
        characters: ["か", "き", "く", "け", "こ"],
    },
    KanaRow {
        id: "sa",
        label: "さ行",
        romaji: ["sa", "shi", "su", "se", "so"],
        characters: ["さ", "し", "す", "せ", "そ"],
    },
    KanaRow {
        id: "ta",
        label: "た行",
        romaji: ["ta", "chi", "tsu", "te", "to"],
        characters: ["た", "ち", "つ", "て", "と"],
    },
    KanaRow {
        id: "na",
        label: "な行",
        romaji: ["na", "ni", "nu", "ne", "no"],
        characters: ["な", "に", "ぬ", "ね", "の"],
    },
    KanaRow {
        id: "ha",
        label: "は行",
        romaji: ["ha", "hi", "fu", "he", "ho"],
        characters: ["は", "ひ", "ふ", "へ", "ほ"],
    },
    KanaRow {
        id: "ma",
        label: "ま行",
        romaji: ["ma", "mi", "mu", "me", "mo"],
        characters: ["ま", "み", "む", "め", "も"],
    },
    KanaRow {
        id: "ya",
        label: "や行",
        romaji: ["ya", "", "yu", "", "yo"],
        characters: ["や", "", "ゆ", "", "よ"],
    },
    KanaRow {
        id: "ra",
        label: "ら行",
        romaji: ["ra", "ri", "ru", "re", "ro"],
        characters: ["ら", "り", "る", "れ", "ろ"],
    },
    KanaRow {
        id: "wa-n",
        label: "わ行",
        romaji: ["wa", "", "n", "", "wo"],
        characters: ["わ", "", "ん", "", "を"],
    },
];

pub fn all_row_ids() -> Vec<String> {
    KANA_ROWS.iter().map(|row| row.id.to_string()).collect()
}

fn to_words(entries: &[Entry]) -> Vec<Word> {
    entries
        .iter()
        .map(|(kana, romaji)| Word::new(kana, romaji))
        .collect()
}

/// Words belonging to a vocabulary row. Unknown ids yield nothing.
pub fn row_words(row_id: &str) -> Vec<Word> {
    if row_id == "wa-n" {
        let mut words = row_words("wa");
        words.extend(row_words("n"));
        return words;
    }
    ROW_VOCABULARY
        .iter()
        .find(|(id, _)| *id == row_id)
        .map(|(_, entries)| to_words(entries))
        .unwrap_or_default()
}

pub fn all_words() -> Vec<Word> {
    ROW_VOCABULARY
        .iter()
        .flat_map(|(_, entries)| to_words(entries))
        .collect()
}

/// Resolves the selected rows into the pool the generator draws from.
///
/// Falls back to the whole vocabulary when nothing usable is selected, and
/// drops repeated words so `wa` + `wa-n` does not double-count.
pub fn word_pool(rows: &[String]) -> Vec<Word> {
    let scoped: Vec<Word> = rows.iter().flat_map(|row| row_words(row)).collect();
    let words = if scoped.is_empty() { all_words() } else { scoped };

    let mut pool: Vec<Word> = Vec::with_capacity(words.len());
    for word in words {
        if !pool.contains(&word) {
            pool.push(word);
        }
    }
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_words_known_rows() {
        let a = row_words("a");
        assert_eq!(a.len(), 5);
        assert_eq!(a[0], Word::new("あさ", "asa"));
        assert_eq!(row_words("n")[4], Word::new("ぺん", "pen"));
    }

    #[test]
    fn test_row_words_combined_wa_n() {
        let words = row_words("wa-n");
        assert_eq!(words.len(), 10);
        assert_eq!(words[0], Word::new("わし", "washi"));
        assert_eq!(words[5], Word::new("ほん", "hon"));
    }

    #[test]
    fn test_row_words_unknown_row() {
        assert!(row_words("kya").is_empty());
    }

    #[test]
    fn test_all_words_covers_every_row() {
        assert_eq!(all_words().len(), 55);
    }

    #[test]
    fn test_word_pool_falls_back_to_all_words() {
        assert_eq!(word_pool(&[]).len(), 55);
        assert_eq!(word_pool(&["nope".to_string()]).len(), 55);
    }

    #[test]
    fn test_word_pool_collapses_duplicates() {
        let rows = vec!["wa".to_string(), "wa-n".to_string()];
        let pool = word_pool(&rows);
        assert_eq!(pool.len(), 10);
    }

    #[test]
    fn test_word_pool_scoped_rows() {
        let rows = vec!["a".to_string(), "ka".to_string()];
        let pool = word_pool(&rows);
        assert_eq!(pool.len(), 10);
        assert!(pool.contains(&Word::new("かぜ", "kaze")));
        assert!(!pool.contains(&Word::new("なつ", "natsu")));
    }

    #[test]
    fn test_setup_rows_have_vocabulary() {
        for row in KANA_ROWS.iter() {
            assert!(!row_words(row.id).is_empty(), "row {} has no words", row.id);
        }
    }

    #[test]
    fn test_romaji_summary_skips_gaps() {
        assert_eq!(KANA_ROWS[7].romaji_summary(), "ya / yu / yo");
        assert_eq!(KANA_ROWS[9].romaji_summary(), "wa / n / wo");
    }
}
