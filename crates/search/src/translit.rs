//! Cyrillic-to-Latin transliteration.
//!
//! Maps lowercase Russian letters to a fixed Latin approximation so a
//! query like "рюс" can match a product code containing "rus".
//! Characters outside the table pass through unchanged.

/// Latin approximation for one lowercase Cyrillic letter, or `None`
/// for any character outside the table.
const fn latin_of(c: char) -> Option<&'static str> {
    Some(match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' | 'ё' | 'э' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' | 'ы' => "y",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    })
}

/// Transliterate lowercase Cyrillic letters to their Latin
/// approximation, character by character. Anything not in the table
/// (Latin letters, digits, punctuation, whitespace, uppercase
/// Cyrillic) passes through verbatim.
///
/// No normalization happens here; callers are expected to
/// [`normalize`](crate::normalize) first.
pub fn transliterate(text: &str) -> String {
    // "shch" is the longest expansion; 2x is a comfortable upper bound.
    let mut out = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        match latin_of(c) {
            Some(latin) => out.push_str(latin),
            None => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_word() {
        assert_eq!(transliterate("рюкзак"), "ryukzak");
    }

    #[test]
    fn test_hard_and_soft_signs_pass_through() {
        // ъ and ь are not in the table and survive verbatim.
        assert_eq!(transliterate("платье"), "platьe");
    }

    #[test]
    fn test_multi_char_letters() {
        assert_eq!(transliterate("жщцчшюя"), "zhshchtschshyuya");
    }

    #[test]
    fn test_latin_passthrough() {
        assert_eq!(transliterate("rv-w-001"), "rv-w-001");
    }

    #[test]
    fn test_mixed_script() {
        assert_eq!(transliterate("рус rus 42!"), "rus rus 42!");
    }

    #[test]
    fn test_uppercase_cyrillic_passes_through() {
        // Callers normalize first; uppercase is outside the table.
        assert_eq!(transliterate("РУС"), "РУС");
    }

    #[test]
    fn test_empty() {
        assert_eq!(transliterate(""), "");
    }
}
