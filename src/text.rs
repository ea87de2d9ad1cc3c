use std::fmt;

use yew::prelude::*;

/// One word of a headline, kept together when the line wraps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    pub chars: Vec<char>,
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Splits `text` on whitespace into words of characters. Whitespace runs
/// collapse, so blank input gives no words.
pub fn decompose(text: &str) -> Vec<Word> {
    text.split_whitespace()
        .map(|word| Word {
            chars: word.chars().collect(),
        })
        .collect()
}

/// Renders the words as `.word-wrap` spans holding one `.char` span per
/// character, which is what the entry timeline targets.
pub fn render_animated(words: &[Word]) -> Html {
    html! {
        { for words.iter().enumerate().map(|(word_index, word)| html! {
            <span key={word_index} class="word-wrap">
                { for word.chars.iter().enumerate().map(|(char_index, ch)| html! {
                    <span key={char_index} class="char">{ ch.to_string() }</span>
                }) }
            </span>
        }) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejoin(words: &[Word]) -> String {
        words
            .iter()
            .map(Word::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn headline_keeps_words_and_order() {
        let words = decompose("WELCOME ITZFIZZ");
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].to_string(), "WELCOME");
        assert_eq!(words[1].chars, vec!['I', 'T', 'Z', 'F', 'I', 'Z', 'Z']);
        assert_eq!(words.iter().map(|w| w.chars.len()).sum::<usize>(), 14);
        assert_eq!(rejoin(&words), "WELCOME ITZFIZZ");
    }

    #[test]
    fn blank_input_has_no_words() {
        assert!(decompose("").is_empty());
        assert!(decompose("   \t ").is_empty());
    }

    #[test]
    fn whitespace_runs_collapse() {
        let words = decompose("  the   future\tis electric ");
        assert_eq!(rejoin(&words), "the future is electric");
    }

    #[test]
    fn multibyte_characters_stay_whole() {
        let words = decompose("café über");
        assert_eq!(words[0].chars.len(), 4);
        assert_eq!(words[0].chars[3], 'é');
        assert_eq!(rejoin(&words), "café über");
    }

    #[test]
    fn rejoin_matches_normalised_input() {
        for input in ["a", "ab cd", "x  y z", "WELCOME ITZFIZZ", "01 9.8s MAX"] {
            let normalised = input.split_whitespace().collect::<Vec<_>>().join(" ");
            assert_eq!(rejoin(&decompose(input)), normalised);
        }
    }
}
