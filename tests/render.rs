//! Render scenarios exercised through the public API.

use typewriter::markup::Element;
use typewriter::typewriter::{
    HIDE_CLASS, LETTER_INDEX_ATTRIBUTE, LETTER_INDEX_VARIABLE, ROOT_ATTRIBUTE,
    WORD_INDEX_ATTRIBUTE, WORD_INDEX_VARIABLE,
};
use typewriter::{
    GraphemeSegmenter, Locale, TimingValue, Token, TypewriterByLetter, UnicodeGraphemeSegmenter,
};

/// The `aria-hidden` part of the tree holding words and letters
fn visible(root: &Element) -> &Element {
    root.find_by_attribute("aria-hidden", "true")
        .expect("aria-hidden container")
}

fn word_indices(root: &Element) -> Vec<String> {
    visible(root)
        .find_all_with_attribute(WORD_INDEX_ATTRIBUTE)
        .iter()
        .map(|word| {
            let index = word.get_attribute(WORD_INDEX_ATTRIBUTE).unwrap_or_default();
            assert_eq!(word.get_style_variable(WORD_INDEX_VARIABLE), Some(index));
            index.to_string()
        })
        .collect()
}

fn letter_indices(root: &Element) -> Vec<usize> {
    visible(root)
        .find_all_with_attribute(LETTER_INDEX_ATTRIBUTE)
        .iter()
        .map(|letter| {
            let index = letter.get_attribute(LETTER_INDEX_ATTRIBUTE).unwrap_or_default();
            assert_eq!(letter.get_style_variable(LETTER_INDEX_VARIABLE), Some(index));
            index.parse().expect("numeric letter index")
        })
        .collect()
}

fn hidden_text(root: &Element) -> String {
    root.find_all_with_class(HIDE_CLASS)
        .first()
        .map(|hidden| hidden.text_content())
        .unwrap_or_default()
}

mod scenarios {
    use super::*;

    #[test]
    fn two_words() {
        let root = TypewriterByLetter::new("Hi there").render();
        assert_eq!(word_indices(&root), ["0", "1"]);
        assert_eq!(letter_indices(&root), [0, 1, 2, 3, 4, 5, 6]);

        let words = visible(&root).find_all_with_attribute(WORD_INDEX_ATTRIBUTE);
        assert_eq!(words[0].text_content(), "Hi");
        assert_eq!(words[1].text_content(), "there");
    }

    #[test]
    fn single_letter_words() {
        let root = TypewriterByLetter::new("A B").render();
        assert_eq!(letter_indices(&root), [0, 1]);
    }

    #[test]
    fn three_words() {
        let root = TypewriterByLetter::new("Hallo Welt Test").render();
        assert_eq!(word_indices(&root), ["0", "1", "2"]);
        assert_eq!(letter_indices(&root), (0..13).collect::<Vec<usize>>());
    }

    #[test]
    fn empty_text() {
        let root = TypewriterByLetter::new("").render();
        assert!(root.has_attribute(ROOT_ATTRIBUTE));
        assert!(word_indices(&root).is_empty());
        assert!(letter_indices(&root).is_empty());
        assert_eq!(hidden_text(&root), "");
    }

    #[test]
    fn whitespace_runs_do_not_skip_word_indices() {
        let root = TypewriterByLetter::new("  hello   world  ").render();
        assert_eq!(word_indices(&root), ["0", "1"]);
        assert_eq!(letter_indices(&root), (0..10).collect::<Vec<usize>>());
        assert_eq!(visible(&root).text_content(), "  hello   world  ");
    }

    #[test]
    fn leading_and_trailing_spaces() {
        let tokens = TypewriterByLetter::new(" hello ").tokens();
        assert_eq!(tokens.len(), 3);
        assert!(tokens[0].is_space());
        assert_eq!(tokens[1].as_word().map(ToString::to_string).as_deref(), Some("hello"));
        assert!(tokens[2].is_space());
    }

    #[test]
    fn emoji_and_accents_are_single_letters() {
        let root = TypewriterByLetter::new("🌞 Good 👨\u{200d}👩\u{200d}👧 cafe\u{301}").render();
        // 🌞 | G o o d | family | c a f é
        assert_eq!(letter_indices(&root).len(), 1 + 4 + 1 + 4);
        assert_eq!(word_indices(&root), ["0", "1", "2", "3"]);
    }
}

mod accessibility {
    use super::*;

    #[test]
    fn hidden_text_round_trips_any_input() {
        let samples = [
            "Hello",
            "Test text",
            " \t leading and trailing \r\n",
            "<script>alert('x')</script> & more",
            "🌞 Good Morning Billy, I break naturally 🌅 instead of by letter",
        ];
        for text in samples {
            let root = TypewriterByLetter::new(text).render();
            assert_eq!(hidden_text(&root), text);
        }
    }

    #[test]
    fn decorative_structure_is_hidden_from_assistive_technology() {
        let root = TypewriterByLetter::new("Hi").render();
        let container = visible(&root);
        assert_eq!(container.get_attribute("aria-hidden"), Some("true"));
        assert_eq!(container.text_content(), "Hi");
        assert!(!root.find_all_with_class("word").is_empty());
        assert!(!root.find_all_with_class("letter").is_empty());
    }
}

mod options {
    use super::*;

    #[test]
    fn custom_locale_and_segmenter_render_the_same_text() {
        let french = TypewriterByLetter::new("Hallo").locale("fr".parse().unwrap()).render();
        assert_eq!(hidden_text(&french), "Hallo");

        let german = UnicodeGraphemeSegmenter::new("de".parse::<Locale>().unwrap());
        let mixed = TypewriterByLetter::new("Hallo Welt")
            .locale("en".parse().unwrap())
            .segmenter(&german)
            .render();
        assert_eq!(hidden_text(&mixed), "Hallo Welt");
        assert_eq!(letter_indices(&mixed).len(), 9);
    }

    #[test]
    fn any_segmenter_implementation_can_be_plugged_in() {
        /// Treats every `char` as its own cluster
        struct CharSegmenter(Locale);

        impl GraphemeSegmenter for CharSegmenter {
            fn locale(&self) -> &Locale {
                &self.0
            }

            fn segment(&self, text: &str) -> Vec<typewriter::GraphemeSegment> {
                text.char_indices()
                    .map(|(start, ch)| typewriter::GraphemeSegment::new(ch.encode_utf8(&mut [0; 4]), start))
                    .collect()
            }
        }

        let segmenter = CharSegmenter(Locale::default());
        let component = TypewriterByLetter::new("e\u{301}!").segmenter(&segmenter);
        assert_eq!(letter_indices(&component.render()), [0, 1, 2]);
        assert!(matches!(&component.tokens()[0], Token::Word(word) if word.len() == 3));
    }

    #[test]
    fn timing_values_become_root_style_variables() {
        let root = TypewriterByLetter::new("Hi")
            .delay("1000ms".parse().unwrap())
            .drag_delay("25ms".parse().unwrap())
            .duration("500ms".parse().unwrap())
            .render();
        assert_eq!(root.get_style_variable("--delay"), Some("1000ms"));
        assert_eq!(root.get_style_variable("--dragDelay"), Some("25ms"));
        assert_eq!(root.get_style_variable("--duration"), Some("500ms"));

        let seconds = TypewriterByLetter::new("Test")
            .delay("2s".parse().unwrap())
            .drag_delay("0.1s".parse().unwrap())
            .duration("1.5s".parse().unwrap())
            .render();
        assert_eq!(seconds.get_style_variable("--delay"), Some("2s"));
        assert_eq!(seconds.get_style_variable("--dragDelay"), Some("0.1s"));
        assert_eq!(seconds.get_style_variable("--duration"), Some("1.5s"));
    }

    #[test]
    fn unset_timing_values_are_omitted() {
        let root = TypewriterByLetter::new("Test")
            .duration("750ms".parse().unwrap())
            .render();
        assert_eq!(root.get_style_variable("--duration"), Some("750ms"));
        assert_eq!(root.get_style_variable("--delay"), None);
        assert_eq!(root.get_style_variable("--dragDelay"), None);
    }

    #[test]
    fn timing_values_pass_through_unchanged() {
        let root = TypewriterByLetter::new("Hi")
            .delay("-200ms".parse().unwrap())
            .drag_delay("1e2ms".parse().unwrap())
            .duration(TimingValue::verbatim("calc(1s + 50ms)"))
            .render();
        assert_eq!(root.get_style_variable("--delay"), Some("-200ms"));
        assert_eq!(root.get_style_variable("--dragDelay"), Some("1e2ms"));
        assert_eq!(root.get_style_variable("--duration"), Some("calc(1s + 50ms)"));
    }
}

mod html {
    use super::*;

    #[test]
    fn serializes_words_and_letters() {
        let html = TypewriterByLetter::new("A B")
            .duration("500ms".parse().unwrap())
            .render()
            .to_string();
        insta::assert_snapshot!(html, @r#"<span data-typewriter-by-letter style="--duration:500ms"><span class="hide">A B</span><span aria-hidden="true"><span class="word" data-word-index="0" style="--wi:0"><span class="letter" data-letter-index="0" style="--i:0">A</span></span> <span class="word" data-word-index="1" style="--wi:1"><span class="letter" data-letter-index="1" style="--i:1">B</span></span></span></span>"#);
    }

    #[test]
    fn serializes_empty_text() {
        let html = TypewriterByLetter::new("").render().to_string();
        insta::assert_snapshot!(html, @r#"<span data-typewriter-by-letter><span class="hide"></span><span aria-hidden="true"></span></span>"#);
    }

    #[test]
    fn escapes_markup_in_text() {
        let html = TypewriterByLetter::new("<b>").render().to_string();
        assert!(html.contains(r#"<span class="hide">&lt;b&gt;</span>"#));
        assert!(html.contains(r#"style="--i:0">&lt;</span>"#));
    }
}
