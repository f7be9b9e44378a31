#[cfg(test)]
mod integration_tests {

    use crate::{
        CleanConfig, Cleaned, Cleaner, CollaboratorError, EmojiMode, EmojiTransform,
        LanguageDetector, Rejection, TextFixer, Transliterator,
    };
    use std::{borrow::Cow, sync::Arc};

    struct BrokenTransliterator;

    impl Transliterator for BrokenTransliterator {
        fn transliterate<'a>(&self, _text: &'a str) -> Result<Cow<'a, str>, CollaboratorError> {
            Err(CollaboratorError::Failed {
                collaborator: "broken",
                reason: "table missing".into(),
            })
        }
    }

    struct BrokenFixer;

    impl TextFixer for BrokenFixer {
        fn fix<'a>(&self, _text: &'a str) -> Result<Cow<'a, str>, CollaboratorError> {
            Err(CollaboratorError::Unsupported("broken"))
        }
    }

    struct BrokenEmoji;

    impl EmojiTransform for BrokenEmoji {
        fn transform<'a>(
            &self,
            _text: &'a str,
            _mode: EmojiMode,
        ) -> Result<Cow<'a, str>, CollaboratorError> {
            Err(CollaboratorError::Unsupported("broken"))
        }
    }

    struct BrokenDetector;

    impl LanguageDetector for BrokenDetector {
        fn detect(&self, _text: &str) -> Result<Option<String>, CollaboratorError> {
            Err(CollaboratorError::Unsupported("broken"))
        }
    }

    const SAMPLES: &[&str] = &[
        "Crème Brûlée at the Café 👍",
        "<p>Ærøskøbing &amp; Zürich</p>",
        "plain ascii",
        "naïve résumé, visit https://例え.jp now",
        "",
    ];

    fn english_filter() -> CleanConfig {
        CleanConfig {
            language_filter: Some("en".into()),
            ..CleanConfig::default()
        }
    }

    #[test]
    fn production_pipeline_html_document() {
        let html = "<html><head><style>p { color: red }</style>\
                    <script>track()</script></head>\
                    <body><h1>Title</h1><p>Hello&nbsp;World &amp; friends</p></body></html>";
        assert_eq!(Cleaner::default().clean(html), "title hello world & friends");
    }

    #[test]
    fn production_pipeline_mojibake_and_markup() {
        assert_eq!(
            Cleaner::default().clean("cafÃ© <b>MENU</b> â€” visit www.cafe.fr"),
            "cafe menu -- visit"
        );
    }

    #[test]
    fn production_pipeline_accents_are_folded() {
        assert_eq!(
            Cleaner::default().clean("  Crème   Brûlée\n\nÀ LA CARTE "),
            "creme brulee a la carte"
        );
    }

    #[test]
    fn trailing_open_tag_does_not_leak_script_text() {
        assert_eq!(
            Cleaner::default().clean("<script>track(user)</script><p>Tom &amp; Jerry</p> a<b"),
            "tom & jerry a<b"
        );
    }

    #[test]
    fn unclosed_script_is_dropped_to_end_of_input() {
        assert_eq!(
            Cleaner::default().clean("<p>Hello</p><script>var secret = 1;"),
            "hello"
        );
    }

    #[test]
    fn apostrophe_in_unquoted_attribute_keeps_style_hidden() {
        assert_eq!(
            Cleaner::default().clean("<p class=x title=don't>word</p><style>p{}</style>ok"),
            "word ok"
        );
    }

    #[test]
    fn emoji_alias_when_not_removing() {
        let cleaner = Cleaner::new(CleanConfig {
            normalize_unicode: false,
            ..CleanConfig::default()
        });
        assert_eq!(cleaner.clean("Great job 👍"), "great job :thumbs_up:");
    }

    #[test]
    fn emoji_removed_when_both_flags_on() {
        let cleaner = Cleaner::new(CleanConfig {
            normalize_unicode: false,
            remove_emojis: true,
            emoji_replace_with_alias: true,
            ..CleanConfig::default()
        });
        assert_eq!(cleaner.clean("Great job 👍"), "great job");
    }

    #[test]
    fn emoji_aliased_when_removing_without_alias_flag() {
        let cleaner = Cleaner::new(CleanConfig {
            normalize_unicode: false,
            remove_emojis: true,
            emoji_replace_with_alias: false,
            ..CleanConfig::default()
        });
        assert_eq!(cleaner.clean("Great job 👍"), "great job :thumbs_up:");
    }

    #[test]
    fn emoji_kept_when_both_flags_off() {
        let cleaner = Cleaner::new(CleanConfig {
            normalize_unicode: false,
            emoji_replace_with_alias: false,
            ..CleanConfig::default()
        });
        assert_eq!(cleaner.clean("Great job 👍"), "great job 👍");
    }

    #[test]
    fn language_mismatch_rejects() {
        let cleaner = Cleaner::builder()
            .config(english_filter())
            .language_detector(|_: &str| Some("fr".to_string()))
            .build();
        assert_eq!(
            cleaner.clean("Bonjour tout le monde"),
            Cleaned::Rejected(Rejection::Language {
                detected: "fr".into(),
                expected: "en".into(),
            })
        );
    }

    #[test]
    fn language_match_passes() {
        let cleaner = Cleaner::builder()
            .config(english_filter())
            .language_detector(|_: &str| Some("en".to_string()))
            .build();
        assert_eq!(cleaner.clean("Hello there"), "hello there");
    }

    #[test]
    fn language_gate_sees_cleaned_text() {
        let cleaner = Cleaner::builder()
            .config(english_filter())
            .language_detector(|text: &str| {
                (text == "hello there").then(|| "en".to_string())
            })
            .build();
        assert_eq!(cleaner.clean("<b>HELLO</b>   there"), "hello there");
    }

    #[test]
    fn language_detector_failure_is_not_a_rejection() {
        let cleaner = Cleaner::builder()
            .config(english_filter())
            .language_detector(BrokenDetector)
            .build();
        assert_eq!(cleaner.clean("Bonjour"), "bonjour");
    }

    #[test]
    fn blank_text_skips_language_gate_but_fails_length() {
        let cleaner = Cleaner::builder()
            .config(english_filter())
            .language_detector(|_: &str| Some("fr".to_string()))
            .build();
        assert_eq!(
            cleaner.clean("   "),
            Cleaned::Rejected(Rejection::TooShort { len: 0, min: 1 })
        );
    }

    #[test]
    fn failing_transliterator_equals_disabled_stage() {
        let broken = Cleaner::builder()
            .transliterator(BrokenTransliterator)
            .build();
        let disabled = Cleaner::new(CleanConfig {
            normalize_unicode: false,
            ..CleanConfig::default()
        });
        for &sample in SAMPLES {
            assert_eq!(broken.clean(sample), disabled.clean(sample), "{sample}");
        }
    }

    #[test]
    fn failing_fixer_equals_disabled_stage() {
        let broken = Cleaner::builder().fixer(BrokenFixer).build();
        let disabled = Cleaner::new(CleanConfig {
            fix_text: false,
            ..CleanConfig::default()
        });
        for &sample in SAMPLES {
            assert_eq!(broken.clean(sample), disabled.clean(sample), "{sample}");
        }
    }

    #[test]
    fn failing_emoji_transform_equals_disabled_stage() {
        let config = CleanConfig {
            normalize_unicode: false,
            remove_emojis: true,
            ..CleanConfig::default()
        };
        let broken = Cleaner::builder()
            .config(config.clone())
            .emoji(BrokenEmoji)
            .build();
        let disabled = Cleaner::new(CleanConfig {
            remove_emojis: false,
            emoji_replace_with_alias: false,
            ..config
        });
        for &sample in SAMPLES {
            assert_eq!(broken.clean(sample), disabled.clean(sample), "{sample}");
        }
    }

    #[test]
    fn overrides_from_json_drive_the_pipeline() {
        let config = CleanConfig::from_json_str(
            r#"{ "remove_punctuation": true, "min_length": 3, "not_an_option": "x" }"#,
        )
        .unwrap();
        let cleaner = Cleaner::new(config);
        assert_eq!(cleaner.clean("Hi!"), Cleaned::Rejected(Rejection::TooShort { len: 2, min: 3 }));
        assert_eq!(cleaner.clean("Hey you!"), "hey you");
    }

    #[test]
    fn shared_across_threads() {
        let cleaner = Arc::new(Cleaner::default());
        let inputs = ["<b>One</b>", "Two  two", "Thrée", "four@example.com Four"];
        std::thread::scope(|s| {
            let handles: Vec<_> = inputs
                .iter()
                .map(|&input| {
                    let cleaner = Arc::clone(&cleaner);
                    s.spawn(move || cleaner.clean(input).into_option())
                })
                .collect();
            let results: Vec<_> = handles
                .into_iter()
                .map(|h| h.join().expect("worker panicked"))
                .collect();
            assert_eq!(
                results,
                [
                    Some("one".to_string()),
                    Some("two two".to_string()),
                    Some("three".to_string()),
                    Some("four".to_string()),
                ]
            );
        });
    }
}
