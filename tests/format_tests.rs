//! Text format behavior: tokens, comments, escapes, layout and errors.

use keyvalues::{
    from_str, to_string, to_string_with_options, Error, FormatOptions, Indent, KeyValues, Parser,
    SymbolTable, ValueKind,
};

fn parse(text: &str) -> keyvalues::Result<KeyValues> {
    from_str(&SymbolTable::new(), text)
}

fn parse_escaped(text: &str) -> keyvalues::Result<KeyValues> {
    Parser::new(text)
        .escape_sequences(true)
        .parse(&SymbolTable::new())
}

mod tokens {
    use super::*;

    #[test]
    fn test_bare_and_quoted_tokens_mix() {
        let kv = parse("Root { bare \"quoted value\" \"quoted key\" bare2 }").unwrap();
        assert_eq!(kv.get_string("bare", ""), "quoted value");
        assert_eq!(kv.get_string("quoted key", ""), "bare2");
    }

    #[test]
    fn test_layout_is_free_form() {
        let compact = parse("R{a 1 g{b 2}}").unwrap();
        let spread = parse("\"R\"\n{\n\n  \"a\"   \"1\"\n  \"g\"\n  {\n    \"b\" \"2\"\n  }\n}\n").unwrap();
        assert_eq!(to_string(&compact).unwrap(), to_string(&spread).unwrap());
    }

    #[test]
    fn test_values_keep_surrounding_whitespace() {
        let kv = parse("R { k \"  padded  \" }").unwrap();
        assert_eq!(kv.get_string("k", ""), "  padded  ");
    }

    #[test]
    fn test_all_parsed_values_are_strings() {
        let kv = parse("R { i 3 f 0.5 c \"1 2 3 4\" }").unwrap();
        for key in ["i", "f", "c"] {
            assert_eq!(kv.get_data_type(key), ValueKind::String);
        }
        assert_eq!(kv.get_float("f", 0.0), 0.5);
    }

    #[test]
    fn test_unicode_names_fold_case() {
        let kv = parse("R { \"Ärger\" 1 }").unwrap();
        assert_eq!(kv.get_int("ärger", 0), 1);
        assert_eq!(kv.get_int("ÄRGER", 0), 1);
    }
}

mod comments {
    use super::*;

    #[test]
    fn test_line_comments_anywhere_between_tokens() {
        let text = "// header\nR // after name\n{ // after brace\n  a 1 // trailing\n  // whole line\n}\n// footer";
        let kv = parse(text).unwrap();
        assert_eq!(kv.sub_key_count(), 1);
        assert_eq!(kv.get_int("a", 0), 1);
    }

    #[test]
    fn test_slashes_inside_tokens_are_text() {
        let kv = parse("R { url \"http://example.com\" path a//b }").unwrap();
        assert_eq!(kv.get_string("url", ""), "http://example.com");
        assert_eq!(kv.get_string("path", ""), "a//b");
    }
}

mod escapes {
    use super::*;

    #[test]
    fn test_known_escapes_decode() {
        let kv = parse_escaped(r#"R { s "q\"b\\n\nt\tr\r" }"#).unwrap();
        assert_eq!(kv.get_string("s", ""), "q\"b\\n\nt\tr\r");
    }

    #[test]
    fn test_unknown_escape_keeps_backslash() {
        let kv = parse_escaped(r#"R { s "a\qb" }"#).unwrap();
        assert_eq!(kv.get_string("s", ""), "a\\qb");
    }

    #[test]
    fn test_disabled_escapes_keep_backslashes() {
        let kv = parse(r#"R { path "C:\new\table\" }"#).unwrap();
        assert_eq!(kv.get_string("path", ""), "C:\\new\\table\\");
    }

    #[test]
    fn test_escaped_output_reads_back() {
        let symbols = SymbolTable::new();
        let mut kv = KeyValues::new(&symbols, "R");
        kv.set_uses_escape_sequences(true);
        kv.set_string("msg", "line one\nsaid \"hi\"\\");

        let back = Parser::new(&to_string(&kv).unwrap())
            .escape_sequences(true)
            .parse(&symbols)
            .unwrap();
        assert_eq!(back, kv);
    }

    #[test]
    fn test_escape_flag_of_root_governs_output() {
        let symbols = SymbolTable::new();
        let mut kv = KeyValues::new(&symbols, "R");
        kv.set_string("s", "a\tb");
        assert_eq!(to_string(&kv).unwrap(), "\"R\"\n{\n\t\"s\" \"a\tb\"\n}\n");

        kv.set_uses_escape_sequences(true);
        assert_eq!(to_string(&kv).unwrap(), "\"R\"\n{\n\t\"s\" \"a\\tb\"\n}\n");
    }
}

mod layout {
    use super::*;

    #[test]
    fn test_default_layout() {
        let kv = parse("Config { volume 75 Audio { enabled 1 } }").unwrap();
        let expected = "\"Config\"\n{\n\t\"volume\" \"75\"\n\t\"Audio\"\n\t{\n\t\t\"enabled\" \"1\"\n\t}\n}\n";
        assert_eq!(to_string(&kv).unwrap(), expected);
    }

    #[test]
    fn test_space_indentation() {
        let kv = parse("R { g { k v } }").unwrap();
        let text =
            to_string_with_options(&kv, FormatOptions::new().with_indent(Indent::Spaces(2)))
                .unwrap();
        assert_eq!(text, "\"R\"\n{\n  \"g\"\n  {\n    \"k\" \"v\"\n  }\n}\n");
    }

    #[test]
    fn test_duplicates_and_order_survive() {
        let text = "\"R\"\n{\n\t\"b\" \"1\"\n\t\"a\" \"2\"\n\t\"b\" \"3\"\n}\n";
        let kv = parse(text).unwrap();
        assert_eq!(to_string(&kv).unwrap(), text);
        assert_eq!(kv.get_int("b", 0), 1);
    }
}

mod errors {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse("").unwrap_err(), Error::UnexpectedEof { .. }));
        assert!(matches!(
            parse("  // only a comment\n").unwrap_err(),
            Error::UnexpectedEof { .. }
        ));
    }

    #[test]
    fn test_unclosed_block_reports_end_of_input() {
        let err = parse("R {\n  a 1\n").unwrap_err();
        match err {
            Error::UnexpectedEof { expected, .. } => assert_eq!(expected, "'}'"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_stray_close_brace_has_position() {
        let err = parse("R {\n}\n}").unwrap_err();
        assert!(matches!(err, Error::Syntax { .. }));
        assert_eq!(err.position(), Some((3, 1)));
    }

    #[test]
    fn test_unterminated_quote_points_at_opening() {
        let err = parse("R {\n  k \"never closed }\n").unwrap_err();
        assert!(matches!(err, Error::UnterminatedString { line: 2, col: 5 }));
    }

    #[test]
    fn test_key_without_value() {
        let err = parse("R { k }").unwrap_err();
        assert!(err.is_parse_error());
        assert_eq!(err.position(), Some((1, 7)));
    }

    #[test]
    fn test_error_messages_carry_context() {
        let err = parse("R {\n  { }\n}").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("line 2"));
        assert!(message.contains("  { }"));
    }

    #[test]
    fn test_unrepresentable_quote_without_escapes() {
        let symbols = SymbolTable::new();
        let mut kv = KeyValues::new(&symbols, "R");
        kv.set_string("say", "\"hi\"");
        assert!(matches!(
            to_string(&kv).unwrap_err(),
            Error::Unrepresentable { .. }
        ));

        kv.set_uses_escape_sequences(true);
        assert!(to_string(&kv).is_ok());
    }
}
