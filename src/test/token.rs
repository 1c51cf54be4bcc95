#[cfg(test)]
mod token {
    use crate::error::Error;
    use crate::spec::flag::{classify, parse_bool, Token};

    fn flag(name: &str, value: Option<&str>) -> Token {
        Token::Flag {
            name: name.into(),
            value: value.map(|v| v.into()),
        }
    }

    #[test]
    fn single_and_double_dash_are_equivalent() {
        assert_eq!(classify("-o").unwrap(), flag("o", None));
        assert_eq!(classify("--o").unwrap(), flag("o", None));
        assert_eq!(classify("-output").unwrap(), flag("output", None));
        assert_eq!(classify("--dry-run").unwrap(), flag("dry-run", None));
    }

    #[test]
    fn value_splits_at_first_equals() {
        assert_eq!(classify("-o=hello").unwrap(), flag("o", Some("hello")));
        assert_eq!(classify("--o=a=b").unwrap(), flag("o", Some("a=b")));
        assert_eq!(classify("-o=").unwrap(), flag("o", Some("")));
    }

    #[test]
    fn operands_and_terminator() {
        assert_eq!(classify("file.txt").unwrap(), Token::Operand);
        assert_eq!(classify("-").unwrap(), Token::Operand);
        assert_eq!(classify("").unwrap(), Token::Operand);
        assert_eq!(classify("--").unwrap(), Token::Terminator);
    }

    #[test]
    fn bad_syntax() {
        for text in ["---x", "-=x", "--=x", "---"] {
            assert_eq!(classify(text), Err(Error::BadSyntax(text.into())));
        }
    }

    #[test]
    fn bool_literals() {
        for text in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(text), Some(true), "{}", text);
        }
        for text in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(text), Some(false), "{}", text);
        }
        for text in ["", "yes", "tRuE", "2"] {
            assert_eq!(parse_bool(text), None, "{}", text);
        }
    }
}
