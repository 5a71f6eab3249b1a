pub use self::TemplateError::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TemplateError {
    UnknownVerb,
    NoVerb,
    WrongType,
    MissingOperand,
    ExtraOperand,
}

impl TemplateError {
    pub fn static_display(&self) -> &'static str {
        match self {
            UnknownVerb => "unknown placeholder verb, expected one of %d %v %s %%",
            NoVerb => "template ends with a lone %",
            WrongType => "operand type doesn't match its placeholder",
            MissingOperand => "fewer operands than placeholders",
            ExtraOperand => "more operands than placeholders",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    Done,
    Text(&'a str),
    /// One of `d`, `v`, `s`
    Verb(u8),
    /// `%%`
    Percent,
    Err(TemplateError),
}

impl<'a> Token<'a> {
    pub fn is_err(&self) -> bool {
        if let Token::Err(_) = self {
            return true;
        }
        false
    }
}

pub struct Tokenizer<'a> {
    source: &'a str,
}

pub fn tokenize<'a>(template: &'a str) -> Tokenizer<'a> {
    Tokenizer {source: template}
}

impl<'a> Tokenizer<'a> {
    pub fn remainder(&self) -> &'a str {
        self.source
    }

    pub fn next(&mut self) -> Token<'a> {
        if self.source.len() == 0 {
            return Token::Done;
        }

        if !self.source.starts_with('%') {
            let end = self.source.find('%').unwrap_or(self.source.len());
            let (text, remainder) = self.source.split_at(end);
            self.source = remainder;
            return Token::Text(text);
        }

        let verb = self.source[1..].chars().next();
        match verb {
            None => {
                self.source = &self.source[1..];
                Token::Err(NoVerb)
            }
            Some(ch) => {
                self.source = &self.source[1 + ch.len_utf8()..];
                match ch {
                    '%' => Token::Percent,
                    'd' | 'v' | 's' => Token::Verb(ch as u8),
                    _ => Token::Err(UnknownVerb),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text() {
        let mut tokenizer = tokenize("Hello Go\n");
        assert_eq!(tokenizer.next(), Token::Text("Hello Go\n"));
        assert_eq!(tokenizer.next(), Token::Done);
        assert_eq!(tokenizer.next(), Token::Done);
    }

    #[test]
    fn empty() {
        let mut tokenizer = tokenize("");
        assert_eq!(tokenizer.next(), Token::Done);
    }

    #[test]
    fn labelled_verb() {
        let mut tokenizer = tokenize("a = %d\n");
        assert_eq!(tokenizer.next(), Token::Text("a = "));
        assert_eq!(tokenizer.next(), Token::Verb(b'd'));
        assert_eq!(tokenizer.next(), Token::Text("\n"));
        assert_eq!(tokenizer.next(), Token::Done);
    }

    #[test]
    fn adjacent_verbs() {
        let mut tokenizer = tokenize("%d%v%s");
        assert_eq!(tokenizer.next(), Token::Verb(b'd'));
        assert_eq!(tokenizer.next(), Token::Verb(b'v'));
        assert_eq!(tokenizer.next(), Token::Verb(b's'));
        assert_eq!(tokenizer.next(), Token::Done);
    }

    #[test]
    fn escaped_percent() {
        let mut tokenizer = tokenize("100%% done");
        assert_eq!(tokenizer.next(), Token::Text("100"));
        assert_eq!(tokenizer.next(), Token::Percent);
        assert_eq!(tokenizer.next(), Token::Text(" done"));
        assert_eq!(tokenizer.next(), Token::Done);
    }

    #[test]
    fn lone_percent() {
        let mut tokenizer = tokenize("b = %");
        assert_eq!(tokenizer.next(), Token::Text("b = "));
        assert_eq!(tokenizer.next(), Token::Err(NoVerb));
        assert_eq!(tokenizer.next(), Token::Done);
    }

    #[test]
    fn unknown_verb() {
        let mut tokenizer = tokenize("%q rest");
        assert!(tokenizer.next().is_err());
        assert_eq!(tokenizer.remainder(), " rest");

        // multibyte verb is skipped whole
        let mut tokenizer = tokenize("%é!");
        assert_eq!(tokenizer.next(), Token::Err(UnknownVerb));
        assert_eq!(tokenizer.next(), Token::Text("!"));
    }

    #[test]
    fn non_ascii_text() {
        let mut tokenizer = tokenize("变量 %d");
        assert_eq!(tokenizer.next(), Token::Text("变量 "));
        assert_eq!(tokenizer.next(), Token::Verb(b'd'));
        assert_eq!(tokenizer.next(), Token::Done);
    }
}
