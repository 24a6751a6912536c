use crate::error::Error;

/// One lexical token. `quoted` marks string literals so keyword and
/// punctuation checks never match inside them.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Token {
    pub text: String,
    pub quoted: bool,
}

impl Token {
    pub fn is_kw(&self, kw: &str) -> bool {
        !self.quoted && self.text.eq_ignore_ascii_case(kw)
    }

    pub fn is_punct(&self, p: char) -> bool {
        !self.quoted && self.text.len() == 1 && self.text.starts_with(p)
    }

    pub fn is_any_punct(&self) -> bool {
        !self.quoted
            && self.text.len() == 1
            && matches!(self.text.as_bytes()[0], b',' | b'(' | b')' | b'=' | b';')
    }
}

/// Splits a raw statement into tokens. Both quote styles open a string
/// literal; inside one style the other is an ordinary character, and a
/// same-style quote always closes the literal (no escape sequences).
pub(super) fn tokenize(input: &str) -> Result<Vec<Token>, Error> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut just_closed_quote = false;

    for ch in input.chars() {
        match ch {
            '"' | '\'' => match quote {
                Some(q) if q == ch => {
                    quote = None;
                    just_closed_quote = true;
                }
                Some(_) => current.push(ch),
                None => {
                    if just_closed_quote {
                        return Err(Error::syntax(
                            "Unexpected quote after a closing quote. Add whitespace between tokens.",
                        ));
                    }
                    if !current.is_empty() {
                        return Err(Error::syntax(
                            "A quote cannot start in the middle of a token. Add whitespace before it.",
                        ));
                    }
                    quote = Some(ch);
                }
            },

            c if c.is_whitespace() && quote.is_none() => {
                if just_closed_quote {
                    tokens.push(Token {
                        text: std::mem::take(&mut current),
                        quoted: true,
                    });
                    just_closed_quote = false;
                } else if !current.is_empty() {
                    tokens.push(Token {
                        text: std::mem::take(&mut current),
                        quoted: false,
                    });
                }
            }

            ',' | '(' | ')' | '=' | ';' if quote.is_none() => {
                if just_closed_quote {
                    tokens.push(Token {
                        text: std::mem::take(&mut current),
                        quoted: true,
                    });
                    just_closed_quote = false;
                } else if !current.is_empty() {
                    tokens.push(Token {
                        text: std::mem::take(&mut current),
                        quoted: false,
                    });
                }
                tokens.push(Token {
                    text: ch.to_string(),
                    quoted: false,
                });
            }

            _ => {
                if just_closed_quote {
                    return Err(Error::syntax(
                        "Characters found immediately after a closing quote. Add whitespace after the quoted value.",
                    ));
                }
                current.push(ch);
            }
        }
    }

    if quote.is_some() {
        return Err(Error::syntax("Unclosed quote in input"));
    }
    if just_closed_quote {
        tokens.push(Token {
            text: current,
            quoted: true,
        });
    } else if !current.is_empty() {
        tokens.push(Token {
            text: current,
            quoted: false,
        });
    }

    Ok(tokens)
}
