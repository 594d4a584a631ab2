use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Token {
    Variable(char),

    #[display("{}", literal_keyword(*_0))]
    Literal(bool),

    // always a key of the operator table
    Operator(&'static str),

    #[display("(")]
    LParen,

    #[display(")")]
    RParen,

    #[display("<end>")]
    End,
}

pub fn literal_keyword(value: bool) -> &'static str {
    if value {
        "TRUE"
    } else {
        "FALSE"
    }
}
