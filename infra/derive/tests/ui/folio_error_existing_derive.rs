use folio_derive::folio_error;
use std::borrow::Cow;

#[folio_error]
#[derive(Debug)]
pub enum ParseError {
    #[error("Number error{}: {source}", format_context(.context))]
    Number {
        #[from]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Out of range: {value}")]
    Range { value: i64 },
}

fn parse(raw: &str) -> Result<i64, ParseError> {
    let value = raw.parse::<i64>().context("parsing value")?;
    if value < 0 {
        return Err(ParseError::Range { value });
    }
    Ok(value)
}

fn main() {
    let _ = parse("12");
}
