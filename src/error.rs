use failure::Fail;

#[derive(Debug, Fail, Clone, PartialEq)]
pub enum Error {
    #[fail(display = "invalid argument: {}", _0)]
    InvalidArgument(String),

    #[fail(display = "invalid character {:?} at position {}", character, position)]
    InvalidCharacter { character: char, position: usize },

    #[fail(display = "empty input: {}", _0)]
    EmptyInput(&'static str),
}

impl Error {
    pub fn invalid_argument<S: Into<String>>(message: S) -> Error {
        Error::InvalidArgument(message.into())
    }
}
