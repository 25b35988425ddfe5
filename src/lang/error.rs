use super::LineNumber;

/// ## Interpreter diagnostics
///
/// The dialect has a tiny, fixed vocabulary of messages. An `Error`
/// carries one of them plus, for syntax errors inside a stored line,
/// the listing of that line with the failing position marked.

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: Option<LineNumber>,
    listing: Option<String>,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError,
    How,
    OutOfMemory,
    StackStuffed,
    FileError,
    Break,
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            listing: None,
            message: "",
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn is_direct(&self) -> bool {
        self.line_number.is_none()
    }

    pub fn in_line_number(&self, line: Option<LineNumber>) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            line_number: line,
            listing: self.listing.clone(),
            ..*self
        }
    }

    /// Attach the rendered line the error happened in.
    pub fn in_listing(&self, line: LineNumber, listing: String) -> Error {
        Error {
            line_number: Some(line),
            listing: Some(listing),
            ..*self
        }
    }

    pub fn message(&self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            message,
            listing: self.listing.clone(),
            ..*self
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        if self.code == Break {
            return match self.line_number {
                Some(line) => write!(f, "Break on line {}", line),
                None => write!(f, "Break"),
            };
        }
        let code_str = match self.code {
            SyntaxError => "Syntax error",
            How => "How?",
            OutOfMemory => "Sorry!",
            StackStuffed => "Stack is stuffed!",
            FileError => "ERROR: File Operation failed.",
            Break => "Break",
        };
        write!(f, "{}", code_str)?;
        if let Some(listing) = &self.listing {
            write!(f, " in {}", listing)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}
