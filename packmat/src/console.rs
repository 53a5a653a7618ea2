//! Interactive console input and output
//!
//! Reading prompts for the store's layout and then pulls whitespace
//! separated tokens line by line, only as many as the parser asks for.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use packmat_core::TextLayout;

use crate::error::{PersistError, Result};

/// Lazily split lines from a reader into tokens
///
/// The first I/O failure ends the token stream and is kept for the caller.
struct LineTokens<R> {
    input: R,
    pending: VecDeque<String>,
    failure: Option<io::Error>,
}

impl<R: BufRead> LineTokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
            failure: None,
        }
    }
}

impl<R: BufRead> Iterator for LineTokens<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while self.pending.is_empty() {
            if self.failure.is_some() {
                return None;
            }
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => self
                    .pending
                    .extend(line.split_whitespace().map(str::to_owned)),
                Err(e) => self.failure = Some(e),
            }
        }
        self.pending.pop_front()
    }
}

/// Prompt on `output`, then parse a store from tokens read off `input`
pub fn read_store<M, R, W>(input: R, mut output: W) -> Result<M>
where
    M: TextLayout,
    R: BufRead,
    W: Write,
{
    writeln!(output, "Enter {}:", M::LAYOUT).map_err(PersistError::Stream)?;
    output.flush().map_err(PersistError::Stream)?;

    let mut tokens = LineTokens::new(input);
    let parsed = M::parse_tokens(&mut tokens);
    if let Some(e) = tokens.failure {
        return Err(PersistError::Stream(e));
    }
    Ok(parsed?)
}

/// Write the text layout of `store` to `output`
pub fn print_store<M: TextLayout, W: Write>(mut output: W, store: &M) -> Result<()> {
    write!(output, "{store}").map_err(PersistError::Stream)?;
    output.flush().map_err(PersistError::Stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use packmat_core::{BandStore, MatrixStore, TriangularStore};
    use std::io::Cursor;

    #[test]
    fn test_prompt_and_read() {
        let input = Cursor::new("3\n1\n2 3\n4 5 6\nleftover\n");
        let mut prompt = Vec::new();
        let t: TriangularStore<i32> = read_store(input, &mut prompt).unwrap();
        assert_eq!(t.get(2, 1).unwrap(), 5);
        let prompt = String::from_utf8(prompt).unwrap();
        assert!(prompt.starts_with("Enter size"));
    }

    #[test]
    fn test_stops_at_last_token() {
        let mut input = Cursor::new("1 1\n9\nnext line\n");
        let band: BandStore<f64> = read_store(&mut input, io::sink()).unwrap();
        assert_eq!(band.get(0, 0).unwrap(), 9.0);
        let mut rest = String::new();
        input.read_line(&mut rest).unwrap();
        assert_eq!(rest, "next line\n");
    }

    #[test]
    fn test_truncated_input() {
        let err = read_store::<TriangularStore<i32>, _, _>(Cursor::new("2\n1\n"), io::sink())
            .unwrap_err();
        assert!(matches!(err, PersistError::Store(_)));
    }

    #[test]
    fn test_print() {
        let mut t = TriangularStore::<i32>::new(2);
        t.set(3, 1, 0).unwrap();
        let mut out = Vec::new();
        print_store(&mut out, &t).unwrap();
        assert_eq!(out, b"2\n0\n3 0\n");
    }
}
