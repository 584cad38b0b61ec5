//! Close gap between numbers filter.
//!
//! Numbers are often written with spaces as group separators (`12 34 56`,
//! phone numbers, postal codes). For a run of adjacent numeric tokens the
//! filter adds the joined forms of every tail of the run, stacked on the
//! first token, so the number can be found however it was spaced:
//!
//! ```text
//! Input:  "12" "34" "56"
//! Output: "12"                       (pos 0)
//!         "123456" "3456" "56"       (pos 0, pos_inc=0, Num)
//!         "34"                       (pos 1)
//!         "56"                       (pos 2)
//! ```
//!
//! Joined tokens span the offsets of the whole run. The stream is processed
//! lazily; only the current run is buffered.

use std::collections::VecDeque;

use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that joins runs of adjacent numeric tokens.
#[derive(Clone, Debug, Default)]
pub struct CloseGapBetweenNumbersFilter;

impl CloseGapBetweenNumbersFilter {
    pub fn new() -> Self {
        CloseGapBetweenNumbersFilter
    }

    /// Whether a token can be part of a run.
    fn is_digits(token: &Token) -> bool {
        !token.is_stopped() && token.is_numeric()
    }
}

struct CloseGaps {
    tokens: TokenStream,
    run: Vec<Token>,
    pending: VecDeque<Token>,
    exhausted: bool,
}

impl CloseGaps {
    /// Move the current run to the output, adding the joined tokens.
    fn flush_run(&mut self) {
        let run = std::mem::take(&mut self.run);
        if run.len() < 2 {
            self.pending.extend(run);
            return;
        }

        let first = &run[0];
        let end_offset = run[run.len() - 1].end_offset;
        let joined: Vec<Token> = (0..run.len())
            .map(|k| {
                let text: String = run[k..].iter().map(|t| t.text.as_str()).collect();
                let mut token = first.stacked(text).with_token_type(TokenType::Num);
                token.end_offset = end_offset;
                token
            })
            .collect();

        let mut run = run.into_iter();
        self.pending.extend(run.next());
        self.pending.extend(joined);
        self.pending.extend(run);
    }
}

impl Iterator for CloseGaps {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            if self.exhausted {
                return None;
            }

            match self.tokens.next() {
                Some(token) if CloseGapBetweenNumbersFilter::is_digits(&token) => {
                    // Only direct neighbours join: a stacked token or one after
                    // a removed token starts a new run.
                    if token.position_increment != 1 {
                        self.flush_run();
                    }
                    self.run.push(token);
                }
                Some(token) => {
                    self.flush_run();
                    self.pending.push_back(token);
                }
                None => {
                    self.flush_run();
                    self.exhausted = true;
                }
            }
        }
    }
}

impl Filter for CloseGapBetweenNumbersFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(CloseGaps {
            tokens,
            run: Vec::new(),
            pending: VecDeque::new(),
            exhausted: false,
        }))
    }

    fn name(&self) -> &'static str {
        "close_gap_between_numbers"
    }
}
