use super::{Algorithm, AlgorithmIssue, Base, Modifier, Move, ParseError};
use log::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Move(&'a str),
    Open,
    /// A closing parenthesis and the digits written right after it
    Close(Option<&'a str>),
}

enum StackEntry {
    Open,
    Move(Move),
}

impl StackEntry {
    fn into_move(self) -> Option<Move> {
        match self {
            StackEntry::Open => None,
            StackEntry::Move(move_) => Some(move_),
        }
    }
}

/// Parse a single move token following `[width] letter ['w'] ['2' | ''']`.
///
/// The width digits are only allowed together with the `w` marker, which is
/// only allowed on the six outer face letters. `Rw` is two layers wide.
///
/// # Errors
///
/// `ParseError::InvalidMove` carrying the whole token if anything about it is
/// malformed.
pub fn parse_move(token: &str) -> Result<Move, ParseError> {
    let invalid = || ParseError::InvalidMove(token.to_owned());

    let digit_count = token.bytes().take_while(u8::is_ascii_digit).count();
    let (digits, rest) = token.split_at(digit_count);

    let mut chars = rest.chars();
    let base = chars
        .next()
        .and_then(Base::from_letter)
        .ok_or_else(invalid)?;

    let (wide, rest) = match chars.as_str().strip_prefix('w') {
        Some(rest) => (true, rest),
        None => (false, chars.as_str()),
    };

    let modifier = Modifier::from_suffix(rest).ok_or_else(invalid)?;

    if wide && !matches!(base, Base::Face(_)) {
        return Err(invalid());
    }

    let width = match (wide, digits) {
        (false, "") => 1,
        (false, _) => return Err(invalid()),
        (true, "") => 2,
        (true, digits) => digits
            .parse::<usize>()
            .ok()
            .filter(|&width| width >= 2)
            .ok_or_else(invalid)?,
    };

    Move::new(width, base, modifier).map_err(|_| invalid())
}

/// Parse a whole algorithm such as `B (R (U F2)3 R')2 F`.
///
/// Groups are reduced on an explicit stack rather than by recursion, so the
/// nesting depth is only bounded by memory. Repeated groups are expanded as
/// soon as they close, which makes the result a flat sequence of moves.
/// Whitespace between moves is optional: `R2U'3Rw` reads as `R2 U' 3Rw`.
///
/// # Errors
///
/// `ParseError::InvalidMove` for a malformed move token and
/// `ParseError::InvalidAlgorithm` for unbalanced parentheses, a repeat count
/// that isn't a positive integer or an expansion too large to allocate.
pub fn parse_algorithm(notation: &str) -> Result<Algorithm, ParseError> {
    let invalid = |reason| ParseError::InvalidAlgorithm {
        algorithm: notation.to_owned(),
        reason,
    };

    let mut stack = Vec::new();

    for token in tokenize(notation)? {
        match token {
            Token::Move(text) => stack.push(StackEntry::Move(parse_move(text)?)),
            Token::Open => stack.push(StackEntry::Open),
            Token::Close(count) => {
                let times = match count {
                    None => 1,
                    Some(digits) => digits
                        .parse::<usize>()
                        .ok()
                        .filter(|&times| times >= 1)
                        .ok_or_else(|| {
                            invalid(AlgorithmIssue::InvalidRepeatCount(digits.to_owned()))
                        })?,
                };

                let open = stack
                    .iter()
                    .rposition(|entry| matches!(entry, StackEntry::Open))
                    .ok_or_else(|| invalid(AlgorithmIssue::UnmatchedClose))?;

                // Everything above the last open marker is a move
                let group = stack
                    .drain(open + 1..)
                    .filter_map(StackEntry::into_move)
                    .collect::<Vec<_>>();
                stack.pop();

                trace!("Expanding a group of {} moves {times} times", group.len());

                group
                    .len()
                    .checked_mul(times)
                    .and_then(|total| stack.try_reserve(total).ok())
                    .ok_or_else(|| invalid(AlgorithmIssue::ExpansionTooLarge))?;

                for _ in 0..times {
                    stack.extend(group.iter().copied().map(StackEntry::Move));
                }
            }
        }
    }

    stack
        .into_iter()
        .map(|entry| {
            entry
                .into_move()
                .ok_or_else(|| invalid(AlgorithmIssue::UnmatchedOpen))
        })
        .collect()
}

fn tokenize(notation: &str) -> Result<Vec<Token<'_>>, ParseError> {
    let mut tokens = Vec::new();
    let mut rest = notation;

    while let Some(c) = rest.chars().next() {
        if c.is_whitespace() {
            rest = &rest[c.len_utf8()..];
            continue;
        }

        let len = match c {
            '(' => {
                tokens.push(Token::Open);
                1
            }
            ')' => {
                let digit_count = rest[1..].bytes().take_while(u8::is_ascii_digit).count();
                let count = &rest[1..=digit_count];

                // A turn suffix belongs to a move, never to a group
                if let Some(suffix @ ('\'' | 'w')) = rest[1 + digit_count..].chars().next() {
                    return Err(ParseError::InvalidAlgorithm {
                        algorithm: notation.to_owned(),
                        reason: AlgorithmIssue::InvalidRepeatCount(format!("{count}{suffix}")),
                    });
                }

                tokens.push(Token::Close((!count.is_empty()).then_some(count)));
                1 + digit_count
            }
            _ => {
                let len = move_token_len(rest);
                if len == 0 {
                    return Err(ParseError::InvalidMove(c.to_string()));
                }
                tokens.push(Token::Move(&rest[..len]));
                len
            }
        };

        rest = &rest[len..];
    }

    Ok(tokens)
}

/// The length of the move token at the start of `text`. Zero if `text` does
/// not start with a digit or a letter. Every counted byte is ASCII.
fn move_token_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();

    if !bytes.get(digits).is_some_and(u8::is_ascii_alphabetic) {
        return digits;
    }

    let mut len = digits + 1;

    if bytes.get(len) == Some(&b'w') {
        len += 1;
    }

    if matches!(bytes.get(len), Some(b'2' | b'\'')) {
        len += 1;
    }

    len
}
