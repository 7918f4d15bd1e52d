//! Greedy reflow of entry text into bullet lines

const TAB_SIZE: usize = 8;

/// Reflow text into lines of at most `width` columns, indent included.
///
/// Tabs are expanded to eight-column stops and every other whitespace
/// character becomes a space. Runs of spaces are kept inside a line and
/// dropped at line boundaries. Hyphenated words may break after a hyphen
/// that sits between letters, and words longer than a full line are split,
/// after their last fitting hyphen when there is one.
pub fn wrap(text: &str, width: usize, initial_indent: &str, subsequent_indent: &str) -> Vec<String> {
    let mut chunks = split_chunks(&expand_tabs(text));
    chunks.reverse();

    let mut lines: Vec<String> = Vec::new();
    while !chunks.is_empty() {
        let indent = if lines.is_empty() {
            initial_indent
        } else {
            subsequent_indent
        };
        let room = width.saturating_sub(indent.chars().count()).max(1);

        if !lines.is_empty() && chunks.last().is_some_and(|c| is_space(c)) {
            chunks.pop();
        }

        let mut line: Vec<String> = Vec::new();
        let mut len = 0;
        while chunks.last().is_some_and(|c| len + c.chars().count() <= room) {
            if let Some(chunk) = chunks.pop() {
                len += chunk.chars().count();
                line.push(chunk);
            }
        }

        if let Some(chunk) = chunks.last_mut() {
            if chunk.chars().count() > room {
                let (head, tail) = split_long_word(chunk, room - len);
                line.push(head);
                *chunk = tail;
            }
        }

        if line.last().is_some_and(|c| is_space(c)) {
            line.pop();
        }
        if !line.is_empty() {
            lines.push(format!("{}{}", indent, line.concat()));
        }
    }

    lines
}

/// Replace tabs with spaces up to the next tab stop; columns restart after
/// line breaks
fn expand_tabs(text: &str) -> String {
    let mut expanded = String::with_capacity(text.len());
    let mut column = 0;

    for c in text.chars() {
        match c {
            '\t' => {
                let pad = TAB_SIZE - column % TAB_SIZE;
                expanded.extend(std::iter::repeat(' ').take(pad));
                column += pad;
            }
            '\n' | '\r' => {
                expanded.push(c);
                column = 0;
            }
            _ => {
                expanded.push(c);
                column += 1;
            }
        }
    }

    expanded
}

/// Alternating runs of whitespace and words, with words further cut at
/// hyphen breaks and em-dashes
fn split_chunks(text: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current: Vec<char> = Vec::new();
    let mut current_is_space = None;

    for c in text.chars() {
        let space = is_wrap_space(c);
        if let Some(was_space) = current_is_space {
            if was_space != space {
                flush_chunk(&mut current, was_space, &mut chunks);
            }
        }
        current_is_space = Some(space);
        current.push(c);
    }
    if let Some(was_space) = current_is_space {
        flush_chunk(&mut current, was_space, &mut chunks);
    }

    chunks
}

fn flush_chunk(current: &mut Vec<char>, space: bool, chunks: &mut Vec<String>) {
    if space {
        chunks.push(current.iter().map(|_| ' ').collect());
    } else {
        chunks.extend(split_word(current));
    }
    current.clear();
}

/// Cut one word after breakable hyphens and around em-dashes (`--`)
fn split_word(chars: &[char]) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '-' {
            i += 1;
            continue;
        }

        let run_end = chars[i..]
            .iter()
            .position(|&c| c != '-')
            .map_or(chars.len(), |offset| i + offset);
        let is_em_dash = run_end - i >= 2
            && i > 0
            && is_word_punct(chars[i - 1])
            && chars.get(run_end).is_some_and(|&c| is_word(c));

        if is_em_dash {
            if start < i {
                pieces.push(chars[start..i].iter().collect());
            }
            pieces.push(chars[i..run_end].iter().collect());
            start = run_end;
            i = run_end;
        } else {
            if i > start && is_hyphen_break(chars, i) {
                pieces.push(chars[start..=i].iter().collect());
                start = i + 1;
            }
            i += 1;
        }
    }

    if start < chars.len() {
        pieces.push(chars[start..].iter().collect());
    }
    pieces
}

/// A hyphen after two letters (or after `x-y`) and before `xy` or `x-y`
fn is_hyphen_break(chars: &[char], i: usize) -> bool {
    let letter = |at: usize| chars.get(at).is_some_and(|&c| is_letter(c));
    let hyphen = |at: usize| chars.get(at) == Some(&'-');

    let before = (i >= 2 && letter(i - 2) && letter(i - 1))
        || (i >= 3 && letter(i - 3) && hyphen(i - 2) && letter(i - 1));
    let after = letter(i + 1) && (letter(i + 2) || (hyphen(i + 2) && letter(i + 3)));

    before && after
}

/// Head that fills `space_left` columns, preferring a cut after a hyphen
fn split_long_word(chunk: &str, space_left: usize) -> (String, String) {
    let chars: Vec<char> = chunk.chars().collect();
    let mut end = space_left.min(chars.len());

    if let Some(hyphen) = chars[..end].iter().rposition(|&c| c == '-') {
        if hyphen > 0 && chars[..hyphen].iter().any(|&c| c != '-') {
            end = hyphen + 1;
        }
    }

    (chars[..end].iter().collect(), chars[end..].iter().collect())
}

fn is_wrap_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_letter(c: char) -> bool {
    is_word(c) && !c.is_numeric()
}

fn is_word_punct(c: char) -> bool {
    is_word(c) || matches!(c, '!' | '"' | '\'' | '&' | '.' | ',' | '?')
}

fn is_space(chunk: &str) -> bool {
    chunk.chars().all(|c| c == ' ')
}
