//! Text-level parsing of captured signatures.
//!
//! These helpers run on signature text that the capture routines already cut
//! out of the file, so they only need to track bracket nesting, never
//! comments or line positions.

/// Bracket nesting over `()`, `[]`, `{}` and `<>`.
///
/// The `>` of `->` and `=>` is not a closer.
#[derive(Default)]
struct Nesting {
    depth: u32,
    prev: char,
}

impl Nesting {
    fn starting_at(depth: u32) -> Self {
        Nesting { depth, prev: ' ' }
    }

    /// Feed one character and return the depth it sits at.
    fn feed(&mut self, c: char) -> u32 {
        let at = match c {
            '(' | '[' | '{' | '<' => {
                self.depth += 1;
                self.depth - 1
            }
            ')' | ']' | '}' => {
                self.depth = self.depth.saturating_sub(1);
                self.depth
            }
            '>' if !matches!(self.prev, '-' | '=') => {
                self.depth = self.depth.saturating_sub(1);
                self.depth
            }
            _ => self.depth,
        };
        self.prev = c;
        at
    }
}

/// Byte index of the closer that brings the nesting back to zero, for text
/// that follows an already consumed opener.
fn matching_close(text: &str) -> Option<usize> {
    let mut nesting = Nesting::starting_at(1);
    text.char_indices()
        .find(|&(_, c)| {
            let before = nesting.depth;
            nesting.feed(c);
            nesting.depth == 0 && before == 1
        })
        .map(|(i, _)| i)
}

/// The text after a leading `<...>` group, or `""` if it never closes.
fn after_generics(text: &str) -> &str {
    let Some(inner) = text.strip_prefix('<') else {
        return text;
    };
    match matching_close(inner) {
        Some(i) => &inner[i + 1..],
        None => "",
    }
}

/// Split `text` on `sep` at nesting depth zero.
pub(crate) fn split_top_level(text: &str, sep: char) -> Vec<&str> {
    let mut nesting = Nesting::default();
    let mut parts = Vec::new();
    let mut start = 0;
    for (i, c) in text.char_indices() {
        if nesting.feed(c) == 0 && c == sep {
            parts.push(&text[start..i]);
            start = i + c.len_utf8();
        }
    }
    parts.push(&text[start..]);
    parts
}

/// Byte index of `word` standing alone (whitespace or text boundary on both
/// sides) at nesting depth zero.
fn find_top_level_word(text: &str, word: &str) -> Option<usize> {
    let mut nesting = Nesting::default();
    let mut before = ' ';
    for (i, c) in text.char_indices() {
        let depth = nesting.feed(c);
        if depth == 0 && before.is_whitespace() && text[i..].starts_with(word) {
            let after = text[i + word.len()..].chars().next().unwrap_or(' ');
            if after.is_whitespace() {
                return Some(i);
            }
        }
        before = c;
    }
    None
}

/// `text` without a trailing `where` clause.
pub(crate) fn strip_where(text: &str) -> &str {
    match find_top_level_word(text, "where") {
        Some(i) => text[..i].trim_end(),
        None => text.trim_end(),
    }
}

/// First word of a declaration head: the name of a struct, enum or trait.
///
/// Stops at whitespace, `:` (supertraits) and `<`.
pub(crate) fn leading_name(text: &str) -> &str {
    let text = text.trim_start();
    let end = text
        .find(|c: char| c.is_whitespace() || matches!(c, ':' | '<'))
        .unwrap_or(text.len());
    &text[..end]
}

/// Pieces of a function signature, borrowed from its text.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct FnSignature<'s> {
    pub(crate) name: &'s str,
    pub(crate) params: Vec<&'s str>,
    pub(crate) ret: &'s str,
}

/// Parse the text between `fn` and the body (or `;`).
///
/// The parameter list is the depth-matched `(...)` after the name and its
/// optional generic list, so a unit return type is never mistaken for it.
pub(crate) fn parse_fn_signature(sig: &str) -> FnSignature<'_> {
    let sig = sig.trim();
    let name_end = sig
        .find(|c: char| c.is_whitespace() || matches!(c, '<' | '('))
        .unwrap_or(sig.len());
    let name = &sig[..name_end];
    let rest = after_generics(sig[name_end..].trim_start()).trim_start();

    let Some(after_open) = rest.strip_prefix('(') else {
        return FnSignature {
            name,
            params: Vec::new(),
            ret: "",
        };
    };
    let (inner, tail) = match matching_close(after_open) {
        Some(i) => (&after_open[..i], &after_open[i + 1..]),
        None => (after_open, ""),
    };
    let params = split_top_level(inner, ',')
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    let ret = tail
        .trim_start()
        .strip_prefix("->")
        .map_or("", |r| strip_where(r.trim_start()));
    FnSignature { name, params, ret }
}

/// What an `impl` block attaches to.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ImplTarget<'s> {
    pub(crate) type_name: &'s str,
    pub(crate) trait_name: Option<&'s str>,
}

/// The head type name of a type expression: `&'a mut Vec<T>` gives `Vec`.
fn type_head(text: &str) -> &str {
    let mut t = text.trim_start();
    loop {
        if let Some(rest) = t.strip_prefix('&') {
            t = rest.trim_start();
        } else if let Some(rest) = t.strip_prefix('\'') {
            let end = rest
                .find(|c: char| !(c == '_' || c.is_alphanumeric()))
                .unwrap_or(rest.len());
            t = rest[end..].trim_start();
        } else if let Some(rest) = t.strip_prefix("mut ").or_else(|| t.strip_prefix("dyn ")) {
            t = rest.trim_start();
        } else {
            break;
        }
    }
    if let Some(inner) = t.strip_prefix(['(', '[']) {
        // Tuple and array targets are named by their whole group.
        return match matching_close(inner) {
            Some(i) => &t[..i + 2],
            None => t.trim_end(),
        };
    }
    let end = t
        .find(|c: char| c.is_whitespace() || c == '<')
        .unwrap_or(t.len());
    &t[..end]
}

/// Resolve the text between `impl` and `{` to its type and optional trait.
///
/// Returns `None` when no type name can be found.
pub(crate) fn resolve_impl_target(sig: &str) -> Option<ImplTarget<'_>> {
    let sig = strip_where(after_generics(sig.trim_start()));
    let (trait_part, type_part) = match find_top_level_word(sig, "for") {
        Some(i) => (Some(&sig[..i]), &sig[i + "for".len()..]),
        None => (None, sig),
    };
    let type_name = type_head(type_part);
    if type_name.is_empty() {
        return None;
    }
    let trait_name = trait_part
        .map(|t| {
            let t = t.split('<').next().unwrap_or("").trim_end();
            t.rsplit(char::is_whitespace).next().unwrap_or("")
        })
        .filter(|t| !t.is_empty());
    Some(ImplTarget {
        type_name,
        trait_name,
    })
}

#[cfg(test)]
mod tests;
