use regex::Regex;

use super::error::LibraryError;

/// Shell-style folder name filter (`*`, `?`, `[abc]`, `[!abc]`), matched
/// case-sensitively against the whole name.
#[derive(Debug, Clone)]
pub struct FolderPattern {
    regex: Regex,
}

impl FolderPattern {
    pub fn new(pattern: &str) -> Result<Self, LibraryError> {
        let regex = Regex::new(&glob_to_regex(pattern)).map_err(|source| {
            LibraryError::BadPattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;
        Ok(Self { regex })
    }

    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

fn glob_to_regex(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::from("(?s)^");
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        i += 1;
        match c {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            '[' => {
                // A `]` right after `[` or `[!` is a literal member.
                let mut j = i;
                if chars.get(j) == Some(&'!') {
                    j += 1;
                }
                if chars.get(j) == Some(&']') {
                    j += 1;
                }
                while j < chars.len() && chars[j] != ']' {
                    j += 1;
                }
                if j >= chars.len() {
                    out.push_str(r"\[");
                    continue;
                }

                let mut body = &chars[i..j];
                out.push('[');
                if body.first() == Some(&'!') {
                    out.push('^');
                    body = &body[1..];
                }
                for &ch in body {
                    match ch {
                        '\\' | '[' | ']' | '&' | '~' | '^' => {
                            out.push('\\');
                            out.push(ch);
                        }
                        _ => out.push(ch),
                    }
                }
                out.push(']');
                i = j + 1;
            }
            other => {
                let mut buf = [0u8; 4];
                out.push_str(&regex::escape(other.encode_utf8(&mut buf)));
            }
        }
    }

    out.push('$');
    out
}
