//! Replacement template dialect.
//!
//! Configurations are written with ECMAScript-style templates (`$1`, `$12`,
//! `$&`, `$$`, `$<name>`). The regex engine expands `${name}` templates, where
//! an undelimited `$1x` would name a group `1x`. Templates are rewritten once,
//! at compile time.
//!
//! `${name}` is passed through untouched. `` $` `` and `$'` have no equivalent
//! and are handed to the engine as written.

/// Rewrites `template` for a pattern with `groups` capture groups (group 0 included).
pub(crate) fn to_expander_template(template: &str, groups: usize) -> String {
    let mut out = String::with_capacity(template.len() + 4);
    let mut rest = template;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let mut chars = after.chars();

        rest = match chars.next() {
            Some('$') => {
                out.push_str("$$");
                &after[1..]
            }
            Some('&') => {
                out.push_str("${0}");
                &after[1..]
            }
            Some('{') => match after.find('}') {
                Some(close) => {
                    out.push('$');
                    out.push_str(&after[..=close]);
                    &after[close + 1..]
                }
                None => {
                    out.push_str("$$");
                    after
                }
            },
            Some('<') => match after.find('>') {
                Some(close) => {
                    out.push_str("${");
                    out.push_str(&after[1..close]);
                    out.push('}');
                    &after[close + 1..]
                }
                None => {
                    out.push_str("$$");
                    after
                }
            },
            Some(first @ '0'..='9') => {
                let one = first as usize - '0' as usize;
                let two = chars
                    .next()
                    .and_then(|c| c.to_digit(10))
                    .map(|second| one * 10 + second as usize);

                match two {
                    Some(index) if (1..groups).contains(&index) => {
                        out.push_str(&format!("${{{index}}}"));
                        &after[2..]
                    }
                    _ if (1..groups).contains(&one) => {
                        out.push_str(&format!("${{{one}}}"));
                        &after[1..]
                    }
                    // No such group: a literal dollar sign.
                    _ => {
                        out.push_str("$$");
                        after
                    }
                }
            }
            Some('`') | Some('\'') => {
                out.push('$');
                after
            }
            _ => {
                out.push_str("$$");
                after
            }
        };
    }

    out.push_str(rest);
    out
}
