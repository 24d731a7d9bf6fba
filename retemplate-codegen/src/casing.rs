//! Identifier casing used for attribute names and inferred component names.

/// `modelValue` -> `model-value`, `innerHTML` -> `inner-html`.
/// `:` separators are kept, so `update:modelValue` -> `update:model-value`.
pub fn kebab_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        match c {
            '_' | '-' | ' ' => {
                if !out.is_empty() && !out.ends_with(['-', ':']) {
                    out.push('-');
                }
            }
            ':' => {
                while out.ends_with('-') {
                    out.pop();
                }
                out.push(':');
            }
            c if c.is_uppercase() => {
                let prev = i.checked_sub(1).map(|j| chars[j]);
                let next = chars.get(i + 1);
                let boundary = match prev {
                    Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                    Some(p) if p.is_uppercase() => next.is_some_and(|n| n.is_lowercase()),
                    _ => false,
                };
                if boundary && !out.is_empty() && !out.ends_with(['-', ':']) {
                    out.push('-');
                }
                out.extend(c.to_lowercase());
            }
            c => out.push(c),
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// `my-button` -> `MyButton`, `card_list` -> `CardList`. Any character that
/// is not alphanumeric separates words.
pub fn pascal_case(s: &str) -> String {
    kebab_case(s)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_from_camel() {
        assert_eq!(kebab_case("modelValue"), "model-value");
        assert_eq!(kebab_case("ariaLabel"), "aria-label");
        assert_eq!(kebab_case("Click"), "click");
        assert_eq!(kebab_case("innerHTML"), "inner-html");
        assert_eq!(kebab_case("XMLHttpRequest"), "xml-http-request");
    }

    #[test]
    fn kebab_keeps_existing_form() {
        assert_eq!(kebab_case("aria-label"), "aria-label");
        assert_eq!(kebab_case("class"), "class");
        assert_eq!(kebab_case("data_id"), "data-id");
    }

    #[test]
    fn kebab_keeps_colon_segments() {
        assert_eq!(kebab_case("update:modelValue"), "update:model-value");
        assert_eq!(kebab_case("Update:title"), "update:title");
    }

    #[test]
    fn pascal_from_file_stems() {
        assert_eq!(pascal_case("my-button"), "MyButton");
        assert_eq!(pascal_case("card_list"), "CardList");
        assert_eq!(pascal_case("button"), "Button");
        assert_eq!(pascal_case("MyButton"), "MyButton");
        assert_eq!(pascal_case("Card2"), "Card2");
        assert_eq!(pascal_case("my.button"), "MyButton");
        assert_eq!(pascal_case("user+profile card"), "UserProfileCard");
    }
}
