//! Bracketed renderings of collections used in demonstration output

use std::fmt::Display;

pub fn quoted(s: impl Display) -> String {
    format!("'{}'", s)
}

fn joined<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `['a', 'b']`
pub fn str_list<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    format!("[{}]", joined(items.into_iter().map(quoted)))
}

/// `[1, 2]`
pub fn list<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    format!("[{}]", joined(items))
}

/// `{'a', 'b'}`, or `set()` when empty
pub fn str_set<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    let body = joined(items.into_iter().map(quoted));
    if body.is_empty() {
        "set()".to_string()
    } else {
        format!("{{{}}}", body)
    }
}

/// `{'key': value}`
pub fn dict<I, K, V>(entries: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    format!(
        "{{{}}}",
        joined(entries.into_iter().map(|(k, v)| format!("{}: {}", quoted(k), v)))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderings() {
        assert_eq!(str_list(["a", "b"]), "['a', 'b']");
        assert_eq!(list([1, 2, 3]), "[1, 2, 3]");
        assert_eq!(str_set(Vec::<&str>::new()), "set()");
        assert_eq!(str_set(["x"]), "{'x'}");
        assert_eq!(dict([("potion", 5)]), "{'potion': 5}");
        assert_eq!(dict(Vec::<(&str, u32)>::new()), "{}");
    }
}
