/// Map an optional text field to its stored value: empty means NULL.
pub fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_becomes_absent() {
        assert_eq!(normalize(Some(String::new())), None);
        assert_eq!(normalize(None), None);
    }

    #[test]
    fn non_empty_passes_through() {
        assert_eq!(normalize(Some("riset".into())), Some("riset".to_string()));
        assert_eq!(normalize(Some(" ".into())), Some(" ".to_string()));
    }

    #[test]
    fn idempotent() {
        for value in [None, Some(String::new()), Some("kunjungan industri".to_string())] {
            let once = normalize(value);
            assert_eq!(normalize(once.clone()), once);
        }
    }
}
