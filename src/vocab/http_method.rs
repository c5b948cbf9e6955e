closed_union! {
    /// HTTP verbs, including the WebDAV and extension methods.
    HttpMethod, kind = "http-method" {
        Checkout => "checkout",
        Copy => "copy",
        Delete => "delete",
        Get => "get",
        Head => "head",
        Lock => "lock",
        Merge => "merge",
        MkActivity => "mkactivity",
        MkCol => "mkcol",
        Move => "move",
        /// SSDP discovery.
        MSearch => "m-search",
        Notify => "notify",
        Options => "options",
        Patch => "patch",
        Post => "post",
        Purge => "purge",
        Put => "put",
        Report => "report",
        Search => "search",
        Subscribe => "subscribe",
        Trace => "trace",
        Unlock => "unlock",
        Unsubscribe => "unsubscribe",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_verbs_parse() {
        assert_eq!("get".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("m-search".parse::<HttpMethod>().unwrap(), HttpMethod::MSearch);
    }

    #[test]
    fn wrong_case_and_unknown_verbs_are_rejected() {
        assert!("GET".parse::<HttpMethod>().is_err());
        assert!("fetch".parse::<HttpMethod>().is_err());
        assert!(!HttpMethod::is_member("Post"));
    }

    #[test]
    fn membership_is_exact() {
        let tokens: Vec<&str> = HttpMethod::ALL.iter().map(|m| m.as_str()).collect();
        assert_eq!(
            tokens,
            [
                "checkout", "copy", "delete", "get", "head", "lock", "merge", "mkactivity",
                "mkcol", "move", "m-search", "notify", "options", "patch", "post", "purge",
                "put", "report", "search", "subscribe", "trace", "unlock", "unsubscribe",
            ]
        );
    }

    #[test]
    fn serde_uses_the_token() {
        assert_eq!(serde_json::to_string(&HttpMethod::MkCol).unwrap(), r#""mkcol""#);
        let m: HttpMethod = serde_json::from_str(r#""unsubscribe""#).unwrap();
        assert_eq!(m, HttpMethod::Unsubscribe);
        assert!(serde_json::from_str::<HttpMethod>(r#""DELETE""#).is_err());
    }

    #[test]
    fn exhaustive_match_compiles() {
        fn is_safe(m: HttpMethod) -> bool {
            match m {
                HttpMethod::Get | HttpMethod::Head | HttpMethod::Options | HttpMethod::Trace
                | HttpMethod::Search | HttpMethod::Report | HttpMethod::MSearch => true,
                HttpMethod::Checkout | HttpMethod::Copy | HttpMethod::Delete | HttpMethod::Lock
                | HttpMethod::Merge | HttpMethod::MkActivity | HttpMethod::MkCol | HttpMethod::Move
                | HttpMethod::Notify | HttpMethod::Patch | HttpMethod::Post | HttpMethod::Purge
                | HttpMethod::Put | HttpMethod::Subscribe | HttpMethod::Unlock
                | HttpMethod::Unsubscribe => false,
            }
        }
        assert_eq!(HttpMethod::ALL.iter().filter(|m| is_safe(**m)).count(), 7);
    }
}
