// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use coindeck_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn http_error() {
        let err = CoreError::Http {
            status: 429,
            context: "market list".into(),
        };
        assert_eq!(err.to_string(), "HTTP 429 while fetching market list");
    }

    #[test]
    fn http_error_server_side() {
        let err = CoreError::Http {
            status: 503,
            context: "details for bitcoin".into(),
        };
        assert_eq!(err.to_string(), "HTTP 503 while fetching details for bitcoin");
    }

    #[test]
    fn api_error() {
        let err = CoreError::Api {
            provider: "CoinGecko".into(),
            message: "rate limited".into(),
        };
        assert_eq!(err.to_string(), "API error (CoinGecko): rate limited");
    }

    #[test]
    fn api_error_empty_provider() {
        let err = CoreError::Api {
            provider: String::new(),
            message: "unknown".into(),
        };
        assert_eq!(err.to_string(), "API error (): unknown");
    }

    #[test]
    fn network() {
        let err = CoreError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn storage() {
        let err = CoreError::Storage("permission denied".into());
        assert_eq!(err.to_string(), "Storage error: permission denied");
    }

    #[test]
    fn serialization() {
        let err = CoreError::Serialization("unexpected EOF".into());
        assert_eq!(err.to_string(), "Serialization error: unexpected EOF");
    }

    #[test]
    fn invalid_entry() {
        let err = CoreError::InvalidEntry("quantity must be a positive number, got 0".into());
        assert_eq!(
            err.to_string(),
            "Invalid portfolio entry: quantity must be a positive number, got 0"
        );
    }

    #[test]
    fn selection_full() {
        let err = CoreError::SelectionFull;
        assert_eq!(err.to_string(), "Only two assets can be compared at a time");
    }

    #[test]
    fn compare_not_ready() {
        let err = CoreError::CompareNotReady;
        assert_eq!(err.to_string(), "Select exactly two assets to compare");
    }
}

// ── Debug trait ─────────────────────────────────────────────────────

mod debug_trait {
    use super::*;

    #[test]
    fn all_variants_are_debug() {
        // Ensure Debug is derived and doesn't panic
        let variants: Vec<CoreError> = vec![
            CoreError::Http {
                status: 404,
                context: "test".into(),
            },
            CoreError::Api {
                provider: "p".into(),
                message: "m".into(),
            },
            CoreError::Network("test".into()),
            CoreError::Storage("test".into()),
            CoreError::Serialization("test".into()),
            CoreError::InvalidEntry("test".into()),
            CoreError::SelectionFull,
            CoreError::CompareNotReady,
        ];

        for variant in &variants {
            let debug = format!("{:?}", variant);
            assert!(!debug.is_empty());
        }
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod from_impls {
    use super::*;

    #[test]
    fn from_io_error_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let core_err: CoreError = io_err.into();
        match &core_err {
            CoreError::Storage(msg) => assert!(msg.contains("file not found")),
            other => panic!("Expected Storage, got {:?}", other),
        }
    }

    #[test]
    fn from_io_error_permission_denied() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let core_err: CoreError = io_err.into();
        match &core_err {
            CoreError::Storage(msg) => assert!(msg.contains("access denied")),
            other => panic!("Expected Storage, got {:?}", other),
        }
    }

    #[test]
    fn from_serde_json_error() {
        // Trigger a real serde_json error
        let result: Result<String, _> = serde_json::from_str("{{invalid json");
        let json_err = result.unwrap_err();
        let core_err: CoreError = json_err.into();
        match &core_err {
            CoreError::Serialization(msg) => {
                assert!(!msg.is_empty());
                // serde_json errors include line/column info
            }
            other => panic!("Expected Serialization, got {:?}", other),
        }
    }

    #[test]
    fn from_serde_json_error_eof() {
        let result: Result<serde_json::Value, _> = serde_json::from_str("");
        let json_err = result.unwrap_err();
        let core_err: CoreError = json_err.into();
        match &core_err {
            CoreError::Serialization(msg) => assert!(msg.contains("EOF")),
            other => panic!("Expected Serialization, got {:?}", other),
        }
    }
}

// ── Error is std::error::Error ──────────────────────────────────────

mod std_error {
    use super::*;

    #[test]
    fn core_error_implements_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CoreError::Network("test".into()));
        // Should compile and Display should work
        assert!(err.to_string().contains("test"));
    }

    #[test]
    fn core_error_implements_send() {
        fn assert_send<T: Send>() {}
        assert_send::<CoreError>();
    }

    #[test]
    fn core_error_implements_sync() {
        fn assert_sync<T: Sync>() {}
        assert_sync::<CoreError>();
    }
}

// ── Edge cases ──────────────────────────────────────────────────────

mod edge_cases {
    use super::*;

    #[test]
    fn very_long_error_message() {
        let long_msg = "x".repeat(10_000);
        let err = CoreError::Network(long_msg.clone());
        assert_eq!(err.to_string(), format!("Network error: {}", long_msg));
    }

    #[test]
    fn unicode_in_error_message() {
        let err = CoreError::Api {
            provider: "日本API".into(),
            message: "接続エラー".into(),
        };
        assert_eq!(err.to_string(), "API error (日本API): 接続エラー");
    }

    #[test]
    fn newlines_in_error_message() {
        let err = CoreError::Storage("line1\nline2\nline3".into());
        let display = err.to_string();
        assert!(display.contains("line1\nline2\nline3"));
    }

    #[test]
    fn http_status_boundaries() {
        let err = CoreError::Http {
            status: u16::MAX,
            context: "x".into(),
        };
        assert!(err.to_string().contains("65535"));
    }
}
