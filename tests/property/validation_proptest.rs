//! Property-based tests for content validation and store behavior

use proptest::prelude::*;

use agrichat::backend::chat::MessageStore;
use agrichat::shared::error::validate_content;

proptest! {
    #[test]
    fn test_whitespace_only_content_rejected(content in "[ \t\r\n]*") {
        prop_assert!(validate_content(&content).is_err());
    }

    #[test]
    fn test_content_with_any_visible_character_accepted(
        pad_left in "[ \t]*",
        body in "[!-~]{1,40}",
        pad_right in "[ \t]*",
    ) {
        let content = format!("{pad_left}{body}{pad_right}");
        prop_assert!(validate_content(&content).is_ok());
    }

    #[test]
    fn test_store_assigns_unique_ids(contents in prop::collection::vec("[a-z]{1,12}", 1..20)) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        rt.block_on(async {
            let store = MessageStore::new();
            for content in &contents {
                store.create("alice".to_string(), content.clone(), None).await;
            }

            let messages = store.list().await;
            let mut ids: Vec<_> = messages.iter().map(|m| m.id).collect();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), contents.len());

            // Creation order is list order
            let listed: Vec<&str> = messages.iter().map(|m| m.content.as_str()).collect();
            let expected: Vec<&str> = contents.iter().map(|c| c.as_str()).collect();
            prop_assert_eq!(listed, expected);
            Ok(())
        })?;
    }
}
