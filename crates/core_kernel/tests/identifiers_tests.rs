//! Comprehensive unit tests for the Identifiers module
//!
//! Tests cover both identifier types, their creation, parsing,
//! conversion, and display formatting.

use core_kernel::{ClaimId, UserId};
use proptest::prelude::*;
use uuid::Uuid;

mod claim_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = ClaimId::new();
        let id2 = ClaimId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_new_v7_generates_time_ordered_ids() {
        let id1 = ClaimId::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let id2 = ClaimId::new_v7();
        let uuid1: Uuid = id1.into();
        let uuid2: Uuid = id2.into();
        assert!(uuid1 < uuid2);
    }

    #[test]
    fn test_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = ClaimId::from_uuid(uuid);
        assert_eq!(*id.as_uuid(), uuid);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(ClaimId::prefix(), "CLM");
    }

    #[test]
    fn test_display_format() {
        let id = ClaimId::new();
        let display = id.to_string();
        assert!(display.starts_with("CLM-"));
    }

    #[test]
    fn test_from_str_with_prefix() {
        let original = ClaimId::new();
        let string = original.to_string();
        let parsed: ClaimId = string.parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_from_str_accepts_bare_uuid() {
        let uuid = Uuid::now_v7();
        let parsed: ClaimId = uuid.to_string().parse().unwrap();
        assert_eq!(*parsed.as_uuid(), uuid);
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!("not-a-uuid".parse::<ClaimId>().is_err());
        assert!("CLM-not-a-uuid".parse::<ClaimId>().is_err());
        assert!("".parse::<ClaimId>().is_err());
    }

    #[test]
    fn test_uuid_conversion() {
        let uuid = Uuid::new_v4();
        let id: ClaimId = uuid.into();
        let back: Uuid = id.into();
        assert_eq!(uuid, back);
    }

    #[test]
    fn test_json_serialization_is_transparent() {
        let uuid = Uuid::new_v4();
        let id = ClaimId::from_uuid(uuid);

        // On the wire an identifier is just its UUID, no prefix
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));

        let deserialized: ClaimId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}

mod user_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = UserId::new();
        let id2 = UserId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(UserId::prefix(), "USR");
    }

    #[test]
    fn test_display_format() {
        let id = UserId::new();
        let display = id.to_string();
        assert!(display.starts_with("USR-"));
    }

    #[test]
    fn test_from_str_round_trip() {
        let original = UserId::new();
        let string = original.to_string();
        let parsed: UserId = string.parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_does_not_parse_foreign_prefix() {
        // A claim display string is not a valid user ID
        let claim = ClaimId::new();
        assert!(claim.to_string().parse::<UserId>().is_err());
    }

    #[test]
    fn test_json_serialization() {
        let id = UserId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}

mod property_tests {
    use super::*;

    proptest! {
        #[test]
        fn display_round_trips_for_any_uuid(bytes in any::<[u8; 16]>()) {
            let id = ClaimId::from_uuid(Uuid::from_bytes(bytes));
            let parsed: ClaimId = id.to_string().parse().unwrap();
            prop_assert_eq!(id, parsed);
        }

        #[test]
        fn bare_uuid_and_prefixed_parse_agree(bytes in any::<[u8; 16]>()) {
            let uuid = Uuid::from_bytes(bytes);
            let bare: ClaimId = uuid.to_string().parse().unwrap();
            let prefixed: ClaimId = format!("CLM-{}", uuid).parse().unwrap();
            prop_assert_eq!(bare, prefixed);
        }
    }
}
