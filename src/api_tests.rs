#[cfg(test)]
mod tests {
    use crate::api::{ProjectId, SnapshotId, StafferId, TaskId};
    use uuid::Uuid;

    #[test]
    fn test_staffer_id_new_and_value() {
        let raw = Uuid::new_v4();
        let id = StafferId::new(raw);
        assert_eq!(id.value(), raw);
    }

    #[test]
    fn test_id_equality() {
        let raw = Uuid::new_v4();
        assert_eq!(ProjectId::new(raw), ProjectId::new(raw));
        assert_ne!(ProjectId::generate(), ProjectId::new(raw));
    }

    #[test]
    fn test_generate_is_unique() {
        assert_ne!(TaskId::generate(), TaskId::generate());
        assert_ne!(SnapshotId::generate(), SnapshotId::generate());
    }

    #[test]
    fn test_display_matches_uuid() {
        let raw = Uuid::new_v4();
        assert_eq!(StafferId::new(raw).to_string(), raw.to_string());
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = ProjectId::generate();
        let json = serde_json::to_string(&id).unwrap();
        let back: ProjectId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_ids_usable_as_map_keys() {
        use std::collections::HashMap;
        let mut map = HashMap::new();
        let id = ProjectId::generate();
        map.insert(id, 1);
        assert_eq!(map.get(&id), Some(&1));
    }
}
