#[cfg(test)]
mod tests {
    use schemadoc::extract::AssociationExtractor;
    use schemadoc::metadata::{EntityMetadata, JsonSchemaSource, NamingStrategy};
    use schemadoc::model::{AssociationShape, RelationKind};
    use serde_json::json;

    fn source_with(entities: Vec<EntityMetadata>) -> JsonSchemaSource {
        JsonSchemaSource::new(NamingStrategy::Default, entities)
    }

    #[test]
    fn test_target_table_resolved_through_source() {
        let src = source_with(vec![EntityMetadata::new("Role", "role_table")]);
        let entity = EntityMetadata::new("User", "user").with_association(
            "role",
            json!({"type": 2, "targetEntity": "Role"}),
        );

        let associations = AssociationExtractor::new(&src).extract(&entity);

        assert_eq!(associations.len(), 1);
        assert_eq!(associations[0].field_name, "role");
        assert_eq!(associations[0].kind, RelationKind::ManyToOne);
        assert_eq!(associations[0].target_entity, "Role");
        assert_eq!(associations[0].target_table, "role_table");
    }

    #[test]
    fn test_unresolvable_target_is_dropped() {
        let src = source_with(vec![EntityMetadata::new("Role", "role_table")]);
        let entity = EntityMetadata::new("User", "user")
            .with_association("ghost", json!({"type": 2, "targetEntity": "Missing"}))
            .with_association("role", json!({"type": 2, "targetEntity": "Role"}));

        let associations = AssociationExtractor::new(&src).extract(&entity);

        // The bad association disappears; the rest of the entity survives.
        assert_eq!(associations.len(), 1);
        assert_eq!(associations[0].field_name, "role");
    }

    #[test]
    fn test_malformed_mappings_are_dropped() {
        let src = source_with(vec![EntityMetadata::new("Role", "role_table")]);
        let entity = EntityMetadata::new("User", "user")
            .with_association("junk", json!("not an object"))
            .with_association("unnamed", json!({"type": 2}))
            .with_association("empty", json!({"type": 2, "targetEntity": ""}));

        let associations = AssociationExtractor::new(&src).extract(&entity);
        assert!(associations.is_empty());
    }

    #[test]
    fn test_kind_codes() {
        let src = source_with(vec![EntityMetadata::new("Role", "role_table")]);
        let entity = EntityMetadata::new("User", "user")
            .with_association("a", json!({"type": 1, "targetEntity": "Role"}))
            .with_association("b", json!({"type": 2, "targetEntity": "Role"}))
            .with_association("c", json!({"type": 4, "targetEntity": "Role"}))
            .with_association("d", json!({"type": 8, "targetEntity": "Role"}))
            .with_association("e", json!({"type": 3, "targetEntity": "Role"}))
            .with_association("f", json!({"type": "2", "targetEntity": "Role"}));

        let associations = AssociationExtractor::new(&src).extract(&entity);
        let kinds: Vec<RelationKind> = associations.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RelationKind::OneToOne,
                RelationKind::ManyToOne,
                RelationKind::OneToMany,
                RelationKind::ManyToMany,
                RelationKind::Unknown,
                // A non-integer kind code is unknown, not an error.
                RelationKind::Unknown,
            ]
        );
    }

    #[test]
    fn test_join_columns_shape() {
        let src = source_with(vec![EntityMetadata::new("Role", "role_table")]);
        let entity = EntityMetadata::new("User", "user").with_association(
            "role",
            json!({
                "type": 2,
                "targetEntity": "Role",
                "joinColumns": [
                    {"name": "role_id", "referencedColumnName": "id", "onDelete": "CASCADE"},
                    "garbage"
                ]
            }),
        );

        let associations = AssociationExtractor::new(&src).extract(&entity);
        assert!(associations[0].has_join_columns());
        assert!(!associations[0].has_join_table());

        let AssociationShape::JoinColumns(columns) = &associations[0].shape else {
            panic!("expected join columns");
        };
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].name, "role_id");
        assert_eq!(columns[0].referenced_column_name, "id");
        assert_eq!(columns[0].on_delete.as_deref(), Some("CASCADE"));
        assert_eq!(columns[0].on_update, None);
        // Malformed entries become the all-default record.
        assert_eq!(columns[1].name, "");
        assert_eq!(columns[1].referenced_column_name, "");
    }

    #[test]
    fn test_join_table_shape() {
        let src = source_with(vec![EntityMetadata::new("Role", "role_table")]);
        let entity = EntityMetadata::new("User", "user").with_association(
            "roles",
            json!({
                "type": 8,
                "targetEntity": "Role",
                "joinTable": {
                    "name": "user_role",
                    "joinColumns": [{"name": "user_id", "referencedColumnName": "id"}],
                    "inverseJoinColumns": [{"name": "role_id", "referencedColumnName": "id"}]
                }
            }),
        );

        let associations = AssociationExtractor::new(&src).extract(&entity);
        assert!(associations[0].has_join_table());
        assert!(!associations[0].has_join_columns());

        let AssociationShape::JoinTable(join_table) = &associations[0].shape else {
            panic!("expected join table");
        };
        assert_eq!(join_table.name, "user_role");
        assert_eq!(join_table.join_columns.len(), 1);
        assert_eq!(join_table.join_columns[0].name, "user_id");
        assert_eq!(join_table.inverse_join_columns.len(), 1);
        assert_eq!(join_table.inverse_join_columns[0].name, "role_id");
    }

    #[test]
    fn test_join_table_missing_column_lists_default_empty() {
        let src = source_with(vec![EntityMetadata::new("Role", "role_table")]);
        let entity = EntityMetadata::new("User", "user").with_association(
            "roles",
            json!({"type": 8, "targetEntity": "Role", "joinTable": {"name": "user_role"}}),
        );

        let associations = AssociationExtractor::new(&src).extract(&entity);
        let AssociationShape::JoinTable(join_table) = &associations[0].shape else {
            panic!("expected join table");
        };
        assert!(join_table.join_columns.is_empty());
        assert!(join_table.inverse_join_columns.is_empty());
    }

    #[test]
    fn test_inverse_side_has_no_shape() {
        let src = source_with(vec![EntityMetadata::new("Order", "orders")]);
        let entity = EntityMetadata::new("Customer", "customers").with_association(
            "orders",
            json!({"type": 4, "targetEntity": "Order"}),
        );

        let associations = AssociationExtractor::new(&src).extract(&entity);
        assert_eq!(associations[0].shape, AssociationShape::None);
        assert!(!associations[0].has_join_columns());
        assert!(!associations[0].has_join_table());
    }

    #[test]
    fn test_declaration_order_is_preserved() {
        let src = source_with(vec![
            EntityMetadata::new("Role", "role_table"),
            EntityMetadata::new("Team", "team_table"),
        ]);
        let entity = EntityMetadata::new("User", "user")
            .with_association("team", json!({"type": 2, "targetEntity": "Team"}))
            .with_association("roles", json!({"type": 8, "targetEntity": "Role"}));

        let associations = AssociationExtractor::new(&src).extract(&entity);
        let order: Vec<&str> = associations.iter().map(|a| a.field_name.as_str()).collect();
        assert_eq!(order, vec!["team", "roles"]);
    }
}
