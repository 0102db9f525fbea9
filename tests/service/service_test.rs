#[cfg(test)]
mod tests {
    use schemadoc::metadata::{EntityMetadata, FieldMapping, JsonSchemaSource, NamingStrategy};
    use schemadoc::service::EntityService;
    use schemadoc::tool::{GetDatabaseDictionary, Tool};
    use serde_json::json;

    fn sample_service() -> EntityService<JsonSchemaSource> {
        let user = EntityMetadata::new("User", "user_table")
            .with_options(json!({"comment": "用户表"}))
            .with_identifier(vec!["id"])
            .with_field("id", FieldMapping::Raw(json!({"type": "integer"})))
            .with_field(
                "name",
                FieldMapping::Raw(json!({
                    "type": "string",
                    "length": 64,
                    "options": {"comment": "用户名"}
                })),
            )
            .with_association(
                "roles",
                json!({
                    "type": 8,
                    "targetEntity": "Role",
                    "joinTable": {"name": "user_role"}
                }),
            );

        let role = EntityMetadata::new("Role", "role_table")
            .with_identifier(vec!["id"])
            .with_field("id", FieldMapping::Raw(json!({"type": "integer"})));

        EntityService::new(JsonSchemaSource::new(NamingStrategy::Default, vec![user, role]))
    }

    #[test]
    fn test_snapshot_covers_all_entities_in_order() {
        let snapshot = sample_service().all_entities_metadata();

        let entities: Vec<&str> = snapshot.iter().map(|e| e.entity.as_str()).collect();
        assert_eq!(entities, vec!["User", "Role"]);

        let user = snapshot.get("User").unwrap();
        assert_eq!(user.table_name, "user_table");
        assert_eq!(user.comment, "用户表");
        assert_eq!(user.fields.len(), 2);
        assert_eq!(user.associations.len(), 1);
    }

    #[test]
    fn test_entity_metadata_lookup() {
        let service = sample_service();

        let role = service.entity_metadata("Role").unwrap();
        assert_eq!(role.table_name, "role_table");
        assert_eq!(role.comment, "");

        // Lookup failures degrade to absence, never an error.
        assert!(service.entity_metadata("Missing").is_none());
    }

    #[test]
    fn test_all_table_names() {
        assert_eq!(
            sample_service().all_table_names(),
            "# 数据库表清单\n\n\
             | 表名 | 说明 |\n\
             |------|------|\n\
             | user_table | 用户表 |\n\
             | role_table | - |\n"
        );
    }

    #[test]
    fn test_table_fields() {
        let service = sample_service();

        assert_eq!(
            service.table_fields("user_table"),
            "# user_table\n\n\
             | 字段名 | 类型 | 说明 |\n\
             |--------|------|------|\n\
             | id | int |  |\n\
             | name | varchar | 用户名 |\n"
        );

        assert_eq!(
            service.table_fields("nonexistent"),
            "# nonexistent\n\n表不存在"
        );
    }

    #[test]
    fn test_full_markdown_sections() {
        let markdown = sample_service().generate_database_markdown();

        assert!(markdown.contains("## user_table\n用户表\n"));
        assert!(markdown.contains("| id | int | - | N | - | - (主键) |"));
        assert!(markdown.contains("| name | varchar | 64 | N | - | 用户名 |"));
        assert!(markdown.contains("### 关系\n- 多对多：与 `role_table` 通过中间表 `user_role` 关联\n"));
        assert!(markdown.contains("## role_table\n无\n"));
    }

    #[test]
    fn test_empty_source() {
        let service = EntityService::new(JsonSchemaSource::new(NamingStrategy::Default, vec![]));

        assert!(service.all_entities_metadata().is_empty());
        assert_eq!(
            service.all_table_names(),
            "# 数据库表清单\n\n| 表名 | 说明 |\n|------|------|\n"
        );
        assert_eq!(service.generate_database_markdown(), "");
    }

    #[test]
    fn test_repeated_calls_are_byte_identical() {
        let service = sample_service();
        assert_eq!(
            service.generate_database_markdown(),
            service.generate_database_markdown()
        );
        assert_eq!(service.all_table_names(), service.all_table_names());
    }

    #[test]
    fn test_dictionary_tool_delegates_to_the_service() {
        let expected = sample_service().generate_database_markdown();

        let tool = GetDatabaseDictionary::new(sample_service());
        assert_eq!(tool.name(), "GetDatabaseDictionary");
        assert!(!tool.description().is_empty());
        assert_eq!(tool.call(), expected);
    }
}
