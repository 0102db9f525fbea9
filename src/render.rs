//! Markdown rendering of schema snapshots.
//!
//! All entry points are pure functions of their inputs: the same snapshot
//! always renders to byte-identical output. Output uses `#`/`##`/`###`
//! headers and GitHub-style pipe tables.

use crate::model::{Association, AssociationShape, EntitySchema, Field, SchemaSnapshot};

const FIELDS_TABLE_HEADER: &str = "### 字段\n\
     | 名称 | 类型 | 长度 | 允许空 | 默认值 | 说明 |\n\
     |--------|------|------|--------|--------|------|";

/// Render the table-of-tables index: one row per entity, snapshot order.
pub fn render_table_index(snapshot: &SchemaSnapshot) -> String {
    let mut out = String::from("# 数据库表清单\n\n| 表名 | 说明 |\n|------|------|\n");

    for entry in snapshot.iter() {
        let comment = non_empty_or(&entry.schema.comment, "-");
        out.push_str(&format!("| {} | {} |\n", entry.schema.table_name, comment));
    }

    out
}

/// Render one table's fields as a three-column view.
///
/// A table name the snapshot does not know renders a "not found"
/// placeholder rather than failing.
pub fn render_table_fields(snapshot: &SchemaSnapshot, table_name: &str) -> String {
    let Some(schema) = snapshot.find_by_table(table_name) else {
        return format!("# {table_name}\n\n表不存在");
    };

    let mut out = format!("# {table_name}\n\n| 字段名 | 类型 | 说明 |\n|--------|------|------|\n");
    for field in &schema.fields {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            field.column_name, field.type_name, field.comment
        ));
    }

    out
}

/// Render the full dictionary: one section per entity, snapshot order.
pub fn render_dictionary(snapshot: &SchemaSnapshot) -> String {
    snapshot
        .iter()
        .map(|entry| render_entity_section(&entry.schema))
        .collect()
}

/// Render one entity's dictionary section: comment, fields table and,
/// when present, the relationship list.
pub fn render_entity_section(schema: &EntitySchema) -> String {
    let comment = non_empty_or(&schema.comment, "无");
    let mut out = format!("## {}\n{}\n\n", schema.table_name, comment);

    out.push_str(FIELDS_TABLE_HEADER);
    for field in &schema.fields {
        out.push_str(&render_field_row(field));
    }

    if !schema.associations.is_empty() {
        out.push_str("\n\n### 关系\n");
        for association in &schema.associations {
            out.push_str(&render_association(association));
        }
    }

    out.push_str("\n---\n\n");
    out
}

fn render_field_row(field: &Field) -> String {
    let length = field
        .length
        .map_or_else(|| "-".to_string(), |length| length.to_string());
    let nullable = if field.nullable { "Y" } else { "N" };
    let default = field.default.display().unwrap_or("-");

    format!(
        "\n| {} | {} | {} | {} | {} | {} |",
        field.column_name, field.type_name, length, nullable, default, field.display_comment
    )
}

fn render_association(association: &Association) -> String {
    let kind = association.kind.label();
    let target = &association.target_table;

    match &association.shape {
        AssociationShape::JoinColumns(columns) => columns
            .iter()
            .map(|column| {
                format!(
                    "- {kind}：本表 `{}` 关联 `{target}` 的 `{}`\n",
                    column.name, column.referenced_column_name
                )
            })
            .collect(),
        AssociationShape::JoinTable(join_table) => {
            format!("- {kind}：与 `{target}` 通过中间表 `{}` 关联\n", join_table.name)
        }
        AssociationShape::None => format!("- {kind}：与 `{target}` 关联\n"),
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}
