mod studio;

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

pub use self::studio::{studio_schema, CommentPreview, PreparedPreview};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Array,
    Block,
    Boolean,
    Code,
    Datetime,
    Document,
    Image,
    Object,
    Reference,
    Slug,
    String,
    Text,
    Url,
    /// A type registered elsewhere in the schema, by name
    Named(&'static str),
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Array => "array",
            Self::Block => "block",
            Self::Boolean => "boolean",
            Self::Code => "code",
            Self::Datetime => "datetime",
            Self::Document => "document",
            Self::Image => "image",
            Self::Object => "object",
            Self::Reference => "reference",
            Self::Slug => "slug",
            Self::String => "string",
            Self::Text => "text",
            Self::Url => "url",
            Self::Named(name) => name,
        }
    }
}

impl Serialize for FieldType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", content = "value", rename_all = "lowercase")]
pub enum Rule {
    Required,
    Min(u32),
    Max(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Radio,
    Dropdown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub title: String,
    pub value: String,
}

impl ListItem {
    pub fn new(title: &str, value: &str) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotspot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_highlighted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_filename: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub list: Vec<ListItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
}

impl Options {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefTarget {
    #[serde(rename = "type")]
    pub kind: String,
}

/// Which fields the studio selects to build a list preview, and the
/// component that renders it, if any
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub select: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
}

impl Preview {
    pub fn select(mut self, key: &str, path: &str) -> Self {
        self.select.insert(key.into(), path.into());
        self
    }

    pub fn component(mut self, name: &str) -> Self {
        self.component = Some(name.into());
        self
    }
}

/// A document type, an object type, a field, or an array member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validation: Vec<Rule>,
    #[serde(skip_serializing_if = "Options::is_empty")]
    pub options: Options,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub to: Vec<RefTarget>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub of: Vec<SchemaType>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<SchemaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<Preview>,
}

impl SchemaType {
    /// Anonymous member, e.g. an array entry
    pub fn new(kind: FieldType) -> Self {
        Self {
            name: None,
            kind,
            title: None,
            description: None,
            validation: Vec::new(),
            options: Options::default(),
            to: Vec::new(),
            of: Vec::new(),
            fields: Vec::new(),
            preview: None,
        }
    }

    pub fn field(name: &str, kind: FieldType) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(kind)
        }
    }

    pub fn document(name: &str, title: &str) -> Self {
        Self::field(name, FieldType::Document).title(title)
    }

    pub fn object(name: &str, title: &str) -> Self {
        Self::field(name, FieldType::Object).title(title)
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.validation.push(rule);
        self
    }

    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn reference_to(mut self, kind: &str) -> Self {
        self.to.push(RefTarget { kind: kind.into() });
        self
    }

    pub fn of(mut self, member: SchemaType) -> Self {
        self.of.push(member);
        self
    }

    pub fn with_field(mut self, field: SchemaType) -> Self {
        self.fields.push(field);
        self
    }

    pub fn preview(mut self, preview: Preview) -> Self {
        self.preview = Some(preview);
        self
    }

    pub fn get_field(&self, name: &str) -> Option<&SchemaType> {
        self.fields.iter().find(|f| f.name.as_deref() == Some(name))
    }

    pub fn is_required(&self) -> bool {
        self.validation.contains(&Rule::Required)
    }

    /// Names of the type's required fields, in declaration order
    pub fn required_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.is_required())
            .filter_map(|f| f.name.as_deref())
            .collect()
    }

    /// Every type name this type points at, through references or
    /// named members, at any depth
    fn referenced_types<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.extend(self.to.iter().map(|t| t.kind.as_str()));
        if let FieldType::Named(name) = self.kind {
            out.push(name);
        }
        for child in self.of.iter().chain(self.fields.iter()) {
            child.referenced_types(out);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaDocument {
    pub name: String,
    pub types: Vec<SchemaType>,
}

impl SchemaDocument {
    pub fn get(&self, name: &str) -> Option<&SchemaType> {
        self.types.iter().find(|t| t.name.as_deref() == Some(name))
    }

    /// Type names that are referenced but never declared
    pub fn dangling_references(&self) -> Vec<&str> {
        let mut referenced = Vec::new();
        for ty in &self.types {
            ty.referenced_types(&mut referenced);
        }
        referenced.sort_unstable();
        referenced.dedup();
        referenced.retain(|name| self.get(name).is_none());
        referenced
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialize(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Serialize(e.to_string()))
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn skips_empty_parts() {
        let field = SchemaType::field("name", FieldType::String).title("Name");
        assert_eq!(
            serde_json::to_value(&field).unwrap(),
            json!({ "name": "name", "type": "string", "title": "Name" })
        );
    }

    #[test]
    fn rules_and_references() {
        let field = SchemaType::field("author", FieldType::Reference)
            .reference_to("author")
            .rule(Rule::Required)
            .rule(Rule::Min(5));
        assert_eq!(
            serde_json::to_value(&field).unwrap(),
            json!({
                "name": "author",
                "type": "reference",
                "validation": [{ "rule": "required" }, { "rule": "min", "value": 5 }],
                "to": [{ "type": "author" }],
            })
        );
        assert!(field.is_required());
    }

    #[test]
    fn named_members() {
        let field = SchemaType::field("body", FieldType::Array)
            .of(SchemaType::new(FieldType::Block))
            .of(SchemaType::new(FieldType::Named("youtube")));
        assert_eq!(
            serde_json::to_value(&field).unwrap()["of"],
            json!([{ "type": "block" }, { "type": "youtube" }])
        );
    }

    #[test]
    fn options_are_camel_case() {
        let options = Options {
            is_highlighted: Some(true),
            layout: Some(Layout::Radio),
            list: vec![ListItem::new("Left", "left")],
            ..Default::default()
        };
        assert!(!options.is_empty());
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({
                "isHighlighted": true,
                "list": [{ "title": "Left", "value": "left" }],
                "layout": "radio",
            })
        );
    }

    #[test]
    fn finds_dangling_references() {
        let doc = SchemaDocument {
            name: "default".into(),
            types: vec![SchemaType::document("comment", "Comment")
                .with_field(SchemaType::field("blog", FieldType::Reference).reference_to("blog"))],
        };
        assert_eq!(doc.dangling_references(), vec!["blog"]);
    }
}
