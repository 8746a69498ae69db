//! Field metadata used to document the drawing API.

use std::fmt;

use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Float,
    Int,
    Color,
    Shapes,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Float => "float",
            FieldKind::Int => "int",
            FieldKind::Color => "Color",
            FieldKind::Shapes => "Vec<Shape>",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDoc {
    pub name: &'static str,
    pub kind: FieldKind,
    pub optional: bool,
}

impl FieldDoc {
    pub fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            optional: false,
        }
    }

    pub fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            optional: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDoc {
    pub name: &'static str,
    pub summary: &'static str,
    pub fields: Vec<FieldDoc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Shapes,
    Distributions,
    Colors,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Section::Shapes => "Shapes",
            Section::Distributions => "Distributions",
            Section::Colors => "Colors",
        }
    }
}

/// Record types that can describe their own fields.
pub trait Documented {
    const NAME: &'static str;
    const SUMMARY: &'static str;

    fn fields() -> Vec<FieldDoc>;

    fn type_doc() -> TypeDoc {
        TypeDoc {
            name: Self::NAME,
            summary: Self::SUMMARY,
            fields: Self::fields(),
        }
    }
}

fn distribution_docs() -> Vec<TypeDoc> {
    let doc = |name, summary, a, b, kind| TypeDoc {
        name,
        summary,
        fields: vec![FieldDoc::required(a, kind), FieldDoc::required(b, kind)],
    };
    vec![
        doc("uniform_float", "Uniform draw in [low, high)", "low", "high", FieldKind::Float),
        doc("uniform_int", "Uniform draw in [low, high), truncated", "low", "high", FieldKind::Int),
        doc("normal_float", "Normal draw", "mean", "st_dev", FieldKind::Float),
        doc("normal_int", "Normal draw, truncated", "mean", "st_dev", FieldKind::Float),
    ]
}

/// Every documented type, grouped by section, in a stable order.
pub fn catalog() -> Vec<(Section, Vec<TypeDoc>)> {
    vec![
        (Section::Shapes, shape_docs()),
        (Section::Distributions, distribution_docs()),
        (Section::Colors, Color::docs()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sections() {
        let sections: Vec<Section> = catalog().into_iter().map(|(s, _)| s).collect();
        assert_eq!(
            sections,
            vec![Section::Shapes, Section::Distributions, Section::Colors]
        );
    }

    #[test]
    fn test_rect_fields() {
        let doc = Rect::type_doc();
        assert_eq!(doc.name, "Rect");
        let names: Vec<&str> = doc.fields.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec!["x", "y", "width", "height", "stroke", "fill", "items"]
        );
        assert!(doc.fields[4].optional);
        assert_eq!(doc.fields[4].kind, FieldKind::Color);
    }

    #[test]
    fn test_polygon_sides_is_int() {
        let doc = Polygon::type_doc();
        let sides = doc.fields.iter().find(|f| f.name == "sides").unwrap();
        assert_eq!(sides.kind, FieldKind::Int);
        assert!(!sides.optional);
    }
}
