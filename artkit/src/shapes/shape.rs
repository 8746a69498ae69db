use serde::Serialize;

use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Qualifier {
    Rough,
    Blurry,
    Swiggly,
}

/* ══════════════  RECORD DECLARATIONS  ═══════════════════════════════ */

/// Declares a shape record: numeric fields (each a [`Value`]), the optional
/// colours it carries, children and qualifiers, plus its field metadata.
macro_rules! shape {
    (
        $(#[$meta:meta])*
        $name:ident, $summary:expr,
        { $($field:ident : $kind:ident),* $(,)? },
        [$($paint:ident),*]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Serialize)]
        pub struct $name {
            $(pub $field: Value,)*
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $paint: Option<Color>,
            )*
            pub items: Vec<Shape>,
            #[serde(skip_serializing_if = "Vec::is_empty")]
            pub qualifiers: Vec<Qualifier>,
        }

        impl $name {
            pub fn new($($field: impl Into<Value>),*) -> Self {
                Self {
                    $($field: $field.into(),)*
                    $($paint: None,)*
                    items: Vec::new(),
                    qualifiers: Vec::new(),
                }
            }

            $(
                pub fn $paint(mut self, color: impl Into<Color>) -> Self {
                    self.$paint = Some(color.into());
                    self
                }
            )*

            pub fn with_items(mut self, items: Vec<Shape>) -> Self {
                self.items = items;
                self
            }

            fn values(&self) -> Vec<&Value> {
                #[allow(unused_mut)]
                let mut values: Vec<&Value> = vec![$(&self.$field),*];
                $(
                    if let Some(color) = &self.$paint {
                        values.extend(color.channels());
                    }
                )*
                values
            }
        }

        impl Documented for $name {
            const NAME: &'static str = stringify!($name);
            const SUMMARY: &'static str = $summary;

            fn fields() -> Vec<FieldDoc> {
                let mut fields = vec![$(FieldDoc::required(stringify!($field), FieldKind::$kind)),*];
                $(fields.push(FieldDoc::optional(stringify!($paint), FieldKind::Color));)*
                fields.push(FieldDoc::optional("items", FieldKind::Shapes));
                fields
            }
        }

        impl From<$name> for Shape {
            fn from(s: $name) -> Self {
                Shape::$name(s)
            }
        }
    };
}

shape!(
    /// Axis-aligned rectangle with its corner at `(x, y)`.
    Rect, "A rectangle",
    { x: Float, y: Float, width: Float, height: Float },
    [stroke, fill]
);

shape!(
    Square, "A square",
    { x: Float, y: Float, side: Float },
    [stroke, fill]
);

shape!(
    Ellipse, "An ellipse centred on (cx, cy)",
    { cx: Float, cy: Float, rx: Float, ry: Float },
    [stroke, fill]
);

shape!(
    Circle, "A circle centred on (cx, cy)",
    { cx: Float, cy: Float, r: Float },
    [stroke, fill]
);

shape!(
    /// Regular polygon inscribed in the circle `(cx, cy, r)`.
    Polygon, "A regular polygon",
    { cx: Float, cy: Float, r: Float, sides: Int },
    [stroke, fill]
);

shape!(
    Line, "A line segment",
    { x0: Float, y0: Float, x1: Float, y1: Float },
    [stroke]
);

shape!(
    /// Container positioning its children; draws nothing itself.
    Group, "A group of shapes",
    { x: Float, y: Float, width: Float, height: Float },
    []
);

pub fn shape_docs() -> Vec<TypeDoc> {
    vec![
        Rect::type_doc(),
        Square::type_doc(),
        Ellipse::type_doc(),
        Circle::type_doc(),
        Polygon::type_doc(),
        Line::type_doc(),
        Group::type_doc(),
    ]
}

/* ══════════════  SHAPE  ═════════════════════════════════════════════ */

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Rect(Rect),
    Square(Square),
    Ellipse(Ellipse),
    Circle(Circle),
    Polygon(Polygon),
    Line(Line),
    Group(Group),
}

macro_rules! each_shape {
    ($self:expr, $s:ident => $body:expr) => {
        match $self {
            Shape::Rect($s) => $body,
            Shape::Square($s) => $body,
            Shape::Ellipse($s) => $body,
            Shape::Circle($s) => $body,
            Shape::Polygon($s) => $body,
            Shape::Line($s) => $body,
            Shape::Group($s) => $body,
        }
    };
}

impl Shape {
    pub fn items(&self) -> &[Shape] {
        each_shape!(self, s => &s.items)
    }

    pub fn qualifiers(&self) -> &[Qualifier] {
        each_shape!(self, s => &s.qualifiers)
    }

    /// Append a child drawn on top of this shape.
    pub fn add(&mut self, item: impl Into<Shape>) {
        each_shape!(self, s => s.items.push(item.into()))
    }

    fn qualify(&mut self, qualifier: Qualifier) {
        each_shape!(self, s => s.qualifiers.push(qualifier))
    }

    pub fn rough(&mut self) {
        self.qualify(Qualifier::Rough)
    }

    pub fn blurry(&mut self) {
        self.qualify(Qualifier::Blurry)
    }

    pub fn swiggly(&mut self) {
        self.qualify(Qualifier::Swiggly)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Shape::Rect(_) => Rect::NAME,
            Shape::Square(_) => Square::NAME,
            Shape::Ellipse(_) => Ellipse::NAME,
            Shape::Circle(_) => Circle::NAME,
            Shape::Polygon(_) => Polygon::NAME,
            Shape::Line(_) => Line::NAME,
            Shape::Group(_) => Group::NAME,
        }
    }

    /// Resolve every number in the tree, this shape's and its children's,
    /// returning the first error unchanged.
    pub fn resolve_all(&self) -> Result<()> {
        each_shape!(self, s => {
            for value in s.values() {
                resolve_or_passthrough(value)?;
            }
        });
        self.items().iter().try_for_each(Shape::resolve_all)
    }

    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        self.resolve_all()?;
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json(&self) -> Result<String> {
        self.resolve_all()?;
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        self.resolve_all()?;
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rect_json() {
        let rect = Rect::new(0, 0, 100, 50).fill("red");
        let value = Shape::from(rect).to_json_value().unwrap();
        assert_eq!(
            value,
            json!({
                "type": "rect",
                "x": 0.0, "y": 0.0, "width": 100.0, "height": 50.0,
                "fill": "red",
                "items": []
            })
        );
    }

    #[test]
    fn test_nested_and_qualified() {
        let mut rect: Shape = Rect::new(0, 0, 100, 100)
            .stroke(Color::hsla(200, 50, 50, 0.2))
            .into();
        rect.add(Circle::new(50, 50, 45).fill(Color::hsla(100, 50, 50, 0.4)));
        rect.rough();
        rect.swiggly();

        let value = rect.to_json_value().unwrap();
        assert_eq!(value["stroke"], "hsla(200, 50%, 50%, 0.2)");
        assert_eq!(value["qualifiers"], json!(["rough", "swiggly"]));
        assert_eq!(value["items"][0]["type"], "circle");
        assert_eq!(value["items"][0]["r"], 45.0);
        assert!(value["items"][0].get("qualifiers").is_none());
        assert!(value.get("fill").is_none());
    }

    #[test]
    fn test_shared_draw_in_fields() {
        let x = uniform_float(0.0, 80.0);
        let line = Line::new(&x, 0, &x + 10.0, 100);
        let value = Shape::from(line).to_json_value().unwrap();
        let x0 = value["x0"].as_f64().unwrap();
        assert_eq!(value["x1"].as_f64().unwrap(), x0 + 10.0);
        assert_eq!(x0, x.resolve().unwrap());
    }

    #[test]
    fn test_copy_keeps_values() {
        let shape: Shape = Circle::new(uniform_float(0.0, 1.0), 0, 1).into();
        let copy = shape.clone();
        assert_eq!(shape.to_json().unwrap(), copy.to_json().unwrap());
    }

    #[test]
    fn test_error_in_child_surfaces_unchanged() {
        let mut group: Shape = Group::new(0, 0, 10, 10).into();
        group.add(Square::new(Node::scalar(1.0).divide(0.0), 0, 1));
        assert!(matches!(
            group.to_json(),
            Err(ArtkitError::DivisionByZero(_))
        ));
    }

    #[test]
    fn test_error_in_color_surfaces_unchanged() {
        let shape: Shape = Ellipse::new(0, 0, 1, 1)
            .fill(Color::rgba(Node::scalar(2.0).divide(0.0), 0, 0, 1))
            .into();
        assert!(matches!(
            shape.resolve_all(),
            Err(ArtkitError::DivisionByZero(v)) if v == 2.0
        ));
    }

    #[test]
    fn test_polygon_and_type_names() {
        let shape: Shape = Polygon::new(0, 0, 10, uniform_int(3, 9)).into();
        assert_eq!(shape.type_name(), "Polygon");
        let sides = shape.to_json_value().unwrap()["sides"].as_f64().unwrap();
        assert!((3.0..9.0).contains(&sides));
        assert_eq!(shape.items().len(), 0);
        assert!(shape.qualifiers().is_empty());
    }
}
