use artkit::prelude::*;

/// Renders the API reference of the drawing records as markdown.
pub struct DocGenerator {
    sections: Vec<(Section, Vec<TypeDoc>)>,
    with_summaries: bool,
}

impl Default for DocGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DocGenerator {
    pub fn new() -> Self {
        DocGenerator {
            sections: catalog(),
            with_summaries: false,
        }
    }

    pub fn with_summaries(mut self, flag: bool) -> Self {
        self.with_summaries = flag;
        self
    }

    pub fn only(mut self, section: Section) -> Self {
        self.sections.retain(|(s, _)| *s == section);
        self
    }

    pub fn render(&self) -> String {
        let mut output = String::new();
        for (section, docs) in &self.sections {
            output.push_str(&format!("\n## {}\n", section.title()));
            for doc in docs {
                output.push_str(&format!("### {}\n", doc.name));
                if self.with_summaries {
                    output.push_str(&format!("{}\n\n", doc.summary));
                }
                output.push_str(&format!("`{}`\n", signature(doc)));
            }
        }
        tracing::debug!(bytes = output.len(), "rendered reference");
        output
    }
}

pub fn signature(doc: &TypeDoc) -> String {
    let fields: Vec<String> = doc.fields.iter().map(render_field).collect();
    format!("{}({})", doc.name, fields.join(", "))
}

fn render_field(field: &FieldDoc) -> String {
    if field.optional {
        format!("{}: Option<{}> = None", field.name, field.kind)
    } else {
        format!("{}: {}", field.name, field.kind)
    }
}
