//! Presentational markup builders.
//!
//! [`Container`] and [`Section`] are stateless wrappers: they merge caller
//! classes with their defaults, escape text props, and insert pre-rendered
//! children verbatim.

/// Anything that renders to an HTML fragment.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for String {
    fn render(&self) -> String {
        self.clone()
    }
}

/// Merge default classes with caller-supplied ones.
///
/// Defaults come first, caller classes are appended, and repeated class
/// names are kept only at their first position.
pub fn merge_classes(defaults: &str, extra: Option<&str>) -> String {
    let mut merged: Vec<&str> = Vec::new();
    for class in defaults
        .split_whitespace()
        .chain(extra.unwrap_or_default().split_whitespace())
    {
        if !merged.contains(&class) {
            merged.push(class);
        }
    }
    merged.join(" ")
}

/// Escape text for use in element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn id_attr(id: Option<&str>) -> String {
    id.map(|id| format!(" id=\"{}\"", escape_html(id)))
        .unwrap_or_default()
}

/// Max-width variants of [`Container`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContainerSize {
    Small,
    Medium,
    #[default]
    Large,
    Full,
}

impl ContainerSize {
    fn class(&self) -> &'static str {
        match self {
            ContainerSize::Small => "max-w-3xl",
            ContainerSize::Medium => "max-w-5xl",
            ContainerSize::Large => "max-w-7xl",
            ContainerSize::Full => "max-w-full",
        }
    }
}

/// Centered, padded page-width wrapper.
#[derive(Debug, Clone, Default)]
pub struct Container {
    class_name: Option<String>,
    id: Option<String>,
    size: ContainerSize,
    children: Vec<String>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn size(mut self, size: ContainerSize) -> Self {
        self.size = size;
        self
    }

    pub fn child(mut self, child: impl Render) -> Self {
        self.children.push(child.render());
        self
    }
}

impl Render for Container {
    fn render(&self) -> String {
        let defaults = format!("mx-auto w-full px-4 sm:px-6 lg:px-8 {}", self.size.class());
        format!(
            "<div{} class=\"{}\">{}</div>",
            id_attr(self.id.as_deref()),
            escape_html(&merge_classes(&defaults, self.class_name.as_deref())),
            self.children.concat()
        )
    }
}

/// Vertical page section with an optional heading block.
#[derive(Debug, Clone, Default)]
pub struct Section {
    class_name: Option<String>,
    id: Option<String>,
    title: Option<String>,
    description: Option<String>,
    children: Vec<String>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn child(mut self, child: impl Render) -> Self {
        self.children.push(child.render());
        self
    }

    fn header(&self) -> String {
        if self.title.is_none() && self.description.is_none() {
            return String::new();
        }
        let mut header = String::from("<div class=\"mb-8 text-center\">");
        if let Some(title) = &self.title {
            header.push_str(&format!(
                "<h2 class=\"text-3xl font-bold tracking-tight\">{}</h2>",
                escape_html(title)
            ));
        }
        if let Some(description) = &self.description {
            header.push_str(&format!(
                "<p class=\"mt-4 text-lg text-muted-foreground\">{}</p>",
                escape_html(description)
            ));
        }
        header.push_str("</div>");
        header
    }
}

impl Render for Section {
    fn render(&self) -> String {
        format!(
            "<section{} class=\"{}\">{}{}</section>",
            id_attr(self.id.as_deref()),
            escape_html(&merge_classes("py-12 md:py-16", self.class_name.as_deref())),
            self.header(),
            self.children.concat()
        )
    }
}
