use super::Content;

/// Elements that never have children or a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    // Identity
    pub tag: String,
    pub id: Option<String>,

    // Attributes, kept in insertion order for stable output
    pub classes: Vec<String>,
    pub attrs: Vec<(String, String)>,

    // Content
    pub content: Content,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn input() -> Self {
        Self::new("input")
    }

    pub fn label() -> Self {
        Self::new("label")
    }

    pub fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.tag.as_str())
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn maybe_id(mut self, id: Option<impl Into<String>>) -> Self {
        self.id = id.map(Into::into);
        self
    }

    // Classes
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.is_empty() && !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn class_if(self, enabled: bool, class: impl Into<String>) -> Self {
        if enabled { self.class(class) } else { self }
    }

    pub fn classes<I, S>(self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        classes.into_iter().fold(self, |el, class| el.class(class))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// The `class` attribute as rendered, `None` when there are no classes.
    pub fn class_attribute(&self) -> Option<String> {
        (!self.classes.is_empty()).then(|| self.classes.join(" "))
    }

    // Attributes
    /// Set an attribute, replacing any previous value for the same name.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    pub fn maybe_attr(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Boolean attribute: present with an empty value when `enabled`.
    pub fn flag(self, name: impl Into<String>, enabled: bool) -> Self {
        if enabled { self.attr(name, "") } else { self }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        match name {
            "id" => self.id.as_deref(),
            _ => self
                .attrs
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
        }
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Direct child elements.
    pub fn elements(&self) -> &[Element] {
        self.content.elements()
    }

    /// Concatenated text of this element and all descendants.
    pub fn text_content(&self) -> String {
        match &self.content {
            Content::None => String::new(),
            Content::Text(text) => text.clone(),
            Content::Children(children) => children.iter().map(Element::text_content).collect(),
        }
    }
}
